//! Structured release specification extracted from a detail page.
//!
//! Every field is optional. An unset field means the catalog page did not
//! state it (or stated it in a form the parser does not recognise); callers
//! treat that as missing information, never as an error.

/// Video section of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoSpec {
    /// Codec line as printed (e.g. "MPEG-4 AVC", "HEVC / H.265").
    pub codec: Option<String>,
    /// Resolution line as printed (e.g. "Native 4K (2160p)").
    pub resolution: Option<String>,
}

impl VideoSpec {
    /// True when neither codec nor resolution was found.
    pub fn is_empty(&self) -> bool {
        self.codec.is_none() && self.resolution.is_none()
    }
}

/// Disc section of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscSpec {
    /// Disc type keyword (e.g. "Blu-ray Disc", "4K Ultra HD").
    pub disc_type: Option<String>,
    /// Number of discs in the package.
    pub count: Option<u32>,
    /// Disc format (e.g. "BD-66", "2 BD-50", "multiple discs").
    pub format: Option<String>,
}

impl DiscSpec {
    /// True when no disc information was found.
    pub fn is_empty(&self) -> bool {
        self.disc_type.is_none() && self.count.is_none() && self.format.is_none()
    }
}

/// Playback section of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackSpec {
    /// Region letter (A, B or C).
    pub region: Option<String>,
    /// Free-text note following the region, e.g. "B, C untested".
    pub region_notes: Option<String>,
}

/// Everything the parser could extract from one release's specification block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedReleaseSpec {
    /// Video codec and resolution.
    pub video: VideoSpec,
    /// Audio tracks, one free-text line each, annotations included.
    pub audio: Vec<String>,
    /// Subtitle languages in listing order.
    pub subtitles: Vec<String>,
    /// Disc type, count and format.
    pub discs: DiscSpec,
    /// Region coding.
    pub playback: PlaybackSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let spec = ParsedReleaseSpec::default();
        assert!(spec.video.is_empty());
        assert!(spec.discs.is_empty());
        assert!(spec.audio.is_empty());
        assert!(spec.subtitles.is_empty());
    }

    #[test]
    fn test_partial_sections_not_empty() {
        let video = VideoSpec {
            codec: None,
            resolution: Some("1080p".to_string()),
        };
        assert!(!video.is_empty());

        let discs = DiscSpec {
            count: Some(2),
            ..Default::default()
        };
        assert!(!discs.is_empty());
    }
}
