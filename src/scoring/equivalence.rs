//! Equivalence classes used to compare catalog free text with probe output.
//!
//! Both sides spell the same format differently ("MPEG-4 AVC" vs "AVC",
//! "Native 4K (2160p)" vs "2160p"), so comparisons are made on families
//! detected by lowercase substring rather than on the strings themselves.

/// Video codec family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoFamily {
    /// H.264/AVC
    Avc,
    /// H.265/HEVC
    Hevc,
    /// VC-1
    Vc1,
    /// MPEG-2
    Mpeg2,
}

impl VideoFamily {
    pub const ALL: [VideoFamily; 4] = [
        VideoFamily::Avc,
        VideoFamily::Hevc,
        VideoFamily::Vc1,
        VideoFamily::Mpeg2,
    ];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VideoFamily::Avc => &["avc", "h.264", "h264"],
            VideoFamily::Hevc => &["hevc", "h.265", "h265"],
            VideoFamily::Vc1 => &["vc-1", "vc1"],
            VideoFamily::Mpeg2 => &["mpeg-2", "mpeg2"],
        }
    }

    /// Whether `codec` (any case) names this family.
    pub fn matches(self, codec: &str) -> bool {
        let codec = codec.to_lowercase();
        self.aliases().iter().any(|alias| codec.contains(alias))
    }

    /// The first family both codec strings belong to.
    pub fn shared(a: &str, b: &str) -> Option<VideoFamily> {
        Self::ALL
            .into_iter()
            .find(|family| family.matches(a) && family.matches(b))
    }
}

impl std::fmt::Display for VideoFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoFamily::Avc => write!(f, "AVC/H.264"),
            VideoFamily::Hevc => write!(f, "HEVC/H.265"),
            VideoFamily::Vc1 => write!(f, "VC-1"),
            VideoFamily::Mpeg2 => write!(f, "MPEG-2"),
        }
    }
}

/// Resolution family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionFamily {
    /// 1080p / 1080i
    Hd1080,
    /// 2160p / 4K
    Uhd2160,
}

impl ResolutionFamily {
    pub const ALL: [ResolutionFamily; 2] = [ResolutionFamily::Hd1080, ResolutionFamily::Uhd2160];

    fn aliases(self) -> &'static [&'static str] {
        match self {
            ResolutionFamily::Hd1080 => &["1080"],
            ResolutionFamily::Uhd2160 => &["2160", "4k"],
        }
    }

    /// Whether `resolution` (any case) names this family.
    pub fn matches(self, resolution: &str) -> bool {
        let resolution = resolution.to_lowercase();
        self.aliases().iter().any(|alias| resolution.contains(alias))
    }

    /// The first family both resolution strings belong to.
    pub fn shared(a: &str, b: &str) -> Option<ResolutionFamily> {
        Self::ALL
            .into_iter()
            .find(|family| family.matches(a) && family.matches(b))
    }
}

impl std::fmt::Display for ResolutionFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionFamily::Hd1080 => write!(f, "1080p"),
            ResolutionFamily::Uhd2160 => write!(f, "4K/2160p"),
        }
    }
}

/// Whether a normalised local codec and a lowercase catalog audio line name
/// the same audio format family.
pub fn audio_format_matches(local_codec: &str, line: &str) -> bool {
    (local_codec.contains("lpcm") && (line.contains("pcm") || line.contains("lpcm")))
        || (local_codec.contains("dts-hd") && line.contains("dts-hd"))
        || (local_codec.contains("dts") && line.contains("dts"))
        || (local_codec.contains("dolby") && line.contains("dolby"))
        || (local_codec.contains("truehd") && line.contains("truehd"))
        || (local_codec.contains("atmos") && line.contains("atmos"))
}

/// Whether a normalised local channel layout and a lowercase catalog audio
/// line describe the same layout.
pub fn channels_match(local_channels: &str, line: &str) -> bool {
    if local_channels.is_empty() {
        return false;
    }
    (local_channels.contains("5.1") && line.contains("5.1"))
        || (local_channels.contains("7.1") && line.contains("7.1"))
        || (local_channels.contains("2.0") && (line.contains("2.0") || line.contains("stereo")))
        || (local_channels.contains("1.0") && (line.contains("1.0") || line.contains("mono")))
}
