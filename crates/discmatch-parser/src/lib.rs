//! Release detail parser for discmatch.
//!
//! Turns the specification block of a catalog release page into a
//! [`ParsedReleaseSpec`]. Parsing never fails: anything the parser cannot
//! recognise is left unset, and the scorer charges for the missing
//! information instead.
//!
//! # Example
//!
//! ```
//! use discmatch_parser::parse_release_details;
//!
//! let text = "\
//! Video
//! Codec: HEVC / H.265
//! Resolution: Native 4K (2160p)
//! Audio
//! English: Dolby Atmos
//! English: Dolby TrueHD 7.1
//! Subtitles
//! English SDH, French
//! Discs
//! Ultra HD Blu-ray
//! Single disc (1 BD-100)
//! Playback
//! 4K Blu-ray: Region free
//! 2K Blu-ray: Region A (B, C untested)
//! ";
//!
//! let spec = parse_release_details(text).unwrap();
//! assert_eq!(spec.video.codec.as_deref(), Some("HEVC / H.265"));
//! assert_eq!(spec.audio, vec!["English: Dolby TrueHD Atmos 7.1"]);
//! assert_eq!(spec.subtitles, vec!["English SDH", "French"]);
//! assert_eq!(spec.discs.format.as_deref(), Some("BD-100"));
//! assert_eq!(spec.playback.region.as_deref(), Some("A"));
//! ```
//!
//! # Features
//!
//! - `serde`: Serialize/Deserialize derives on the model types.
//! - `tracing`: debug events describing what each section yielded.

mod audio;
mod covers;
mod discs;
mod markup;
mod model;
mod playback;
mod section;
mod subtitles;
mod video;

pub use covers::{clean_image_url, extract_cover_images};
pub use discs::MULTIPLE_DISCS;
pub use model::{DiscSpec, ParsedReleaseSpec, PlaybackSpec, VideoSpec};

use section::{Section, Sections};

/// Parse the specification block of a release detail page.
///
/// `text` may be plain text or the HTML fragment of the specification cell.
/// Returns `None` when the text contains no recognisable section at all.
pub fn parse_release_details(text: &str) -> Option<ParsedReleaseSpec> {
    let plain = markup::to_text(text);
    let sections = Sections::split(&plain);

    if !sections.has_known() {
        #[cfg(feature = "tracing")]
        tracing::debug!("No specification sections found in detail text");
        return None;
    }

    let spec = ParsedReleaseSpec {
        video: sections
            .text(Section::Video)
            .map(|s| video::parse_video(&s))
            .unwrap_or_default(),
        audio: sections
            .lines(Section::Audio)
            .map(audio::parse_audio)
            .unwrap_or_default(),
        subtitles: sections
            .text(Section::Subtitles)
            .map(|s| subtitles::parse_subtitles(&s))
            .unwrap_or_default(),
        discs: sections
            .text(Section::Discs)
            .map(|s| discs::parse_discs(&s))
            .unwrap_or_default(),
        playback: sections
            .text(Section::Playback)
            .map(|s| playback::parse_playback(&s))
            .unwrap_or_default(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        codec = ?spec.video.codec,
        resolution = ?spec.video.resolution,
        audio_tracks = spec.audio.len(),
        subtitles = spec.subtitles.len(),
        disc_format = ?spec.discs.format,
        region = ?spec.playback.region,
        "Parsed release details"
    );

    Some(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sections_is_none() {
        assert!(parse_release_details("").is_none());
        assert!(parse_release_details("Nothing here\nat all").is_none());
    }

    #[test]
    fn test_empty_sections_give_empty_spec() {
        let spec = parse_release_details("Video\nAudio\nSubtitles\n").unwrap();
        assert_eq!(spec, ParsedReleaseSpec::default());
    }

    #[test]
    fn test_html_fragment() {
        let html = r#"<span class="subheading">Video</span><br>Codec: MPEG-4 AVC<br>Resolution: 1080p<br><br>
<span class="subheading">Audio</span><br><div id="longaudio">English: DTS-HD Master Audio 5.1<br>French: Dolby Digital 2.0<br></div>
<span class="subheading">Subtitles</span><br><div id="longsubs">English, French, Spanish</div>"#;

        let spec = parse_release_details(html).unwrap();
        assert_eq!(spec.video.codec.as_deref(), Some("MPEG-4 AVC"));
        assert_eq!(spec.video.resolution.as_deref(), Some("1080p"));
        assert_eq!(
            spec.audio,
            vec!["English: DTS-HD Master Audio 5.1", "French: Dolby Digital 2.0"]
        );
        assert_eq!(spec.subtitles, vec!["English", "French", "Spanish"]);
        assert!(spec.discs.is_empty());
    }
}
