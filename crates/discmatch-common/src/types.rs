//! Core data model shared between the fetch layer, the engine, and callers.
//!
//! [`LocalDiscSpec`] and [`CandidateRelease`] are inputs built once per upload
//! session; [`SelectionResult`] is the terminal output written into the
//! caller's upload metadata.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::region::region_code_for_country;

/// Cover image URLs keyed by kind (`front`, `back`, `slip`, or a raw image id).
pub type CoverImages = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Local disc
// ---------------------------------------------------------------------------

/// Primary video stream of the local disc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalVideo {
    /// Video codec as reported by the probe (e.g. "MPEG-H HEVC Video", "AVC").
    #[serde(default)]
    pub codec: String,
    /// Resolution (e.g. "2160p", "1080p").
    #[serde(default)]
    pub resolution: String,
}

/// Physical properties of the local disc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalDisc {
    /// Total disc size in gigabytes, if known.
    #[serde(default)]
    pub size_gb: Option<f64>,
    /// Whether the disc is a DVD rather than a Blu-ray.
    #[serde(default)]
    pub is_dvd: bool,
}

/// One audio stream of the local disc.
///
/// Fields are kept as the probe printed them: the scorer matches them as
/// substrings of the catalog's free-text track lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalAudioTrack {
    /// Language name (e.g. "English").
    #[serde(default)]
    pub language: String,
    /// Codec (e.g. "Dolby TrueHD Audio", "DTS-HD Master Audio").
    #[serde(default)]
    pub codec: String,
    /// Channel layout (e.g. "7.1", "5.1", "Atmos Audio").
    #[serde(default)]
    pub channels: String,
    /// Sample rate (e.g. "48 kHz").
    #[serde(default)]
    pub sample_rate: String,
    /// Bit depth (e.g. "24-bit").
    #[serde(default)]
    pub bit_depth: String,
    /// Bitrate (e.g. "4000 kbps").
    #[serde(default)]
    pub bitrate: String,
    /// Stream index as reported by the probe. Scoring goes by the track's
    /// position in [`LocalDiscSpec::audio_tracks`] instead.
    #[serde(default)]
    pub track_index: usize,
    /// Whether the probe flagged this track as carrying Atmos.
    #[serde(default)]
    pub atmos: bool,
}

/// Structured facts known about the physical disc, independent of any catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalDiscSpec {
    /// Title or identifier of the upload, used to key the results artifact.
    #[serde(default)]
    pub title: String,
    /// Primary video stream, if the probe found one.
    #[serde(default)]
    pub video: Option<LocalVideo>,
    /// Disc size and type.
    #[serde(default)]
    pub disc: LocalDisc,
    /// Audio streams in disc order.
    #[serde(default)]
    pub audio_tracks: Vec<LocalAudioTrack>,
    /// Subtitle languages in disc order, without duplicates.
    #[serde(default)]
    pub subtitle_languages: Vec<String>,
}

impl LocalDiscSpec {
    /// Drop duplicate subtitle languages (case-insensitive, first spelling
    /// wins).
    pub fn normalized(mut self) -> Self {
        let mut seen = Vec::new();
        self.subtitle_languages.retain(|lang| {
            let key = lang.trim().to_lowercase();
            if key.is_empty() || seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        });

        self
    }

    /// Whether the local spec lists any subtitles.
    pub fn has_subtitles(&self) -> bool {
        !self.subtitle_languages.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Catalog candidates
// ---------------------------------------------------------------------------

/// One catalog listing that may describe the local disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRelease {
    /// Listing title (e.g. "Dune 4K (Blu-ray)").
    pub title: String,
    /// Country of the release as the catalog names it (e.g. "United States").
    #[serde(default)]
    pub country: String,
    /// Publisher / distributor.
    #[serde(default)]
    pub publisher: String,
    /// Price as displayed by the catalog.
    #[serde(default)]
    pub price: String,
    /// Catalog release identifier; identity key of the candidate.
    pub release_id: String,
    /// URL of the release detail page.
    #[serde(default)]
    pub detail_url: String,
    /// Cover images found on the detail page, if extraction was enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_images: Option<CoverImages>,
}

impl CandidateRelease {
    /// Short "title (country)" label used in logs and prompts.
    pub fn label(&self) -> String {
        format!("{} ({})", self.title, self.country)
    }
}

// ---------------------------------------------------------------------------
// Selection output
// ---------------------------------------------------------------------------

/// Metadata written into the upload once a release has been accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Three-letter region code derived from the release country.
    pub region_code: Option<String>,
    /// Distributor name, upper-cased.
    pub distributor_name: Option<String>,
    /// Canonical release URL.
    pub release_url: Option<String>,
    /// Cover images of the accepted release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_images: Option<CoverImages>,
}

impl SelectionResult {
    /// Build the upload metadata for an accepted candidate.
    pub fn from_candidate(candidate: &CandidateRelease) -> Self {
        let publisher = candidate.publisher.trim();
        Self {
            region_code: region_code_for_country(candidate.country.trim()).map(str::to_string),
            distributor_name: (!publisher.is_empty()).then(|| publisher.to_uppercase()),
            release_url: (!candidate.detail_url.is_empty()).then(|| candidate.detail_url.clone()),
            cover_images: candidate.cover_images.clone().filter(|c| !c.is_empty()),
        }
    }
}
