//! Audio section: one track per line, with Atmos/core pairs folded together.
//!
//! Catalog pages list an Atmos track as two lines, the Atmos layer first and
//! its TrueHD or Dolby Digital core immediately after:
//!
//! ```text
//! English: Dolby Atmos
//! English: Dolby TrueHD 7.1 (48kHz, 24-bit)
//! ```
//!
//! Both describe a single stream on the disc, so they become one track line
//! (`English: Dolby TrueHD Atmos 7.1`). `Note:` lines annotate the track above.

use std::sync::LazyLock;

use regex::Regex;

static RE_TOGGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\((?:less|more)\)\s*$").unwrap());

/// Parse the lines of the Audio section into track lines.
pub fn parse_audio<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let raw: Vec<String> = lines
        .iter()
        .map(|l| RE_TOGGLE.replace(l.as_ref().trim(), "").trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    let mut tracks: Vec<String> = Vec::new();
    let mut i = 0;
    while i < raw.len() {
        let line = &raw[i];

        if let Some(next) = raw.get(i + 1) {
            if let Some(merged) = merge_atmos(line, next) {
                tracks.push(merged);
                i += 2;
                continue;
            }
        }

        if line.starts_with("Note:") {
            if let Some(prev) = tracks.last_mut() {
                prev.push_str(" - ");
                prev.push_str(line);
            }
        } else {
            tracks.push(line.clone());
        }
        i += 1;
    }

    tracks
}

/// Fold an Atmos line and the core line that follows it into one track.
fn merge_atmos(line: &str, next: &str) -> Option<String> {
    if !line.to_lowercase().contains("atmos") || !line.contains("Dolby Atmos") {
        return None;
    }

    let lang = language_of(line)?;
    if language_of(next) != Some(lang) {
        return None;
    }
    if !next.contains("Dolby Digital") && !next.contains("Dolby TrueHD") {
        return None;
    }

    let channels = if next.contains("7.1") {
        "7.1"
    } else if next.contains("5.1") {
        "5.1"
    } else {
        ""
    };

    let merged = if next.contains("TrueHD") {
        format!("{lang}: Dolby TrueHD Atmos {channels}")
    } else {
        format!("{lang}: Dolby Atmos {channels}")
    };
    Some(merged.trim_end().to_string())
}

/// Text before the first `:`, if non-empty.
fn language_of(line: &str) -> Option<&str> {
    line.split_once(':')
        .map(|(lang, _)| lang.trim())
        .filter(|lang| !lang.is_empty())
}
