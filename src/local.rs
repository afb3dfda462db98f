//! Loading the probed local disc description.

use std::path::Path;
use std::sync::LazyLock;

use discmatch_common::{Error, LocalDiscSpec, Result};
use regex::Regex;

static RE_SUBTITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Subtitle:\s+(\w+)\s+/\s+([\d.]+)\s+kbps").unwrap());

/// Subtitle streams below this bitrate carry no real dialogue (forced or
/// placeholder tracks) and are ignored.
pub const MIN_SUBTITLE_KBPS: f64 = 1.0;

/// Parse a local disc description from JSON.
pub fn parse_local_spec(json: &str) -> Result<LocalDiscSpec> {
    let spec: LocalDiscSpec = serde_json::from_str(json)?;
    Ok(spec.normalized())
}

/// Read a local disc description from a JSON file.
pub fn load_local_spec(path: &Path) -> Result<LocalDiscSpec> {
    let content = std::fs::read_to_string(path)?;
    parse_local_spec(&content).map_err(|e| match e {
        Error::Serialization(msg) => {
            Error::invalid_input(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Subtitle languages listed in a BDInfo summary, in order.
///
/// Reads `Subtitle: <Language> / <kbps> kbps` lines (optionally prefixed with
/// `* `) and keeps those at or above [`MIN_SUBTITLE_KBPS`].
pub fn subtitles_from_bd_summary(summary: &str) -> Vec<String> {
    let mut languages = Vec::new();

    for line in summary.lines() {
        let line = line.trim();
        let line = line.strip_prefix("* ").map(str::trim).unwrap_or(line);
        let Some(caps) = RE_SUBTITLE.captures(line) else {
            continue;
        };

        let language = &caps[1];
        match caps[2].parse::<f64>() {
            Ok(kbps) if kbps >= MIN_SUBTITLE_KBPS => {
                tracing::debug!("Keeping subtitle: {} ({} kbps)", language, kbps);
                languages.push(language.to_string());
            }
            Ok(kbps) => {
                tracing::debug!("Discarding subtitle due to size: {} ({} kbps)", language, kbps);
            }
            Err(_) => {}
        }
    }

    languages
}

/// Replace the local subtitle list with the one read from a BDInfo summary.
pub fn apply_bd_summary(spec: LocalDiscSpec, summary: &str) -> LocalDiscSpec {
    let subtitle_languages = subtitles_from_bd_summary(summary);
    if subtitle_languages.is_empty() {
        tracing::warn!("No valid subtitles found in BD summary");
    }
    LocalDiscSpec {
        subtitle_languages,
        ..spec
    }
    .normalized()
}
