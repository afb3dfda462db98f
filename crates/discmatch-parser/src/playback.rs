use std::sync::LazyLock;

use regex::Regex;

use crate::model::PlaybackSpec;

static RE_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:2K Blu-ray|4K Blu-ray|DVD): Region ([A-C])(?: \(([^)]+)\))?").unwrap()
});

/// Extract the region letter and its note from the Playback section.
pub fn parse_playback(section: &str) -> PlaybackSpec {
    let Some(caps) = RE_REGION.captures(section) else {
        return PlaybackSpec::default();
    };

    PlaybackSpec {
        region: Some(caps[1].to_string()),
        region_notes: caps
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty()),
    }
}
