use std::sync::LazyLock;

use phf::phf_map;
use regex::Regex;

use crate::model::DiscSpec;

static RE_DISC_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Blu-ray Disc|DVD|Ultra HD Blu-ray|4K Ultra HD)").unwrap());
static RE_DISC_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Single disc \(1 ([^)]+)\)|(One|Two|Three|Four|Five|\d+)[ -]disc set(?:\s*\(([^)]+)\))?",
    )
    .unwrap()
});
static RE_BD_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\s*BD-\d+|\d+\s*BD)").unwrap());

static NUMBER_WORDS: phf::Map<&'static str, u32> = phf_map! {
    "One" => 1,
    "Two" => 2,
    "Three" => 3,
    "Four" => 4,
    "Five" => 5,
};

/// Format recorded for a multi-disc set whose details name no BD size.
pub const MULTIPLE_DISCS: &str = "multiple discs";

/// Extract disc type, count and format from the Discs section.
pub fn parse_discs(section: &str) -> DiscSpec {
    let mut discs = DiscSpec {
        disc_type: RE_DISC_TYPE
            .captures(section)
            .map(|c| c[1].trim().to_string()),
        ..Default::default()
    };

    let Some(caps) = RE_DISC_COUNT.captures(section) else {
        return discs;
    };

    if let Some(format) = caps.get(1) {
        discs.count = Some(1);
        discs.format = Some(format.as_str().trim().to_string());
        return discs;
    }

    let count = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
    discs.count = Some(
        count
            .parse()
            .ok()
            .or_else(|| NUMBER_WORDS.get(count).copied())
            .unwrap_or(1),
    );

    let format = caps
        .get(3)
        .and_then(|details| RE_BD_FORMAT.captures(details.as_str()))
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| MULTIPLE_DISCS.to_string());
    discs.format = Some(format);

    discs
}
