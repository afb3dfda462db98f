//! Fixture tests for discmatch-parser.
//!
//! Each fixture under `tests/fixtures` is a specification block as served by
//! the catalog, either extracted text or the raw HTML cell. Expected values
//! live in `fixtures/expected.json`.

use discmatch_parser::{extract_cover_images, parse_release_details, ParsedReleaseSpec};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A single fixture and what the parser should extract from it.
#[derive(Debug, Deserialize)]
struct FixtureCase {
    fixture: String,
    expected: Expected,
}

/// Expected values for a fixture.
#[derive(Debug, Deserialize)]
struct Expected {
    codec: Option<String>,
    resolution: Option<String>,
    audio: Vec<String>,
    subtitles: Vec<String>,
    disc_type: Option<String>,
    disc_count: Option<u32>,
    disc_format: Option<String>,
    region: Option<String>,
    region_notes: Option<String>,
}

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", name, e))
}

fn parse_fixture(name: &str) -> ParsedReleaseSpec {
    parse_release_details(&read_fixture(name))
        .unwrap_or_else(|| panic!("Fixture {} yielded no specification", name))
}

// ----------------------------------------------------------------------------
// Expected-value fixtures
// ----------------------------------------------------------------------------

#[test]
fn test_all_fixtures() {
    let cases: Vec<FixtureCase> =
        serde_json::from_str(&read_fixture("expected.json")).expect("expected.json is valid");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let spec = parse_fixture(&case.fixture);
        let e = &case.expected;

        let checks: [(&str, bool); 9] = [
            ("codec", spec.video.codec == e.codec),
            ("resolution", spec.video.resolution == e.resolution),
            ("audio", spec.audio == e.audio),
            ("subtitles", spec.subtitles == e.subtitles),
            ("disc_type", spec.discs.disc_type == e.disc_type),
            ("disc_count", spec.discs.count == e.disc_count),
            ("disc_format", spec.discs.format == e.disc_format),
            ("region", spec.playback.region == e.region),
            ("region_notes", spec.playback.region_notes == e.region_notes),
        ];

        for (field, ok) in checks {
            if !ok {
                failures.push(format!("{}: {} mismatch (got {:?})", case.fixture, field, spec));
            }
        }
    }

    assert!(failures.is_empty(), "Fixture failures:\n{}", failures.join("\n"));
}

// ----------------------------------------------------------------------------
// Edge cases
// ----------------------------------------------------------------------------

#[test]
fn test_page_without_specs() {
    assert!(parse_release_details(&read_fixture("no_specs.txt")).is_none());
}

#[test]
fn test_parse_is_deterministic() {
    let text = read_fixture("uhd_atmos.txt");
    assert_eq!(parse_release_details(&text), parse_release_details(&text));
}

#[test]
fn test_short_lists_ignored_when_long_present() {
    let spec = parse_fixture("classic_bluray.html");
    // The collapsed list repeats the first track without its details.
    assert!(!spec.audio.iter().any(|a| a == "English: LPCM 1.0"));
}

#[test]
fn test_cover_images_independent_of_specs() {
    let page = format!(
        "<html><head><script>$('#frontimage').append('<img id=\"frontimage_overlay\" src=\"https://images.example/covers/1_front.jpg?t=1\">');</script></head><body>{}</body></html>",
        read_fixture("classic_bluray.html")
    );
    let covers = extract_cover_images(&page);
    assert_eq!(
        covers.get("front").map(String::as_str),
        Some("https://images.example/covers/1_front.jpg")
    );
    assert!(parse_release_details(&page).is_some());
}
