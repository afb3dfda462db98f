//! Independent scoring rules.
//!
//! Each rule inspects the local disc and one candidate's parsed spec and
//! returns a [`RuleOutcome`]; the engine folds the outcomes in evaluation
//! order onto the starting score.

use discmatch_common::LocalDiscSpec;
use discmatch_parser::ParsedReleaseSpec;

use super::equivalence::{ResolutionFamily, VideoFamily};

pub const MISSING_SECTION_PENALTY: f64 = 5.0;
pub const CANNOT_COMPARE_PENALTY: f64 = 5.0;
pub const DISC_MISMATCH_PENALTY: f64 = 50.0;
pub const GENERIC_FORMAT_PENALTY: f64 = 5.0;
pub const VIDEO_MISMATCH_PENALTY: f64 = 80.0;
pub const NO_SPEC_PENALTY: f64 = 80.0;

/// Score change, audit lines, and flags produced by one rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    /// Points subtracted (negative) from the running score.
    pub delta: f64,
    pub log: Vec<String>,
    pub generic_format: bool,
    pub specs_missing: bool,
}

impl RuleOutcome {
    pub fn penalize(&mut self, points: f64) {
        self.delta -= points;
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}

/// -5 for each section the candidate left completely empty.
pub fn completeness(local: &LocalDiscSpec, spec: &ParsedReleaseSpec) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    let missing = [
        ("video", spec.video.is_empty()),
        ("audio", spec.audio.is_empty()),
        ("subtitle", local.has_subtitles() && spec.subtitles.is_empty()),
        ("disc", spec.discs.is_empty()),
    ];

    for (section, is_missing) in missing {
        if is_missing {
            out.penalize(MISSING_SECTION_PENALTY);
            out.specs_missing = true;
            out.log(format!("✗ Missing {} info", section));
            out.log(format!(
                "Penalty for missing {} info: {:.1}",
                section, MISSING_SECTION_PENALTY
            ));
        }
    }

    out
}

/// Expected disc format for a disc of the given size.
pub fn expected_disc_format(size_gb: f64) -> &'static str {
    if size_gb < 25.0 {
        "bd-25"
    } else if size_gb < 50.0 {
        "bd-50"
    } else if size_gb < 66.0 {
        "bd-66"
    } else {
        "bd-100"
    }
}

/// Compare the catalog disc format with the bucket implied by the local size.
///
/// Skipped for DVDs, unknown sizes, and candidates without a format.
pub fn disc_format(local: &LocalDiscSpec, spec: &ParsedReleaseSpec) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    let (Some(format), Some(size)) = (spec.discs.format.as_deref(), local.disc.size_gb) else {
        return out;
    };
    if local.disc.is_dvd {
        return out;
    }

    let release_format = format.to_lowercase();
    let expected = expected_disc_format(size);

    if release_format.contains(expected) {
        out.log(format!(
            "✓ Disc format match: {} matches size {:.2} GB",
            format, size
        ));
    } else if release_format.contains("bd") && !release_format.chars().any(|c| c.is_ascii_digit())
    {
        out.generic_format = true;
        out.penalize(GENERIC_FORMAT_PENALTY);
        out.log(format!(
            "⚠ Generic BD format found: {} for size {:.2} GB",
            format, size
        ));
        out.log(format!(
            "Reduced penalty for generic BD format: {:.1}",
            GENERIC_FORMAT_PENALTY
        ));
    } else {
        out.penalize(DISC_MISMATCH_PENALTY);
        out.log(format!(
            "⚠ Disc format mismatch: {} vs expected {} (size: {:.2} GB)",
            format,
            expected.to_uppercase(),
            size
        ));
        out.log(format!(
            "Penalty for disc format mismatch: {:.1}",
            DISC_MISMATCH_PENALTY
        ));
    }

    out
}

/// Compare video codec and resolution families.
///
/// Both sides must carry video information; otherwise a single small
/// penalty records that the comparison could not be made.
pub fn video(local: &LocalDiscSpec, spec: &ParsedReleaseSpec) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    let Some(local_video) = local.video.as_ref().filter(|_| !spec.video.is_empty()) else {
        out.penalize(CANNOT_COMPARE_PENALTY);
        out.log("? Cannot compare video formats");
        return out;
    };

    let release_codec = spec.video.codec.as_deref().unwrap_or_default().to_lowercase();
    let local_codec = local_video.codec.to_lowercase();
    match VideoFamily::shared(&release_codec, &local_codec) {
        Some(family) => out.log(format!("✓ Video codec match: {}", family)),
        None => {
            out.penalize(VIDEO_MISMATCH_PENALTY);
            out.log(format!(
                "✗ Video codec mismatch: {} vs {}",
                release_codec, local_codec
            ));
            out.log(format!(
                "Penalty for video codec mismatch: {:.1}",
                VIDEO_MISMATCH_PENALTY
            ));
        }
    }

    let release_res = spec
        .video
        .resolution
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let local_res = local_video.resolution.to_lowercase();
    match ResolutionFamily::shared(&release_res, &local_res) {
        Some(family) => out.log(format!("✓ Resolution match: {}", family)),
        None => {
            out.penalize(VIDEO_MISMATCH_PENALTY);
            out.log(format!(
                "✗ Resolution mismatch: {} vs {}",
                release_res, local_res
            ));
            out.log(format!(
                "Penalty for resolution mismatch: {:.1}",
                VIDEO_MISMATCH_PENALTY
            ));
        }
    }

    out
}

/// The candidate's page yielded no specification block at all.
pub fn no_spec() -> RuleOutcome {
    let mut out = RuleOutcome {
        specs_missing: true,
        ..Default::default()
    };
    out.penalize(NO_SPEC_PENALTY);
    out.log("✗ No specifications available for this release");
    out
}
