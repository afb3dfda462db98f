use discmatch_common::LocalDiscSpec;
use discmatch_parser::ParsedReleaseSpec;

use super::rules::RuleOutcome;

pub const SINGLE_MISSING_PENALTY: f64 = 10.0;
pub const MISSING_PENALTY: f64 = 5.0;
pub const EXTRA_PENALTY: f64 = 5.0;

/// Reconcile local subtitle languages against the candidate's list.
///
/// Each local language claims the first remaining catalog entry that contains
/// it or is contained by it, ignoring case. Local specs without subtitles are
/// not compared at all.
pub fn reconcile(local: &LocalDiscSpec, spec: &ParsedReleaseSpec) -> RuleOutcome {
    let mut out = RuleOutcome::default();

    if !local.has_subtitles() {
        return out;
    }

    let mut pool: Vec<&str> = spec.subtitles.iter().map(String::as_str).collect();
    let mut matched = 0usize;

    for sub in &local.subtitle_languages {
        let wanted = sub.to_lowercase();
        let claim = pool.iter().position(|candidate| {
            let candidate = candidate.to_lowercase();
            candidate.contains(&wanted) || wanted.contains(&candidate)
        });

        match claim {
            Some(idx) => {
                let candidate = pool.remove(idx);
                matched += 1;
                out.log(format!("✓ Subtitle match found: {} -> {}", sub, candidate));
            }
            None => out.log(format!("✗ No match found for subtitle: {}", sub)),
        }
    }

    let total = local.subtitle_languages.len();
    let missing = total - matched;
    let penalty = if total == 1 && matched == 0 {
        SINGLE_MISSING_PENALTY
    } else {
        missing as f64 * MISSING_PENALTY
    };
    out.penalize(penalty);
    out.log(format!("Subtitle penalty: {:.1}", penalty));

    if matched > 0 {
        out.log(format!(
            "✓ Subtitle matches: {}/{} ({:.1}%)",
            matched,
            total,
            matched as f64 / total as f64 * 100.0
        ));
    } else {
        out.log("✗ No subtitle tracks match!");
    }

    if !pool.is_empty() {
        for candidate in &pool {
            out.log(format!(
                "⚠ Release has extra subtitle not in local spec: {}",
                candidate
            ));
        }
        let extra = pool.len() as f64 * EXTRA_PENALTY;
        out.penalize(extra);
        out.log(format!(
            "- Found {} additional subtitles in release not in local spec",
            pool.len()
        ));
        out.log(format!("Extra subtitles penalty: {:.1} points", extra));
    }

    out
}
