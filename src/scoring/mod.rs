//! Candidate scoring.
//!
//! A candidate starts at 100 points and every rule subtracts from it. Scores
//! are not clamped; a badly mismatched release can go negative. The decision
//! log records every rule's reasoning in evaluation order so a human can see
//! why a score landed where it did.

mod audio;
mod equivalence;
mod rules;
mod subtitles;

pub use audio::{normalize_track, NormalizedTrack};
pub use equivalence::{ResolutionFamily, VideoFamily};
pub use rules::{expected_disc_format, RuleOutcome};

use discmatch_common::{CandidateRelease, LocalDiscSpec};
use discmatch_parser::ParsedReleaseSpec;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Score every candidate starts from.
pub const STARTING_SCORE: f64 = 100.0;

/// A candidate together with its score and the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: CandidateRelease,
    /// Parsed specification, if the detail page yielded one.
    pub spec: Option<ParsedReleaseSpec>,
    pub score: f64,
    /// Human-readable audit trail; the last line states the final score.
    pub decision_log: Vec<String>,
    /// The disc format only said "BD" without a capacity.
    pub generic_format: bool,
    /// At least one specification section was absent.
    pub specs_missing: bool,
}

impl ScoredCandidate {
    /// Whether the score is a perfect 100.
    pub fn is_perfect(&self) -> bool {
        self.score == STARTING_SCORE
    }
}

/// Score one candidate against the local disc.
pub fn score_candidate(
    local: &LocalDiscSpec,
    candidate: CandidateRelease,
    spec: Option<ParsedReleaseSpec>,
) -> ScoredCandidate {
    let mut decision_log = Vec::new();
    if !candidate.detail_url.is_empty() {
        decision_log.push(format!("Release URL: {}", candidate.detail_url));
    }

    let outcomes = match &spec {
        Some(spec) => vec![
            rules::completeness(local, spec),
            rules::disc_format(local, spec),
            rules::video(local, spec),
            audio::reconcile(local, spec),
            subtitles::reconcile(local, spec),
        ],
        None => vec![rules::no_spec()],
    };

    let mut score = STARTING_SCORE;
    let mut generic_format = false;
    let mut specs_missing = false;
    for outcome in outcomes {
        score += outcome.delta;
        generic_format |= outcome.generic_format;
        specs_missing |= outcome.specs_missing;
        decision_log.extend(outcome.log);
    }

    decision_log.push(format!(
        "Final score: {:.1}/100 for {} ({})",
        score, candidate.title, candidate.country
    ));

    for line in &decision_log {
        tracing::trace!(release_id = %candidate.release_id, "{}", line);
    }
    tracing::debug!(
        release_id = %candidate.release_id,
        score,
        generic_format,
        specs_missing,
        "Scored {}",
        candidate.label()
    );

    ScoredCandidate {
        candidate,
        spec,
        score,
        decision_log,
        generic_format,
        specs_missing,
    }
}

/// Score a full batch in parallel and sort it by score, best first.
///
/// Candidates with equal scores keep their input order.
pub fn score_all(
    local: &LocalDiscSpec,
    batch: Vec<(CandidateRelease, Option<ParsedReleaseSpec>)>,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = batch
        .into_par_iter()
        .map(|(candidate, spec)| score_candidate(local, candidate, spec))
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}
