//! Decide which scored candidate, if any, is accepted.
//!
//! The scored list is classified into one of five states. Each state either
//! resolves on its own or asks the human through a [`Prompter`]; unattended
//! runs replace the question with a threshold check.

mod prompt;

pub use prompt::{Choice, Prompter, TerminalPrompter};

use discmatch_common::{Result, SelectionResult};

use crate::config::MatchingConfig;
use crate::scoring::ScoredCandidate;

/// Candidates within this many points of the best are treated as ties.
pub const TIE_MARGIN: f64 = 40.0;

/// Shape of a scored candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    NoCandidates,
    /// One candidate with a perfect score.
    SinglePerfect,
    /// One candidate with a less than perfect score.
    SingleImperfect,
    /// Several candidates within the tie margin of the best.
    MultipleCloseTies { close: usize },
    /// The best candidate leads every other by more than the tie margin.
    OneClearBest,
}

/// Candidates whose score is within [`TIE_MARGIN`] of the best.
///
/// `scored` must be sorted best first.
pub fn close_candidates(scored: &[ScoredCandidate]) -> &[ScoredCandidate] {
    let Some(best) = scored.first() else {
        return scored;
    };
    let count = scored
        .iter()
        .take_while(|c| best.score - c.score <= TIE_MARGIN)
        .count();
    &scored[..count]
}

/// Classify a scored list, sorted best first.
pub fn classify(scored: &[ScoredCandidate]) -> MatchState {
    match scored {
        [] => MatchState::NoCandidates,
        [only] if only.is_perfect() => MatchState::SinglePerfect,
        [_] => MatchState::SingleImperfect,
        _ => match close_candidates(scored).len() {
            close if close > 1 => MatchState::MultipleCloseTies { close },
            _ => MatchState::OneClearBest,
        },
    }
}

/// Runs the selection state machine.
pub struct Selector<'a> {
    config: &'a MatchingConfig,
}

impl<'a> Selector<'a> {
    pub fn new(config: &'a MatchingConfig) -> Self {
        Self { config }
    }

    /// Pick a candidate from `scored` (sorted best first).
    ///
    /// `Ok(None)` means nothing was accepted: no candidates, the human
    /// declined, or an unattended threshold was not met. A prompt that could
    /// not be answered is returned as [`discmatch_common::Error::Cancelled`].
    pub fn select(
        &self,
        scored: &[ScoredCandidate],
        prompter: &mut dyn Prompter,
    ) -> Result<Option<SelectionResult>> {
        let state = classify(scored);
        tracing::debug!(?state, candidates = scored.len(), "Selection state");

        let Some(best) = scored.first() else {
            tracing::info!("No candidates to select from");
            return Ok(None);
        };

        let interactive = self.config.interactive();
        let chosen = match state {
            MatchState::NoCandidates => None,
            MatchState::SinglePerfect => {
                tracing::info!(
                    "Single perfect match found: {} with score {:.1}/100",
                    best.candidate.label(),
                    best.score
                );
                Some(best)
            }
            MatchState::SingleImperfect if interactive => {
                prompter.show(&format!(
                    "Single match found: {} with score {:.1}/100",
                    best.candidate.label(),
                    best.score
                ))?;
                self.confirm(best, prompter)?
            }
            MatchState::SingleImperfect => self.unattended(best, self.config.single_threshold),
            MatchState::MultipleCloseTies { .. } if interactive => {
                self.pick_close(close_candidates(scored), prompter)?
            }
            MatchState::OneClearBest if interactive => {
                prompter.show("This is probably the best match, but it is not a perfect match.")?;
                prompter.show(&format!(
                    "All other releases have a score at least {:.0} points lower.",
                    TIE_MARGIN
                ))?;
                show_log(best, prompter)?;
                self.confirm(best, prompter)?
            }
            MatchState::MultipleCloseTies { .. } | MatchState::OneClearBest => {
                self.unattended(best, self.config.multi_threshold)
            }
        };

        Ok(chosen.map(|c| {
            let result = SelectionResult::from_candidate(&c.candidate);
            tracing::info!(
                release_id = %c.candidate.release_id,
                "Set region code to: {}, distributor to: {}",
                result.region_code.as_deref().unwrap_or("unknown"),
                result.distributor_name.as_deref().unwrap_or("unknown")
            );
            result
        }))
    }

    fn confirm<'s>(
        &self,
        candidate: &'s ScoredCandidate,
        prompter: &mut dyn Prompter,
    ) -> Result<Option<&'s ScoredCandidate>> {
        if prompter.ask_yes_no("Do you want to use this release?")? {
            Ok(Some(candidate))
        } else {
            tracing::warn!("No release selected");
            Ok(None)
        }
    }

    fn unattended<'s>(
        &self,
        best: &'s ScoredCandidate,
        threshold: f64,
    ) -> Option<&'s ScoredCandidate> {
        if best.score > threshold {
            tracing::info!(
                "Best match: {} with score {:.1}/100",
                best.candidate.label(),
                best.score
            );
            Some(best)
        } else {
            tracing::warn!(
                "No suitable release found. Best match was {} with score {:.1}/100",
                best.candidate.label(),
                best.score
            );
            None
        }
    }

    fn pick_close<'s>(
        &self,
        close: &'s [ScoredCandidate],
        prompter: &mut dyn Prompter,
    ) -> Result<Option<&'s ScoredCandidate>> {
        if close.iter().any(|c| c.generic_format) {
            prompter.show("Note: Generic BD format found, please confirm the release.")?;
        }
        if close.iter().any(|c| c.specs_missing) {
            prompter.show("Note: Missing specs in release, please confirm the release.")?;
        }

        let options: Vec<String> = close
            .iter()
            .map(|c| format!("{} - Score: {:.1}/100", c.candidate.label(), c.score))
            .collect();
        let prompt = format!(
            "Multiple releases are within {:.0} points of the best match. Please confirm which release to use:",
            TIE_MARGIN
        );

        loop {
            match prompter.ask_choice(&prompt, &options)? {
                Choice::Pick(idx) if idx < close.len() => {
                    prompter.show(&format!("Selected: {}", close[idx].candidate.label()))?;
                    return Ok(Some(&close[idx]));
                }
                Choice::ShowLog(idx) if idx < close.len() => show_log(&close[idx], prompter)?,
                Choice::Skip => {
                    tracing::warn!("No release selected");
                    return Ok(None);
                }
                Choice::Pick(_) | Choice::ShowLog(_) => {
                    prompter.show(&format!(
                        "Invalid selection. Please enter a number between 1 and {}.",
                        close.len()
                    ))?;
                }
            }
        }
    }
}

fn show_log(candidate: &ScoredCandidate, prompter: &mut dyn Prompter) -> Result<()> {
    prompter.show(&format!(
        "Logs for release: {}",
        candidate.candidate.label()
    ))?;
    for line in &candidate.decision_log {
        prompter.show(line)?;
    }
    Ok(())
}
