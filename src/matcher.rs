//! End-to-end matching run: parse, score, persist, select.

use std::path::Path;

use discmatch_common::{CandidateRelease, Error, LocalDiscSpec, Result, SelectionResult};
use discmatch_parser::{extract_cover_images, parse_release_details, ParsedReleaseSpec};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::covers::{self, CoverDownloader};
use crate::results;
use crate::scoring::{self, ScoredCandidate};
use crate::selection::{Prompter, Selector};

/// One candidate as delivered by the fetch layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInput {
    pub candidate: CandidateRelease,
    /// Specification block of the detail page, as text or HTML.
    #[serde(default)]
    pub detail_text: Option<String>,
    /// Full detail page, used for cover image extraction.
    #[serde(default)]
    pub page_html: Option<String>,
}

/// Result of a matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Metadata of the accepted release, if any.
    pub selection: Option<SelectionResult>,
    /// Every candidate, best first.
    pub scored: Vec<ScoredCandidate>,
}

/// Load a candidate batch from a JSON array.
pub fn load_batch(path: &Path) -> Result<Vec<CandidateInput>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::invalid_input(format!("Invalid candidate batch {}: {}", path.display(), e))
    })
}

pub struct Matcher {
    config: Config,
    downloader: Option<Box<dyn CoverDownloader>>,
}

impl Matcher {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            downloader: None,
        }
    }

    /// Attach the downloader that receives the accepted release's covers.
    pub fn with_downloader(mut self, downloader: Box<dyn CoverDownloader>) -> Self {
        self.downloader = Some(downloader);
        self
    }

    /// Run the whole engine over one batch.
    ///
    /// Fails before any scoring when the thresholds are invalid, and with
    /// [`Error::Cancelled`] when a prompt goes unanswered.
    pub fn run(
        &self,
        local: &LocalDiscSpec,
        batch: Vec<CandidateInput>,
        prompter: &mut dyn Prompter,
    ) -> Result<MatchOutcome> {
        self.config.matching.validate()?;

        tracing::info!(
            "Matching {} against {} candidate release(s)",
            if local.title.is_empty() { "disc" } else { local.title.as_str() },
            batch.len()
        );

        let extract = self.config.covers.extract;
        let parsed: Vec<(CandidateRelease, Option<ParsedReleaseSpec>)> = batch
            .into_par_iter()
            .map(|input| prepare(input, extract))
            .collect();

        let scored = scoring::score_all(local, parsed);

        if let Some(dir) = self.config.output.results_dir() {
            if let Some(path) = results::persist(dir, local, &scored) {
                tracing::info!("Results written to {}", path.display());
            }
        }

        let selection = Selector::new(&self.config.matching).select(&scored, prompter)?;

        if let (Some(selection), Some(downloader)) = (&selection, &self.downloader) {
            if self.config.covers.download {
                covers::deliver(downloader.as_ref(), selection);
            }
        }

        Ok(MatchOutcome { selection, scored })
    }
}

/// Parse a candidate's detail text and, if enabled, its cover images.
fn prepare(input: CandidateInput, extract: bool) -> (CandidateRelease, Option<ParsedReleaseSpec>) {
    let CandidateInput {
        mut candidate,
        detail_text,
        page_html,
    } = input;

    let spec = detail_text.as_deref().and_then(parse_release_details);
    if spec.is_none() {
        tracing::debug!(
            release_id = %candidate.release_id,
            "No specifications parsed for {}",
            candidate.label()
        );
    }

    if extract {
        if let Some(page) = page_html.as_deref().or(detail_text.as_deref()) {
            let images = extract_cover_images(page);
            if !images.is_empty() {
                candidate.cover_images = Some(images);
            }
        }
    }

    (candidate, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Choice;

    struct NoPrompt;

    impl Prompter for NoPrompt {
        fn show(&mut self, _message: &str) -> Result<()> {
            Ok(())
        }

        fn ask_yes_no(&mut self, _question: &str) -> Result<bool> {
            panic!("unexpected yes/no prompt")
        }

        fn ask_choice(&mut self, _prompt: &str, _options: &[String]) -> Result<Choice> {
            panic!("unexpected choice prompt")
        }
    }

    fn input(id: &str, detail: Option<&str>, page: Option<&str>) -> CandidateInput {
        CandidateInput {
            candidate: CandidateRelease {
                title: format!("Release {}", id),
                country: "France".to_string(),
                publisher: "Studio".to_string(),
                price: String::new(),
                release_id: id.to_string(),
                detail_url: String::new(),
                cover_images: None,
            },
            detail_text: detail.map(str::to_string),
            page_html: page.map(str::to_string),
        }
    }

    fn config() -> Config {
        let mut config = Config::default();
        config.output.results_dir = Default::default();
        config
    }

    #[test]
    fn test_prepare_without_detail() {
        let (_, spec) = prepare(input("1", None, None), true);
        assert!(spec.is_none());
    }

    #[test]
    fn test_prepare_extracts_covers_only_when_enabled() {
        let page = r#"<script>$('#f').append('<img id="frontimage_overlay" src="https://img.example/f.jpg?x=1">')</script>"#;

        let (candidate, _) = prepare(input("1", Some("Video\n"), Some(page)), false);
        assert!(candidate.cover_images.is_none());

        let (candidate, spec) = prepare(input("1", Some("Video\n"), Some(page)), true);
        assert!(spec.is_some());
        assert_eq!(
            candidate.cover_images.unwrap()["front"],
            "https://img.example/f.jpg"
        );
    }

    #[test]
    fn test_run_rejects_bad_thresholds() {
        let mut config = config();
        config.matching.multi_threshold = f64::NAN;
        let err = Matcher::new(config)
            .run(&LocalDiscSpec::default(), vec![input("1", None, None)], &mut NoPrompt)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_run_empty_batch() {
        let outcome = Matcher::new(config())
            .run(&LocalDiscSpec::default(), Vec::new(), &mut NoPrompt)
            .unwrap();
        assert!(outcome.selection.is_none());
        assert!(outcome.scored.is_empty());
    }

    #[test]
    fn test_run_unattended_below_threshold() {
        let mut config = config();
        config.matching.unattended = true;
        let outcome = Matcher::new(config)
            .run(
                &LocalDiscSpec::default(),
                vec![input("1", None, None), input("2", None, None)],
                &mut NoPrompt,
            )
            .unwrap();
        assert!(outcome.selection.is_none());
        assert_eq!(outcome.scored.len(), 2);
    }
}
