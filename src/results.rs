//! Per-run results file.
//!
//! Every run writes the full scored list, whatever the outcome, so a previous
//! run's matches can be inspected after the terminal output is gone.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use discmatch_common::{LocalDiscSpec, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::ScoredCandidate;

/// Contents of a results file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResults {
    pub generated_at: DateTime<Utc>,
    pub local: LocalDiscSpec,
    pub scored: Vec<ScoredCandidate>,
}

/// Lower-case `title`, keeping ASCII letters and digits and collapsing
/// everything else into single underscores.
pub fn slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.to_string()
    }
}

/// Path of the results file for a run.
pub fn results_path(dir: &Path, title: &str, count: usize) -> PathBuf {
    dir.join(format!("results_{}_{}releases.json", slug(title), count))
}

/// Write the results file, returning its path.
pub fn save_results(
    dir: &Path,
    local: &LocalDiscSpec,
    scored: &[ScoredCandidate],
) -> Result<PathBuf> {
    let path = results_path(dir, &local.title, scored.len());

    let results = RunResults {
        generated_at: Utc::now(),
        local: local.clone(),
        scored: scored.to_vec(),
    };

    std::fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(&results)?;
    std::fs::write(&path, json)?;
    Ok(path)
}

/// Write the results file, logging instead of failing.
pub fn persist(dir: &Path, local: &LocalDiscSpec, scored: &[ScoredCandidate]) -> Option<PathBuf> {
    match save_results(dir, local, scored) {
        Ok(path) => {
            tracing::debug!("Saved results to {}", path.display());
            Some(path)
        }
        Err(e) => {
            tracing::warn!("Could not save results: {}", e);
            None
        }
    }
}

/// Read a results file written by an earlier run.
pub fn load_results(path: &Path) -> Result<RunResults> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
