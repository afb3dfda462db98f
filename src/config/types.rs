use discmatch_common::Error;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,

    #[serde(default)]
    pub covers: CoversConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    /// Unattended runs accept a lone candidate only when its score is
    /// strictly greater than this (default: 100, i.e. never)
    #[serde(default = "default_threshold")]
    pub single_threshold: f64,

    /// Unattended runs accept the best of several candidates only when its
    /// score is strictly greater than this (default: 100, i.e. never)
    #[serde(default = "default_threshold")]
    pub multi_threshold: f64,

    /// Decide without prompting
    #[serde(default)]
    pub unattended: bool,

    /// Keep prompting even when unattended
    #[serde(default)]
    pub unattended_confirm: bool,
}

fn default_threshold() -> f64 {
    100.0
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            single_threshold: default_threshold(),
            multi_threshold: default_threshold(),
            unattended: false,
            unattended_confirm: false,
        }
    }
}

impl MatchingConfig {
    /// Whether a human is asked at the decision points.
    pub fn interactive(&self) -> bool {
        !self.unattended || self.unattended_confirm
    }

    /// Reject thresholds that would make automatic acceptance meaningless.
    pub fn validate(&self) -> discmatch_common::Result<()> {
        for (name, value) in [
            ("single_threshold", self.single_threshold),
            ("multi_threshold", self.multi_threshold),
        ] {
            if !value.is_finite() {
                return Err(Error::configuration(format!("{} must be finite", name)));
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(Error::configuration(format!(
                    "{} must be between 0 and 100, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CoversConfig {
    /// Extract cover image URLs from detail pages
    #[serde(default)]
    pub extract: bool,

    /// Hand the accepted release's covers to the attached downloader
    #[serde(default)]
    pub download: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory for the per-run results file (empty disables it)
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("./tmp")
}

impl OutputConfig {
    /// The results directory, or `None` when the artifact is disabled.
    pub fn results_dir(&self) -> Option<&Path> {
        (!self.results_dir.as_os_str().is_empty()).then_some(self.results_dir.as_path())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
        }
    }
}
