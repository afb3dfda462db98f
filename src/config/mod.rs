mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./discmatch.toml",
        "~/.config/discmatch/config.toml",
        "/etc/discmatch/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    config
        .matching
        .validate()
        .context("Invalid [matching] section")?;

    if config.covers.download && !config.covers.extract {
        tracing::warn!(
            "covers.download is enabled but covers.extract is not; nothing will be downloaded"
        );
    }

    if let Some(dir) = config.output.results_dir() {
        if dir.exists() && !dir.is_dir() {
            anyhow::bail!("Results path exists but is not a directory: {:?}", dir);
        }
    }

    Ok(())
}
