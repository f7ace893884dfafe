//! `folio.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_capture::CaptureConfig;
use serde::Deserialize;

/// Configuration file structure (folio.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_dir")]
    pub content_dir: PathBuf,
    #[serde(default = "default_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub minify: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_dir(),
            output_dir: default_dir(),
            minify: false,
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());

    Ok(config)
}
