//! Site configuration.
//!
//! A small TOML file controls where static assets are resolved from (the
//! deployment sub-path of the site) and the file names of the portrait and
//! resume assets. Everything has a default; a missing config file is not an
//! error. No environment variables are consumed.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Default config file looked up next to the executable's working directory.
pub const CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Root directory under which all static assets are resolved.
    pub base_path: PathBuf,
    /// Portrait image shown in the hero section, relative to `base_path`.
    pub portrait_file: String,
    /// Resume document offered as a download, relative to `base_path`.
    pub resume_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets"),
            portrait_file: "rafael.jpg".to_string(),
            resume_file: "cv-rafael-padilha.pdf".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from `path`, or from `portfolio.toml` in the
    /// working directory when no path is given. A missing file yields the
    /// defaults; a file that exists but does not parse is an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Resolve an asset path relative to the configured base path.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.base_path.join(relative)
    }

    /// Absolute-ish path of the portrait asset.
    pub fn portrait_path(&self) -> PathBuf {
        self.resolve(&self.portrait_file)
    }

    /// Absolute-ish path of the resume asset.
    pub fn resume_path(&self) -> PathBuf {
        self.resolve(&self.resume_file)
    }
}
