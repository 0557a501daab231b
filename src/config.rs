//! Configuration management
//!
//! Config is plain TOML, looked up in the order described in
//! [`paths::config_file`]:
//!
//! ```toml
//! reference_file = "data/reference.toml"
//! save_reference = true
//!
//! [output]
//! json = false
//! ```
//!
//! Command-line flags override every value here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Import configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Reference data file used when `--reference` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_file: Option<PathBuf>,

    /// Write created/renamed entities back after a successful import
    #[serde(default)]
    pub save_reference: bool,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

impl ImportConfig {
    /// Load config for a working directory
    ///
    /// Falls back to defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        match paths::config_file(dir) {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config.relative_to(path.parent().unwrap_or_else(|| Path::new(""))))
    }

    /// Save config to a file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve a relative `reference_file` against the config's directory
    fn relative_to(mut self, base: &Path) -> Self {
        if let Some(file) = &self.reference_file
            && file.is_relative()
            && !base.as_os_str().is_empty()
        {
            self.reference_file = Some(base.join(file));
        }
        self
    }

    /// Reference file to use: the explicit one, the configured one, or the default
    #[must_use]
    pub fn reference_path(&self, explicit: Option<&Path>, dir: &Path) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.reference_file.clone())
            .unwrap_or_else(|| dir.join(paths::DEFAULT_REFERENCE_FILE))
    }
}
