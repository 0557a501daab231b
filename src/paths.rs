//! Centralized path definitions for timesheet-import
//!
//! ## Layout
//!
//! ```text
//! project/
//! ├── .timesheet-import.toml          # Project config (optional)
//! └── reference.toml                  # Reference data (default name)
//!
//! ~/.config/timesheet-import/
//! └── config.toml                     # User config (fallback)
//! ```
//!
//! `TIMESHEET_IMPORT_CONFIG` overrides both config locations.

use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "TIMESHEET_IMPORT_CONFIG";

/// Project config filename
pub const PROJECT_CONFIG: &str = ".timesheet-import.toml";

/// Default reference data filename
pub const DEFAULT_REFERENCE_FILE: &str = "reference.toml";

const GLOBAL_DIR: &str = "timesheet-import";
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global config directory
///
/// Returns `~/.config/timesheet-import` (or the platform equivalent).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config")).join(GLOBAL_DIR)
}

/// Get the global config file path
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the project config file path inside `dir`
#[must_use]
pub fn project_config(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG)
}

/// Pick the config file to load
///
/// Order: `TIMESHEET_IMPORT_CONFIG`, project config in `dir`, global config.
/// Returns `None` when none of them exists (the env var always wins, even if
/// its file is missing).
#[must_use]
pub fn config_file(dir: &Path) -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }

    [project_config(dir), global_config()].into_iter().find(|p| p.is_file())
}
