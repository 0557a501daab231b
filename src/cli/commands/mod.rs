//! Command implementations

mod check;
mod errors;
mod import;

pub use check::check;
pub use errors::errors;
pub use import::import;

use std::fs;
use std::path::Path;

use anyhow::Context;

use timesheet_import::adapters::toml::TomlReferenceStore;
use timesheet_import::config::ImportConfig;

/// Read an import file as text
fn read_import_file(file: &Path) -> anyhow::Result<String> {
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

/// Reference store chosen by `--reference`, the config, or the default
fn reference_store(
    config: &ImportConfig,
    explicit: Option<&Path>,
) -> anyhow::Result<TomlReferenceStore> {
    let cwd = std::env::current_dir()?;
    let path = config.reference_path(explicit, &cwd);
    log::debug!("Using reference data {}", path.display());
    Ok(TomlReferenceStore::new(path))
}
