//! TOML-based reference data store
//!
//! Implements the `ReferenceStore` port trait using one TOML file.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::parser::load_file;
use super::writer::write_file;
use crate::core::models::ReferenceData;
use crate::core::ports::ReferenceStore;

/// Reference store backed by a TOML file
#[derive(Debug, Clone)]
pub struct TomlReferenceStore {
    path: PathBuf,
}

impl TomlReferenceStore {
    /// Create a store for the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReferenceStore for TomlReferenceStore {
    fn load(&self) -> anyhow::Result<ReferenceData> {
        load_file(&self.path).context("failed to load reference data")
    }

    fn save(&self, data: &ReferenceData) -> anyhow::Result<()> {
        write_file(&self.path, data).context("failed to save reference data")
    }
}
