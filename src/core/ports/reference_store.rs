//! Reference data store port
//!
//! Defines how existing employees and projects are loaded before an import
//! and persisted after one.

use crate::core::models::ReferenceData;

/// Storage for reference data
///
/// Implementations handle persistence of employees and projects (TOML files,
/// in-memory fixtures, etc.)
pub trait ReferenceStore: Send + Sync {
    /// Load all known employees and projects
    fn load(&self) -> anyhow::Result<ReferenceData>;

    /// Replace the stored reference data
    fn save(&self, data: &ReferenceData) -> anyhow::Result<()>;

    /// Load, let `update` modify the data, and save it back
    ///
    /// Nothing is written when `update` returns `false`.
    fn update(&self, update: &mut dyn FnMut(&mut ReferenceData) -> bool) -> anyhow::Result<bool> {
        let mut data = self.load()?;
        let changed = update(&mut data);
        if changed {
            self.save(&data)?;
        }
        Ok(changed)
    }
}
