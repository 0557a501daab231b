//! Mock implementations of port traits for testing
//!
//! These mocks keep reference data in memory and count writes, so tests can
//! tell whether a store was saved without touching the filesystem.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use timesheet_import::core::models::ReferenceData;
use timesheet_import::core::ports::ReferenceStore;

/// In-memory implementation of `ReferenceStore`
#[derive(Debug, Default)]
pub struct MemoryReferenceStore {
    data: Mutex<ReferenceData>,
    saves: AtomicUsize,
}

impl MemoryReferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: ReferenceData) -> Self {
        Self {
            data: Mutex::new(data),
            saves: AtomicUsize::new(0),
        }
    }

    /// Current contents
    pub fn snapshot(&self) -> ReferenceData {
        self.data.lock().unwrap().clone()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ReferenceStore for MemoryReferenceStore {
    fn load(&self) -> anyhow::Result<ReferenceData> {
        Ok(self.snapshot())
    }

    fn save(&self, data: &ReferenceData) -> anyhow::Result<()> {
        *self.data.lock().unwrap() = data.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
