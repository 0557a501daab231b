//! Project model and arena handles
//!
//! Entries never own their project. They hold a [`ProjectHandle`] into the
//! project table of the parse that produced them, so every entry with the same
//! code points at the same project.

use serde::{Deserialize, Serialize};

/// Maximum length of a project code, in characters
pub const MAX_PROJECT_CODE_LEN: usize = 20;

/// A project that time is booked against
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    /// Unquoted project code (e.g., "PRJ1")
    pub project_code: String,
}

impl Project {
    /// Create a new project
    #[must_use]
    pub fn new(project_code: impl Into<String>) -> Self {
        Self {
            project_code: project_code.into(),
        }
    }
}

/// Index of a project inside one parse result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ProjectHandle(pub(crate) usize);

impl ProjectHandle {
    /// Position in the project table
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Where a project in the table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum ProjectOrigin {
    /// Supplied by the caller, at this index of the seed slice
    Existing(usize),
    /// First seen in this file
    Created,
}
