//! TOML parser for reference data files
//!
//! ```toml
//! [[employee]]
//! employee_id = "123"
//! employee_name = "Jane Doe"
//!
//! [[project]]
//! project_code = "PRJ1"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::ReferenceData;

/// Errors that can occur reading or writing a reference file
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// File could not be read or written
    #[error("cannot access reference file {path}: {source}")]
    Io {
        /// The file involved
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// File content is not valid reference data
    #[error("invalid reference file {path}: {source}")]
    Parse {
        /// The file involved
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// Reference data could not be serialized
    #[error("cannot serialize reference data: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Parse reference data from TOML text
///
/// # Errors
///
/// Returns the TOML deserialization error if the text is malformed.
pub fn parse_str(content: &str) -> Result<ReferenceData, toml::de::Error> {
    toml::from_str(content)
}

/// Load reference data from a file
///
/// A missing file is treated as empty reference data.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<ReferenceData, ReferenceError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("Reference file {} not found, starting empty", path.display());
            return Ok(ReferenceData::default());
        },
        Err(source) => {
            return Err(ReferenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        },
    };

    parse_str(&content).map_err(|source| ReferenceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
