//! TOML writer for reference data files

use std::fs;
use std::path::Path;

use super::parser::ReferenceError;
use crate::core::models::ReferenceData;

const HEADER: &str = "# timesheet-import reference data\n\n";

/// Format reference data as TOML
///
/// # Errors
///
/// Returns an error if the data cannot be serialized.
pub fn format_reference_file(data: &ReferenceData) -> Result<String, ReferenceError> {
    let body = toml::to_string(data)?;
    Ok(format!("{HEADER}{body}"))
}

/// Write reference data to a file, creating parent directories
///
/// # Errors
///
/// Returns an error if the data cannot be serialized or the file written.
pub fn write_file(path: &Path, data: &ReferenceData) -> Result<(), ReferenceError> {
    let content = format_reference_file(data)?;
    let io_err = |source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, content).map_err(io_err)?;

    log::debug!(
        "Wrote {} employee(s) and {} project(s) to {}",
        data.employees.len(),
        data.projects.len(),
        path.display()
    );
    Ok(())
}
