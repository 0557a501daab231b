//! Timesheet section headers
//!
//! ```text
//! TIMESHEETS: 2024-01-31
//! ```

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::{SECTION_MARKER, check_whitespace};
use crate::core::models::ImportFileError;

const SECTION_PREFIX: &str = "TIMESHEETS: ";

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// Parse a section header line into its date
///
/// # Errors
///
/// - whitespace errors if the line is padded
/// - [`ImportFileError::MissingTimesheetSection`] if the line is not a section header
/// - [`ImportFileError::InvalidDate`] unless the rest is a real `YYYY-MM-DD` date
pub fn parse_section_header(text: &str) -> Result<NaiveDate, ImportFileError> {
    check_whitespace(text)?;

    if !text.starts_with(SECTION_MARKER) {
        return Err(ImportFileError::MissingTimesheetSection);
    }

    let date = text.strip_prefix(SECTION_PREFIX).ok_or(ImportFileError::InvalidDate)?;
    parse_date(date)
}

/// Strict `YYYY-MM-DD` calendar date
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, ImportFileError> {
    if !DATE_SHAPE.is_match(s) {
        return Err(ImportFileError::InvalidDate);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ImportFileError::InvalidDate)
}
