//! Employee header block
//!
//! ```text
//! EMP-ID: 123
//! EMP-NAME: Jane Doe
//! ```
//!
//! Reads `KEY: value` lines until the first `TIMESHEETS:` line.

use super::check_whitespace;
use super::lines::Lines;
use crate::core::models::{ImportFileError, MAX_EMPLOYEE_ID_LEN, MAX_EMPLOYEE_NAME_LEN, ParseError};

const KEY_VALUE_SEPARATOR: &str = ": ";
const EMPLOYEE_ID_KEY: &str = "EMP-ID";
const EMPLOYEE_NAME_KEY: &str = "EMP-NAME";

/// The employee identity declared by a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeHeader {
    /// Value of `EMP-ID`
    pub employee_id: String,
    /// Value of `EMP-NAME`
    pub employee_name: String,
}

/// Split a header line at the first `": "`
///
/// Everything after the first separator is the value, further separators
/// included: `EMP-NAME: A: B` has the value `A: B`.
pub(crate) fn split_key_value(text: &str) -> Result<(&str, &str), ImportFileError> {
    text.split_once(KEY_VALUE_SEPARATOR).ok_or(ImportFileError::InvalidKeyValueFormat)
}

/// Read the employee block, leaving the cursor on the first section line
///
/// # Errors
///
/// Returns the first violation found. See [`ImportFileError`] for the kinds
/// that belong to the employee and field format groups.
pub fn read_header(lines: &mut Lines<'_>) -> Result<EmployeeHeader, ParseError> {
    let mut employee_id: Option<&str> = None;
    let mut employee_name: Option<&str> = None;

    while let Some(line) = lines.peek() {
        if line.is_section_header() {
            break;
        }

        let fail = |kind: ImportFileError| kind.at_line(line.number);

        check_whitespace(line.text).map_err(fail)?;
        let (key, value) = split_key_value(line.text).map_err(fail)?;

        match key {
            EMPLOYEE_ID_KEY => {
                if employee_id.is_some() {
                    return Err(fail(ImportFileError::DuplicateEmployeeId));
                }
                if value.chars().count() > MAX_EMPLOYEE_ID_LEN {
                    return Err(fail(ImportFileError::EmployeeIdTooLong));
                }
                if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(fail(ImportFileError::EmployeeIdNotNumeric));
                }
                employee_id = Some(value);
            },
            EMPLOYEE_NAME_KEY => {
                if employee_name.is_some() {
                    return Err(fail(ImportFileError::DuplicateEmployeeName));
                }
                if value.chars().count() > MAX_EMPLOYEE_NAME_LEN {
                    return Err(fail(ImportFileError::EmployeeNameTooLong));
                }
                if value.is_empty() {
                    return Err(fail(ImportFileError::EmptyValue));
                }
                employee_name = Some(value);
            },
            _ => return Err(fail(ImportFileError::UnknownKey)),
        }

        lines.advance();
    }

    // A section line with nothing declared above it
    if let Some(line) = lines.peek()
        && employee_id.is_none()
        && employee_name.is_none()
    {
        return Err(ImportFileError::TimesheetSectionBeforeEmployeeData.at_line(line.number));
    }

    let here = lines.peek().map(|l| l.number);
    let missing = |kind: ImportFileError| ParseError { kind, line: here };

    let employee_id = employee_id.ok_or_else(|| missing(ImportFileError::MissingEmployeeId))?;
    let employee_name =
        employee_name.ok_or_else(|| missing(ImportFileError::MissingEmployeeName))?;

    if lines.is_at_end() {
        return Err(ImportFileError::MissingTimesheetSection.into());
    }

    log::debug!("Header declares employee {employee_id} ({employee_name})");

    Ok(EmployeeHeader {
        employee_id: employee_id.to_string(),
        employee_name: employee_name.to_string(),
    })
}
