//! Entry record lines
//!
//! ```text
//! 09:00;12:30;"Sprint planning";PRJ1
//! ```
//!
//! Four `;`-separated fields: start, end, quoted description, project code.
//! Checks run in a fixed order and the first failure wins.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use super::lines::Line;
use crate::core::models::{
    ImportFileError, MAX_DESCRIPTION_LEN, ParseError, ProjectHandle, TimeEntry,
};
use crate::core::services::ProjectTable;

const FIELD_SEPARATOR: char = ';';

static TIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time regex"));

/// Parse one entry line of a section dated `date`
///
/// Unknown project codes are added to `projects`.
///
/// # Errors
///
/// Returns the first violation, tagged with the line number.
pub fn parse_entry(
    line: Line<'_>,
    date: NaiveDate,
    projects: &mut ProjectTable,
) -> Result<TimeEntry, ParseError> {
    parse_fields(line.text, projects)
        .map(|(start_time, end_time, description, project)| TimeEntry {
            date,
            start_time,
            end_time,
            description,
            project,
            line: line.number,
        })
        .map_err(|kind| kind.at_line(line.number))
}

type Fields = (NaiveTime, NaiveTime, String, ProjectHandle);

fn parse_fields(text: &str, projects: &mut ProjectTable) -> Result<Fields, ImportFileError> {
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    let [start, end, description, project] = fields[..] else {
        return Err(ImportFileError::IncorrectFieldCount);
    };

    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ImportFileError::EmptyField);
    }

    let start_time = parse_time(start)?;
    let end_time = parse_time(end)?;
    if start_time > end_time {
        return Err(ImportFileError::EndTimeBeforeStartTime);
    }

    let description = unquote_description(description)?;
    let project = projects.resolve(project)?;

    Ok((start_time, end_time, description.to_string(), project))
}

/// Strict `HH:MM` time of day
pub(crate) fn parse_time(s: &str) -> Result<NaiveTime, ImportFileError> {
    if !TIME_SHAPE.is_match(s) {
        return Err(ImportFileError::InvalidTime);
    }
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ImportFileError::InvalidTime)
}

/// Strip the surrounding double quotes from a description
pub(crate) fn unquote_description(s: &str) -> Result<&str, ImportFileError> {
    let inner = s
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(ImportFileError::DescriptionNotQuoted)?;

    if inner.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ImportFileError::DescriptionTooLong);
    }

    Ok(inner)
}
