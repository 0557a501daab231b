//! Validate an import file

use std::path::Path;

use anyhow::Context;

use super::{read_import_file, reference_store};
use timesheet_import::config::ImportConfig;
use timesheet_import::core::parser::TimesheetParser;
use timesheet_import::core::ports::ReferenceStore;
use timesheet_import::output::{CheckResult, ErrorReport, OutputMode};

/// Parse a file against the reference data and report whether it is valid
///
/// Exits with status 1 when the file is rejected.
pub fn check(
    file: &Path,
    reference: Option<&Path>,
    config: &ImportConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let text = read_import_file(file)?;
    let store = reference_store(config, reference)?;
    let data = store
        .load()
        .with_context(|| format!("reference file {}", store.path().display()))?;

    let parsed = TimesheetParser::new(&data.employees, &data.projects).parse(&text);

    let result = CheckResult {
        file: file.display().to_string(),
        valid: parsed.is_ok(),
        entries: parsed.as_ref().map_or(0, |p| p.entries().len()),
        error: parsed.as_ref().err().map(ErrorReport::from),
    };
    result.render(mode);

    if !result.valid {
        std::process::exit(1);
    }

    Ok(())
}
