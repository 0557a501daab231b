//! Import a file and optionally persist new entities

use std::path::Path;

use anyhow::Context;

use super::{read_import_file, reference_store};
use timesheet_import::config::ImportConfig;
use timesheet_import::core::models::ReferenceData;
use timesheet_import::core::parser::TimesheetParser;
use timesheet_import::core::ports::ReferenceStore;
use timesheet_import::output::{ErrorReport, ImportResult, OutputMode};

/// Parse a file, print its entries and totals, and save changes if asked
///
/// Exits with status 1 when the file is rejected. The reference file is only
/// written when `save` is set and the import created or renamed something.
pub fn import(
    file: &Path,
    reference: Option<&Path>,
    save: bool,
    config: &ImportConfig,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let text = read_import_file(file)?;
    let store = reference_store(config, reference)?;
    let data = store
        .load()
        .with_context(|| format!("reference file {}", store.path().display()))?;

    let parsed = match TimesheetParser::new(&data.employees, &data.projects).parse(&text) {
        Ok(parsed) => parsed,
        Err(err) => {
            ErrorReport::from(&err).render(mode);
            std::process::exit(1);
        },
    };

    let mut result = ImportResult::from_parsed(&file.display().to_string(), &parsed);

    if save {
        let changed = store.update(&mut |stored: &mut ReferenceData| {
            let changes = parsed.apply_to(&mut stored.employees, &mut stored.projects);
            log::debug!(
                "Applied import: employee created={} renamed={}, {} new projects",
                changes.employee_created,
                changes.employee_renamed,
                changes.projects_created
            );
            !changes.is_empty()
        })?;
        if changed {
            log::info!("Updated reference data {}", store.path().display());
            result.saved_to = Some(store.path().display().to_string());
        }
    }

    result.render(mode);
    Ok(())
}
