//! List the error taxonomy

use timesheet_import::output::{OutputMode, TaxonomyList};

/// Print every error kind with its code and category
pub fn errors(mode: OutputMode) {
    TaxonomyList::all().render(mode);
}
