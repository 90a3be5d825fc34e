//! Generate operation - scan a folder and format its build lists.

use std::path::Path;

use cadlist_core::Fragment;
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Execute the generate operation.
///
/// An invalid folder or a folder without `.cpp` files is an expected outcome
/// and ends up in the report. Any other filesystem failure is an error.
pub fn generate(folder: &Path) -> Result<GenerateReport> {
    match cadlist_core::scan(folder) {
        Ok(names) => Ok(GenerateReport::Generated(Fragment::new(&names))),
        Err(err) if err.is_user_facing() => Ok(GenerateReport::Failed(err)),
        Err(err) => {
            let context = format!("Failed to list .cpp files in '{}'", err.path().display());
            Err(err).wrap_err(context)
        }
    }
}
