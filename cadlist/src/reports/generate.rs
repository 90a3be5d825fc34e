//! Generate command report.

use cadlist_core::{Fragment, ScanError};

use super::output::{Output, Report};

/// Outcome of scanning a folder.
#[derive(Debug)]
pub enum GenerateReport {
    /// The folder had `.cpp` files.
    Generated(Fragment),
    /// The folder was invalid or had nothing to list.
    Failed(ScanError),
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerateReport::Generated(_))
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            GenerateReport::Generated(fragment) => {
                for block in fragment.blocks() {
                    out.preformatted(&block.to_string());
                }
            }
            GenerateReport::Failed(err) => out.preformatted(&err.to_string()),
        }
    }
}
