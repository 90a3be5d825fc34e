//! Outcomes of `cadlist` operations and how they are printed.

mod generate;
mod output;

pub use generate::GenerateReport;
pub use output::{Report, TerminalOutput};
