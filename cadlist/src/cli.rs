use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, builder::TypedValueParser};
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Parser)]
#[command(name = "cadlist")]
#[command(version)]
#[command(about = "Print makefile source, dependency, and object lists for a folder of .cpp files")]
pub(crate) struct Cli {
    /// Folder containing the .cpp files
    ///
    /// Parsed as a raw OS string so an empty path reaches the scanner and
    /// gets reported as an invalid directory.
    #[arg(
        value_name = "FOLDER_PATH",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub folder: PathBuf,
}

impl Cli {
    pub fn run(&self) -> Result<ExitCode> {
        let report = ops::generate(&self.folder)?;
        report.render(&mut TerminalOutput::new());

        if report.is_success() {
            Ok(ExitCode::SUCCESS)
        } else {
            Ok(ExitCode::FAILURE)
        }
    }
}
