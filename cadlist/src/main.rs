mod cli;
mod ops;
mod reports;

use std::{io::IsTerminal, process::ExitCode};

use clap::Parser;
use eyre::Result;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    // stdout carries the fragment, so diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_max_level(LevelFilter::WARN)
        .without_time()
        .init();

    Cli::parse().run()
}
