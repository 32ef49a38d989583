//! Application entry point.
//!
//! Parses command-line arguments and delegates execution to [`runner::run`].

use clap::Parser;
use drivepath::{cli::Cli, runner};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let max_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();
    match runner::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast::<runner::RunnerError>() {
                Ok(diagnostic) => tracing::error!("{:?}", miette::Report::new(diagnostic)),
                Err(other) => tracing::error!(error = %format!("{other:#}"), "lookup failed"),
            }
            ExitCode::FAILURE
        }
    }
}
