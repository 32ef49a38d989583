//! Error types for the runner module.

// The unused_assignments lint fires in some Rust versions due to
// thiserror/miette derive expansion; `#[expect]` would fail where it does not.
// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while executing a lookup command.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// No folder exists at the requested exact path.
    #[error("no folder found at '{path}'")]
    #[diagnostic(
        code(drivepath::runner::folder_not_found),
        help("folder lookup follows only the first exact match at each level")
    )]
    FolderNotFound {
        /// The path that was looked up.
        path: String,
    },
    /// The `--from` folder does not exist.
    #[error("start folder '{path}' not found")]
    #[diagnostic(
        code(drivepath::runner::start_not_found),
        help("`--from` takes an exact folder path relative to the root")
    )]
    StartNotFound {
        /// The start path that was looked up.
        path: String,
    },
}
