//! Error types and handling for packsweep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only preconditions are fatal: a missing pack directory, missing pack
//! indexes, invalid options and a `git` binary that cannot be started.
//! Everything a `git` subprocess reports on its own is downgraded to a
//! logged warning by the callers.
//!
//! Sub-modules hold convenience constructors by error domain:
//! - [`git`]: Git subprocess errors
//! - [`pack`]: Pack directory errors

pub mod git;
pub mod pack;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for packsweep operations
#[derive(Error, Diagnostic, Debug)]
pub enum SweepError {
    // Pack errors
    #[error("Can't find directory, {path}, cd to root of your repo.")]
    #[diagnostic(
        code(packsweep::pack::dir_not_found),
        help("Run from the root of a git clone, or point --repo at one")
    )]
    PackDirNotFound { path: String },

    #[error("No {pattern} files found, run `git gc`")]
    #[diagnostic(
        code(packsweep::pack::no_index_files),
        help("Loose objects are not inspected; pass --git-gc to pack them first")
    )]
    NoPackIndexFiles { pattern: String },

    // Option errors
    #[error("Invalid option: {message}")]
    #[diagnostic(code(packsweep::options::invalid))]
    InvalidOption { message: String },

    // Git errors
    #[error("Failed to run `{command}`: {reason}")]
    #[diagnostic(
        code(packsweep::git::spawn_failed),
        help("Check that git is installed and on PATH")
    )]
    GitSpawnFailed { command: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(packsweep::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SweepError {
    fn from(err: std::io::Error) -> Self {
        SweepError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SweepError>;
