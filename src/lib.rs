//! packsweep - pack object triage and HEAD pruning on top of `git`
//!
//! Two command line tools share this library:
//! - `classify_objects` lists the largest objects in a repository's packs and
//!   tells which of them are still in HEAD
//! - `head_pruner` removes directories and files from HEAD with `git rm` and
//!   prints the BFG command for scrubbing them from history
//!
//! All repository work is done by `git` subprocesses.

pub mod cli;
pub mod commands;
pub mod error;
pub mod git;
pub mod logging;
pub mod operations;
pub mod ui;

#[cfg(test)]
mod test_fixtures;

pub use error::{Result, SweepError};
