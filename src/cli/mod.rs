//! CLI definitions using clap derive API
//!
//! Each binary has its own top-level parser:
//! - classify: `classify_objects` arguments
//! - prune: `head_pruner` arguments
//!
//! Both flatten [`GlobalArgs`] for the repository root and verbosity.

use clap::Args;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::error::Result;

pub mod classify;
pub mod prune;

pub use classify::ClassifyArgs;
pub use prune::PruneArgs;

/// Help styling shared by both binaries
pub fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}

/// Options shared by both binaries
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Repository root (defaults to current directory)
    #[arg(long, short = 'C', env = "PACKSWEEP_REPO", value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl GlobalArgs {
    /// The repository root to work in, always absolute
    ///
    /// `git` runs with the root as its working directory, so paths built
    /// from a relative root would be resolved twice.
    pub fn repo_root(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        match &self.repo {
            Some(path) => Ok(cwd.join(path)),
            None => Ok(cwd),
        }
    }
}
