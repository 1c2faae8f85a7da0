//! Logger setup shared by both binaries
//!
//! Warnings are always shown; `--verbose` adds debug output such as every
//! `git` command line. `RUST_LOG` takes precedence over both.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter for the given verbosity
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialise `env_logger` on stderr
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).as_str());
    // A logger may already be installed (tests); keep the first one
    Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .ok();
}
