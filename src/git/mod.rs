//! Git subprocess operations
//!
//! This module handles:
//! - Running `git` as a child process in the repository root
//! - Parsing `git verify-pack -v` output into pack object records
//! - Indexing `git rev-list --objects --all` output by object id
//!
//! Nothing here reads pack files or walks the object graph itself; that work
//! stays with `git`. The [`Git`] trait is the seam the operations are written
//! against, so tests can substitute a recording fake.

pub mod pack;
pub mod rev_list;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use log::{debug, warn};

use crate::error::{self, Result};

/// Captured result of one `git` invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// Log a warning for a non-zero exit and hand the output back unchanged
    ///
    /// A failing `git` is not fatal here: the caller keeps using whatever
    /// stdout was produced.
    pub fn warn_on_failure(self, what: &str) -> Self {
        if !self.success {
            warn!("{what} failed: {}", self.stderr.trim());
        }
        self
    }
}

/// The `git` operations packsweep delegates to
pub trait Git {
    /// `git gc`
    fn gc(&self) -> Result<GitOutput>;

    /// `git verify-pack -v <index files...>`
    fn verify_pack(&self, index_files: &[PathBuf]) -> Result<GitOutput>;

    /// `git rev-list --objects --all`
    fn rev_list_objects(&self) -> Result<GitOutput>;

    /// `git rm [-r] -- <path>`
    fn rm(&self, path: &str, recursive: bool) -> Result<GitOutput>;
}

/// [`Git`] backed by the `git` binary on PATH
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
    program: OsString,
}

impl GitCli {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            program: OsString::from("git"),
        }
    }

    /// Use a different `git` executable
    #[must_use]
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn run(&self, args: &[OsString]) -> Result<GitOutput> {
        let command_line = display_command(args);
        debug!("running `{command_line}` in {}", self.repo_root.display());

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|e| error::git::spawn_failed(command_line.clone(), &e))?;

        debug!("`{command_line}` exited with {}", output.status);

        Ok(GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl Git for GitCli {
    fn gc(&self) -> Result<GitOutput> {
        self.run(&["gc".into()])
    }

    fn verify_pack(&self, index_files: &[PathBuf]) -> Result<GitOutput> {
        let mut args: Vec<OsString> = vec!["verify-pack".into(), "-v".into()];
        args.extend(index_files.iter().map(|p| p.clone().into_os_string()));
        self.run(&args)
    }

    fn rev_list_objects(&self) -> Result<GitOutput> {
        self.run(&["rev-list".into(), "--objects".into(), "--all".into()])
    }

    fn rm(&self, path: &str, recursive: bool) -> Result<GitOutput> {
        let mut args: Vec<OsString> = vec!["rm".into()];
        if recursive {
            args.push("-r".into());
        }
        args.push("--".into());
        args.push(path.into());
        self.run(&args)
    }
}

fn display_command(args: &[OsString]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}
