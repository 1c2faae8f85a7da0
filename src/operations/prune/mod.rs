//! Removing paths from HEAD
//!
//! Runs `git rm` for every requested directory (recursively) and file, or
//! only announces the removals in dry-run mode. History is left alone; the
//! optional BFG command is printed for the user to run against a mirror.

pub mod bfg;

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::cli::PruneArgs;
use crate::error::Result;
use crate::git::Git;

/// Validated options for a prune run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOptions {
    repo_root: PathBuf,
    dirs: Vec<String>,
    files: Vec<String>,
    print_bfg: bool,
    dry_run: bool,
}

impl PruneOptions {
    /// List entries are trimmed and empty ones dropped
    pub fn new(
        repo_root: impl Into<PathBuf>,
        dirs: Vec<String>,
        files: Vec<String>,
        print_bfg: bool,
        dry_run: bool,
    ) -> Self {
        Self {
            repo_root: repo_root.into(),
            dirs: normalize(dirs),
            files: normalize(files),
            print_bfg,
            dry_run,
        }
    }

    /// Build options from parsed arguments, resolving the repository root
    pub fn from_args(args: &PruneArgs, repo_root: impl Into<PathBuf>) -> Self {
        Self::new(
            repo_root,
            args.dirs.clone(),
            args.files.clone(),
            args.print_bfg,
            args.dry_run,
        )
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn print_bfg(&self) -> bool {
        self.print_bfg
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

fn normalize(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

/// What a prune run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneSummary {
    /// Assets `git rm` accepted (empty on dry runs)
    pub removed: Vec<String>,
    /// Assets `git rm` refused
    pub failed: Vec<String>,
    /// The BFG command, when requested
    pub bfg_command: Option<String>,
}

/// Removes assets from HEAD through `git rm`
pub struct HeadPruner<'a, G: Git> {
    git: &'a G,
    options: &'a PruneOptions,
}

impl<'a, G: Git> HeadPruner<'a, G> {
    pub fn new(git: &'a G, options: &'a PruneOptions) -> Self {
        Self { git, options }
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<PruneSummary> {
        let options = self.options;
        debug!("prune options: {options:?}");

        if options.dirs().is_empty() && options.files().is_empty() {
            warn!("no --dirs or --files given, nothing to remove");
        }

        if options.dry_run() {
            writeln!(out, "Dry run, no git commands will be run")?;
        }

        let mut summary = PruneSummary::default();

        for dir in options.dirs() {
            self.remove(dir, true, out, &mut summary)?;
        }
        for file in options.files() {
            self.remove(file, false, out, &mut summary)?;
        }

        if !options.dry_run() {
            writeln!(
                out,
                "Don't forget to check status and commit / push these modifications."
            )?;
        }

        if options.print_bfg() {
            let command = bfg::delete_folders_command(options.dirs());
            writeln!(out, "{command}")?;
            summary.bfg_command = Some(command);
        }

        Ok(summary)
    }

    fn remove(
        &self,
        asset: &str,
        recursive: bool,
        out: &mut dyn Write,
        summary: &mut PruneSummary,
    ) -> Result<()> {
        writeln!(out, "removing asset [{asset}]")?;
        if self.options.dry_run() {
            return Ok(());
        }

        let output = self.git.rm(asset, recursive)?;
        if output.success {
            summary.removed.push(asset.to_string());
        } else {
            warn!("git rm {asset} failed: {}", output.stderr.trim());
            summary.failed.push(asset.to_string());
        }
        Ok(())
    }
}
