//! Test fixtures shared by the unit tests.
//!
//! [`RecordingGit`] stands in for the `git` binary: it returns canned output
//! and records every call, so tests can assert which commands ran and in
//! which order. [`create_fake_repo`] lays out the bare minimum on disk the
//! classifier checks for.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::Result;
use crate::git::pack::PACK_DIR;
use crate::git::{Git, GitOutput};

/// A recorded `git` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Gc,
    VerifyPack(Vec<PathBuf>),
    RevListObjects,
    Rm { path: String, recursive: bool },
}

/// Fake [`Git`] returning canned output
#[derive(Debug, Default)]
pub struct RecordingGit {
    pub verify_pack_stdout: String,
    pub rev_list_stdout: String,
    /// Paths for which `rm` reports a failure
    pub failing_rm: Vec<String>,
    calls: RefCell<Vec<GitCall>>,
}

impl RecordingGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verify_pack(mut self, stdout: impl Into<String>) -> Self {
        self.verify_pack_stdout = stdout.into();
        self
    }

    pub fn with_rev_list(mut self, stdout: impl Into<String>) -> Self {
        self.rev_list_stdout = stdout.into();
        self
    }

    pub fn with_failing_rm(mut self, path: &str) -> Self {
        self.failing_rm.push(path.to_string());
        self
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: GitCall) {
        self.calls.borrow_mut().push(call);
    }
}

fn ok(stdout: &str) -> Result<GitOutput> {
    Ok(GitOutput {
        success: true,
        stdout: stdout.to_string(),
        stderr: String::new(),
    })
}

impl Git for RecordingGit {
    fn gc(&self) -> Result<GitOutput> {
        self.record(GitCall::Gc);
        ok("")
    }

    fn verify_pack(&self, index_files: &[PathBuf]) -> Result<GitOutput> {
        self.record(GitCall::VerifyPack(index_files.to_vec()));
        ok(&self.verify_pack_stdout)
    }

    fn rev_list_objects(&self) -> Result<GitOutput> {
        self.record(GitCall::RevListObjects);
        ok(&self.rev_list_stdout)
    }

    fn rm(&self, path: &str, recursive: bool) -> Result<GitOutput> {
        self.record(GitCall::Rm {
            path: path.to_string(),
            recursive,
        });
        if self.failing_rm.iter().any(|p| p == path) {
            return Ok(GitOutput {
                success: false,
                stdout: String::new(),
                stderr: format!("fatal: pathspec '{path}' did not match any files"),
            });
        }
        ok(&format!("rm '{path}'\n"))
    }
}

/// Temp directory with `.git/objects/pack/` and one empty index file
pub fn create_fake_repo() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let pack_dir = temp.path().join(PACK_DIR);
    std::fs::create_dir_all(&pack_dir).expect("Failed to create pack directory");
    std::fs::write(pack_dir.join("pack-0001.idx"), b"").expect("Failed to write index");
    temp
}

/// Write a working-tree file inside a fake repository
pub fn write_worktree_file(repo: &TempDir, path: &str) {
    let file_path = repo.path().join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&file_path, b"content").expect("Failed to write file");
}
