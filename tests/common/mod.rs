//! Common test utilities for packsweep integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway git repository for integration tests
pub struct TestRepo {
    /// Temporary directory, removed on drop
    pub temp: TempDir,
    /// Path to the repository root
    pub path: PathBuf,
}

impl TestRepo {
    /// Create and configure an empty repository
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let repo = Self { temp, path };

        repo.git(&["init", "-q"]);
        repo.git(&["config", "user.name", "Pack Sweeper"]);
        repo.git(&["config", "user.email", "sweeper@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "gc.auto", "0"]);
        repo
    }

    /// Run git in the repository and return stdout, panicking on failure
    pub fn git(&self, args: &[&str]) -> String {
        let output = StdCommand::new("git")
            .args(args)
            .current_dir(&self.path)
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Write a file in the working tree
    pub fn write_file(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Stage everything and commit
    pub fn commit_all(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message]);
    }

    /// Paths tracked in the index
    pub fn tracked_files(&self) -> Vec<String> {
        self.git(&["ls-files"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Check if a file exists in the working tree
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn bin_cmd(name: &str, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("Failed to find binary");
    // Ignore any developer PACKSWEEP_REPO / RUST_LOG overrides during tests
    cmd.env_remove("PACKSWEEP_REPO");
    cmd.env_remove("RUST_LOG");
    cmd.env("GIT_CONFIG_NOSYSTEM", "1");
    cmd.current_dir(dir);
    cmd
}

/// `classify_objects` running in `dir`
pub fn classify_cmd(dir: &Path) -> Command {
    bin_cmd("classify_objects", dir)
}

/// `head_pruner` running in `dir`
pub fn prune_cmd(dir: &Path) -> Command {
    bin_cmd("head_pruner", dir)
}
