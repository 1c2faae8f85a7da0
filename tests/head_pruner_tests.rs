//! Integration tests for `head_pruner` against real repositories

mod common;

use predicates::prelude::*;

fn repo_with_assets() -> common::TestRepo {
    let repo = common::TestRepo::new();
    repo.write_file("big_nasty_dir/a.bin", b"a");
    repo.write_file("big_nasty_dir/nested/b.bin", b"b");
    repo.write_file("other dir/c.bin", b"c");
    repo.write_file("dump.sql", b"insert");
    repo.write_file("keep.txt", b"keep");
    repo.commit_all("initial");
    repo
}

#[test]
fn test_removes_dirs_and_files_from_index() {
    let repo = repo_with_assets();

    common::prune_cmd(&repo.path)
        .args([
            "--dirs",
            "big_nasty_dir,other dir",
            "--files",
            "dump.sql",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("removing asset [big_nasty_dir]"))
        .stdout(predicate::str::contains("removing asset [other dir]"))
        .stdout(predicate::str::contains("removing asset [dump.sql]"))
        .stdout(predicate::str::contains(
            "Don't forget to check status and commit / push these modifications.",
        ));

    assert_eq!(repo.tracked_files(), vec!["keep.txt"]);
    assert!(!repo.file_exists("big_nasty_dir/nested/b.bin"));
    assert!(!repo.file_exists("dump.sql"));
}

#[test]
fn test_dry_run_leaves_repo_untouched() {
    let repo = repo_with_assets();
    let before = repo.tracked_files();

    common::prune_cmd(&repo.path)
        .args(["--dirs", "big_nasty_dir", "--files", "dump.sql", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Dry run, no git commands will be run\n",
        ))
        .stdout(predicate::str::contains("removing asset [big_nasty_dir]"))
        .stdout(predicate::str::contains("Don't forget").not());

    assert_eq!(repo.tracked_files(), before);
    assert!(repo.file_exists("big_nasty_dir/a.bin"));
    assert!(repo.file_exists("dump.sql"));
}

#[test]
fn test_print_bfg_command() {
    let repo = repo_with_assets();

    common::prune_cmd(&repo.path)
        .args(["--dirs", "big_nasty_dir,other dir", "-p", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "bfg --delete-folders '{big_nasty_dir, other dir}' <PATH_TO_MIRROR>\n",
        ));
}

#[test]
fn test_failed_removal_is_a_warning() {
    let repo = repo_with_assets();

    common::prune_cmd(&repo.path)
        .args(["--files", "no_such_file.txt,dump.sql"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no_such_file.txt"));

    assert_eq!(
        repo.tracked_files(),
        vec![
            "big_nasty_dir/a.bin",
            "big_nasty_dir/nested/b.bin",
            "keep.txt",
            "other dir/c.bin",
        ]
    );
}

#[test]
fn test_dir_without_recursive_flag_is_not_a_file() {
    let repo = repo_with_assets();

    common::prune_cmd(&repo.path)
        .args(["--files", "big_nasty_dir"])
        .assert()
        .success()
        .stderr(predicate::str::contains("big_nasty_dir"));

    assert!(repo.tracked_files().contains(&"big_nasty_dir/a.bin".to_string()));
}

#[test]
fn test_help_exits_zero() {
    let dir = tempfile::TempDir::new().unwrap();

    common::prune_cmd(dir.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dirs"))
        .stdout(predicate::str::contains("--print-bfg"))
        .stdout(predicate::str::contains("--dry-run"));
}
