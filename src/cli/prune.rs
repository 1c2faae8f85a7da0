use clap::Parser;

use super::GlobalArgs;

/// Remove dirs or files from HEAD
#[derive(Parser, Debug)]
#[command(
    name = "head_pruner",
    version,
    styles = super::styles(),
    about = "Remove dirs or files from HEAD with git rm",
    long_about = "WARNING: use at your own risk. Runs `git rm` on every listed directory \
                  (recursively) and file in the current clone. History is not touched; \
                  with --print-bfg the matching BFG Repo-Cleaner command is printed for \
                  scrubbing a mirror afterwards.",
    after_help = "EXAMPLES:\n  \
                  Preview removals and the BFG command:\n    head_pruner --dirs big_nasty_dir -d -p\n\n\
                  Remove directories and files:\n    head_pruner --dirs build,vendor --files data/dump.sql\n\n\
                  Then, on a mirror clone:\n    \
                  bfg --delete-folders '{big_nasty_dir}' my_mirror.git\n    \
                  git reflog expire --expire=now --all && git gc --prune=now --aggressive"
)]
pub struct PruneArgs {
    /// Directories to remove
    #[arg(long, value_name = "a,b,c", value_delimiter = ',')]
    pub dirs: Vec<String>,

    /// Files (relative path) to remove
    #[arg(long, value_name = "a,b,c", value_delimiter = ',')]
    pub files: Vec<String>,

    /// Print BFG commands
    #[arg(short = 'p', long = "print-bfg")]
    pub print_bfg: bool,

    /// Only show git rm assets and BFG commands
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}
