//! `head_pruner` CLI wrapper

use crate::cli::PruneArgs;
use crate::error::Result;
use crate::git::GitCli;
use crate::operations::prune::{HeadPruner, PruneOptions, PruneSummary};

/// Run the pruner against the selected repository, reporting on stdout
pub fn run(args: &PruneArgs) -> Result<PruneSummary> {
    let options = PruneOptions::from_args(args, args.global.repo_root()?);
    let git = GitCli::new(options.repo_root());
    let mut stdout = std::io::stdout().lock();

    HeadPruner::new(&git, &options).run(&mut stdout)
}
