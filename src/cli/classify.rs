use clap::Parser;

use super::GlobalArgs;
use crate::operations::classify::ClassifyOptions;

/// Find the n largest objects in a git repo, and whether they are in HEAD
#[derive(Parser, Debug)]
#[command(
    name = "classify_objects",
    version,
    styles = super::styles(),
    about = "Find n-largest objects in a Git repo, and determine if files are (or aren't) in HEAD",
    long_about = "Inspects the repository's pack files with `git verify-pack`, takes the largest \
                  objects, maps each to the path it was committed under with `git rev-list`, and \
                  reports whether that path is still a file in the working tree. \
                  Run it from the root of a clone, or pass --repo.",
    after_help = "EXAMPLES:\n  \
                  Classify the 10 largest objects:\n    classify_objects\n\n\
                  Repack first, then classify 25 with size, type and hash:\n    classify_objects -g -n 25 -d\n\n\
                  Classify another clone:\n    classify_objects --repo ../my_repo"
)]
pub struct ClassifyArgs {
    /// Number of objects to classify
    #[arg(
        short = 'n',
        long = "num-objects",
        value_name = "NUMBER",
        default_value_t = ClassifyOptions::DEFAULT_NUM_OBJECTS
    )]
    pub num_objects: usize,

    /// Run git gc first
    #[arg(short = 'g', long = "git-gc")]
    pub git_gc: bool,

    /// Detailed output (e.g. path, size, sha1)
    #[arg(short = 'd', long)]
    pub detailed: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}
