//! `classify_objects` CLI wrapper
//!
//! Builds the options and `git` runner, then delegates to
//! operations/classify.

use crate::cli::ClassifyArgs;
use crate::error::Result;
use crate::git::GitCli;
use crate::operations::classify::{Classification, ClassifyOptions, ObjectClassifier};
use crate::ui::InteractiveProgressReporter;

/// Run the classifier against the selected repository, reporting on stdout
pub fn run(args: &ClassifyArgs) -> Result<Classification> {
    let options = ClassifyOptions::from_args(args, args.global.repo_root()?)?;
    let git = GitCli::new(options.repo_root());
    let mut progress = InteractiveProgressReporter::new();
    let mut stdout = std::io::stdout().lock();

    ObjectClassifier::new(&git, &options).run(&mut progress, &mut stdout)
}
