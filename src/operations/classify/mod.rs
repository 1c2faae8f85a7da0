//! Object classification
//!
//! Finds the largest objects stored in the repository's packs and sorts each
//! into "in HEAD" or "not in HEAD", depending on whether the path it was
//! committed under is still a file in the working tree.

pub mod report;

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::cli::ClassifyArgs;
use crate::error::{Result, SweepError};
use crate::git::pack::{self, PackObjectRecord};
use crate::git::rev_list::{ReachabilityIndex, Resolution};
use crate::git::{Git, GitOutput};
use crate::ui::ProgressReporter;

/// Validated options for a classification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyOptions {
    repo_root: PathBuf,
    num_objects: usize,
    run_gc: bool,
    detailed: bool,
}

impl ClassifyOptions {
    pub const DEFAULT_NUM_OBJECTS: usize = 10;

    pub fn new(
        repo_root: impl Into<PathBuf>,
        num_objects: usize,
        run_gc: bool,
        detailed: bool,
    ) -> Result<Self> {
        if num_objects == 0 {
            return Err(SweepError::InvalidOption {
                message: "--num-objects must be at least 1".to_string(),
            });
        }

        Ok(Self {
            repo_root: repo_root.into(),
            num_objects,
            run_gc,
            detailed,
        })
    }

    /// Build options from parsed arguments, resolving the repository root
    pub fn from_args(args: &ClassifyArgs, repo_root: impl Into<PathBuf>) -> Result<Self> {
        Self::new(repo_root, args.num_objects, args.git_gc, args.detailed)
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn num_objects(&self) -> usize {
        self.num_objects
    }

    pub fn run_gc(&self) -> bool {
        self.run_gc
    }

    pub fn detailed(&self) -> bool {
        self.detailed
    }
}

/// A resolved path with an optional detail suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPath {
    pub path: String,
    pub detail: Option<String>,
}

impl ClassifiedPath {
    fn new(path: &str, record: &PackObjectRecord, detailed: bool) -> Self {
        let detail = detailed.then(|| {
            format!(
                ", size: {} MiB, type: {}, sha1: {}",
                record.size_mib(),
                record.kind,
                record.hash
            )
        });

        Self {
            path: path.to_string(),
            detail,
        }
    }
}

impl fmt::Display for ClassifiedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(detail) = &self.detail {
            f.write_str(detail)?;
        }
        Ok(())
    }
}

/// Result of a classification run, in size-descending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// The N that was asked for
    pub requested: usize,
    pub not_in_head: Vec<ClassifiedPath>,
    pub in_head: Vec<ClassifiedPath>,
    /// Records with no path in the reachability listing
    pub skipped: Vec<PackObjectRecord>,
}

impl Classification {
    fn new(requested: usize) -> Self {
        Self {
            requested,
            ..Self::default()
        }
    }

    /// Number of records looked at
    pub fn processed(&self) -> usize {
        self.not_in_head.len() + self.in_head.len() + self.skipped.len()
    }
}

/// Classifies the largest packed objects of one repository
pub struct ObjectClassifier<'a, G: Git> {
    git: &'a G,
    options: &'a ClassifyOptions,
}

impl<'a, G: Git> ObjectClassifier<'a, G> {
    pub fn new(git: &'a G, options: &'a ClassifyOptions) -> Self {
        Self { git, options }
    }

    /// Run the classification and write progress and report to `out`
    pub fn run(
        &self,
        progress: &mut dyn ProgressReporter,
        out: &mut dyn Write,
    ) -> Result<Classification> {
        let pack_dir = pack::pack_dir(self.options.repo_root())?;

        if self.options.run_gc() {
            writeln!(out, "Running git gc")?;
            step(progress, "git gc", || self.git.gc())?.warn_on_failure("git gc");
        }

        let index_files = pack::find_index_files(&pack_dir)?;
        debug!("found {} pack index file(s)", index_files.len());

        let num_objects = self.options.num_objects();
        writeln!(out, "Classifying {num_objects} largest objects in repo")?;

        let verify = step(progress, "git verify-pack", || {
            self.git.verify_pack(&index_files)
        })?
        .warn_on_failure("git verify-pack");
        let records = pack::largest(pack::parse_verify_pack(&verify.stdout), num_objects);

        let mut classification = Classification::new(num_objects);

        if !records.is_empty() {
            let listing = step(progress, "git rev-list", || self.git.rev_list_objects())?
                .warn_on_failure("git rev-list");
            let index = ReachabilityIndex::parse(&listing.stdout);

            for record in records {
                write!(out, ".")?;
                out.flush()?;
                self.classify_record(record, &index, &mut classification);
            }
        }

        report::write_report(out, &classification)?;
        Ok(classification)
    }

    fn classify_record(
        &self,
        record: PackObjectRecord,
        index: &ReachabilityIndex,
        classification: &mut Classification,
    ) {
        let path = match index.resolve(&record.hash) {
            Resolution::Path(path) => path,
            Resolution::NoPath => {
                warn!(
                    "{} {} has no path in the reachability listing, skipping",
                    record.kind, record.hash
                );
                classification.skipped.push(record);
                return;
            }
            Resolution::Missing => {
                warn!(
                    "{} {} is not reachable from any ref, skipping",
                    record.kind, record.hash
                );
                classification.skipped.push(record);
                return;
            }
        };

        let entry = ClassifiedPath::new(path, &record, self.options.detailed());
        if self.options.repo_root().join(path).is_file() {
            classification.in_head.push(entry);
        } else {
            classification.not_in_head.push(entry);
        }
    }
}

fn step(
    progress: &mut dyn ProgressReporter,
    message: &str,
    run: impl FnOnce() -> Result<GitOutput>,
) -> Result<GitOutput> {
    progress.start_step(message);
    let result = run();
    progress.finish_step();
    result
}
