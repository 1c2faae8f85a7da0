//! Reachability listing (`git rev-list --objects --all`) indexed by object id

use std::collections::HashMap;

use log::warn;

use super::pack::is_object_id;

/// Outcome of looking an object up in the reachability listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Reachable with an associated path
    Path(&'a str),
    /// Reachable but listed without a path (commits, root trees)
    NoPath,
    /// Not reachable from any ref
    Missing,
}

/// Object id -> first listed path
#[derive(Debug, Default)]
pub struct ReachabilityIndex {
    paths: HashMap<String, Option<String>>,
}

impl ReachabilityIndex {
    /// Build the index from `git rev-list --objects --all` output
    ///
    /// Each line is `<oid>` or `<oid> <path>`; the path may itself contain
    /// spaces. Lines without a valid object id prefix are reported and
    /// skipped. The first entry for an object id wins.
    pub fn parse(output: &str) -> Self {
        let mut paths = HashMap::new();

        for line in output.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let (oid, path) = match line.split_once(' ') {
                Some((oid, path)) => (oid, Some(path)),
                None => (line, None),
            };

            if !is_object_id(oid) {
                warn!("ignoring malformed rev-list line: {line}");
                continue;
            }

            paths
                .entry(oid.to_string())
                .or_insert_with(|| path.filter(|p| !p.is_empty()).map(str::to_string));
        }

        Self { paths }
    }

    pub fn resolve(&self, oid: &str) -> Resolution<'_> {
        match self.paths.get(oid) {
            Some(Some(path)) => Resolution::Path(path),
            Some(None) => Resolution::NoPath,
            None => Resolution::Missing,
        }
    }
}
