//! Pack index discovery and `git verify-pack -v` parsing

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};

/// Pack directory, relative to the repository root
pub const PACK_DIR: &str = ".git/objects/pack";

/// File name pattern of pack index files
pub const INDEX_GLOB: &str = "*.idx";

/// Object type tag as printed by `git verify-pack -v`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Commit,
    Tree,
    Blob,
    Tag,
}

impl FromStr for ObjectKind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "commit" => Ok(Self::Commit),
            "tree" => Ok(Self::Tree),
            "blob" => Ok(Self::Blob),
            "tag" => Ok(Self::Tag),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Commit => "commit",
            Self::Tree => "tree",
            Self::Blob => "blob",
            Self::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// One object line of `git verify-pack -v`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackObjectRecord {
    pub hash: String,
    pub kind: ObjectKind,
    /// Uncompressed object size in bytes
    pub size: u64,
}

impl PackObjectRecord {
    /// Size in MiB with two decimals, e.g. `1572864` -> `1.50`
    pub fn size_mib(&self) -> String {
        format_mib(self.size)
    }
}

/// Format a byte count as MiB with two decimals
#[allow(clippy::cast_precision_loss)]
pub fn format_mib(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0_f64.powi(2))
}

/// Whether `s` is a full hex object id (SHA-1 or SHA-256)
pub fn is_object_id(s: &str) -> bool {
    (s.len() == 40 || s.len() == 64) && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Check that the pack directory exists under `repo_root` and return it
pub fn pack_dir(repo_root: &Path) -> Result<PathBuf> {
    let dir = repo_root.join(PACK_DIR);
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(error::pack::dir_not_found(&dir))
    }
}

/// List the pack index files in `pack_dir`, sorted by name
///
/// Fails when there are none, since loose objects are invisible to
/// `git verify-pack`.
pub fn find_index_files(pack_dir: &Path) -> Result<Vec<PathBuf>> {
    let glob = Glob::new(INDEX_GLOB).map_err(|e| crate::error::SweepError::InvalidOption {
        message: format!("bad index glob {INDEX_GLOB}: {e}"),
    })?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(pack_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if glob.matched(&CandidatePath::from(&*name)).is_some() {
            files.push(entry.path());
        }
    }

    if files.is_empty() {
        return Err(error::pack::no_index_files(pack_dir, INDEX_GLOB));
    }

    files.sort();
    Ok(files)
}

/// Parse one line of `git verify-pack -v` output
///
/// Returns `None` for the summary lines (`non delta: ...`,
/// `chain length = ...`, `<pack>: ok`).
pub fn parse_verify_pack_line(line: &str) -> Option<PackObjectRecord> {
    let mut fields = line.split_whitespace();
    let hash = fields.next().filter(|h| is_object_id(h))?;
    let kind = fields.next()?.parse().ok()?;
    let size = fields.next()?.parse().ok()?;

    Some(PackObjectRecord {
        hash: hash.to_string(),
        kind,
        size,
    })
}

/// Parse `git verify-pack -v` output into records, first occurrence per hash
pub fn parse_verify_pack(output: &str) -> Vec<PackObjectRecord> {
    let mut seen = std::collections::HashSet::new();
    let mut records = Vec::new();

    for line in output.lines() {
        match parse_verify_pack_line(line) {
            Some(record) => {
                if seen.insert(record.hash.clone()) {
                    records.push(record);
                }
            }
            None => debug!("skipping verify-pack line: {line}"),
        }
    }

    records
}

/// The `n` largest records, largest first
///
/// Ties keep their verify-pack order, unlike `sort -rn` which would break
/// them by reverse line order.
pub fn largest(mut records: Vec<PackObjectRecord>, n: usize) -> Vec<PackObjectRecord> {
    records.sort_by(|a, b| b.size.cmp(&a.size));
    records.truncate(n);
    records
}
