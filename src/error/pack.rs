//! Pack directory errors

use std::path::Path;

use super::SweepError;

/// Creates the error for a repository without `.git/objects/pack/`
pub fn dir_not_found(path: &Path) -> SweepError {
    SweepError::PackDirNotFound {
        path: path.display().to_string(),
    }
}

/// Creates the error for a pack directory holding no index files
pub fn no_index_files(pack_dir: &Path, glob: &str) -> SweepError {
    SweepError::NoPackIndexFiles {
        pattern: pack_dir.join(glob).display().to_string(),
    }
}
