//! BFG Repo-Cleaner follow-up command
//!
//! Assumes `bfg` is aliased to `java -jar <PATH>/bfg.jar`. The mirror path
//! is left as a placeholder for the user to fill in.

/// Placeholder printed in place of the mirror clone path
pub const MIRROR_PLACEHOLDER: &str = "<PATH_TO_MIRROR>";

/// `bfg --delete-folders '{a, b}' <PATH_TO_MIRROR>`
pub fn delete_folders_command(dirs: &[String]) -> String {
    format!(
        "bfg --delete-folders '{{{}}}' {MIRROR_PLACEHOLDER}",
        dirs.join(", ")
    )
}
