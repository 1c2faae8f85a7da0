//! High-level operations
//!
//! Each operation takes a validated options value and a [`crate::git::Git`]
//! implementation, writes its user-facing output to a writer, and returns a
//! summary of what it did.

pub mod classify;
pub mod prune;
