//! Command implementations for the packsweep binaries

pub mod classify;
pub mod prune;
