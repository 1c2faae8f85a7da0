//! Git subprocess errors

use super::SweepError;

/// Creates the error for a `git` invocation that could not be started
pub fn spawn_failed(command: impl Into<String>, err: &std::io::Error) -> SweepError {
    SweepError::GitSpawnFailed {
        command: command.into(),
        reason: err.to_string(),
    }
}
