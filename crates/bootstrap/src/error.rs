//! Bootstrap error types.

use thiserror::Error;

/// Errors that can occur during a bootstrap run.
///
/// Only `Reset` and `AwaitedDispatch` are fatal to the run. Fire-and-forget
/// dispatch failures are discarded at the dispatch boundary by contract and
/// never appear here.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The store could not be reached or a collection drop failed.
    #[error("store reset failed: {0}")]
    Reset(String),

    /// An await-result dispatch failed on the handler side.
    #[error("awaited dispatch of {command} failed: {reason}")]
    AwaitedDispatch { command: String, reason: String },

    /// Secondary-index construction on the event log failed.
    ///
    /// Returned by the store administration port; the orchestrator logs it
    /// and still completes the run.
    #[error("index build failed: {0}")]
    IndexBuild(String),

    /// Serialization error while recording a command payload.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for bootstrap results.
pub type Result<T> = std::result::Result<T, BootstrapError>;
