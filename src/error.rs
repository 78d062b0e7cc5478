//! Error types for txsched
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in txsched
#[derive(Debug, Error)]
pub enum TxschedError {
    /// `next` was called with nothing pending
    #[error("Queue is empty - nothing to process")]
    EmptyQueue,

    /// A weight vector did not have exactly four components
    #[error("Invalid weight vector: expected 4 weights {{fee, time, complexity, tier}}, got {len}")]
    InvalidWeightVector { len: usize },

    /// Named strategy is neither built in nor configured
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// A workload record could not be parsed
    #[error("Workload line {line}: {message}")]
    Workload { line: usize, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for txsched operations
pub type Result<T> = std::result::Result<T, TxschedError>;
