//! Snapshot error types.

use thiserror::Error;

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Infrastructure failures raised while comparing snapshots.
///
/// Expected outcomes (missing snapshot, mismatch, ...) are not errors; they are
/// reported through [`crate::ComparisonResult`].
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The external diff tool failed in an unexpected way.
    #[error("{tool} failed: {message}")]
    ToolFailed { tool: String, message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SnapshotError {
    /// Create a tool failure error.
    pub fn tool_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
