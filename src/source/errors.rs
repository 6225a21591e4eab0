//! Snapshot loading error types

use thiserror::Error;

/// Result type for snapshot operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Snapshot loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Snapshot file could not be read
    #[error("Failed to read snapshot {path}: {reason}")]
    Io { path: String, reason: String },

    /// Snapshot is not valid JSON for the record shape
    #[error("Invalid snapshot JSON: {0}")]
    InvalidJson(String),

    /// Two records share an id
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
}
