//! CLI-specific error types

use thiserror::Error;

use crate::source::SourceError;
use crate::view::ViewError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Snapshot could not be loaded
    #[error(transparent)]
    Source(#[from] SourceError),

    /// View parameter rejected at the boundary
    #[error(transparent)]
    View(#[from] ViewError),

    /// Output could not be encoded
    #[error("Failed to encode output: {0}")]
    Encode(String),
}
