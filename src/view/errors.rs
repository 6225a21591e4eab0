//! View-state error types
//!
//! Bad paging input is rejected here, at the mutation boundary, before it
//! can reach the query engine.

use thiserror::Error;

/// Result type for view-state operations
pub type ViewResult<T> = Result<T, ViewError>;

/// View-state errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Page index below 1
    #[error("Page must be at least 1 (got {0})")]
    InvalidPage(usize),

    /// Page size of zero
    #[error("Page size must be at least 1 (got {0})")]
    InvalidPageSize(usize),

    /// Sort field outside the declared set
    #[error("Unknown sort field: '{0}' (expected name, id, condition, status or lastVisit)")]
    UnknownSortField(String),

    /// Direction other than asc/desc
    #[error("Unknown sort direction: '{0}' (expected asc or desc)")]
    UnknownSortDirection(String),

    /// Status filter outside the declared set
    #[error("Unknown status filter: '{0}' (expected all, stable, critical or recovering)")]
    UnknownStatusFilter(String),
}
