//! Query engine subsystem
//!
//! Consumes a read-only record snapshot plus a `ViewState` and produces
//! deterministic results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter records by status and free-text search
//! 2. Sort the filtered set by the active field and direction (stable)
//! 3. Clamp the requested page and slice
//! 4. Return the page plus filtered/paging totals
//!
//! # Invariants
//!
//! - Identical `(records, view)` inputs yield identical output
//! - Records are never mutated
//! - The served page is always inside `[1, max(1, total_pages)]`

mod engine;
mod filters;
mod paginator;
mod result;
mod sorter;

pub use engine::QueryEngine;
pub use filters::RecordFilter;
pub use paginator::{Paginated, Paginator};
pub use result::QueryOutput;
pub use sorter::RecordSorter;
