//! Snapshot loading
//!
//! The input boundary: a read-only JSON snapshot of the record collection,
//! supplied by whatever data-access collaborator exists (a file of mock
//! data today, an API layer in a real deployment).

mod errors;
mod loader;

pub use errors::{SourceError, SourceResult};
pub use loader::SnapshotLoader;
