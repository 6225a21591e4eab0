//! Patient record model
//!
//! Immutable snapshot rows owned by the external data source.
//! The query pipeline only ever reads these.

mod types;

pub use types::{PatientRecord, PatientStatus};
