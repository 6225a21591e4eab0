//! Diagnostics logging
//!
//! Structured single-line JSON diagnostics for data-quality findings.

mod logger;

pub use logger::{Logger, Severity};
