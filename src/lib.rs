//! caredash - Deterministic query core for a patient records dashboard
//!
//! One synchronous pipeline turns a read-only patient snapshot plus
//! user-controlled view state into the exact page of rows to render:
//! filter -> sort -> paginate.

pub mod cli;
pub mod engine;
pub mod observability;
pub mod record;
pub mod source;
pub mod view;
