//! View state and the presentation-layer session
//!
//! `ViewState` is the one serializable value holding every user-controlled
//! query parameter. `TableSession` owns a snapshot plus a `ViewState`,
//! applies the named state-change events, and runs one query per event.

mod errors;
mod session;
mod state;

pub use errors::{ViewError, ViewResult};
pub use session::{TablePage, TableSession};
pub use state::{SortDirection, SortField, StatusFilter, ViewState};
