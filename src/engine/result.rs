//! Result type for one query run

use crate::record::PatientRecord;

/// Output of one pipeline run
///
/// Rows borrow from the input snapshot; the session layer clones one page
/// into an owned value for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutput<'a> {
    /// Rows on the served page, in sorted order
    pub page_rows: Vec<&'a PatientRecord>,
    /// Records matching the filter, across all pages
    pub total_count: usize,
    /// Total pages at the requested page size; 0 when nothing matched
    pub total_pages: usize,
    /// The page actually served after clamping; callers reconcile their own
    /// `current_page` against this
    pub effective_page: usize,
}

impl QueryOutput<'_> {
    /// Output for an empty match
    pub fn empty() -> Self {
        Self {
            page_rows: Vec::new(),
            total_count: 0,
            total_pages: 0,
            effective_page: 1,
        }
    }

    /// Returns true if the served page has no rows
    pub fn is_empty(&self) -> bool {
        self.page_rows.is_empty()
    }

    /// Number of rows on the served page
    pub fn len(&self) -> usize {
        self.page_rows.len()
    }

    /// Iterates over the served rows
    pub fn iter(&self) -> impl Iterator<Item = &PatientRecord> {
        self.page_rows.iter().copied()
    }
}
