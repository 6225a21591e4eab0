//! Pipeline orchestrator
//!
//! Filter before sort so the totals count the whole filtered set; sort
//! before paginate so row order within a page is correct. No hidden state,
//! no I/O, no incremental recomputation: every view-state change runs the
//! whole pipeline afresh.

use crate::record::PatientRecord;
use crate::view::ViewState;

use super::filters::RecordFilter;
use super::paginator::Paginator;
use super::result::QueryOutput;
use super::sorter::RecordSorter;

/// Composes filter -> sort -> paginate into one pure function
pub struct QueryEngine;

impl QueryEngine {
    /// Runs one query over a read-only snapshot.
    ///
    /// Assumes a well-formed `ViewState` (the mutation boundary rejects
    /// zero page sizes and page indexes before they get here).
    pub fn run<'a>(records: &'a [PatientRecord], view: &ViewState) -> QueryOutput<'a> {
        let mut rows = RecordFilter::apply(records, &view.search_term, view.status_filter);
        let total_count = rows.len();

        RecordSorter::sort(&mut rows, view.sort_field, view.sort_direction);

        let page = Paginator::paginate(rows, view.page_size, view.current_page);

        QueryOutput {
            page_rows: page.rows,
            total_count,
            total_pages: page.total_pages,
            effective_page: page.effective_page,
        }
    }
}
