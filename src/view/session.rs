//! Presentation-layer table session
//!
//! Owns the snapshot and the `ViewState` for one mounted table view. Every
//! event method mutates the state, runs the engine once, adopts the page
//! the paginator actually served, and hands back an owned page for
//! rendering. Discard the session when the view unmounts.

use crate::engine::QueryEngine;
use crate::record::PatientRecord;

use super::errors::ViewResult;
use super::state::{SortField, StatusFilter, ViewState};

/// Owned copy of one served page, ready for the rendering layer
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    /// Rows on the served page, in sorted order
    pub rows: Vec<PatientRecord>,
    /// Records matching the filter, across all pages
    pub total_count: usize,
    /// Total pages at the current page size; 0 when nothing matched
    pub total_pages: usize,
    /// The page actually served after clamping
    pub effective_page: usize,
}

/// One table view's snapshot plus view state
#[derive(Debug, Clone)]
pub struct TableSession {
    records: Vec<PatientRecord>,
    view: ViewState,
}

impl TableSession {
    /// Creates a session over a snapshot with default view state
    pub fn new(records: Vec<PatientRecord>) -> Self {
        Self {
            records,
            view: ViewState::default(),
        }
    }

    /// Creates a session with an explicit initial view state
    pub fn with_view(records: Vec<PatientRecord>, view: ViewState) -> Self {
        Self { records, view }
    }

    /// Current view state
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The read-only snapshot
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Replaces the snapshot (an external fetch completing) and recomputes.
    ///
    /// Collaborators supply a whole new snapshot; the session never lets a
    /// record set change mid-query.
    pub fn replace_snapshot(&mut self, records: Vec<PatientRecord>) -> TablePage {
        self.records = records;
        self.refresh()
    }

    /// Search keystroke
    pub fn set_search_term(&mut self, term: impl Into<String>) -> TablePage {
        self.view.set_search_term(term);
        self.refresh()
    }

    /// Status filter selection
    pub fn set_status_filter(&mut self, filter: StatusFilter) -> TablePage {
        self.view.set_status_filter(filter);
        self.refresh()
    }

    /// Column-header activation
    pub fn activate_sort(&mut self, field: SortField) -> TablePage {
        self.view.activate_sort(field);
        self.refresh()
    }

    /// Page-button click; rejects page 0 at the boundary
    pub fn set_page(&mut self, page: usize) -> ViewResult<TablePage> {
        self.view.set_page(page)?;
        Ok(self.refresh())
    }

    /// Page-size selection; rejects size 0 at the boundary
    pub fn set_page_size(&mut self, size: usize) -> ViewResult<TablePage> {
        self.view.set_page_size(size)?;
        Ok(self.refresh())
    }

    /// Runs the pipeline against the current state and reconciles the page
    pub fn refresh(&mut self) -> TablePage {
        let output = QueryEngine::run(&self.records, &self.view);
        let page = TablePage {
            rows: output.page_rows.iter().map(|r| (*r).clone()).collect(),
            total_count: output.total_count,
            total_pages: output.total_pages,
            effective_page: output.effective_page,
        };
        self.view.reconcile_page(page.effective_page);
        page
    }
}
