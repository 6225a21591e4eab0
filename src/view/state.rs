//! User-controlled view state
//!
//! One explicit, serializable value instead of ad hoc component-local
//! variables. Every mutation happens through a named event method, and the
//! paging events validate their input before it can reach the engine.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::record::PatientStatus;

use super::errors::{ViewError, ViewResult};

/// The closed set of sortable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Id,
    Condition,
    Status,
    LastVisit,
}

impl SortField {
    /// Returns the wire name of this field
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Id => "id",
            SortField::Condition => "condition",
            SortField::Status => "status",
            SortField::LastVisit => "lastVisit",
        }
    }
}

impl FromStr for SortField {
    type Err = ViewError;

    fn from_str(s: &str) -> ViewResult<Self> {
        match s {
            "name" => Ok(SortField::Name),
            "id" => Ok(SortField::Id),
            "condition" => Ok(SortField::Condition),
            "status" => Ok(SortField::Status),
            "lastVisit" | "last-visit" => Ok(SortField::LastVisit),
            other => Err(ViewError::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Returns the opposite direction
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ViewError;

    fn from_str(s: &str) -> ViewResult<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ViewError::UnknownSortDirection(other.to_string())),
        }
    }
}

/// Status filter: everything, or a single status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(PatientStatus),
}

impl StatusFilter {
    /// Returns true if a record with the given status passes this filter
    pub fn matches(&self, status: PatientStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ViewError;

    fn from_str(s: &str) -> ViewResult<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        PatientStatus::parse(s)
            .map(StatusFilter::Only)
            .ok_or_else(|| ViewError::UnknownStatusFilter(s.to_string()))
    }
}

fn default_sort_field() -> SortField {
    SortField::LastVisit
}
fn default_sort_direction() -> SortDirection {
    SortDirection::Desc
}
fn default_page() -> usize {
    1
}
fn default_page_size() -> usize {
    10
}

/// User-controlled parameters governing one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Free-text search over name, id and condition
    #[serde(default)]
    pub search_term: String,

    /// Status predicate
    #[serde(default)]
    pub status_filter: StatusFilter,

    /// Active sort field
    #[serde(default = "default_sort_field")]
    pub sort_field: SortField,

    /// Active sort direction
    #[serde(default = "default_sort_direction")]
    pub sort_direction: SortDirection,

    /// Requested page, 1-based
    #[serde(default = "default_page")]
    pub current_page: usize,

    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            sort_field: default_sort_field(),
            sort_direction: default_sort_direction(),
            current_page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ViewState {
    /// Replaces the search term
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replaces the status filter
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Column-header activation.
    ///
    /// Activating the already-active field flips the direction; activating
    /// a different field makes it active and resets the direction to
    /// ascending. (The original dashboard's table copies disagreed on the
    /// reset direction; ascending is the fixed policy here.)
    pub fn activate_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Requests a page, rejecting indexes below 1
    pub fn set_page(&mut self, page: usize) -> ViewResult<()> {
        if page == 0 {
            return Err(ViewError::InvalidPage(page));
        }
        self.current_page = page;
        Ok(())
    }

    /// Sets the page size, rejecting zero
    pub fn set_page_size(&mut self, size: usize) -> ViewResult<()> {
        if size == 0 {
            return Err(ViewError::InvalidPageSize(size));
        }
        self.page_size = size;
        Ok(())
    }

    /// Adopts the page the paginator actually served, keeping
    /// `current_page` inside `[1, max(1, total_pages)]` after every
    /// recomputation.
    pub fn reconcile_page(&mut self, effective_page: usize) {
        self.current_page = effective_page;
    }
}
