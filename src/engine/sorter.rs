//! Stable sorting over the closed set of sortable fields
//!
//! One comparator per field; descending order flips the comparator result,
//! never the final sequence, so ties keep their input order in both
//! directions.

use std::cmp::Ordering;

use crate::record::PatientRecord;
use crate::view::{SortDirection, SortField};

/// Sorts filtered rows
pub struct RecordSorter;

impl RecordSorter {
    /// Sorts rows by the given field and direction.
    ///
    /// The sort is stable: rows comparing equal keep their relative input
    /// order.
    pub fn sort(rows: &mut [&PatientRecord], field: SortField, direction: SortDirection) {
        rows.sort_by(|a, b| {
            let ordering = Self::compare(a, b, field);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    /// Ascending comparator for a single field.
    ///
    /// String fields compare as case-sensitive lexicographic strings;
    /// `lastVisit` compares as a calendar date, with malformed dates taking
    /// the minimum possible value (`None` orders before any parsed date).
    fn compare(a: &PatientRecord, b: &PatientRecord, field: SortField) -> Ordering {
        match field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Id => a.id.cmp(&b.id),
            SortField::Condition => a.condition.cmp(&b.condition),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
            SortField::LastVisit => a.last_visit_date().cmp(&b.last_visit_date()),
        }
    }
}
