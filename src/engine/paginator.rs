//! Page slicing with clamping
//!
//! The clamp is the whole point: when a filter shrinks the result set below
//! the previously-valid page, the paginator serves the new last page, never
//! an empty page at a stale index and never a silent reset to page 1.

use crate::record::PatientRecord;

/// One served page plus paging totals
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<'a> {
    /// Rows on the served page, in sorted order
    pub rows: Vec<&'a PatientRecord>,
    /// Total pages at this page size; 0 when the input is empty
    pub total_pages: usize,
    /// The page actually served, always in `[1, max(1, total_pages)]`
    pub effective_page: usize,
}

/// Slices sorted rows into pages
pub struct Paginator;

impl Paginator {
    /// Serves the requested page, clamping it into validity first.
    ///
    /// `page_size` must be at least 1; the view-state boundary guarantees
    /// this.
    pub fn paginate(
        rows: Vec<&PatientRecord>,
        page_size: usize,
        requested_page: usize,
    ) -> Paginated<'_> {
        let total_pages = if rows.is_empty() {
            0
        } else {
            (rows.len() + page_size - 1) / page_size
        };

        let effective_page = requested_page.clamp(1, total_pages.max(1));

        let start = (effective_page - 1) * page_size;
        let end = (start + page_size).min(rows.len());
        let page_rows = if start < rows.len() {
            rows[start..end].to_vec()
        } else {
            Vec::new()
        };

        Paginated {
            rows: page_rows,
            total_pages,
            effective_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<PatientRecord> {
        (1..=n)
            .map(|i| PatientRecord::new(format!("{:03}", i), format!("Patient {}", i)))
            .collect()
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let data = records(25);
        let rows: Vec<&PatientRecord> = data.iter().collect();

        let page = Paginator::paginate(rows, 10, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 10);
    }

    #[test]
    fn test_last_page_is_partial() {
        let data = records(25);
        let rows: Vec<&PatientRecord> = data.iter().collect();

        let page = Paginator::paginate(rows, 10, 3);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.effective_page, 3);
        assert_eq!(page.rows[0].id, "021");
        assert_eq!(page.rows[4].id, "025");
    }

    #[test]
    fn test_empty_input_gives_zero_pages_and_page_one() {
        let page = Paginator::paginate(Vec::new(), 10, 4);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.effective_page, 1);
    }

    #[test]
    fn test_overshooting_page_clamps_to_last() {
        let data = records(8);
        let rows: Vec<&PatientRecord> = data.iter().collect();

        let page = Paginator::paginate(rows, 10, 3);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.effective_page, 1);
        assert_eq!(page.rows.len(), 8);
    }

    #[test]
    fn test_page_zero_clamps_to_first() {
        let data = records(5);
        let rows: Vec<&PatientRecord> = data.iter().collect();

        let page = Paginator::paginate(rows, 10, 0);
        assert_eq!(page.effective_page, 1);
        assert_eq!(page.rows.len(), 5);
    }

    #[test]
    fn test_exact_multiple_has_no_ghost_page() {
        let data = records(20);
        let rows: Vec<&PatientRecord> = data.iter().collect();

        let page = Paginator::paginate(rows, 10, 5);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.effective_page, 2);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.rows[0].id, "011");
    }

    #[test]
    fn test_pages_concatenate_to_full_sequence() {
        let data = records(23);
        let all: Vec<&PatientRecord> = data.iter().collect();

        let total_pages = Paginator::paginate(all.clone(), 7, 1).total_pages;
        assert_eq!(total_pages, 4);

        let mut rebuilt: Vec<&PatientRecord> = Vec::new();
        for page_no in 1..=total_pages {
            let page = Paginator::paginate(all.clone(), 7, page_no);
            assert_eq!(page.effective_page, page_no);
            rebuilt.extend(page.rows);
        }
        assert_eq!(rebuilt, all);
    }
}
