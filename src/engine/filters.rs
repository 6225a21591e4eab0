//! Record filtering
//!
//! Status predicate AND free-text search, nothing else. The search is an
//! ASCII-case-insensitive substring match over name, id and condition; no
//! tokenizing, no fuzzy matching. Output preserves input order, which the
//! sorter's stability contract depends on.

use crate::record::PatientRecord;
use crate::view::StatusFilter;

/// Evaluates the filter predicates against records
pub struct RecordFilter;

impl RecordFilter {
    /// Returns the records matching both predicates, in input order
    pub fn apply<'a>(
        records: &'a [PatientRecord],
        search_term: &str,
        status_filter: StatusFilter,
    ) -> Vec<&'a PatientRecord> {
        let needle = search_term.to_ascii_lowercase();
        records
            .iter()
            .filter(|record| {
                status_filter.matches(record.status) && Self::matches_search(record, &needle)
            })
            .collect()
    }

    /// Checks a single record against both predicates
    pub fn matches(record: &PatientRecord, search_term: &str, status_filter: StatusFilter) -> bool {
        status_filter.matches(record.status)
            && Self::matches_search(record, &search_term.to_ascii_lowercase())
    }

    /// Substring match over the searchable fields; `needle` must already be
    /// lowercased
    fn matches_search(record: &PatientRecord, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        Self::contains_fold(&record.name, needle)
            || Self::contains_fold(&record.id, needle)
            || Self::contains_fold(&record.condition, needle)
    }

    fn contains_fold(haystack: &str, needle_lower: &str) -> bool {
        haystack.to_ascii_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PatientStatus;

    fn sample_records() -> Vec<PatientRecord> {
        vec![
            PatientRecord::new("1", "Sarah Johnson")
                .with_condition("Hypertension")
                .with_status(PatientStatus::Stable),
            PatientRecord::new("2", "Michael Chen")
                .with_condition("Diabetes Type 2")
                .with_status(PatientStatus::Critical),
            PatientRecord::new("3", "Emily Davis")
                .with_condition("Post-surgery Recovery")
                .with_status(PatientStatus::Recovering),
        ]
    }

    #[test]
    fn test_empty_term_and_all_filter_keep_everything() {
        let records = sample_records();
        let kept = RecordFilter::apply(&records, "", StatusFilter::All);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample_records();

        let kept = RecordFilter::apply(&records, "JOHN", StatusFilter::All);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Sarah Johnson");

        let kept = RecordFilter::apply(&records, "john", StatusFilter::All);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_search_covers_name_id_and_condition_only() {
        let records = vec![
            PatientRecord::new("alpha-7", "Sarah Johnson").with_gender("Female"),
            PatientRecord::new("2", "Michael Chen").with_condition("alpha thalassemia"),
            PatientRecord::new("3", "Emily Davis").with_gender("alpha"),
        ];

        // Matches id on the first, condition on the second; gender is not
        // a searchable field.
        let kept = RecordFilter::apply(&records, "alpha", StatusFilter::All);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, "alpha-7");
        assert_eq!(kept[1].id, "2");
    }

    #[test]
    fn test_status_filter_narrows() {
        let records = sample_records();

        let kept = RecordFilter::apply(
            &records,
            "",
            StatusFilter::Only(PatientStatus::Critical),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Michael Chen");
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let records = sample_records();

        // "e" matches all three names, but only one is Critical.
        let kept = RecordFilter::apply(&records, "e", StatusFilter::Only(PatientStatus::Critical));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Michael Chen");

        // Term matches nothing with that status.
        let kept =
            RecordFilter::apply(&records, "davis", StatusFilter::Only(PatientStatus::Critical));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_single_record_predicate() {
        let record = PatientRecord::new("7", "Sarah Johnson")
            .with_condition("Hypertension")
            .with_status(PatientStatus::Stable);

        assert!(RecordFilter::matches(&record, "HYPER", StatusFilter::All));
        assert!(!RecordFilter::matches(
            &record,
            "HYPER",
            StatusFilter::Only(PatientStatus::Critical)
        ));
        assert!(!RecordFilter::matches(&record, "chen", StatusFilter::All));
    }

    #[test]
    fn test_input_order_preserved() {
        let records = sample_records();
        let kept = RecordFilter::apply(&records, "e", StatusFilter::All);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_records();
        let once = RecordFilter::apply(&records, "e", StatusFilter::All);

        let owned: Vec<PatientRecord> = once.iter().map(|r| (*r).clone()).collect();
        let twice = RecordFilter::apply(&owned, "e", StatusFilter::All);

        let first: Vec<&str> = once.iter().map(|r| r.id.as_str()).collect();
        let second: Vec<&str> = twice.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(first, second);
    }
}
