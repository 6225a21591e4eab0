//! Snapshot loader
//!
//! Reads a JSON array of patient records from disk, enforces the
//! id-uniqueness invariant and reports data-quality findings. A malformed
//! `lastVisit` date never rejects a record; it is diagnosed once here and
//! sorts as the minimum date later.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::observability::Logger;
use crate::record::PatientRecord;

use super::errors::{SourceError, SourceResult};

/// Loads and validates record snapshots
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Loads a snapshot file.
    pub fn load(path: &Path) -> SourceResult<Vec<PatientRecord>> {
        let content = fs::read_to_string(path).map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parses snapshot content.
    pub fn parse(content: &str) -> SourceResult<Vec<PatientRecord>> {
        let records: Vec<PatientRecord> =
            serde_json::from_str(content).map_err(|e| SourceError::InvalidJson(e.to_string()))?;

        Self::validate(&records)?;
        Self::report_data_quality(&records);

        Ok(records)
    }

    /// Enforces id uniqueness across the snapshot
    fn validate(records: &[PatientRecord]) -> SourceResult<()> {
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.id.as_str()) {
                return Err(SourceError::DuplicateId(record.id.clone()));
            }
        }
        Ok(())
    }

    /// Emits one WARN line per record with an unparsable last-visit date
    fn report_data_quality(records: &[PatientRecord]) {
        for record in records {
            if record.last_visit_date().is_none() {
                Logger::warn(
                    "record_date_unparsable",
                    &[("id", &record.id), ("lastVisit", &record.last_visit)],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"[
        {
            "id": "1",
            "name": "Sarah Johnson",
            "age": 45,
            "gender": "Female",
            "condition": "Hypertension",
            "status": "Stable",
            "lastVisit": "2024-03-10",
            "nextAppointment": "2024-03-25"
        },
        {
            "id": "2",
            "name": "Michael Chen",
            "age": 62,
            "gender": "Male",
            "condition": "Diabetes Type 2",
            "status": "Critical",
            "lastVisit": "2024-03-15"
        }
    ]"#;

    #[test]
    fn test_parse_snapshot() {
        let records = SnapshotLoader::parse(SNAPSHOT).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Sarah Johnson");
        assert_eq!(records[1].next_appointment, None);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let content = r#"[
            {"id": "1", "name": "A", "age": 1, "gender": "", "condition": "", "status": "Stable", "lastVisit": "2024-01-01"},
            {"id": "1", "name": "B", "age": 2, "gender": "", "condition": "", "status": "Stable", "lastVisit": "2024-01-02"}
        ]"#;

        let err = SnapshotLoader::parse(content).unwrap_err();
        assert_eq!(err, SourceError::DuplicateId("1".to_string()));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = SnapshotLoader::parse("{not json").unwrap_err();
        assert!(matches!(err, SourceError::InvalidJson(_)));
    }

    #[test]
    fn test_malformed_date_does_not_reject() {
        let content = r#"[
            {"id": "1", "name": "A", "age": 1, "gender": "", "condition": "", "status": "Stable", "lastVisit": "soon"}
        ]"#;

        let records = SnapshotLoader::parse(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].last_visit_date(), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let records = SnapshotLoader::load(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SnapshotLoader::load(Path::new("/no/such/snapshot.json")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
