//! Patient record structures
//!
//! Field names on the wire are camelCase (`lastVisit`, `nextAppointment`),
//! matching the snapshot format produced by the dashboard's data source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by well-formed snapshot data
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clinical status of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatientStatus {
    Stable,
    Critical,
    Recovering,
}

impl PatientStatus {
    /// Returns the wire label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Stable => "Stable",
            PatientStatus::Critical => "Critical",
            PatientStatus::Recovering => "Recovering",
        }
    }

    /// Parses a status label, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stable" => Some(PatientStatus::Stable),
            "critical" => Some(PatientStatus::Critical),
            "recovering" => Some(PatientStatus::Recovering),
            _ => None,
        }
    }

    /// All declared statuses, in wire-label order
    pub fn all() -> [PatientStatus; 3] {
        [
            PatientStatus::Stable,
            PatientStatus::Critical,
            PatientStatus::Recovering,
        ]
    }
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single patient row as supplied by the data source
///
/// `last_visit` is kept as the raw wire string: a malformed date must not
/// reject the record (it sorts as the minimum possible date instead, see
/// the sorter). Use [`PatientRecord::last_visit_date`] for the parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Unique record id
    pub id: String,
    /// Full patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Free-text gender
    pub gender: String,
    /// Free-text condition summary
    pub condition: String,
    /// Clinical status
    pub status: PatientStatus,
    /// Last visit date, raw `YYYY-MM-DD` string
    pub last_visit: String,
    /// Avatar/image reference
    #[serde(default)]
    pub image: String,
    /// Next scheduled appointment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_appointment: Option<String>,
}

impl PatientRecord {
    /// Creates a record with the given id and name; remaining fields take
    /// neutral defaults and can be set with the `with_*` builders.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: 0,
            gender: String::new(),
            condition: String::new(),
            status: PatientStatus::Stable,
            last_visit: String::new(),
            image: String::new(),
            next_appointment: None,
        }
    }

    /// Sets the age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the gender
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the condition
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: PatientStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the last visit date string
    pub fn with_last_visit(mut self, last_visit: impl Into<String>) -> Self {
        self.last_visit = last_visit.into();
        self
    }

    /// Sets the next appointment date string
    pub fn with_next_appointment(mut self, date: impl Into<String>) -> Self {
        self.next_appointment = Some(date.into());
        self
    }

    /// Parses `last_visit` as a calendar date
    ///
    /// Returns `None` for malformed input; callers treat `None` as the
    /// minimum possible date rather than an error.
    pub fn last_visit_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.last_visit, DATE_FORMAT).ok()
    }
}
