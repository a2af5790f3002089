//! Core data model: provider candidates, resolution outcomes, and report rows.

use serde::{Deserialize, Serialize};

/// Field keys used in the report's missing-field vocabulary. `log` is the
/// longitude key inherited from the provider's response schema.
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_LAT: &str = "lat";
pub const FIELD_LOG: &str = "log";
pub const FIELD_PCODE: &str = "pcode";

/// A single location candidate returned by the geocoding provider.
///
/// Fields absent from the provider response stay `None`; they are never
/// defaulted to zero or empty strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    pub address: Option<String>,
    pub pcode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Candidate {
    /// Field keys absent from this candidate, in report order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.address.is_none() {
            missing.push(FIELD_ADDRESS);
        }
        if self.latitude.is_none() {
            missing.push(FIELD_LAT);
        }
        if self.longitude.is_none() {
            missing.push(FIELD_LOG);
        }
        if self.pcode.is_none() {
            missing.push(FIELD_PCODE);
        }
        missing
    }

    /// Field keys that are absent or blank, in completeness-label order.
    ///
    /// Stricter than [`missing_fields`](Self::missing_fields): a present but
    /// empty string still counts. Drives the completeness label and the
    /// pass/partial decision.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, |v| v.trim().is_empty());

        let mut empty = Vec::new();
        if self.latitude.is_none() {
            empty.push(FIELD_LAT);
        }
        if self.longitude.is_none() {
            empty.push(FIELD_LOG);
        }
        if blank(&self.pcode) {
            empty.push(FIELD_PCODE);
        }
        if blank(&self.address) {
            empty.push(FIELD_ADDRESS);
        }
        empty
    }

    /// All four fields present and non-blank.
    pub fn is_complete(&self) -> bool {
        self.empty_fields().is_empty()
    }
}

/// Why a resolution produced no candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum AbsenceReason {
    /// The input address was empty; the provider was never invoked.
    EmptyInput,
    /// The provider answered with no candidates.
    NoResult,
    /// The provider call failed; carries the failure description.
    Failure(String),
}

impl AbsenceReason {
    /// The description recorded in the report's exception column.
    pub fn description(&self) -> &str {
        match self {
            Self::EmptyInput => "Empty input",
            Self::NoResult => "No result",
            Self::Failure(message) => message,
        }
    }
}

/// The uniform result of resolving one address: either a candidate (possibly
/// with missing fields) or a reasoned absence. Adapter failures, empty inputs,
/// and empty result sets all land on the `Absent` side — callers never see a
/// raised error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    Resolved(Candidate),
    Absent(AbsenceReason),
}

impl ResolutionOutcome {
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Self::Resolved(candidate) => Some(candidate),
            Self::Absent(_) => None,
        }
    }

    /// The failure/absence description, if any. `None` only for resolved
    /// outcomes.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Resolved(_) => None,
            Self::Absent(reason) => Some(reason.description()),
        }
    }

    /// True only for provider failures, not for empty input or empty results.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Absent(AbsenceReason::Failure(_)))
    }
}

/// Pass/fail/partial verdict for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestOutcome {
    #[serde(rename = "Sanity check: Pass")]
    Pass,
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "⚠️ Partial - Needs Review")]
    Partial,
}

impl std::fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pass => "Sanity check: Pass",
            Self::Fail => "Fail",
            Self::Partial => "⚠️ Partial - Needs Review",
        };
        write!(f, "{label}")
    }
}

/// One report row per processed address. Built once by the runner, never
/// mutated afterwards. Column names match the report schema exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Test Case ID")]
    pub test_case_id: String,
    #[serde(rename = "DateTime")]
    pub timestamp: String,
    #[serde(rename = "Duration (sec)")]
    pub duration_secs: f64,
    #[serde(rename = "Input Address")]
    pub input_address: String,
    #[serde(rename = "Actual Returned Address")]
    pub returned_address: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "PCode")]
    pub pcode: Option<String>,
    #[serde(rename = "Result Format OK?")]
    pub completeness: String,
    #[serde(rename = "Missing Fields")]
    pub missing_fields: String,
    #[serde(rename = "Error Type (if any)")]
    pub error_type: String,
    #[serde(rename = "Exception/Traceback")]
    pub failure_description: Option<String>,
    #[serde(rename = "Test Outcome")]
    pub outcome: TestOutcome,
    #[serde(rename = "Notes")]
    pub notes: String,
}

/// Aggregate view of a finished run, derived from the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub run_id: String,
    pub total: usize,
    pub passed: usize,
    pub partial: usize,
    pub failed: usize,
    pub total_duration_secs: f64,
}

impl RunSummary {
    pub fn from_rows(run_id: String, rows: &[ReportRow]) -> Self {
        let mut summary = Self {
            run_id,
            total: rows.len(),
            passed: 0,
            partial: 0,
            failed: 0,
            total_duration_secs: 0.0,
        };

        for row in rows {
            match row.outcome {
                TestOutcome::Pass => summary.passed += 1,
                TestOutcome::Partial => summary.partial += 1,
                TestOutcome::Fail => summary.failed += 1,
            }
            summary.total_duration_secs += row.duration_secs;
        }

        summary
    }

    pub fn average_duration_secs(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.total_duration_secs / self.total as f64
        }
    }
}
