//! Batch runner: sequential resolution of a cleaned address list into report
//! rows.

use crate::classifier::classify;
use crate::client::GeocodeClient;
use crate::input::clean_addresses;
use crate::resolver::Resolver;
use crate::types::{ReportRow, ResolutionOutcome, RunSummary, TestOutcome};
use chrono::Local;
use std::time::Instant;

/// Progress tracking for a batch run
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    pub total: usize,
    pub completed: usize,
    pub passed: usize,
    pub partial: usize,
    pub failed: usize,
    pub start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            passed: 0,
            partial: 0,
            failed: 0,
            start_time: Instant::now(),
        }
    }

    pub fn row_completed(&mut self, outcome: TestOutcome) {
        self.completed += 1;
        match outcome {
            TestOutcome::Pass => self.passed += 1,
            TestOutcome::Partial => self.partial += 1,
            TestOutcome::Fail => self.failed += 1,
        }
    }

    pub fn progress_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.completed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn elapsed_time(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

/// Callback invoked after every processed address.
pub type ProgressCallback = Box<dyn Fn(&ProgressTracker) + Send + Sync>;

/// The finished run: rows in processing order plus the derived summary.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub rows: Vec<ReportRow>,
    pub summary: RunSummary,
}

/// Sequential batch runner over a geocoding provider.
///
/// Strictly one address at a time; every per-address problem is contained in
/// that address's row, so `run` itself cannot fail.
pub struct BatchRunner<C: GeocodeClient> {
    resolver: Resolver<C>,
}

impl<C: GeocodeClient> BatchRunner<C> {
    pub fn new(client: C) -> Self {
        Self {
            resolver: Resolver::new(client),
        }
    }

    /// Process a raw address list and produce the run report.
    ///
    /// Blank addresses are dropped and duplicates removed (first occurrence
    /// wins) before any provider call; test case ids are assigned in the
    /// post-dedup order.
    pub fn run(&self, addresses: Vec<String>) -> RunReport {
        self.run_with_progress(addresses, None)
    }

    /// Same as [`run`](Self::run), reporting progress after each address.
    pub fn run_with_progress(
        &self,
        addresses: Vec<String>,
        progress_callback: Option<ProgressCallback>,
    ) -> RunReport {
        let addresses = clean_addresses(addresses);
        let run_id = format!("RUN_{}", Local::now().format("%Y%m%d_%H%M"));

        let mut progress = ProgressTracker::new(addresses.len());
        if let Some(ref callback) = progress_callback {
            callback(&progress);
        }

        let mut rows = Vec::with_capacity(addresses.len());
        for (index, address) in addresses.into_iter().enumerate() {
            let test_case_id = format!("TC_{:04}", index + 1);
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

            let started = Instant::now();
            let outcome = self.resolver.resolve(&address);
            let duration_secs = round_to_millis(started.elapsed().as_secs_f64());

            let row = build_row(test_case_id, timestamp, duration_secs, address, outcome);

            progress.row_completed(row.outcome);
            if let Some(ref callback) = progress_callback {
                callback(&progress);
            }

            rows.push(row);
        }

        let summary = RunSummary::from_rows(run_id, &rows);
        RunReport { rows, summary }
    }
}

/// Assemble one immutable report row from a timed resolution outcome.
fn build_row(
    test_case_id: String,
    timestamp: String,
    duration_secs: f64,
    input_address: String,
    outcome: ResolutionOutcome,
) -> ReportRow {
    let candidate = outcome.candidate();

    let missing = match candidate {
        Some(candidate) => candidate.missing_fields(),
        None => vec![
            crate::types::FIELD_ADDRESS,
            crate::types::FIELD_LAT,
            crate::types::FIELD_LOG,
            crate::types::FIELD_PCODE,
        ],
    };
    let missing_fields = if missing.is_empty() {
        "None".to_string()
    } else {
        missing.join(", ")
    };

    let completeness = match candidate {
        Some(candidate) if candidate.is_complete() => "All fields present".to_string(),
        Some(candidate) => format!("Missing: {}", candidate.empty_fields().join(", ")),
        None => "Invalid or empty result".to_string(),
    };

    let failure_description = outcome.description().map(str::to_string);
    let test_outcome = match (&candidate, &failure_description) {
        (Some(candidate), None) if candidate.is_complete() => TestOutcome::Pass,
        (_, Some(_)) => TestOutcome::Fail,
        _ => TestOutcome::Partial,
    };

    let error_type = classify(&outcome).to_string();

    ReportRow {
        test_case_id,
        timestamp,
        duration_secs,
        input_address,
        returned_address: candidate.and_then(|c| c.address.clone()),
        latitude: candidate.and_then(|c| c.latitude),
        longitude: candidate.and_then(|c| c.longitude),
        pcode: candidate.and_then(|c| c.pcode.clone()),
        completeness,
        missing_fields,
        error_type,
        failure_description,
        outcome: test_outcome,
        notes: String::new(),
    }
}

fn round_to_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockGeocodeClient;
    use crate::types::Candidate;

    fn full_candidate() -> Candidate {
        Candidate {
            address: Some("X".to_string()),
            pcode: Some("11000".to_string()),
            latitude: Some(16.8),
            longitude: Some(96.1),
        }
    }

    #[test]
    fn test_one_row_per_distinct_address() {
        let client = MockGeocodeClient::new()
            .with_candidates("123 Main St", vec![full_candidate()]);
        let runner = BatchRunner::new(client);

        let report = runner.run(vec![
            "123 Main St".to_string(),
            "123 Main St".to_string(),
            "".to_string(),
        ]);

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].test_case_id, "TC_0001");
        assert_eq!(report.rows[0].input_address, "123 Main St");
    }

    #[test]
    fn test_full_candidate_passes_sanity_check() {
        let client = MockGeocodeClient::new().with_candidates("X", vec![full_candidate()]);
        let runner = BatchRunner::new(client);

        let report = runner.run(vec!["X".to_string()]);
        let row = &report.rows[0];

        assert_eq!(row.completeness, "All fields present");
        assert_eq!(row.missing_fields, "None");
        assert_eq!(row.error_type, "No error");
        assert_eq!(row.outcome, TestOutcome::Pass);
        assert!(row.failure_description.is_none());
        assert_eq!(row.returned_address.as_deref(), Some("X"));
        assert_eq!(row.pcode.as_deref(), Some("11000"));
    }

    #[test]
    fn test_missing_pcode_needs_review() {
        let candidate = Candidate {
            pcode: None,
            ..full_candidate()
        };
        let client = MockGeocodeClient::new().with_candidates("X", vec![candidate]);
        let runner = BatchRunner::new(client);

        let row = &runner.run(vec!["X".to_string()]).rows[0];
        assert_eq!(row.completeness, "Missing: pcode");
        assert_eq!(row.missing_fields, "pcode");
        assert_eq!(row.error_type, "Missing fields");
        assert_eq!(row.outcome, TestOutcome::Partial);
        assert!(row.failure_description.is_none());
    }

    #[test]
    fn test_no_result_row_fails() {
        let runner = BatchRunner::new(MockGeocodeClient::new());

        let row = &runner.run(vec!["unknown".to_string()]).rows[0];
        assert_eq!(row.completeness, "Invalid or empty result");
        assert_eq!(row.missing_fields, "address, lat, log, pcode");
        assert_eq!(row.failure_description.as_deref(), Some("No result"));
        assert_eq!(row.outcome, TestOutcome::Fail);
        assert!(row.returned_address.is_none());
    }

    #[test]
    fn test_provider_failure_is_contained_in_row() {
        let client = MockGeocodeClient::new().with_failure("ConnectionError: timeout");
        let runner = BatchRunner::new(client);

        let report = runner.run(vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(report.rows.len(), 2);

        for row in &report.rows {
            assert_eq!(row.error_type, "ConnectionError");
            assert_eq!(row.outcome, TestOutcome::Fail);
            assert!(row
                .failure_description
                .as_deref()
                .unwrap()
                .contains("ConnectionError: timeout"));
        }
        assert_eq!(report.summary.failed, 2);
    }

    #[test]
    fn test_rows_keep_first_occurrence_order() {
        let client = MockGeocodeClient::new();
        let runner = BatchRunner::new(client);

        let report = runner.run(vec![
            "B".to_string(),
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
        ]);

        let inputs: Vec<&str> = report.rows.iter().map(|r| r.input_address.as_str()).collect();
        assert_eq!(inputs, vec!["B", "A", "C"]);
        assert_eq!(report.rows[2].test_case_id, "TC_0003");
    }

    #[test]
    fn test_progress_callback_sees_every_row() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_seen = Arc::clone(&calls);

        let runner = BatchRunner::new(MockGeocodeClient::new());
        runner.run_with_progress(
            vec!["A".to_string(), "B".to_string()],
            Some(Box::new(move |tracker| {
                calls_seen.fetch_add(1, Ordering::SeqCst);
                assert!(tracker.total == 2);
            })),
        );

        // One initial call plus one per row.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_summary_matches_rows() {
        let client = MockGeocodeClient::new()
            .with_candidates("pass", vec![full_candidate()])
            .with_candidates(
                "partial",
                vec![Candidate {
                    latitude: None,
                    ..full_candidate()
                }],
            );
        let runner = BatchRunner::new(client);

        let report = runner.run(vec![
            "pass".to_string(),
            "partial".to_string(),
            "fail".to_string(),
        ]);

        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.partial, 1);
        assert_eq!(report.summary.failed, 1);
        assert!(report.summary.run_id.starts_with("RUN_"));
    }

    #[test]
    fn test_round_to_millis() {
        assert_eq!(round_to_millis(0.1234567), 0.123);
        assert_eq!(round_to_millis(0.9996), 1.0);
        assert_eq!(round_to_millis(0.0), 0.0);
    }
}
