//! geoprobe - Bulk validation tool for geocoding providers
//!
//! This crate feeds addresses from a tabular input file to a geocoding
//! provider, classifies each outcome, and produces a per-address report plus
//! a run summary.

// Core modules
pub mod classifier;
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod client;
pub mod input;
pub mod report;
pub mod resolver;
pub mod runner;
pub mod summary;

// Test support
pub mod testing;

// Re-export main types for convenience
pub use classifier::{classify, ErrorLabel};
pub use client::{GeocodeClient, HttpGeocodeClient};
pub use config::{GeoProbeConfig, ProviderConfig};
pub use error::{GeoProbeError, Result};
pub use resolver::Resolver;
pub use runner::{BatchRunner, ProgressTracker, RunReport};
pub use types::{AbsenceReason, Candidate, ReportRow, ResolutionOutcome, RunSummary, TestOutcome};

use std::path::Path;

/// Run a whole batch from an input file to an output report with the given
/// client. Returns the finished run for callers that want the summary.
pub fn run_batch<C, I, O>(client: C, input_path: I, output_path: O) -> Result<RunReport>
where
    C: GeocodeClient,
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let addresses = input::load_addresses(input_path)?;
    let report = BatchRunner::new(client).run(addresses);
    report::write_report(output_path, &report.rows)?;
    Ok(report)
}
