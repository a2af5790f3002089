//! Mock geocoding client for tests.

use crate::client::GeocodeClient;
use crate::error::{GeoProbeError, Result};
use crate::types::Candidate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

type ErrorFactory = Box<dyn Fn() -> GeoProbeError + Send + Sync>;

/// In-memory [`GeocodeClient`] with scripted answers per address.
///
/// Unknown addresses answer with an empty candidate list. `with_failure`
/// makes every call fail; `with_error` fails a single address with a custom
/// error.
pub struct MockGeocodeClient {
    responses: HashMap<String, Vec<Candidate>>,
    errors: HashMap<String, ErrorFactory>,
    should_fail: bool,
    failure_message: String,
    calls: AtomicUsize,
}

impl MockGeocodeClient {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            errors: HashMap::new(),
            should_fail: false,
            failure_message: "Mock failure".to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_candidates<S: Into<String>>(mut self, address: S, candidates: Vec<Candidate>) -> Self {
        self.responses.insert(address.into(), candidates);
        self
    }

    pub fn with_failure<S: Into<String>>(mut self, message: S) -> Self {
        self.should_fail = true;
        self.failure_message = message.into();
        self
    }

    pub fn with_error<S, F>(mut self, address: S, factory: F) -> Self
    where
        S: Into<String>,
        F: Fn() -> GeoProbeError + Send + Sync + 'static,
    {
        self.errors.insert(address.into(), Box::new(factory));
        self
    }

    /// Number of `geolocate` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient for MockGeocodeClient {
    fn geolocate(&self, address: &str) -> Result<Vec<Candidate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            return Err(GeoProbeError::provider(self.failure_message.clone()));
        }

        if let Some(factory) = self.errors.get(address) {
            return Err(factory());
        }

        Ok(self.responses.get(address).cloned().unwrap_or_default())
    }
}
