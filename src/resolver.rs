//! Single-address resolution: one provider call normalized into a uniform
//! outcome.

use crate::client::GeocodeClient;
use crate::types::{AbsenceReason, ResolutionOutcome};

/// Wraps a [`GeocodeClient`] and converts every possible shape of answer —
/// candidates, nothing, or an error — into a [`ResolutionOutcome`]. No
/// provider failure ever escapes to the caller; the batch runner depends on
/// that containment.
pub struct Resolver<C: GeocodeClient> {
    client: C,
}

impl<C: GeocodeClient> Resolver<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Resolve one address. Blank input short-circuits without touching the
    /// provider.
    pub fn resolve(&self, address: &str) -> ResolutionOutcome {
        if address.trim().is_empty() {
            return ResolutionOutcome::Absent(AbsenceReason::EmptyInput);
        }

        match self.client.geolocate(address) {
            Err(error) => ResolutionOutcome::Absent(AbsenceReason::Failure(error.to_string())),
            Ok(candidates) => match candidates.into_iter().next() {
                None => ResolutionOutcome::Absent(AbsenceReason::NoResult),
                Some(first) => ResolutionOutcome::Resolved(first),
            },
        }
    }
}
