//! Geocoding provider client: the trait seam plus the blocking HTTP
//! implementation.

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::types::Candidate;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Trait for geocoding provider clients.
///
/// An error return means the provider call itself failed (network, HTTP
/// status, bad payload transport). A provider that answers but knows nothing
/// about the address returns `Ok(vec![])`.
pub trait GeocodeClient {
    /// Look up an address and return candidate locations, best match first.
    fn geolocate(&self, address: &str) -> Result<Vec<Candidate>>;
}

/// Blocking HTTP client for JSON geocoding endpoints.
///
/// Sends `GET <endpoint>?q=<address>` and expects a JSON array of candidate
/// objects. Payloads of any other shape count as an empty result set, not as
/// a failure.
pub struct HttpGeocodeClient {
    endpoint: Url,
    http: reqwest::blocking::Client,
}

impl HttpGeocodeClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { endpoint, http })
    }

    fn search_url(&self, address: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", address);
        url
    }
}

impl GeocodeClient for HttpGeocodeClient {
    fn geolocate(&self, address: &str) -> Result<Vec<Candidate>> {
        let response = self
            .http
            .get(self.search_url(address))
            .send()?
            .error_for_status()?;

        let payload: Value = response.json()?;
        Ok(candidates_from_payload(&payload))
    }
}

/// Project a provider payload into candidates. Only the four tracked fields
/// are kept; everything else in the response is ignored.
pub fn candidates_from_payload(payload: &Value) -> Vec<Candidate> {
    match payload {
        Value::Array(items) => items.iter().filter_map(candidate_from_value).collect(),
        _ => Vec::new(),
    }
}

fn candidate_from_value(value: &Value) -> Option<Candidate> {
    let object = value.as_object()?;

    Some(Candidate {
        address: string_field(object.get("address")),
        pcode: string_field(object.get("pcode")),
        latitude: numeric_field(object.get("latitude")),
        longitude: numeric_field(object.get("longitude")),
    })
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Providers return coordinates as JSON numbers or as numeric strings;
/// accept both.
fn numeric_field(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_payload_projects_candidates() {
        let payload = json!([
            {"address": "X", "pcode": "11000", "latitude": 16.8, "longitude": 96.1},
            {"address": "Y"}
        ]);

        let candidates = candidates_from_payload(&payload);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].latitude, Some(16.8));
        assert_eq!(candidates[1].address.as_deref(), Some("Y"));
        assert!(candidates[1].pcode.is_none());
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        assert!(candidates_from_payload(&json!({"error": "nope"})).is_empty());
        assert!(candidates_from_payload(&json!("nothing")).is_empty());
        assert!(candidates_from_payload(&Value::Null).is_empty());
    }

    #[test]
    fn test_non_object_items_are_skipped() {
        let payload = json!(["garbage", {"address": "X"}]);
        let candidates = candidates_from_payload(&payload);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].address.as_deref(), Some("X"));
    }

    #[test]
    fn test_string_coordinates_are_parsed() {
        let payload = json!([{"latitude": "16.8", "longitude": "96.1"}]);
        let candidates = candidates_from_payload(&payload);
        assert_eq!(candidates[0].latitude, Some(16.8));
        assert_eq!(candidates[0].longitude, Some(96.1));
    }

    #[test]
    fn test_unparseable_coordinates_stay_absent() {
        let payload = json!([{"latitude": "north-ish", "longitude": true}]);
        let candidates = candidates_from_payload(&payload);
        assert!(candidates[0].latitude.is_none());
        assert!(candidates[0].longitude.is_none());
    }

    #[test]
    fn test_search_url_encodes_address() {
        let config = ProviderConfig {
            endpoint: "https://geo.example.com/search".to_string(),
            timeout_secs: 10,
            user_agent: "geoprobe".to_string(),
        };
        let client = HttpGeocodeClient::new(&config).unwrap();
        let url = client.search_url("No. 1 Main Road");
        assert_eq!(
            url.as_str(),
            "https://geo.example.com/search?q=No.+1+Main+Road"
        );
    }
}
