//! Input loading: tabular address files in CSV or JSON form.

use crate::error::{GeoProbeError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

const ADDRESS_COLUMN: &str = "address";

/// Load raw address values from a CSV or JSON file, selected by extension.
///
/// Only the `address` column is consumed; any other columns in the input are
/// ignored. Rows are returned as-is — see [`clean_addresses`] for the
/// blank/duplicate filtering the batch runner applies.
pub fn load_addresses<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(GeoProbeError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    match extension_of(path)? {
        ext if ext.eq_ignore_ascii_case("csv") => load_csv(path),
        ext if ext.eq_ignore_ascii_case("json") => load_json(path),
        ext => Err(GeoProbeError::UnsupportedInputFormat {
            extension: format!(".{ext}"),
        }),
    }
}

/// Drop blank addresses and duplicates, keeping first-occurrence order.
pub fn clean_addresses(addresses: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    addresses
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .filter(|a| seen.insert(a.clone()))
        .collect()
}

fn extension_of(path: &Path) -> Result<&str> {
    path.extension()
        .and_then(|e| e.to_str())
        .ok_or(GeoProbeError::MissingInputExtension)
}

fn load_csv(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let address_index = headers
        .iter()
        .position(|h| h == ADDRESS_COLUMN)
        .ok_or_else(|| GeoProbeError::MissingColumn {
            column: ADDRESS_COLUMN.to_string(),
        })?;

    let mut addresses = Vec::new();
    for record in reader.records() {
        let record = record?;
        addresses.push(record.get(address_index).unwrap_or_default().to_string());
    }

    Ok(addresses)
}

fn load_json(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let payload: Value = serde_json::from_str(&content)?;

    let rows = payload.as_array().ok_or_else(|| {
        GeoProbeError::general(format!(
            "Expected a JSON array of objects in {}",
            path.display()
        ))
    })?;

    let addresses = rows
        .iter()
        .map(|row| {
            row.get(ADDRESS_COLUMN)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
        .collect();

    Ok(addresses)
}
