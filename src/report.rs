//! Report serialization: CSV or JSON, selected by the output extension.

use crate::error::{GeoProbeError, Result};
use crate::types::ReportRow;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory used for reports when the caller gives a bare filename.
pub const DEFAULT_OUTPUT_DIR: &str = "result";

/// Write the report rows to `path`, picking the format from the extension.
///
/// Parent directories are created as needed and the file lands via a
/// temp-file rename, so a failed run never leaves a half-written report.
pub fn write_report<P: AsRef<Path>>(path: P, rows: &[ReportRow]) -> Result<()> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| GeoProbeError::UnsupportedOutputFormat {
            extension: "(none)".to_string(),
        })?;

    let content = if extension.eq_ignore_ascii_case("csv") {
        render_csv(rows)?
    } else if extension.eq_ignore_ascii_case("json") {
        render_json(rows)?
    } else {
        return Err(GeoProbeError::UnsupportedOutputFormat {
            extension: format!(".{extension}"),
        });
    };

    write_file_atomic(path, content.as_bytes())
}

/// Default report path for a run: `result/<run_id>.csv`.
pub fn default_output_path(run_id: &str) -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(format!("{run_id}.csv"))
}

fn render_csv(rows: &[ReportRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| GeoProbeError::general(format!("Failed to flush CSV buffer: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| GeoProbeError::general(format!("Report is not valid UTF-8: {e}")))
}

fn render_json(rows: &[ReportRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

fn write_file_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension(format!(
        "{}.tmp",
        path.extension().and_then(|s| s.to_str()).unwrap_or("temp")
    ));

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
