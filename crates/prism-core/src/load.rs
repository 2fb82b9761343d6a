//! Canonical loading
//!
//! Loading is the normalization pass: the typed model fills in catalog
//! defaults while deserializing, so a loaded [`Report`] is already in the
//! canonical form both renderers consume. Callers are expected to run the
//! validator on the raw value first; loading an unvalidated document only
//! fails on shapes the model cannot represent at all.

use std::io::Read;

use prism_ast::Report;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Load a report from JSON text
pub fn from_str(input: &str) -> Result<Report> {
    let report: Report = serde_json::from_str(input)?;
    loaded(report)
}

/// Load a report from raw JSON bytes
pub fn from_slice(input: &[u8]) -> Result<Report> {
    let report: Report = serde_json::from_slice(input)?;
    loaded(report)
}

/// Load a report from any reader
pub fn from_reader<R: Read>(reader: R) -> Result<Report> {
    let report: Report = serde_json::from_reader(reader)?;
    loaded(report)
}

/// Load a report from an already-parsed (and usually already-validated) value
pub fn from_value(value: Value) -> Result<Report> {
    let report: Report = serde_json::from_value(value)?;
    loaded(report)
}

fn loaded(report: Report) -> Result<Report> {
    debug!(
        title = %report.title,
        sections = report.len(),
        "loaded report"
    );
    Ok(report)
}
