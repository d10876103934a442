//! Snapshot loading: `name -> {value, type}` JSON, optionally wrapped in
//! capture markers.

use serde_json::Value;
use thiserror::Error;

use super::types::{VariableRecord, VariableSet};

/// Marker printed by the capture step before the snapshot JSON.
pub const CAPTURE_START: &str = "<<VAR_START>>";
/// Marker printed by the capture step after the snapshot JSON.
pub const CAPTURE_END: &str = "<<VAR_END>>";

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("snapshot must be a JSON object mapping names to values")]
    NotAnObject,

    #[error("capture output contains <<VAR_START>> without a closing <<VAR_END>>")]
    UnterminatedCapture,
}

/// Parse a snapshot document.
///
/// Accepts either the bare JSON object or capture output in which the
/// object sits between [`CAPTURE_START`] and [`CAPTURE_END`].
pub fn parse(content: &str) -> Result<VariableSet, SnapshotError> {
    let json = match capture_payload(content)? {
        Some(payload) => payload,
        None => content,
    };
    parse_json(json)
}

/// Locate the JSON payload between capture markers, if markers are present.
fn capture_payload(content: &str) -> Result<Option<&str>, SnapshotError> {
    let Some(start) = content.find(CAPTURE_START) else {
        return Ok(None);
    };
    let after = &content[start + CAPTURE_START.len()..];
    let end = after.find(CAPTURE_END).ok_or(SnapshotError::UnterminatedCapture)?;
    Ok(Some(&after[..end]))
}

fn parse_json(json: &str) -> Result<VariableSet, SnapshotError> {
    let root: Value = serde_json::from_str(json)?;
    let Value::Object(map) = root else {
        return Err(SnapshotError::NotAnObject);
    };

    let mut set = VariableSet::new();
    for (name, entry) in map {
        if name.is_empty() {
            tracing::warn!("Skipping snapshot entry with an empty name");
            continue;
        }
        match record_from_entry(&name, &entry) {
            Some(record) => {
                set.insert(record);
            }
            None => tracing::warn!("Skipping malformed snapshot entry '{}'", name),
        }
    }

    tracing::debug!("Loaded {} snapshot records", set.len());
    Ok(set)
}

fn record_from_entry(name: &str, entry: &Value) -> Option<VariableRecord> {
    let obj = entry.as_object()?;
    let value = match obj.get("value")? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let type_name = obj.get("type").and_then(Value::as_str).unwrap_or("unknown");
    Some(VariableRecord::new(name, value, type_name))
}
