//! Reading and writing shape payloads as JSON files.
#![forbid(unsafe_code)]

use sculpt_codec::{ShapePayload, validate_format};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid shape data: {}", .0.join("; "))]
    InvalidFormat(Vec<String>),
}

// The format check accepts `5.0`; serde only takes true integers for i64.
fn normalize_integral_floats(value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };
    for key in ["difficulty", "maxMoves"] {
        let Some(v) = obj.get_mut(key) else {
            continue;
        };
        let integral = v.as_f64().filter(|f| v.is_f64() && f.fract() == 0.0);
        if let Some(f) = integral {
            *v = Value::from(f as i64);
        }
    }
}

fn into_payload(mut value: Value) -> Result<ShapePayload, IoError> {
    normalize_integral_floats(&mut value);
    Ok(serde_json::from_value(value)?)
}

/// Parses JSON text into a payload after the structural format check.
pub fn parse_payload(text: &str) -> Result<ShapePayload, IoError> {
    let value: Value = serde_json::from_str(text)?;
    let report = validate_format(&value);
    if !report.is_valid() {
        return Err(IoError::InvalidFormat(report.errors));
    }
    into_payload(value)
}

/// Typed parse only. Missing or zero metadata is left for `decode` to default.
pub fn read_payload(text: &str) -> Result<ShapePayload, IoError> {
    into_payload(serde_json::from_str(text)?)
}

/// Loads a payload without the structural check, so decode-time defaults apply.
pub fn load_payload(path: &Path) -> Result<ShapePayload, IoError> {
    let text = fs::read_to_string(path)?;
    let payload = read_payload(&text)?;
    log::debug!(
        target: "io",
        "loaded {} ({} cells)",
        path.display(),
        payload.voxel_data_string.len()
    );
    Ok(payload)
}

pub fn to_json_string(payload: &ShapePayload) -> Result<String, IoError> {
    let mut s = serde_json::to_string_pretty(payload)?;
    s.push('\n');
    Ok(s)
}

pub fn save_payload(path: &Path, payload: &ShapePayload) -> Result<(), IoError> {
    let text = to_json_string(payload)?;
    fs::write(path, text)?;
    log::info!(target: "io", "saved shape to {}", path.display());
    Ok(())
}
