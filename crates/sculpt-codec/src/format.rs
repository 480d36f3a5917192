//! Structural check of a raw payload, independent of decoding.

use serde_json::Value;
use std::ops::RangeInclusive;

use crate::binary::exact_cube_root;
use crate::payload::ShapeMetadata;

pub const DIFFICULTY_RANGE: RangeInclusive<i64> = 1..=10;
pub const MAX_MOVES_RANGE: RangeInclusive<i64> = 1..=999;

pub const NOT_AN_OBJECT: &str = "Shape data must be a JSON object";
pub const MISSING_VOXEL_DATA: &str = "voxelDataString is required and must be a string";
pub const BAD_VOXEL_CHARACTERS: &str = "voxelDataString must contain only '0' and '1' characters";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatReport {
    pub errors: Vec<String>,
}

impl FormatReport {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

// JSON integers, plus floats with no fractional part.
fn as_integer(v: &Value) -> Option<i64> {
    if let Some(i) = v.as_i64() {
        return Some(i);
    }
    let f = v.as_f64()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

fn range_error(key: &str, range: &RangeInclusive<i64>) -> String {
    format!(
        "{key} must be an integer between {} and {}",
        range.start(),
        range.end()
    )
}

fn check_int_field(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    range: &RangeInclusive<i64>,
    errors: &mut Vec<String>,
) {
    let ok = obj
        .get(key)
        .and_then(as_integer)
        .is_some_and(|v| range.contains(&v));
    if !ok {
        errors.push(range_error(key, range));
    }
}

/// Collects every structural problem; only a non-object stops early.
pub fn validate_format(value: &Value) -> FormatReport {
    let Some(obj) = value.as_object() else {
        return FormatReport {
            errors: vec![NOT_AN_OBJECT.to_string()],
        };
    };
    let mut errors = Vec::new();

    match obj.get("voxelDataString").and_then(Value::as_str) {
        None => errors.push(MISSING_VOXEL_DATA.to_string()),
        Some(data) => {
            let binary = !data.is_empty() && data.bytes().all(|b| b == b'0' || b == b'1');
            if !binary {
                errors.push(BAD_VOXEL_CHARACTERS.to_string());
            } else if exact_cube_root(data.len()).is_none() {
                errors.push(format!(
                    "voxelDataString length {} is not a perfect cube",
                    data.len()
                ));
            }
        }
    }

    check_int_field(obj, "difficulty", &DIFFICULTY_RANGE, &mut errors);
    check_int_field(obj, "maxMoves", &MAX_MOVES_RANGE, &mut errors);

    FormatReport { errors }
}

/// Range check for metadata about to be encoded.
///
/// Zero is accepted because encoding replaces it with the default.
pub fn metadata_errors(metadata: &ShapeMetadata) -> Vec<String> {
    let mut errors = Vec::new();
    for (key, value, range) in [
        ("difficulty", metadata.difficulty, &DIFFICULTY_RANGE),
        ("maxMoves", metadata.max_moves, &MAX_MOVES_RANGE),
    ] {
        if value != 0 && !range.contains(&value) {
            errors.push(range_error(key, range));
        }
    }
    errors
}
