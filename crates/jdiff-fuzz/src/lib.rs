//! Fuzzing harnesses for the `jdiff` JSON line-diff engine.
//!
//! The helpers in this crate are intentionally lightweight so they can be
//! reused both from `cargo fuzz` targets and from property-based smoke
//! tests. Each public function accepts raw bytes and exercises different
//! parts of the validation, alignment, and presentation pipelines while
//! swallowing any recoverable errors.
//!
//! # Examples
//!
//! Run the validation harness on a JSON snippet:
//!
//! ```
//! jdiff_fuzz::fuzz_validate(b"{\"a\":1}");
//! ```
//!
//! Invoke the diff harness on deterministic input:
//!
//! ```
//! jdiff_fuzz::fuzz_diff(&[1, 2, 3, 4]);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use arbitrary::Unstructured;
use jdiff_core::{
    diff_json, export_diff_as_text, search_in_diff, validate_json, DiffOptions, ViewMode,
};
use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};

const MAX_DEPTH: usize = 4;
const MAX_ARRAY_LEN: u8 = 6;
const MAX_OBJECT_LEN: u8 = 6;
const MAX_STRING_LEN: u8 = 12;

/// Feeds arbitrary bytes through the validator and the raw diff entry point.
///
/// The validator must never panic and never propagate a parser error, no
/// matter the input.
///
/// ```
/// jdiff_fuzz::fuzz_validate(b"{\"key\":\"value\"}");
/// ```
pub fn fuzz_validate(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = validate_json(text);
        let _ = diff_json(text, text, &DiffOptions::default());
    }
}

/// Drives the full diff pipeline with randomly generated document pairs.
///
/// Exercises alignment, classification, reclassification, search, and both
/// export layouts, asserting the structural invariants that must hold for
/// every valid input pair.
///
/// ```
/// jdiff_fuzz::fuzz_diff(b"seed");
/// ```
pub fn fuzz_diff(data: &[u8]) {
    let mut unstructured = Unstructured::new(data);
    let Some(lhs) = random_value(&mut unstructured) else {
        return;
    };
    let Some(rhs) = random_value(&mut unstructured) else {
        return;
    };
    let lhs_text = lhs.to_string();
    let rhs_text = rhs.to_string();
    let options = DiffOptions::default();
    let Ok(result) = diff_json(&lhs_text, &rhs_text, &options) else {
        return;
    };
    assert_eq!(result.left_lines().len(), result.right_lines().len());
    let _ = search_in_diff(&result, "a", ViewMode::SideBySide);
    let _ = export_diff_as_text(&result, ViewMode::SideBySide);
    let _ = export_diff_as_text(&result, ViewMode::Unified);
}

fn random_value(unstructured: &mut Unstructured<'_>) -> Option<JsonValue> {
    value_from_unstructured(unstructured, 0).ok()
}

fn value_from_unstructured(
    unstructured: &mut Unstructured<'_>,
    depth: usize,
) -> Result<JsonValue, arbitrary::Error> {
    if depth >= MAX_DEPTH {
        return leaf_value(unstructured);
    }

    let choice = unstructured.int_in_range::<u8>(0..=5)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        3 => Ok(JsonValue::String(random_string(unstructured)?)),
        4 => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_ARRAY_LEN)?);
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(value_from_unstructured(unstructured, depth + 1)?);
            }
            Ok(JsonValue::Array(items))
        }
        _ => {
            let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_OBJECT_LEN)?);
            let mut map = JsonMap::new();
            for _ in 0..len {
                let key = random_string(unstructured)?;
                let value = value_from_unstructured(unstructured, depth + 1)?;
                map.insert(key, value);
            }
            Ok(JsonValue::Object(map))
        }
    }
}

fn leaf_value(unstructured: &mut Unstructured<'_>) -> Result<JsonValue, arbitrary::Error> {
    let choice = unstructured.int_in_range::<u8>(0..=3)?;
    match choice {
        0 => Ok(JsonValue::Null),
        1 => Ok(JsonValue::Bool(unstructured.arbitrary()?)),
        2 => Ok(JsonValue::Number(random_number(unstructured)?)),
        _ => Ok(JsonValue::String(random_string(unstructured)?)),
    }
}

fn random_number(unstructured: &mut Unstructured<'_>) -> Result<JsonNumber, arbitrary::Error> {
    if unstructured.arbitrary()? {
        let int = unstructured.arbitrary::<i64>()?;
        Ok(JsonNumber::from(int))
    } else {
        let numerator = unstructured.arbitrary::<i32>()? as f64;
        let denominator = f64::from(unstructured.int_in_range::<u16>(1..=1024)?);
        JsonNumber::from_f64(numerator / denominator).ok_or(arbitrary::Error::IncorrectFormat)
    }
}

fn random_string(unstructured: &mut Unstructured<'_>) -> Result<String, arbitrary::Error> {
    let len = usize::from(unstructured.int_in_range::<u8>(0..=MAX_STRING_LEN)?);
    let mut string = String::with_capacity(len);
    for _ in 0..len {
        let byte = unstructured.int_in_range::<u8>(0x20..=0x7e)?;
        string.push(char::from(byte));
    }
    Ok(string)
}
