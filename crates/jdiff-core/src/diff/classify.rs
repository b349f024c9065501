use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::JsonPath;

/// Classification of a single structural difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffKind {
    /// Present only in the second document.
    Added,
    /// Present only in the first document.
    Removed,
    /// Present in both with different values.
    Modified,
    /// Array on one side, plain object on the other.
    TypeChanged,
}

/// One structural difference found by the recursive value walk.
///
/// The walk is independent of the line aligner and feeds only the
/// statistics; it never drives line rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifferenceRecord {
    /// Dot/bracket location of the difference, empty at the root.
    pub path: String,
    /// What changed at the path.
    pub kind: DiffKind,
    /// Value in the first document, absent for additions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    /// Value in the second document, absent for removals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
}

impl DifferenceRecord {
    fn added(path: &JsonPath, new_value: Value) -> Self {
        Self { path: path.to_string(), kind: DiffKind::Added, old_value: None, new_value: Some(new_value) }
    }

    fn removed(path: &JsonPath, old_value: Value) -> Self {
        Self { path: path.to_string(), kind: DiffKind::Removed, old_value: Some(old_value), new_value: None }
    }

    fn modified(path: &JsonPath, old_value: Value, new_value: Value) -> Self {
        Self {
            path: path.to_string(),
            kind: DiffKind::Modified,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    fn type_changed(path: &JsonPath, old_value: Value, new_value: Value) -> Self {
        Self {
            path: path.to_string(),
            kind: DiffKind::TypeChanged,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }
}

/// Walks two parsed JSON values and returns the flat list of differences.
///
/// Total over well-formed values: never panics, never errors. Object keys
/// come straight from the maps and array indices from the vectors, so every
/// produced path is valid by construction.
///
/// ```
/// # use jdiff_core::{classify, DiffKind};
/// let lhs = serde_json::json!({"x": {"y": 1}});
/// let rhs = serde_json::json!({"x": {"y": 2}});
/// let records = classify(&lhs, &rhs);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].path, "x.y");
/// assert_eq!(records[0].kind, DiffKind::Modified);
/// ```
#[must_use]
pub fn classify(lhs: &Value, rhs: &Value) -> Vec<DifferenceRecord> {
    let mut records = Vec::new();
    classify_at(Some(lhs), Some(rhs), &JsonPath::root(), &mut records);
    records
}

fn classify_at(
    lhs: Option<&Value>,
    rhs: Option<&Value>,
    path: &JsonPath,
    records: &mut Vec<DifferenceRecord>,
) {
    match (lhs, rhs) {
        (None, None) => {}
        (None, Some(new_value)) => records.push(DifferenceRecord::added(path, new_value.clone())),
        (Some(old_value), None) => {
            records.push(DifferenceRecord::removed(path, old_value.clone()));
        }
        (Some(old_value), Some(new_value)) => {
            if old_value == new_value {
                return;
            }
            // null vs non-null is a modification, distinct from absence.
            if old_value.is_null() || new_value.is_null() {
                records.push(DifferenceRecord::modified(path, old_value.clone(), new_value.clone()));
                return;
            }
            match (old_value, new_value) {
                (Value::Array(left), Value::Array(right)) => {
                    for index in 0..left.len().max(right.len()) {
                        classify_at(
                            left.get(index),
                            right.get(index),
                            &path.child_index(index),
                            records,
                        );
                    }
                }
                (Value::Object(left), Value::Object(right)) => {
                    for (key, value) in left {
                        classify_at(Some(value), right.get(key), &path.child_key(key), records);
                    }
                    for (key, value) in right {
                        if !left.contains_key(key) {
                            classify_at(None, Some(value), &path.child_key(key), records);
                        }
                    }
                }
                (Value::Array(_), Value::Object(_)) | (Value::Object(_), Value::Array(_)) => {
                    records.push(DifferenceRecord::type_changed(
                        path,
                        old_value.clone(),
                        new_value.clone(),
                    ));
                }
                _ => {
                    records.push(DifferenceRecord::modified(
                        path,
                        old_value.clone(),
                        new_value.clone(),
                    ));
                }
            }
        }
    }
}
