/// A pair of demo documents for walkthroughs and smoke tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplePair {
    /// The original document.
    pub original: String,
    /// The modified document.
    pub modified: String,
}

/// Returns the built-in demo document pair.
///
/// The pair exercises every difference kind: a scalar modification, an
/// added and a removed key, an array append, and a nested change.
///
/// ```
/// # use jdiff_core::{diff_json, sample_documents, DiffOptions};
/// let samples = sample_documents();
/// let result = diff_json(&samples.original, &samples.modified, &DiffOptions::default())?;
/// assert!(!result.is_empty());
/// # Ok::<(), jdiff_core::DiffError>(())
/// ```
#[must_use]
pub fn sample_documents() -> SamplePair {
    SamplePair {
        original: r#"{
  "name": "John Doe",
  "age": 30,
  "email": "john@example.com",
  "address": {
    "street": "123 Main St",
    "city": "Springfield",
    "zip": "12345"
  },
  "hobbies": ["reading", "cycling"],
  "active": true
}"#
        .to_owned(),
        modified: r#"{
  "name": "John Doe",
  "age": 31,
  "address": {
    "street": "123 Main St",
    "city": "Shelbyville",
    "zip": "12345"
  },
  "hobbies": ["reading", "cycling", "chess"],
  "active": true,
  "verified": false
}"#
        .to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diff_json, DiffKind, DiffOptions};

    #[test]
    fn samples_are_valid_json() {
        let samples = sample_documents();
        assert!(crate::validate_json(&samples.original).is_valid());
        assert!(crate::validate_json(&samples.modified).is_valid());
    }

    #[test]
    fn samples_cover_every_difference_kind_except_type_change() {
        let samples = sample_documents();
        let lhs: serde_json::Value = serde_json::from_str(&samples.original).unwrap();
        let rhs: serde_json::Value = serde_json::from_str(&samples.modified).unwrap();
        let records = crate::classify(&lhs, &rhs);
        let has = |kind: DiffKind| records.iter().any(|r| r.kind == kind);
        assert!(has(DiffKind::Added));
        assert!(has(DiffKind::Removed));
        assert!(has(DiffKind::Modified));
    }

    #[test]
    fn samples_diff_cleanly() {
        let samples = sample_documents();
        let result =
            diff_json(&samples.original, &samples.modified, &DiffOptions::default()).unwrap();
        assert!(result.stats().total_changes >= 4);
    }
}
