use serde_json::Value;

/// Outcome of validating a single JSON text.
///
/// ```
/// # use jdiff_core::{validate_json, Validation};
/// assert!(validate_json("{\"a\":1}").is_valid());
/// let Validation::Invalid { message, .. } = validate_json("{\"a\":}") else {
///     panic!("expected invalid");
/// };
/// assert!(message.starts_with("Line 1, column "));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// The text parsed successfully.
    Valid,
    /// The text failed to parse.
    Invalid {
        /// Human-readable message prefixed with `Line L, column C:`.
        message: String,
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
    },
}

impl Validation {
    /// Indicates whether the input parsed successfully.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validates a JSON text, reporting a friendly line/column message on failure.
///
/// The parsed value is discarded; the diff entry point reparses on its own.
/// Inputs are clipboard-sized, so the duplicate parse is not a concern.
/// All parser failures are converted into [`Validation::Invalid`]; this
/// function never panics and never propagates an error.
#[must_use]
pub fn validate_json(text: &str) -> Validation {
    match serde_json::from_str::<Value>(text) {
        Ok(_) => Validation::Valid,
        Err(err) => {
            let line = err.line();
            let column = err.column();
            Validation::Invalid {
                message: format!("Line {line}, column {column}: {err}"),
                line,
                column,
            }
        }
    }
}
