use std::fmt;

use thiserror::Error;

/// Identifies which of the two diff inputs triggered an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSide {
    /// The first (left/original) input.
    First,
    /// The second (right/modified) input.
    Second,
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Errors that can occur while computing a diff.
///
/// The top-level diff entry point fails fast with the raw parser message;
/// the friendlier line/column formatting lives in [`crate::validate_json`],
/// which callers are expected to run as a pre-check.
#[derive(Debug, Error)]
pub enum DiffError {
    /// One of the inputs was not valid JSON.
    #[error("failed to parse {side} input: {source}")]
    Parse {
        /// The input that failed to parse.
        side: InputSide,
        /// The underlying parser error.
        source: serde_json::Error,
    },
}

/// Errors emitted when constructing [`crate::DiffOptions`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// Indent width must be 0, 2, or 4 spaces.
    #[error("unsupported indent width {width}; expected 0, 2, or 4")]
    UnsupportedIndent {
        /// The rejected indent width.
        width: usize,
    },
}
