use std::fmt;

use serde::{Deserialize, Serialize};

use crate::OptionsError;

const SUPPORTED_INDENTS: [usize; 3] = [0, 2, 4];

/// Selects how a diff result is rendered by the search and export helpers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Two parallel columns with blank placeholders (default).
    #[default]
    SideBySide,
    /// A single merged column with `-`/`+` prefixes.
    Unified,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SideBySide => f.write_str("side-by-side"),
            Self::Unified => f.write_str("unified"),
        }
    }
}

/// Configuration knobs passed to [`crate::diff_json`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiffOptions {
    view_mode: ViewMode,
    indent_size: usize,
    ignore_whitespace: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self { view_mode: ViewMode::SideBySide, indent_size: 2, ignore_whitespace: false }
    }
}

impl DiffOptions {
    /// Returns the configured view mode.
    ///
    /// ```
    /// # use jdiff_core::{DiffOptions, ViewMode};
    /// let opts = DiffOptions::default().with_view_mode(ViewMode::Unified);
    /// assert_eq!(opts.view_mode(), ViewMode::Unified);
    /// ```
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Returns the indent width used to reserialize both inputs.
    #[must_use]
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }

    /// Indicates whether the whitespace-insensitive flag was requested.
    ///
    /// The flag is accepted for interface parity but has no behavioral
    /// effect: line alignment already compares trimmed content.
    #[must_use]
    pub fn ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Sets the view mode.
    #[must_use]
    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    /// Sets the indent width. Only 0, 2, and 4 are supported.
    ///
    /// ```
    /// # use jdiff_core::DiffOptions;
    /// let opts = DiffOptions::default().with_indent_size(4).expect("indent");
    /// assert_eq!(opts.indent_size(), 4);
    /// assert!(DiffOptions::default().with_indent_size(3).is_err());
    /// ```
    pub fn with_indent_size(mut self, width: usize) -> Result<Self, OptionsError> {
        if !SUPPORTED_INDENTS.contains(&width) {
            return Err(OptionsError::UnsupportedIndent { width });
        }
        self.indent_size = width;
        Ok(self)
    }

    /// Sets the whitespace-insensitive flag.
    #[must_use]
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_two_space_side_by_side() {
        let opts = DiffOptions::default();
        assert_eq!(opts.view_mode(), ViewMode::SideBySide);
        assert_eq!(opts.indent_size(), 2);
        assert!(!opts.ignore_whitespace());
    }

    #[test]
    fn odd_indent_widths_are_rejected() {
        let err = DiffOptions::default().with_indent_size(3).unwrap_err();
        assert_eq!(err, OptionsError::UnsupportedIndent { width: 3 });
    }

    #[test]
    fn view_mode_displays_kebab_case() {
        assert_eq!(ViewMode::SideBySide.to_string(), "side-by-side");
        assert_eq!(ViewMode::Unified.to_string(), "unified");
    }
}
