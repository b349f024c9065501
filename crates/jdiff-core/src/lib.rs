//! Core primitives for the `jdiff` JSON line-diff engine.
//!
//! `jdiff-core` validates JSON inputs, aligns their pretty-printed line
//! sequences with a longest-common-subsequence pass, classifies structural
//! differences with JSON-path identifiers, and assembles side-by-side and
//! unified presentations together with aggregate statistics. Search and
//! plain-text export helpers operate on the assembled result.
//!
//! ```
//! use jdiff_core::{diff_json, DiffOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = diff_json(
//!         "{\"name\":\"jdiff\",\"version\":1}",
//!         "{\"name\":\"jdiff\",\"version\":2}",
//!         &DiffOptions::default(),
//!     )?;
//!     assert_eq!(result.stats().modified, 1);
//!     assert_eq!(result.change_indices().len(), 1);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod diff;
mod document;
mod error;
mod export;
mod options;
mod samples;
mod search;
mod validate;

pub use diff::{
    classify, diff_json, DiffKind, DiffResult, DiffStats, DifferenceRecord, JsonPath, LineRecord,
    LineTag,
};
pub use document::ParsedDocument;
pub use error::{DiffError, InputSide, OptionsError};
pub use export::export_diff_as_text;
pub use options::{DiffOptions, ViewMode};
pub use samples::{sample_documents, SamplePair};
pub use search::{search_in_diff, MatchSide, SearchMatch};
pub use validate::{validate_json, Validation};

/// Returns the semantic version of the `jdiff-core` crate.
///
/// ```
/// assert!(!jdiff_core::version().is_empty());
/// ```
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
