//! Diff data structures and the presentation builder.
//!
//! The module defines the line-level records produced by the aligner, the
//! structural difference records produced by the classifier, and the
//! [`diff_json`] entry point that combines both into a [`DiffResult`].

mod align;
mod classify;
mod path;

pub use align::{compute_lcs, LinePair};
pub use classify::{classify, DiffKind, DifferenceRecord};
pub use path::JsonPath;

use serde::{Deserialize, Serialize};

use crate::{DiffError, DiffOptions, InputSide, ParsedDocument};

/// Classification of one rendered diff line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTag {
    /// Present in both documents.
    Unchanged,
    /// Present only in the second document.
    Added,
    /// Present only in the first document.
    Removed,
    /// A removed/added pair sharing the same JSON object key.
    Modified,
    /// Blank placeholder keeping the side-by-side columns aligned.
    Empty,
}

impl LineTag {
    /// Indicates whether the tag marks a navigable change.
    #[must_use]
    pub fn is_change(self) -> bool {
        matches!(self, Self::Added | Self::Removed | Self::Modified)
    }
}

/// One rendered line in a diff view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// 1-based line number within its side; absent for placeholders.
    pub number: Option<usize>,
    /// Line content. Unified-view records carry their `- `/`+ ` prefix here.
    pub content: String,
    /// Classification of the line.
    pub tag: LineTag,
}

impl LineRecord {
    /// Creates a numbered line record.
    #[must_use]
    pub fn new(number: usize, content: String, tag: LineTag) -> Self {
        Self { number: Some(number), content, tag }
    }

    /// Creates an unnumbered blank placeholder.
    #[must_use]
    pub fn placeholder() -> Self {
        Self { number: None, content: String::new(), tag: LineTag::Empty }
    }
}

/// Aggregate counters for one diff result.
///
/// `added`, `removed`, `modified`, and `type_changed` count structural
/// difference records from the recursive value walk; `unchanged` counts
/// side-by-side rows. The granularities differ deliberately and the two
/// passes need not agree on compound edits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Total structural differences.
    pub total_changes: usize,
    /// Structural additions.
    pub added: usize,
    /// Structural removals.
    pub removed: usize,
    /// Structural value modifications.
    pub modified: usize,
    /// Unchanged side-by-side rows.
    pub unchanged: usize,
    /// Array/object type changes.
    pub type_changed: usize,
}

impl DiffStats {
    fn tally(records: &[DifferenceRecord], left: &[LineRecord]) -> Self {
        let mut stats = Self {
            unchanged: left.iter().filter(|record| record.tag == LineTag::Unchanged).count(),
            ..Self::default()
        };
        for record in records {
            match record.kind {
                DiffKind::Added => stats.added += 1,
                DiffKind::Removed => stats.removed += 1,
                DiffKind::Modified => stats.modified += 1,
                DiffKind::TypeChanged => stats.type_changed += 1,
            }
        }
        stats.total_changes = stats.added + stats.removed + stats.modified + stats.type_changed;
        stats
    }
}

/// The complete output of one diff invocation. Immutable once returned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    left: Vec<LineRecord>,
    right: Vec<LineRecord>,
    unified: Vec<LineRecord>,
    stats: DiffStats,
    change_indices: Vec<usize>,
    formatted_left: String,
    formatted_right: String,
}

impl DiffResult {
    /// Returns the left column of the side-by-side view.
    #[must_use]
    pub fn left_lines(&self) -> &[LineRecord] {
        &self.left
    }

    /// Returns the right column of the side-by-side view.
    #[must_use]
    pub fn right_lines(&self) -> &[LineRecord] {
        &self.right
    }

    /// Returns the unified view.
    #[must_use]
    pub fn unified_lines(&self) -> &[LineRecord] {
        &self.unified
    }

    /// Returns the aggregate statistics.
    #[must_use]
    pub fn stats(&self) -> &DiffStats {
        &self.stats
    }

    /// Returns the ordered side-by-side row indices holding a change.
    #[must_use]
    pub fn change_indices(&self) -> &[usize] {
        &self.change_indices
    }

    /// Returns the first document reformatted with the configured indent.
    #[must_use]
    pub fn formatted_left(&self) -> &str {
        &self.formatted_left
    }

    /// Returns the second document reformatted with the configured indent.
    #[must_use]
    pub fn formatted_right(&self) -> &str {
        &self.formatted_right
    }

    /// Indicates whether the two documents rendered identically.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.change_indices.is_empty()
    }
}

/// Diffs two JSON texts into line presentations and statistics.
///
/// Both the side-by-side and unified layouts are always built; the
/// configured view mode only selects the rendering path for the search and
/// export helpers. Any parse failure aborts the whole call with the raw
/// parser message and no partial result.
///
/// ```
/// # use jdiff_core::{diff_json, DiffOptions};
/// let result = diff_json("{\"a\":1}", "{\"a\":2}", &DiffOptions::default())?;
/// assert_eq!(result.left_lines().len(), result.right_lines().len());
/// # Ok::<(), jdiff_core::DiffError>(())
/// ```
pub fn diff_json(
    lhs_text: &str,
    rhs_text: &str,
    options: &DiffOptions,
) -> Result<DiffResult, DiffError> {
    let lhs = ParsedDocument::parse(lhs_text, options.indent_size())
        .map_err(|source| DiffError::Parse { side: InputSide::First, source })?;
    let rhs = ParsedDocument::parse(rhs_text, options.indent_size())
        .map_err(|source| DiffError::Parse { side: InputSide::Second, source })?;

    let pairs = compute_lcs(lhs.lines(), rhs.lines());
    let (mut left, mut right) = align::build_side_by_side(lhs.lines(), rhs.lines(), &pairs);
    align::pair_modified_lines(&mut left, &mut right);
    let unified = align::build_unified(lhs.lines(), rhs.lines(), &pairs);

    let records = classify(lhs.value(), rhs.value());
    let stats = DiffStats::tally(&records, &left);
    let change_indices = (0..left.len())
        .filter(|&index| left[index].tag.is_change() || right[index].tag.is_change())
        .collect();

    Ok(DiffResult {
        left,
        right,
        unified,
        stats,
        change_indices,
        formatted_left: lhs.into_formatted(),
        formatted_right: rhs.into_formatted(),
    })
}
