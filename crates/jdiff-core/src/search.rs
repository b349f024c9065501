use serde::{Deserialize, Serialize};

use crate::{DiffResult, LineRecord, LineTag, ViewMode};

/// Which side-by-side column a search match came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSide {
    /// The left (original) column.
    Left,
    /// The right (modified) column.
    Right,
}

/// One line matching a search term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Index of the matching record within its sequence.
    pub index: usize,
    /// Content of the matching line.
    pub line: String,
    /// Classification of the matching line.
    pub tag: LineTag,
    /// Originating column; absent for unified-view matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<MatchSide>,
}

/// Finds lines containing `term`, case-insensitively.
///
/// Side-by-side mode scans the full left column first, then the right, each
/// in index order; unified mode scans the single sequence. An empty term
/// yields no matches.
///
/// ```
/// # use jdiff_core::{diff_json, search_in_diff, DiffOptions, ViewMode};
/// let result = diff_json("{\"a\":1}", "{\"a\":2}", &DiffOptions::default())?;
/// let matches = search_in_diff(&result, "\"A\"", ViewMode::SideBySide);
/// assert_eq!(matches.len(), 2);
/// # Ok::<(), jdiff_core::DiffError>(())
/// ```
#[must_use]
pub fn search_in_diff(result: &DiffResult, term: &str, mode: ViewMode) -> Vec<SearchMatch> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    let mut matches = Vec::new();
    match mode {
        ViewMode::SideBySide => {
            collect(result.left_lines(), &needle, Some(MatchSide::Left), &mut matches);
            collect(result.right_lines(), &needle, Some(MatchSide::Right), &mut matches);
        }
        ViewMode::Unified => {
            collect(result.unified_lines(), &needle, None, &mut matches);
        }
    }
    matches
}

fn collect(
    records: &[LineRecord],
    needle: &str,
    side: Option<MatchSide>,
    matches: &mut Vec<SearchMatch>,
) {
    for (index, record) in records.iter().enumerate() {
        if record.tag == LineTag::Empty {
            continue;
        }
        if record.content.to_lowercase().contains(needle) {
            matches.push(SearchMatch {
                index,
                line: record.content.clone(),
                tag: record.tag,
                side,
            });
        }
    }
}
