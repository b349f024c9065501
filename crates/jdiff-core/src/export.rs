use std::fmt::Write as _;

use crate::{DiffResult, ViewMode};

const LEFT_COLUMN_WIDTH: usize = 30;

/// Renders a diff result as a fixed-format plain-text report.
///
/// The report opens with a header and the statistics block, followed by the
/// unified lines verbatim (their `- `/`+ ` markers are part of the content)
/// or a two-column side-by-side rendering with the left content padded to
/// 30 characters. Output is byte-deterministic for a given result.
///
/// ```
/// # use jdiff_core::{diff_json, export_diff_as_text, DiffOptions, ViewMode};
/// let result = diff_json("{\"a\":1}", "{\"a\":2}", &DiffOptions::default())?;
/// let report = export_diff_as_text(&result, ViewMode::Unified);
/// assert!(report.starts_with("JSON Diff Report"));
/// assert!(report.contains("Modified: 1"));
/// # Ok::<(), jdiff_core::DiffError>(())
/// ```
#[must_use]
pub fn export_diff_as_text(result: &DiffResult, mode: ViewMode) -> String {
    let mut output = String::new();
    output.push_str("JSON Diff Report\n");
    output.push_str("================\n\n");

    let stats = result.stats();
    output.push_str("Statistics:\n");
    let _ = writeln!(output, "  Added: {}", stats.added);
    let _ = writeln!(output, "  Removed: {}", stats.removed);
    let _ = writeln!(output, "  Modified: {}", stats.modified);
    let _ = writeln!(output, "  Type changed: {}", stats.type_changed);
    let _ = writeln!(output, "  Unchanged: {}", stats.unchanged);
    let _ = writeln!(output, "  Total changes: {}", stats.total_changes);
    output.push('\n');

    match mode {
        ViewMode::Unified => {
            for record in result.unified_lines() {
                output.push_str(&record.content);
                output.push('\n');
            }
        }
        ViewMode::SideBySide => {
            for (left, right) in result.left_lines().iter().zip(result.right_lines()) {
                let _ = writeln!(
                    output,
                    "{:<width$} | {}",
                    left.content,
                    right.content,
                    width = LEFT_COLUMN_WIDTH
                );
            }
        }
    }

    output
}
