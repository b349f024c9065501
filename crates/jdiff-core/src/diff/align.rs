//! Line sequence alignment.
//!
//! The longest-common-subsequence pass produces the alignment backbone that
//! both the side-by-side and unified builders walk. Alignment is the
//! dominant cost of the engine: O(n·m) time and space in the two line
//! counts, which is acceptable for clipboard-sized documents and degrades
//! quadratically beyond a few thousand lines.

use super::{LineRecord, LineTag};

/// One matched line pair within the LCS alignment backbone.
///
/// `left`/`right` index into the two formatted line sequences; the lines
/// compare equal after trimming surrounding whitespace. Pairs returned by
/// [`compute_lcs`] are strictly increasing in both indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinePair {
    /// Index into the first document's lines.
    pub left: usize,
    /// Index into the second document's lines.
    pub right: usize,
}

/// Computes a longest common subsequence over two line sequences.
///
/// Equality is tested on trimmed content so indentation alone never counts
/// as a change. Both inputs are reserialized with the same indent before
/// comparison, so in practice trims rarely differ; the trimmed test is kept
/// as a safety net.
///
/// When the dynamic program has a choice between equal scores the backtrack
/// moves up, consuming a line of the first document: deletions are reported
/// before insertions wherever multiple alignments of equal length exist.
///
/// ```
/// # use jdiff_core::diff::compute_lcs;
/// let a = vec!["{".to_owned(), "  \"a\": 1".to_owned(), "}".to_owned()];
/// let b = vec!["{".to_owned(), "  \"a\": 2".to_owned(), "}".to_owned()];
/// let pairs = compute_lcs(&a, &b);
/// assert_eq!(pairs.len(), 2);
/// ```
#[must_use]
pub fn compute_lcs(lines_a: &[String], lines_b: &[String]) -> Vec<LinePair> {
    let n = lines_a.len();
    let m = lines_b.len();
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in 0..n {
        for j in 0..m {
            if lines_a[i].trim() == lines_b[j].trim() {
                table[i + 1][j + 1] = table[i][j] + 1;
            } else {
                table[i + 1][j + 1] = table[i][j + 1].max(table[i + 1][j]);
            }
        }
    }

    let mut pairs = Vec::with_capacity(table[n][m]);
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if lines_a[i - 1].trim() == lines_b[j - 1].trim() {
            pairs.push(LinePair { left: i - 1, right: j - 1 });
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] >= table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    pairs.reverse();
    pairs
}

/// Builds the two parallel side-by-side sequences from the LCS backbone.
///
/// Each gap between consecutive pairs emits `max(removed, added)` rows: row
/// `k` pairs the k-th skipped left line (or an empty placeholder) with the
/// k-th skipped right line (or a placeholder). Matched pairs emit an
/// unchanged row on both sides. Line numbers run per side and increment
/// only for non-empty slots, so the sequences always come out equal length.
pub(super) fn build_side_by_side(
    lines_a: &[String],
    lines_b: &[String],
    pairs: &[LinePair],
) -> (Vec<LineRecord>, Vec<LineRecord>) {
    let mut builder = SideBySideBuilder::default();
    let mut next_a = 0;
    let mut next_b = 0;
    for pair in pairs {
        builder.emit_gap(&lines_a[next_a..pair.left], &lines_b[next_b..pair.right]);
        builder.emit_match(&lines_a[pair.left], &lines_b[pair.right]);
        next_a = pair.left + 1;
        next_b = pair.right + 1;
    }
    builder.emit_gap(&lines_a[next_a..], &lines_b[next_b..]);
    (builder.left, builder.right)
}

#[derive(Default)]
struct SideBySideBuilder {
    left: Vec<LineRecord>,
    right: Vec<LineRecord>,
    left_number: usize,
    right_number: usize,
}

impl SideBySideBuilder {
    fn emit_gap(&mut self, removed: &[String], added: &[String]) {
        for row in 0..removed.len().max(added.len()) {
            match removed.get(row) {
                Some(line) => {
                    self.left_number += 1;
                    self.left.push(LineRecord::new(self.left_number, line.clone(), LineTag::Removed));
                }
                None => self.left.push(LineRecord::placeholder()),
            }
            match added.get(row) {
                Some(line) => {
                    self.right_number += 1;
                    self.right.push(LineRecord::new(self.right_number, line.clone(), LineTag::Added));
                }
                None => self.right.push(LineRecord::placeholder()),
            }
        }
    }

    fn emit_match(&mut self, left_line: &str, right_line: &str) {
        self.left_number += 1;
        self.right_number += 1;
        self.left.push(LineRecord::new(self.left_number, left_line.to_owned(), LineTag::Unchanged));
        self.right.push(LineRecord::new(
            self.right_number,
            right_line.to_owned(),
            LineTag::Unchanged,
        ));
    }
}

/// Builds the single merged unified sequence from the LCS backbone.
///
/// Removed lines carry a `- ` content prefix, added lines `+ `, matched
/// lines two spaces; one running counter numbers every emitted record and
/// no placeholder rows are produced.
pub(super) fn build_unified(
    lines_a: &[String],
    lines_b: &[String],
    pairs: &[LinePair],
) -> Vec<LineRecord> {
    let mut records = Vec::new();
    let mut number = 0;
    let mut next_a = 0;
    let mut next_b = 0;
    let mut emit = |records: &mut Vec<LineRecord>, prefix: &str, line: &str, tag: LineTag| {
        number += 1;
        records.push(LineRecord::new(number, format!("{prefix}{line}"), tag));
    };
    for pair in pairs {
        for line in &lines_a[next_a..pair.left] {
            emit(&mut records, "- ", line, LineTag::Removed);
        }
        for line in &lines_b[next_b..pair.right] {
            emit(&mut records, "+ ", line, LineTag::Added);
        }
        emit(&mut records, "  ", &lines_b[pair.right], LineTag::Unchanged);
        next_a = pair.left + 1;
        next_b = pair.right + 1;
    }
    for line in &lines_a[next_a..] {
        emit(&mut records, "- ", line, LineTag::Removed);
    }
    for line in &lines_b[next_b..] {
        emit(&mut records, "+ ", line, LineTag::Added);
    }
    records
}

/// Reclassifies removed/added rows that share a JSON object key as modified.
///
/// This is a purely syntactic heuristic over line text, not the parsed
/// value tree: it can misfire on keys repeating at different nesting depths
/// adjacent in the line stream, and it misses modifications the alignment
/// did not place on the same row. It is isolated here so a tree-aware
/// replacement can swap in without touching the aligner.
pub(super) fn pair_modified_lines(left: &mut [LineRecord], right: &mut [LineRecord]) {
    for index in 0..left.len() {
        if left[index].tag != LineTag::Removed || right[index].tag != LineTag::Added {
            continue;
        }
        let matched = match (object_key(&left[index].content), object_key(&right[index].content)) {
            (Some(left_key), Some(right_key)) => left_key == right_key,
            _ => false,
        };
        if matched {
            left[index].tag = LineTag::Modified;
            right[index].tag = LineTag::Modified;
        }
    }
}

/// Extracts the leading object key of a formatted JSON line (`"key": ...`).
///
/// Returns `None` for lines that do not open with a quoted key followed by
/// a colon, such as array elements and structural braces.
fn object_key(line: &str) -> Option<&str> {
    let body = line.trim_start().strip_prefix('"')?;
    let mut escaped = false;
    for (index, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => {
                let rest = body[index + 1..].trim_start();
                return rest.starts_with(':').then(|| &body[..index]);
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn lcs_pairs_are_strictly_increasing_and_equal_after_trim() {
        let a = lines(&["{", "  \"a\": 1,", "  \"b\": 2", "}"]);
        let b = lines(&["{", "  \"b\": 2,", "  \"c\": 3", "}"]);
        let pairs = compute_lcs(&a, &b);
        for window in pairs.windows(2) {
            assert!(window[0].left < window[1].left);
            assert!(window[0].right < window[1].right);
        }
        for pair in &pairs {
            assert_eq!(a[pair.left].trim(), b[pair.right].trim());
        }
    }

    #[test]
    fn lcs_ignores_indentation_differences() {
        let a = lines(&["\"x\": 1"]);
        let b = lines(&["      \"x\": 1"]);
        assert_eq!(compute_lcs(&a, &b).len(), 1);
    }

    #[test]
    fn lcs_of_disjoint_sequences_is_empty() {
        let a = lines(&["one", "two"]);
        let b = lines(&["three"]);
        assert!(compute_lcs(&a, &b).is_empty());
    }

    #[test]
    fn side_by_side_sequences_have_equal_length() {
        let a = lines(&["{", "  \"a\": 1,", "  \"b\": 2,", "  \"c\": 3", "}"]);
        let b = lines(&["{", "  \"b\": 2", "}"]);
        let pairs = compute_lcs(&a, &b);
        let (left, right) = build_side_by_side(&a, &b, &pairs);
        assert_eq!(left.len(), right.len());
    }

    #[test]
    fn gap_rows_pair_removed_with_added_then_placeholders() {
        let a = lines(&["start", "old-1", "old-2", "end"]);
        let b = lines(&["start", "new-1", "end"]);
        let pairs = compute_lcs(&a, &b);
        let (left, right) = build_side_by_side(&a, &b, &pairs);
        assert_eq!(left[1].tag, LineTag::Removed);
        assert_eq!(right[1].tag, LineTag::Added);
        assert_eq!(left[2].tag, LineTag::Removed);
        assert_eq!(right[2].tag, LineTag::Empty);
        assert_eq!(right[2].number, None);
    }

    #[test]
    fn line_numbers_skip_placeholders() {
        let a = lines(&["keep", "gone"]);
        let b = lines(&["keep"]);
        let pairs = compute_lcs(&a, &b);
        let (left, right) = build_side_by_side(&a, &b, &pairs);
        assert_eq!(left[1].number, Some(2));
        assert_eq!(right[1].number, None);
    }

    #[test]
    fn unified_prefixes_and_shared_counter() {
        let a = lines(&["same", "old"]);
        let b = lines(&["same", "new"]);
        let pairs = compute_lcs(&a, &b);
        let unified = build_unified(&a, &b, &pairs);
        assert_eq!(unified[0].content, "  same");
        assert_eq!(unified[1].content, "- old");
        assert_eq!(unified[2].content, "+ new");
        let numbers: Vec<_> = unified.iter().map(|r| r.number).collect();
        assert_eq!(numbers, [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn unified_has_no_placeholder_rows() {
        let a = lines(&["{", "  \"a\": 1,", "  \"b\": 2", "}"]);
        let b = lines(&["{", "  \"a\": 9,", "  \"c\": 3", "}"]);
        let pairs = compute_lcs(&a, &b);
        let unified = build_unified(&a, &b, &pairs);
        assert!(unified.iter().all(|record| record.tag != LineTag::Empty));
        assert!(unified.iter().all(|record| record.number.is_some()));
    }

    #[test]
    fn shared_key_rows_become_modified() {
        let mut left = vec![LineRecord::new(1, "  \"a\": 1,".to_owned(), LineTag::Removed)];
        let mut right = vec![LineRecord::new(1, "  \"a\": 2,".to_owned(), LineTag::Added)];
        pair_modified_lines(&mut left, &mut right);
        assert_eq!(left[0].tag, LineTag::Modified);
        assert_eq!(right[0].tag, LineTag::Modified);
    }

    #[test]
    fn different_key_rows_keep_their_tags() {
        let mut left = vec![LineRecord::new(1, "  \"a\": 1,".to_owned(), LineTag::Removed)];
        let mut right = vec![LineRecord::new(1, "  \"b\": 2,".to_owned(), LineTag::Added)];
        pair_modified_lines(&mut left, &mut right);
        assert_eq!(left[0].tag, LineTag::Removed);
        assert_eq!(right[0].tag, LineTag::Added);
    }

    #[test]
    fn object_key_extraction() {
        assert_eq!(object_key("  \"name\": \"x\","), Some("name"));
        assert_eq!(object_key("\"a\":1"), Some("a"));
        assert_eq!(object_key("  \"quo\\\"te\": 1"), Some("quo\\\"te"));
        assert_eq!(object_key("  42,"), None);
        assert_eq!(object_key("{"), None);
        assert_eq!(object_key("  \"bare string\","), None);
    }
}
