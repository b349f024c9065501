use jdiff_core::{
    classify, diff_json, validate_json, DiffKind, DiffOptions, LineTag, Validation,
};
use serde_json::json;

#[test]
fn self_diff_produces_no_changes() {
    let text = "{\"user\":{\"name\":\"jd\",\"tags\":[1,2,3]},\"ok\":true}";
    let result = diff_json(text, text, &DiffOptions::default()).unwrap();
    assert!(result.change_indices().is_empty());
    assert!(result
        .left_lines()
        .iter()
        .chain(result.right_lines())
        .all(|record| record.tag == LineTag::Unchanged));
    assert_eq!(result.stats().total_changes, 0);
}

#[test]
fn matching_key_scalar_change_is_a_modified_pair() {
    let result = diff_json("{\"a\":1}", "{\"a\":2}", &DiffOptions::default()).unwrap();
    let left_tags: Vec<_> = result.left_lines().iter().map(|r| r.tag).collect();
    let right_tags: Vec<_> = result.right_lines().iter().map(|r| r.tag).collect();
    assert_eq!(left_tags, [LineTag::Unchanged, LineTag::Modified, LineTag::Unchanged]);
    assert_eq!(right_tags, [LineTag::Unchanged, LineTag::Modified, LineTag::Unchanged]);
}

#[test]
fn concrete_age_change_scenario() {
    let result = diff_json(
        "{\"name\":\"John\",\"age\":30}",
        "{\"name\":\"John\",\"age\":31}",
        &DiffOptions::default(),
    )
    .unwrap();
    assert_eq!(result.stats().modified, 1);
    assert_eq!(result.stats().added, 0);
    assert_eq!(result.stats().removed, 0);
    assert_eq!(result.change_indices().len(), 1);
}

#[test]
fn classifier_reports_nested_path() {
    let records = classify(&json!({"x": {"y": 1}}), &json!({"x": {"y": 2}}));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "x.y");
    assert_eq!(records[0].kind, DiffKind::Modified);
    assert_eq!(records[0].old_value, Some(json!(1)));
    assert_eq!(records[0].new_value, Some(json!(2)));
}

#[test]
fn classifier_reports_array_growth() {
    let records = classify(&json!({"arr": [1, 2]}), &json!({"arr": [1, 2, 3]}));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "arr[2]");
    assert_eq!(records[0].kind, DiffKind::Added);
    assert_eq!(records[0].new_value, Some(json!(3)));
}

#[test]
fn validator_accepts_and_rejects() {
    assert!(validate_json("{\"a\":1}").is_valid());
    let Validation::Invalid { message, .. } = validate_json("{\"a\":}") else {
        panic!("expected invalid");
    };
    assert!(!message.is_empty());
}

#[test]
fn added_key_produces_added_line_and_placeholder() {
    let result = diff_json("{\"a\":1}", "{\"a\":1,\"b\":2}", &DiffOptions::default()).unwrap();
    let added_row = result
        .right_lines()
        .iter()
        .position(|record| record.tag == LineTag::Added)
        .expect("one added row");
    assert_eq!(result.left_lines()[added_row].tag, LineTag::Empty);
    assert_eq!(result.left_lines()[added_row].number, None);
    assert_eq!(result.stats().added, 1);
}

#[test]
fn unified_view_marks_removed_and_added() {
    let result = diff_json("{\"a\":1}", "{\"b\":1}", &DiffOptions::default()).unwrap();
    let contents: Vec<_> =
        result.unified_lines().iter().map(|record| record.content.as_str()).collect();
    assert!(contents.iter().any(|line| line.starts_with("- ")));
    assert!(contents.iter().any(|line| line.starts_with("+ ")));
    assert!(contents.iter().any(|line| line.starts_with("  ")));
}

#[test]
fn four_space_indent_flows_through_formatting() {
    let options = DiffOptions::default().with_indent_size(4).unwrap();
    let result = diff_json("{\"a\":{\"b\":1}}", "{\"a\":{\"b\":2}}", &options).unwrap();
    assert!(result.formatted_left().contains("    \"a\": {"));
    assert_eq!(result.change_indices().len(), 1);
}

#[test]
fn ignore_whitespace_flag_does_not_alter_alignment() {
    let options = DiffOptions::default().with_ignore_whitespace(true);
    let plain = diff_json("{\"a\":1}", "{\"a\":2}", &DiffOptions::default()).unwrap();
    let flagged = diff_json("{\"a\":1}", "{\"a\":2}", &options).unwrap();
    assert_eq!(plain.stats(), flagged.stats());
    assert_eq!(plain.change_indices(), flagged.change_indices());
}

#[test]
fn type_change_counts_once_without_recursion() {
    let result =
        diff_json("{\"a\":[1,2,3]}", "{\"a\":{\"k\":1}}", &DiffOptions::default()).unwrap();
    assert_eq!(result.stats().type_changed, 1);
    assert_eq!(result.stats().total_changes, 1);
}
