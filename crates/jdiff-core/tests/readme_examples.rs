use jdiff_core::{diff_json, export_diff_as_text, DiffOptions, ViewMode};

#[test]
fn quickstart_diff_and_export() -> Result<(), Box<dyn std::error::Error>> {
    let result = diff_json(
        "{\"name\":\"jdiff\",\"version\":1}",
        "{\"name\":\"jdiff\",\"version\":2}",
        &DiffOptions::default(),
    )?;
    assert_eq!(result.stats().modified, 1);

    let report = export_diff_as_text(&result, ViewMode::Unified);
    assert!(report.contains("Total changes: 1"));
    Ok(())
}

#[test]
fn quickstart_validation() {
    assert!(jdiff_core::validate_json("{\"ok\":true}").is_valid());
    assert!(!jdiff_core::validate_json("{\"ok\":").is_valid());
}
