use std::fs;
use inspectxml::from_str;

#[test]
fn test_valid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let valid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/valid");
    for entry in fs::read_dir(valid_dir)? {
        let entry = entry?;
        let path = entry.path();
        let content = fs::read_to_string(&path)?;
        if let Err(e) = from_str(&content) {
            return Err(std::io::Error::other(format!(
                "Failed to parse valid file {path:?}: {e}"
            ))
            .into());
        }
    }
    Ok(())
}

#[test]
fn test_invalid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    let invalid_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid");
    for entry in fs::read_dir(invalid_dir)? {
        let entry = entry?;
        let path = entry.path();
        let content = fs::read_to_string(&path)?;
        if from_str(&content).is_ok() {
            return Err(std::io::Error::other(format!(
                "Should fail to parse invalid file: {path:?}"
            ))
            .into());
        }
    }
    Ok(())
}

#[test]
fn test_split_groups_are_concatenated() -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/valid/split_groups.xml"
    ))?;
    let report = from_str(&content)?;

    let ids: Vec<&str> = report.inspection_types.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(report.inspection_types.first().and_then(|t| t.description.clone()), None);

    let found: Vec<(Option<&str>, i32, &str)> = report
        .inspections
        .iter()
        .map(|i| (i.message.as_deref(), i.line, i.severity.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (Some("first"), 1, "ERROR"),
            (Some("second"), 2, "ERROR"),
            (None, 0, "INFO"),
        ]
    );
    Ok(())
}

#[test]
fn test_empty_export() -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/valid/empty_export.xml"
    ))?;
    assert!(from_str(&content)?.is_empty());
    Ok(())
}
