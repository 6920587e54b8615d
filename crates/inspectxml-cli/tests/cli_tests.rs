//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../inspectxml/tests/fixtures/Inspections.xml"
);

const SINGLE_RULE: &str = r#"<?xml version="1.0"?>
<InspectionsExport>
  <Inspections>
    <InspectionInstance Id="RULE1" Line="42" Severity="WARNING">
      <Message>bad code</Message>
      <FilePath>/repo/src/Foo.x</FilePath>
    </InspectionInstance>
  </Inspections>
</InspectionsExport>"#;

fn inspectxml() -> Command {
    Command::cargo_bin("inspectxml").unwrap()
}

#[test]
fn test_text_output_from_file() {
    inspectxml()
        .arg(FIXTURE)
        .args(["--checkout-dir", r"c:\Code\app"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "TestApplication/StatisticChecks.cs:8: WARN Methods shouldn't be named NonCritical/: NonCriticalA()",
        ))
        .stdout(predicate::str::contains(
            "TestApplication/StatisticChecks.cs:12: WARN Methods shouldn't be named NonCritical: NonCriticalB() [Methods shouldn't be named NonCritical]",
        ))
        .stdout(predicate::str::contains("NonCriticalA() [").not());
}

#[test]
fn test_text_output_names_defined_rule() {
    let input = SINGLE_RULE.replace(
        "  <Inspections>",
        "  <InspectionTypes>\n    <InspectionTypeInfo Id=\"RULE1\" Name=\"Rule One\" Category=\"Quality\" />\n  </InspectionTypes>\n  <Inspections>",
    );
    inspectxml()
        .args(["--checkout-dir", "/repo"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout("src/Foo.x:42: WARNING RULE1: bad code [Rule One]\n");
}

#[test]
fn test_json_output_from_stdin() {
    inspectxml()
        .args(["--format", "json", "--checkout-dir", "/repo"])
        .write_stdin(SINGLE_RULE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""inspection_id": "RULE1""#))
        .stdout(predicate::str::contains(r#""file_path": "src/Foo.x""#))
        .stdout(predicate::str::contains(r#""SEVERITY""#));
}

#[test]
fn test_output_file() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("findings.txt");

    inspectxml()
        .args(["--checkout-dir", "/repo", "--output"])
        .arg(&out)
        .write_stdin(SINGLE_RULE)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, "src/Foo.x:42: WARNING RULE1: bad code\n");
}

#[test]
fn test_validation_error_is_reported() {
    inspectxml()
        .write_stdin(SINGLE_RULE.replace("Severity=", "Level="))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expected Id or Line or Severity tag but xml attribute name was Level",
        ));
}

#[test]
fn test_syntax_error_is_reported() {
    inspectxml()
        .write_stdin("<InspectionsExport></InspectionsExport>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'xml' expected"));
}

#[test]
fn test_empty_stdin() {
    inspectxml()
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input provided on stdin"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    inspectxml()
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input file"));
}
