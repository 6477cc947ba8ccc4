// colschema-cli/tests/integration.rs
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_valid_record_file() {
    let record = r#"{"name": "Koichiro Okamoto", "age": 34, "point": 34.333, "cert": true}"#;

    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file
        .write_all(record.as_bytes())
        .expect("Failed to write to temp file");

    let mut cmd = assert_cmd::Command::cargo_bin("colschema-cli").unwrap();
    cmd.arg(temp_file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"TEXT\""))
        .stdout(predicate::str::contains("\"type\": \"INTEGER\""))
        .stdout(predicate::str::contains("\"type\": \"FLOAT\""))
        .stdout(predicate::str::contains("\"type\": \"BOOLEAN\""))
        .stderr(predicate::str::contains("Processed 1 record(s)"));
}

#[test]
fn test_stdin_input() {
    let mut cmd = assert_cmd::Command::cargo_bin("colschema-cli").unwrap();
    cmd.write_stdin(r#"{"hobby": ["music", "programming", "sing"]}"#);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"REPEATED\""))
        .stdout(predicate::str::contains("\"type\": \"TEXT\""));
}

#[test]
fn test_fields_output_is_an_ordered_list() {
    let record = r#"{"name": "Alice", "age": 30, "job": {"title": "Engineer"}}"#;

    let mut cmd = assert_cmd::Command::cargo_bin("colschema-cli").unwrap();
    cmd.arg("--fields");
    cmd.write_stdin(record);

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

    let fields = parsed["fields"].as_array().expect("fields is a list");
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0]["name"], "name");
    assert_eq!(fields[1]["name"], "age");
    assert_eq!(fields[2]["name"], "job");
    assert_eq!(fields[2]["type"], "RECORD");
    // Nested members flatten to a list as well in this form.
    assert!(fields[2]["fields"].is_array());
}

#[test]
fn test_ndjson_folds_records() {
    let lines = "{\"a\": 1}\n{\"a\": \"2024-11-05\", \"b\": true}\n";

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(lines.as_bytes()).unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("colschema-cli").unwrap();
    cmd.arg("--ndjson").arg(temp_file.path());

    let output = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("Processed 2 record(s)"))
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

    // Later record wins for "a", first-seen order is kept.
    assert_eq!(parsed["a"]["type"], "DATE");
    assert_eq!(parsed["b"]["type"], "BOOLEAN");
}

#[test]
fn test_invalid_json_input() {
    let invalid_json = r#"{"hello":"world}"#;
    let mut temp = NamedTempFile::new().unwrap();
    write!(temp, "{}", invalid_json).unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("colschema-cli").unwrap();
    cmd.arg(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON input"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_unsupported_shape_fails_inference() {
    let mut cmd = assert_cmd::Command::cargo_bin("colschema-cli").unwrap();
    cmd.write_stdin(r#"{"grid": [[1, 2], [3, 4]]}"#);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Schema inference failed"))
        .stderr(predicate::str::contains("schema not defined"));
}

#[test]
fn test_help_flag() {
    let mut cmd = assert_cmd::Command::cargo_bin("colschema-cli").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("--ndjson"));
}
