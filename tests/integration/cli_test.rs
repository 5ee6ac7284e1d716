//! End-to-end tests driving the csvjson binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_csvjson(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csvjson"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute csvjson")
}

const PEOPLE_JSON: &str = r#"{
    "headers": [
        "name",
        "age"
    ],
    "data": [
        {
            "name": "Alice",
            "age": "30"
        },
        {
            "name": "Bob",
            "age": "25"
        }
    ]
}"#;

#[test]
fn test_people_conversion() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), "name,age\nAlice,30\nBob,25\n").unwrap();

    let output = run_csvjson(dir.path(), &["people"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Data successfully written to people.json");

    let written = fs::read_to_string(dir.path().join("people.json")).unwrap();
    pretty_assertions::assert_eq!(written, PEOPLE_JSON);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("t.csv"), "a,b,a\n1,\"x,y\",3\n").unwrap();

    assert!(run_csvjson(dir.path(), &["t"]).status.success());
    let first = fs::read(dir.path().join("t.json")).unwrap();
    assert!(run_csvjson(dir.path(), &["t"]).status.success());
    let second = fs::read(dir.path().join("t.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), "name,age\nAlice,30\nBob,25\n").unwrap();
    fs::write(dir.path().join("people.json"), "stale contents that are longer than nothing").unwrap();

    assert!(run_csvjson(dir.path(), &["people"]).status.success());
    let written = fs::read_to_string(dir.path().join("people.json")).unwrap();
    assert_eq!(written, PEOPLE_JSON);
}

#[test]
fn test_missing_base_name_is_usage_error() {
    let dir = tempdir().unwrap();
    let output = run_csvjson(dir.path(), &[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = run_csvjson(dir.path(), &["absent"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.csv"), "stderr: {}", stderr);
    assert!(!dir.path().join("absent.json").exists());
}

#[test]
fn test_short_row_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("short.csv"), "a,b,c\n1,2,3\n4,5\n").unwrap();

    let output = run_csvjson(dir.path(), &["short"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("short.json").exists());
}

#[test]
fn test_long_row_warns_on_stderr() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("long.csv"), "a,b\n1,2,3\n").unwrap();

    let output = run_csvjson(dir.path(), &["long"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("extra cells dropped"), "stderr: {}", stderr);
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("long.json")).unwrap()).unwrap();
    assert_eq!(value["data"][0], serde_json::json!({"a": "1", "b": "2"}));
}

#[test]
fn test_quiet_suppresses_confirmation() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), "name,age\nAlice,30\n").unwrap();

    let output = run_csvjson(dir.path(), &["people", "--quiet", "--stats"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(dir.path().join("people.json").exists());
}

#[test]
fn test_stats_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), "name,age\nAlice,30\nBob,25\n").unwrap();

    let output = run_csvjson(dir.path(), &["people", "--stats"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rows: 2"), "stdout: {}", stdout);
    assert!(stdout.contains("Columns: 2"), "stdout: {}", stdout);
}

#[test]
fn test_indent_option() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), "name,age\nAlice,30\n").unwrap();

    assert!(run_csvjson(dir.path(), &["people", "--indent", "2"]).status.success());
    let written = fs::read_to_string(dir.path().join("people.json")).unwrap();
    assert!(written.starts_with("{\n  \"headers\": [\n    \"name\","));
}

#[test]
fn test_invalid_indent_is_rejected_before_io() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("people.csv"), "name,age\nAlice,30\n").unwrap();

    let output = run_csvjson(dir.path(), &["people", "--indent", "9"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("people.json").exists());
}

#[test]
fn test_blank_line_aborts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("gap.csv"), "a,b\n1,2\n\n3,4\n").unwrap();

    let output = run_csvjson(dir.path(), &["gap"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 3 is too short"), "stderr: {}", stderr);
    assert!(!dir.path().join("gap.json").exists());
}

#[test]
fn test_non_ascii_written_as_escapes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cities.csv"), "city\nZürich\n").unwrap();

    assert!(run_csvjson(dir.path(), &["cities"]).status.success());
    let written = fs::read_to_string(dir.path().join("cities.json")).unwrap();
    assert!(written.contains(r#""city": "Z\u00fcrich""#), "written: {}", written);
    assert!(written.is_ascii());
}
