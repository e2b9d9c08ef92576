//! CLI integration tests for rowmap.
//!
//! These tests verify argument parsing, rendered output and exit codes for
//! the various error conditions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Get a command for the rowmap binary.
fn cmd() -> Command {
    Command::cargo_bin("rowmap").unwrap()
}

const MAPPING: &str = "\
records:
  - name: users
    fields:
      - field: FirstName
        column: first_name
      - field: LastName
      - field: Email
        column: email_address
      - field: Unwanted
        skip: true
  - name: tags
    fields:
      - field: id
      - field: label
";

fn mapping_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_shows_all_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_render_subcommand_help() {
    cmd()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--add"))
        .stdout(predicate::str::contains("--remove"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rowmap"));
}

#[test]
fn test_config_default_path() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: records.yaml]"));
}

#[test]
fn test_no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_render_record() {
    let file = mapping_file(MAPPING);

    cmd()
        .args(["-c", file.path().to_str().unwrap(), "render", "users"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "names:      first_name, LastName, email_address",
        ))
        .stdout(predicate::str::contains(
            "symbolized: :first_name, :LastName, :email_address",
        ))
        .stdout(predicate::str::contains(
            "updates:    first_name = :first_name, LastName = :LastName, email_address = :email_address",
        ));
}

#[test]
fn test_render_with_add_and_remove() {
    let file = mapping_file(MAPPING);

    cmd()
        .args([
            "-c",
            file.path().to_str().unwrap(),
            "render",
            "users",
            "--add",
            "bar",
            "--remove",
            "bar",
            "--remove",
            "email_address",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("names:      first_name, LastName\n"))
        .stdout(predicate::str::contains(
            "updates:    first_name = :first_name, LastName = :LastName\n",
        ));
}

#[test]
fn test_render_json_output() {
    let file = mapping_file(MAPPING);

    let output = cmd()
        .args([
            "-c",
            file.path().to_str().unwrap(),
            "--output-json",
            "render",
            "tags",
            "--add",
            "id",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["record"], "tags");
    assert_eq!(json["names"], serde_json::json!(["id", "label"]));
    assert_eq!(json["updates_string"], "id = :id, label = :label");
}

#[test]
fn test_list_records() {
    let file = mapping_file(MAPPING);

    cmd()
        .args(["-c", file.path().to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("users\t3"))
        .stdout(predicate::str::contains("tags\t2"));
}

#[test]
fn test_check_valid_config() {
    let file = mapping_file(MAPPING);

    cmd()
        .args(["-c", file.path().to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid (2 records)"));
}

// =============================================================================
// Exit Code Tests
// =============================================================================

#[test]
fn test_missing_config_exits_with_code_7() {
    cmd()
        .args(["--config", "nonexistent_records_file.yaml", "check"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_yaml_exits_with_code_1() {
    let file = mapping_file("records: [\n");

    cmd()
        .args(["--config", file.path().to_str().unwrap(), "check"])
        .assert()
        .code(1);
}

#[test]
fn test_empty_config_exits_with_code_1() {
    let file = tempfile::NamedTempFile::new().unwrap();

    cmd()
        .args(["--config", file.path().to_str().unwrap(), "check"])
        .assert()
        .code(1);
}

#[test]
fn test_unknown_record_exits_with_code_1() {
    let file = mapping_file(MAPPING);

    cmd()
        .args(["-c", file.path().to_str().unwrap(), "render", "orders"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("record 'orders' is not declared"));
}

#[test]
fn test_invalid_identifier_exits_with_code_1() {
    let file = mapping_file("records:\n  - name: users\n    fields:\n      - field: \"\"\n");

    cmd()
        .args(["-c", file.path().to_str().unwrap(), "check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Identifier cannot be empty"));
}
