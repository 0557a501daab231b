//! Tests for the timesheet-import binary

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;
use timesheet_import::paths::{CONFIG_ENV, PROJECT_CONFIG};

use crate::common::TWO_SECTIONS;

/// Command running in `dir` with an empty project config, isolated from user config
fn timesheet_import(dir: &Path) -> assert_cmd::Command {
    let config = dir.join(PROJECT_CONFIG);
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("timesheet-import"));
    cmd.current_dir(dir).env_remove(CONFIG_ENV).env("NO_COLOR", "1");
    cmd
}

fn workspace(import: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("week.txt"), import).unwrap();
    temp
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    timesheet_import(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("timesheet-import"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    timesheet_import(temp.path())
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    timesheet_import(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_check_valid_file() {
    let temp = workspace(TWO_SECTIONS);
    timesheet_import(temp.path())
        .args(["check", "week.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK:"))
        .stdout(predicate::str::contains("3 entries"));
}

#[test]
fn test_check_rejected_file_exits_nonzero() {
    let temp = workspace(&TWO_SECTIONS.replace(";PRJ2", ";\"PRJ2\""));
    timesheet_import(temp.path())
        .args(["check", "week.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Project code must not be quoted."))
        .stdout(predicate::str::contains("line 5"));
}

#[test]
fn test_check_rejected_file_json() {
    let temp = workspace("TIMESHEETS: 2024-01-01\n");
    let output = timesheet_import(temp.path())
        .args(["--json", "check", "week.txt"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["error"]["code"], "TIMESHEET_SECTION_BEFORE_EMPLOYEE_DATA");
}

#[test]
fn test_check_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    timesheet_import(temp.path())
        .args(["check", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_errors_json_lists_taxonomy() {
    let temp = TempDir::new().unwrap();
    let output = timesheet_import(temp.path()).args(["--json", "errors"]).output().unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["errors"].as_array().map(Vec::len), Some(24));
}

#[test]
fn test_import_without_save_leaves_reference_alone() {
    let temp = workspace(TWO_SECTIONS);
    timesheet_import(temp.path())
        .args(["import", "week.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 entries"))
        .stdout(predicate::str::contains("Total: 15:00"));

    assert!(!temp.path().join("reference.toml").exists());
}

#[test]
fn test_import_save_writes_reference() {
    let temp = workspace(TWO_SECTIONS);
    timesheet_import(temp.path())
        .args(["import", "week.txt", "--save", "--reference", "data/ref.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference data saved"));

    let saved = fs::read_to_string(temp.path().join("data/ref.toml")).unwrap();
    assert!(saved.contains("employee_id = \"123\""));
    assert!(saved.contains("project_code = \"PRJ2\""));
}

#[test]
fn test_save_reference_from_config() {
    let temp = workspace(TWO_SECTIONS);
    fs::write(temp.path().join(PROJECT_CONFIG), "save_reference = true\n").unwrap();

    timesheet_import(temp.path()).args(["import", "week.txt"]).assert().success();

    assert!(temp.path().join("reference.toml").exists());
}

#[test]
fn test_import_rejected_file_does_not_save() {
    let temp = workspace(&TWO_SECTIONS.replace("09:00;17:00", "17:00;09:00"));
    timesheet_import(temp.path())
        .args(["import", "week.txt", "--save"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("END_TIME_BEFORE_START_TIME"));

    assert!(!temp.path().join("reference.toml").exists());
}
