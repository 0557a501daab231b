//! Tests for TOML adapter (reference data store)

use std::fs;

use tempfile::TempDir;
use timesheet_import::adapters::toml::{
    ReferenceError, TomlReferenceStore, format_reference_file, load_file, parse_str, write_file,
};
use timesheet_import::core::models::{Employee, Project, ReferenceData};
use timesheet_import::core::ports::ReferenceStore;

fn sample() -> ReferenceData {
    ReferenceData::new(
        vec![Employee::new("123", "Jane Doe")],
        vec![Project::new("PRJ1"), Project::new("PRJ2")],
    )
}

// =============================================================================
// REFERENCE FILE PARSING TESTS
// =============================================================================

#[test]
fn test_parse_empty_file() {
    let data = parse_str("# nothing yet\n").unwrap();
    assert!(data.employees.is_empty());
    assert!(data.projects.is_empty());
}

#[test]
fn test_parse_employees_and_projects() {
    let data = parse_str(
        r#"
[[employee]]
employee_id = "123"
employee_name = "Jane Doe"

[[employee]]
employee_id = "456"
employee_name = "John Smith"

[[project]]
project_code = "PRJ1"
"#,
    )
    .unwrap();

    assert_eq!(data.employees.len(), 2);
    assert_eq!(data.employee("456").map(|e| e.employee_name.as_str()), Some("John Smith"));
    assert_eq!(data.projects, vec![Project::new("PRJ1")]);
}

#[test]
fn test_parse_rejects_missing_field() {
    assert!(parse_str("[[project]]\nname = \"PRJ1\"\n").is_err());
}

// =============================================================================
// FILE I/O TESTS
// =============================================================================

#[test]
fn test_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let data = load_file(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(data, ReferenceData::default());
}

#[test]
fn test_invalid_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[[employee]\n").unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, ReferenceError::Parse { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn test_write_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/reference.toml");

    write_file(&path, &sample()).unwrap();
    assert_eq!(load_file(&path).unwrap(), sample());
}

#[test]
fn test_format_has_header_and_tables() {
    let content = format_reference_file(&sample()).unwrap();
    assert!(content.starts_with("# timesheet-import reference data"));
    assert!(content.contains("[[employee]]"));
    assert!(content.contains("[[project]]"));
}

// =============================================================================
// STORE TESTS
// =============================================================================

#[test]
fn test_store_save_and_load() {
    let temp = TempDir::new().unwrap();
    let store = TomlReferenceStore::new(temp.path().join("reference.toml"));

    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), sample());
}

#[test]
fn test_store_update_skips_unchanged() {
    let temp = TempDir::new().unwrap();
    let store = TomlReferenceStore::new(temp.path().join("reference.toml"));

    let changed = store.update(&mut |_: &mut ReferenceData| false).unwrap();
    assert!(!changed);
    assert!(!store.path().exists());

    let changed = store
        .update(&mut |data: &mut ReferenceData| {
            data.projects.push(Project::new("NEW"));
            true
        })
        .unwrap();
    assert!(changed);
    assert_eq!(store.load().unwrap().projects, vec![Project::new("NEW")]);
}

#[test]
fn test_store_load_error_has_context() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reference.toml");
    fs::write(&path, "employee = 3\n").unwrap();

    let err = TomlReferenceStore::new(&path).load().unwrap_err();
    assert!(format!("{err:#}").contains("failed to load reference data"));
}
