// Tests for CLI exit code behavior
use std::process::Command;

use serde_json::json;
use tempfile::TempDir;

use crate::common::{bimcheck_bin, office_project, write_snapshot};

fn exit_code(args: &[&str], dir: &TempDir) -> i32 {
    Command::new(bimcheck_bin())
        .args(args)
        .env_remove("BIMCHECK_CONFIG")
        .current_dir(dir.path())
        .output()
        .unwrap()
        .status
        .code()
        .unwrap()
}

#[test]
fn test_clean_model_exits_zero() {
    let dir = TempDir::new().unwrap();
    write_snapshot(
        dir.path(),
        "clean.json",
        &json!({ "entities": [{ "id": 1, "type": "IfcSlab", "globalId": "s", "name": "S" }] }),
    );
    assert_eq!(exit_code(&["check", "clean.json"], &dir), 0);
    assert_eq!(exit_code(&["check", "--strict", "clean.json"], &dir), 0);
}

#[test]
fn test_warnings_only_exit_zero_unless_strict() {
    let dir = TempDir::new().unwrap();
    write_snapshot(
        dir.path(),
        "unnamed.json",
        &json!({ "entities": [{ "id": 1, "type": "IfcSlab", "globalId": "s" }] }),
    );
    assert_eq!(exit_code(&["check", "unnamed.json"], &dir), 0);
    assert_eq!(exit_code(&["check", "--strict", "unnamed.json"], &dir), 1);
}

#[test]
fn test_errors_exit_one() {
    let (dir, _path) = office_project();
    assert_eq!(exit_code(&["check", "office.json"], &dir), 1);
}

#[test]
fn test_missing_model_exits_two() {
    let dir = TempDir::new().unwrap();
    assert_eq!(exit_code(&["check", "absent.json"], &dir), 2);
}

#[test]
fn test_malformed_model_exits_two() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.json"), "not json").unwrap();
    assert_eq!(exit_code(&["check", "bad.json"], &dir), 2);
}

#[test]
fn test_empty_directory_exits_two() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("models")).unwrap();
    assert_eq!(exit_code(&["check", "models"], &dir), 2);
}
