/// Contract tests for the serialized RunResult shape.
use bimcheck_core::snapshot::SnapshotProvider;
use bimcheck_rules::engine::RuleEngine;
use bimcheck_rules::types::RunResult;
use serde_json::json;

use super::test_schema_helpers::{assert_matches_schema, assert_violates_schema};
use crate::common::office_project;

const SCHEMA: &str = include_str!("../schemas/run_result.schema.json");

#[test]
fn empty_run_result_matches_schema() {
    let result = RunResult {
        ifc_path: "models/empty.ifc".to_string(),
        issues: vec![],
    };
    assert_matches_schema(&serde_json::to_value(&result).unwrap(), SCHEMA);
}

#[test]
fn engine_output_matches_schema() {
    let (_dir, path) = office_project();
    let result = RuleEngine::default().run(&SnapshotProvider, &path).unwrap();
    assert!(!result.issues.is_empty());
    let value = serde_json::to_value(&result).unwrap();
    assert_matches_schema(&value, SCHEMA);

    // Absent optionals are emitted as null, never omitted.
    let survey = value["issues"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["severity"] == "Info")
        .unwrap();
    assert!(survey["expected"].is_null());
}

#[test]
fn schema_rejects_unknown_severity() {
    let bad = json!({
        "ifcPath": "m.ifc",
        "issues": [{
            "ruleId": "X", "severity": "Fatal", "ifcClass": "IfcWall", "globalId": "g",
            "name": null, "message": "m", "path": "p", "source": "Entity",
            "expected": null, "actual": null
        }]
    });
    assert_violates_schema(&bad, SCHEMA);
}

#[test]
fn schema_rejects_snake_case_fields() {
    let bad = json!({ "ifc_path": "m.ifc", "issues": [] });
    assert_violates_schema(&bad, SCHEMA);
}
