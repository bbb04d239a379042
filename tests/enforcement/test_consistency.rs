// Tests for string equality and instance/type consistency rules
use bimcheck_core::types::{Attribute, NominalValue};
use bimcheck_rules::rules::{RequireEqualStrings, RequireInstanceEqualsType, Rule};
use bimcheck_rules::types::Severity;

use crate::common::ModelBuilder;

fn door(b: &mut ModelBuilder, gid: &str, reference: &str, model_reference: &str) {
    let door = b.entity("IfcDoor", gid, Some(gid));
    b.pset(&door, "Pset_DoorCommon", vec![Attribute::text("Reference", reference)]);
    b.pset(
        &door,
        "Pset_ManufacturerTypeInformation",
        vec![Attribute::text("ModelReference", model_reference)],
    );
}

#[test]
fn test_door_references_compared_ordinally() {
    let mut b = ModelBuilder::new();
    door(&mut b, "d1", "DT-01", "DT-01");
    door(&mut b, "d2", "DT-01", "dt-01");
    door(&mut b, "d3", "DT-01 ", " DT-01");

    let issues = RequireEqualStrings::door_reference_matches_model_reference()
        .evaluate(&b.model)
        .unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].global_id, "d2");
    assert_eq!(issues[0].severity, Severity::Warning);
}

#[test]
fn test_door_without_manufacturer_info_is_skipped() {
    let mut b = ModelBuilder::new();
    let d = b.entity("IfcDoor", "d1", Some("D1"));
    b.pset(&d, "Pset_DoorCommon", vec![Attribute::text("Reference", "DT-01")]);
    let issues = RequireEqualStrings::door_reference_matches_model_reference()
        .evaluate(&b.model)
        .unwrap();
    assert!(issues.is_empty());
}

#[test]
fn test_right_side_from_type() {
    let mut b = ModelBuilder::new();
    let d = b.entity("IfcDoor", "d1", Some("D1"));
    b.pset(&d, "Pset_DoorCommon", vec![Attribute::text("Reference", "DT-01")]);
    b.typed_pset(
        "IfcDoorType",
        &[&d],
        "Pset_ManufacturerTypeInformation",
        vec![Attribute::text("ModelReference", "DT-02")],
    );
    let issues = RequireEqualStrings::door_reference_matches_model_reference()
        .evaluate(&b.model)
        .unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].expected.as_deref(), Some("DT-02"));
}

fn fire_rating_wall(b: &mut ModelBuilder, instance: NominalValue, on_type: NominalValue) {
    let wall = b.entity("IfcWall", "w1", Some("W1"));
    b.pset(&wall, "Pset_WallCommon", vec![Attribute::new("FireRating", Some(instance))]);
    b.typed_pset(
        "IfcWallType",
        &[&wall],
        "Pset_WallCommon",
        vec![Attribute::new("FireRating", Some(on_type))],
    );
}

#[test]
fn test_instance_equals_type_identical_text() {
    let mut b = ModelBuilder::new();
    fire_rating_wall(
        &mut b,
        NominalValue::Text("10".to_string()),
        NominalValue::Text("10".to_string()),
    );
    let issues = RequireInstanceEqualsType::wall_fire_rating()
        .evaluate(&b.model)
        .unwrap();
    assert!(issues.is_empty());
}

#[test]
fn test_instance_equals_type_no_numeric_equivalence() {
    let mut b = ModelBuilder::new();
    fire_rating_wall(
        &mut b,
        NominalValue::Text("10".to_string()),
        NominalValue::Text("10.0".to_string()),
    );
    let issues = RequireInstanceEqualsType::wall_fire_rating()
        .evaluate(&b.model)
        .unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule_id, "IFC.WALL.FIRERATING.TYPE_CONSISTENT");
    assert_eq!(issues[0].path, "Pset_WallCommon.FireRating");
}

#[test]
fn test_instance_equals_type_ignores_case() {
    let mut b = ModelBuilder::new();
    fire_rating_wall(
        &mut b,
        NominalValue::Text("rei 90".to_string()),
        NominalValue::Text("REI 90".to_string()),
    );
    let issues = RequireInstanceEqualsType::wall_fire_rating()
        .evaluate(&b.model)
        .unwrap();
    assert!(issues.is_empty());
}

#[test]
fn test_instance_equals_type_needs_both_levels() {
    let mut b = ModelBuilder::new();
    let wall = b.entity("IfcWall", "w1", Some("W1"));
    b.typed_pset(
        "IfcWallType",
        &[&wall],
        "Pset_WallCommon",
        vec![Attribute::text("FireRating", "EI60")],
    );
    let issues = RequireInstanceEqualsType::wall_fire_rating()
        .evaluate(&b.model)
        .unwrap();
    assert!(issues.is_empty());
}
