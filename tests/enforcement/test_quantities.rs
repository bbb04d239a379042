// Tests for numeric quantity bounds
use bimcheck_core::types::{Attribute, NominalValue};
use bimcheck_rules::rules::{RequireQtoQuantityValueNumber, Rule};
use bimcheck_rules::types::{Issue, Severity};

use crate::common::ModelBuilder;

fn check_length(value: Option<NominalValue>) -> Vec<Issue> {
    let mut b = ModelBuilder::new();
    let wall = b.entity("IfcWall", "w1", Some("W1"));
    b.qto(&wall, "Qto_WallBaseQuantities", vec![Attribute::new("Length", value)]);
    RequireQtoQuantityValueNumber::wall_length_positive()
        .evaluate(&b.model)
        .unwrap()
}

#[test]
fn test_zero_length_must_be_positive() {
    let issues = check_length(Some(NominalValue::Integer(0)));
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("must be > 0"));
    assert_eq!(issues[0].severity, Severity::Error);
}

#[test]
fn test_positive_length_passes() {
    assert!(check_length(Some(NominalValue::Real(5.0))).is_empty());
    assert!(check_length(Some(NominalValue::Integer(5))).is_empty());
}

#[test]
fn test_absent_length_is_missing_or_not_numeric() {
    let issues = check_length(None);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("missing or not numeric"));
    assert!(!issues[0].message.contains("must be >"));
}

#[test]
fn test_text_length_that_is_not_a_number() {
    let issues = check_length(Some(NominalValue::Text("n/a".to_string())));
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("missing or not numeric"));
    assert_eq!(issues[0].actual.as_deref(), Some("n/a"));
}

#[test]
fn test_boolean_length_is_not_numeric() {
    let issues = check_length(Some(NominalValue::Boolean(true)));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].actual.as_deref(), Some("TRUE"));
}

#[test]
fn test_custom_bound() {
    let mut b = ModelBuilder::new();
    let slab = b.entity("IfcSlab", "s1", Some("S1"));
    b.qto(&slab, "Qto_SlabBaseQuantities", vec![Attribute::real("Width", 0.15)]);
    let rule = RequireQtoQuantityValueNumber::new(
        "TEST.SLAB.WIDTH",
        Severity::Warning,
        &["IfcSlab"],
        "Qto_SlabBaseQuantities",
        "Width",
        0.2,
    );
    let issues = rule.evaluate(&b.model).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].expected.as_deref(), Some("> 0.2"));
    assert_eq!(issues[0].actual.as_deref(), Some("0.15"));
}
