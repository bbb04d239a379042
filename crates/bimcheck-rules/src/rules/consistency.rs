//! Rules comparing two string values. Both skip silently when either side is
//! absent: a missing value cannot be compared.

use bimcheck_core::model::BuildingModel;
use bimcheck_core::types::ModelError;

use crate::coercion::as_string;
use crate::resolver::{first_named, AttributeResolver};
use crate::rules::presence::WALL_CLASSES;
use crate::rules::{matching_entities, AttributeRef, ClassFilter, Rule};
use crate::types::{Issue, IssueSource, Severity};

/// `PsetA.KeyA` must equal `PsetB.KeyB` (trimmed, ordinal compare).
#[derive(Debug, Clone)]
pub struct RequireEqualStrings {
    id: String,
    severity: Severity,
    classes: ClassFilter,
    left: AttributeRef,
    right: AttributeRef,
}

impl RequireEqualStrings {
    pub fn new(
        id: &str,
        severity: Severity,
        classes: &[&str],
        left: AttributeRef,
        right: AttributeRef,
    ) -> Self {
        Self {
            id: id.to_string(),
            severity,
            classes: ClassFilter::new(classes),
            left,
            right,
        }
    }

    /// A door's own reference must match the manufacturer's model reference.
    pub fn door_reference_matches_model_reference() -> Self {
        Self::new(
            "IFC.DOOR.REFERENCE.EQUAL",
            Severity::Warning,
            &["IfcDoor"],
            AttributeRef::new("Pset_DoorCommon", "Reference"),
            AttributeRef::new("Pset_ManufacturerTypeInformation", "ModelReference"),
        )
    }
}

impl Rule for RequireEqualStrings {
    fn id(&self) -> &str {
        &self.id
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, model: &dyn BuildingModel) -> Result<Vec<Issue>, ModelError> {
        let resolver = AttributeResolver::new(model);
        let mut issues = Vec::new();
        for entity in matching_entities(model, &self.classes)? {
            let Some(left_group) = resolver.find_pset(&entity, &self.left.set)? else {
                continue;
            };
            let Some(left) = as_string(left_group.group.attribute(&self.left.key)) else {
                continue;
            };
            let Some(right_group) = resolver.find_pset(&entity, &self.right.set)? else {
                continue;
            };
            let Some(right) = as_string(right_group.group.attribute(&self.right.key)) else {
                continue;
            };
            if left == right {
                continue;
            }
            issues.push(
                Issue::new(
                    &self.id,
                    self.severity,
                    &entity,
                    left_group.source(),
                    self.left.to_string(),
                    format!(
                        "`{}` ('{}') does not equal `{}` ('{}')",
                        self.left, left, self.right, right
                    ),
                )
                .with_expected(right)
                .with_actual(Some(left)),
            );
        }
        Ok(issues)
    }
}

/// The instance-level value of `Pset.Key` must agree with the type-level
/// value of the same locator. Case-insensitive text compare; numbers are
/// never parsed, so `10` and `10.0` differ.
#[derive(Debug, Clone)]
pub struct RequireInstanceEqualsType {
    id: String,
    severity: Severity,
    classes: ClassFilter,
    target: AttributeRef,
}

impl RequireInstanceEqualsType {
    pub fn new(id: &str, severity: Severity, classes: &[&str], pset: &str, key: &str) -> Self {
        Self {
            id: id.to_string(),
            severity,
            classes: ClassFilter::new(classes),
            target: AttributeRef::new(pset, key),
        }
    }

    pub fn wall_fire_rating() -> Self {
        Self::new(
            "IFC.WALL.FIRERATING.TYPE_CONSISTENT",
            Severity::Warning,
            WALL_CLASSES,
            "Pset_WallCommon",
            "FireRating",
        )
    }
}

impl Rule for RequireInstanceEqualsType {
    fn id(&self) -> &str {
        &self.id
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, model: &dyn BuildingModel) -> Result<Vec<Issue>, ModelError> {
        let resolver = AttributeResolver::new(model);
        let mut issues = Vec::new();
        for entity in matching_entities(model, &self.classes)? {
            let instance_sets = resolver.instance_property_sets(&entity)?;
            let instance_value = first_named(&instance_sets, &self.target.set)
                .and_then(|g| as_string(g.attribute(&self.target.key)));
            let Some(instance_value) = instance_value else { continue };

            let type_sets = resolver.type_property_sets(&entity)?;
            let type_value = first_named(&type_sets, &self.target.set)
                .and_then(|g| as_string(g.attribute(&self.target.key)));
            let Some(type_value) = type_value else { continue };

            if instance_value.to_lowercase() == type_value.to_lowercase() {
                continue;
            }
            issues.push(
                Issue::new(
                    &self.id,
                    self.severity,
                    &entity,
                    IssueSource::PsetInstance,
                    self.target.to_string(),
                    format!(
                        "Instance value '{}' of `{}` differs from type value '{}'",
                        instance_value, self.target, type_value
                    ),
                )
                .with_expected(type_value)
                .with_actual(Some(instance_value)),
            );
        }
        Ok(issues)
    }
}
