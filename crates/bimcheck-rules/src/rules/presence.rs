//! Existence checks for named property sets and quantity sets.

use bimcheck_core::model::BuildingModel;
use bimcheck_core::types::ModelError;

use crate::resolver::AttributeResolver;
use crate::rules::{matching_entities, ClassFilter, Rule};
use crate::types::{Issue, IssueSource, Severity};

pub const WALL_CLASSES: &[&str] = &["IfcWall", "IfcWallStandardCase"];

/// Entities of the configured classes must carry a property set with this
/// name, either directly or through their type.
#[derive(Debug, Clone)]
pub struct RequirePropertySet {
    id: String,
    severity: Severity,
    classes: ClassFilter,
    pset: String,
}

impl RequirePropertySet {
    pub fn new(id: &str, severity: Severity, classes: &[&str], pset: &str) -> Self {
        Self {
            id: id.to_string(),
            severity,
            classes: ClassFilter::new(classes),
            pset: pset.to_string(),
        }
    }

    /// Walls must have `Pset_WallCommon`.
    pub fn wall_has_pset_wall_common() -> Self {
        Self::new(
            "IFC.WALL.PSET_WALLCOMMON",
            Severity::Error,
            WALL_CLASSES,
            "Pset_WallCommon",
        )
    }
}

impl Rule for RequirePropertySet {
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
            if resolver.has_pset(&entity, &self.pset)? {
                continue;
            }
            issues.push(
                Issue::new(
                    &self.id,
                    self.severity,
                    &entity,
                    IssueSource::PsetInstance,
                    self.pset.as_str(),
                    format!("Missing property set `{}`", self.pset),
                )
                .with_expected(self.pset.as_str()),
            );
        }
        Ok(issues)
    }
}

/// Entities of the configured classes must carry a quantity set with this
/// name, either directly or through their type.
#[derive(Debug, Clone)]
pub struct RequireQuantitySet {
    id: String,
    severity: Severity,
    classes: ClassFilter,
    qto: String,
}

impl RequireQuantitySet {
    pub fn new(id: &str, severity: Severity, classes: &[&str], qto: &str) -> Self {
        Self {
            id: id.to_string(),
            severity,
            classes: ClassFilter::new(classes),
            qto: qto.to_string(),
        }
    }

    /// Walls should have `Qto_WallBaseQuantities`. Advisory.
    pub fn has_qto_wall_base_quantities() -> Self {
        Self::new(
            "IFC.WALL.QTO_BASEQUANTITIES",
            Severity::Warning,
            WALL_CLASSES,
            "Qto_WallBaseQuantities",
        )
    }
}

impl Rule for RequireQuantitySet {
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
            if resolver.has_qto(&entity, &self.qto)? {
                continue;
            }
            issues.push(
                Issue::new(
                    &self.id,
                    self.severity,
                    &entity,
                    IssueSource::QtoInstance,
                    self.qto.as_str(),
                    format!("Missing quantity set `{}`", self.qto),
                )
                .with_expected(self.qto.as_str()),
            );
        }
        Ok(issues)
    }
}
