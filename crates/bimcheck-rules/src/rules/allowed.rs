use bimcheck_core::model::BuildingModel;
use bimcheck_core::types::{Entity, ModelError};

use crate::coercion::as_string;
use crate::resolver::AttributeResolver;
use crate::rules::presence::WALL_CLASSES;
use crate::rules::{matching_entities, AttributeRef, ClassFilter, Rule};
use crate::types::{Issue, IssueSource, Severity};

const BOOLEAN_LABELS: &[&str] = &["TRUE", "FALSE"];

/// Value of `Pset.Key` must be one of a configured set.
///
/// Stages, in order: property set present, property present, value non-empty,
/// value allowed. Observed and allowed values are both trimmed, and compared
/// case-sensitively. With `skip_if_missing`, failures of the first three
/// stages are not reported.
#[derive(Debug, Clone)]
pub struct AllowedValues {
    id: String,
    severity: Severity,
    classes: ClassFilter,
    target: AttributeRef,
    allowed: Vec<String>,
    skip_if_missing: bool,
}

impl AllowedValues {
    pub fn new(
        id: &str,
        severity: Severity,
        classes: &[&str],
        pset: &str,
        key: &str,
        allowed: &[&str],
        skip_if_missing: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            severity,
            classes: ClassFilter::new(classes),
            target: AttributeRef::new(pset, key),
            allowed: allowed.iter().map(|v| v.trim().to_string()).collect(),
            skip_if_missing,
        }
    }

    /// `Pset_WallCommon.IsExternal` must be a boolean label. Walls without
    /// the value are left to the presence rules.
    pub fn wall_is_external() -> Self {
        Self::new(
            "IFC.WALL.ISEXTERNAL.ALLOWED",
            Severity::Error,
            WALL_CLASSES,
            "Pset_WallCommon",
            "IsExternal",
            BOOLEAN_LABELS,
            true,
        )
    }

    pub fn wall_load_bearing() -> Self {
        Self::new(
            "IFC.WALL.LOADBEARING.ALLOWED",
            Severity::Warning,
            WALL_CLASSES,
            "Pset_WallCommon",
            "LoadBearing",
            BOOLEAN_LABELS,
            false,
        )
    }

    /// `"One of: A, B"`.
    pub fn expected_text(&self) -> String {
        format!("One of: {}", self.allowed.join(", "))
    }

    fn issue(
        &self,
        entity: &Entity,
        source: IssueSource,
        message: String,
        actual: Option<String>,
    ) -> Issue {
        Issue::new(
            &self.id,
            self.severity,
            entity,
            source,
            self.target.to_string(),
            message,
        )
        .with_expected(self.expected_text())
        .with_actual(actual)
    }
}

impl Rule for AllowedValues {
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
            let Some(found) = resolver.find_pset(&entity, &self.target.set)? else {
                if !self.skip_if_missing {
                    issues.push(self.issue(
                        &entity,
                        IssueSource::PsetInstance,
                        format!("Missing property set `{}`", self.target.set),
                        None,
                    ));
                }
                continue;
            };
            let source = found.source();

            let Some(attribute) = found.group.attribute(&self.target.key) else {
                if !self.skip_if_missing {
                    issues.push(self.issue(
                        &entity,
                        source,
                        format!("Missing property `{}`", self.target),
                        None,
                    ));
                }
                continue;
            };

            let value = match as_string(Some(attribute)) {
                Some(v) if !v.is_empty() => v,
                other => {
                    if !self.skip_if_missing {
                        issues.push(self.issue(
                            &entity,
                            source,
                            format!("Empty value for `{}`", self.target),
                            other,
                        ));
                    }
                    continue;
                }
            };

            if self.allowed.iter().any(|a| *a == value) {
                continue;
            }
            issues.push(self.issue(
                &entity,
                source,
                format!("Invalid value '{}' for `{}`", value, self.target),
                Some(value),
            ));
        }
        Ok(issues)
    }
}
