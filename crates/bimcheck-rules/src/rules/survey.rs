use bimcheck_core::model::BuildingModel;
use bimcheck_core::types::ModelError;

use crate::coercion::as_string;
use crate::resolver::AttributeResolver;
use crate::rules::{matching_entities, AttributeRef, ClassFilter, Rule};
use crate::types::{Issue, Severity};

/// Records the observed value of `Pset.Key` as an Info issue. Entities
/// without the group or key are skipped.
#[derive(Debug, Clone)]
pub struct SurveyValue {
    id: String,
    classes: ClassFilter,
    target: AttributeRef,
}

impl SurveyValue {
    pub fn new(id: &str, classes: &[&str], pset: &str, key: &str) -> Self {
        Self {
            id: id.to_string(),
            classes: ClassFilter::new(classes),
            target: AttributeRef::new(pset, key),
        }
    }

    pub fn space_reference() -> Self {
        Self::new(
            "IFC.SPACE.SURVEY.REFERENCE",
            &["IfcSpace"],
            "Pset_SpaceCommon",
            "Reference",
        )
    }
}

impl Rule for SurveyValue {
    fn id(&self) -> &str {
        &self.id
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn evaluate(&self, model: &dyn BuildingModel) -> Result<Vec<Issue>, ModelError> {
        let resolver = AttributeResolver::new(model);
        let mut issues = Vec::new();
        for entity in matching_entities(model, &self.classes)? {
            let Some(found) = resolver.find_pset(&entity, &self.target.set)? else {
                continue;
            };
            let Some(attribute) = found.group.attribute(&self.target.key) else {
                continue;
            };
            let value = as_string(Some(attribute));
            let message = match &value {
                Some(v) => format!("Observed `{}` = '{}'", self.target, v),
                None => format!("Observed `{}` with no value", self.target),
            };
            issues.push(
                Issue::new(
                    &self.id,
                    Severity::Info,
                    &entity,
                    found.source(),
                    self.target.to_string(),
                    message,
                )
                .with_actual(value),
            );
        }
        Ok(issues)
    }
}
