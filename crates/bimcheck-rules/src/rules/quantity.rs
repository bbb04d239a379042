use bimcheck_core::model::BuildingModel;
use bimcheck_core::types::{Entity, ModelError};

use crate::coercion::{as_number, Numeric};
use crate::resolver::AttributeResolver;
use crate::rules::presence::WALL_CLASSES;
use crate::rules::{format_number, matching_entities, AttributeRef, ClassFilter, Rule};
use crate::types::{Issue, IssueSource, Severity};

/// Quantity `Qto.Name` must be numeric and strictly greater than a bound.
///
/// A missing quantity set, a missing quantity and a value that does not
/// coerce all report "missing or not numeric"; the message says which.
#[derive(Debug, Clone)]
pub struct RequireQtoQuantityValueNumber {
    id: String,
    severity: Severity,
    classes: ClassFilter,
    target: AttributeRef,
    min_exclusive: f64,
}

impl RequireQtoQuantityValueNumber {
    pub fn new(
        id: &str,
        severity: Severity,
        classes: &[&str],
        qto: &str,
        quantity: &str,
        min_exclusive: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            severity,
            classes: ClassFilter::new(classes),
            target: AttributeRef::new(qto, quantity),
            min_exclusive,
        }
    }

    /// Wall length must be positive.
    pub fn wall_length_positive() -> Self {
        Self::new(
            "IFC.WALL.QTO.LENGTH",
            Severity::Error,
            WALL_CLASSES,
            "Qto_WallBaseQuantities",
            "Length",
            0.0,
        )
    }

    fn expected_text(&self) -> String {
        format!("> {}", format_number(self.min_exclusive))
    }

    fn not_numeric(
        &self,
        entity: &Entity,
        source: IssueSource,
        reason: &str,
        actual: Option<String>,
    ) -> Issue {
        Issue::new(
            &self.id,
            self.severity,
            entity,
            source,
            self.target.to_string(),
            format!("Quantity `{}` is missing or not numeric: {}", self.target, reason),
        )
        .with_expected(self.expected_text())
        .with_actual(actual)
    }
}

impl Rule for RequireQtoQuantityValueNumber {
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
            let found = resolver.find_qto(&entity, &self.target.set)?;
            let source = found
                .as_ref()
                .map_or(IssueSource::QtoInstance, |f| f.source());
            let attribute = found
                .as_ref()
                .and_then(|f| f.group.attribute(&self.target.key));

            match as_number(attribute) {
                Numeric::Absent => {
                    issues.push(self.not_numeric(&entity, source, "no value", None));
                }
                Numeric::NotNumeric(raw) => {
                    let reason = format!("'{}' is not a number", raw);
                    issues.push(self.not_numeric(&entity, source, &reason, Some(raw)));
                }
                Numeric::Number(value) if value <= self.min_exclusive => {
                    issues.push(
                        Issue::new(
                            &self.id,
                            self.severity,
                            &entity,
                            source,
                            self.target.to_string(),
                            format!(
                                "Quantity `{}` must be > {}",
                                self.target,
                                format_number(self.min_exclusive)
                            ),
                        )
                        .with_expected(self.expected_text())
                        .with_actual(Some(format_number(value))),
                    );
                }
                Numeric::Number(_) => {}
            }
        }
        Ok(issues)
    }
}
