//! Quality rules.
//!
//! Every rule reads the model through [`AttributeResolver`](crate::resolver::AttributeResolver)
//! and returns its issues in entity order. Rules never write to the model, so
//! any number of them can run against the same handle.

pub mod allowed;
pub mod consistency;
pub mod identity;
pub mod presence;
pub mod quantity;
pub mod survey;

pub use allowed::AllowedValues;
pub use consistency::{RequireEqualStrings, RequireInstanceEqualsType};
pub use identity::{DuplicateGlobalId, MissingName};
pub use presence::{RequirePropertySet, RequireQuantitySet};
pub use quantity::RequireQtoQuantityValueNumber;
pub use survey::SurveyValue;

use bimcheck_core::model::BuildingModel;
use bimcheck_core::types::{Entity, ModelError};

use crate::types::{Issue, Severity};

/// A single declarative quality rule.
pub trait Rule {
    /// Stable identifier, e.g. `IFC.NAME.MISSING`.
    fn id(&self) -> &str;

    fn severity(&self) -> Severity;

    /// Evaluate against a model handle. The handle must stay valid until the
    /// call returns; the returned issues own all their data.
    fn evaluate(&self, model: &dyn BuildingModel) -> Result<Vec<Issue>, ModelError>;
}

/// Exact, case-insensitive match of an entity's type name against a list of
/// class literals. No subtype expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFilter {
    classes: Vec<String>,
}

impl ClassFilter {
    pub fn new(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        self.classes
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&entity.type_name))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// `Pset.Key` locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRef {
    pub set: String,
    pub key: String,
}

impl AttributeRef {
    pub fn new(set: &str, key: &str) -> Self {
        Self {
            set: set.to_string(),
            key: key.to_string(),
        }
    }
}

impl std::fmt::Display for AttributeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.set, self.key)
    }
}

/// Entities of the model accepted by `filter`, in model order.
pub(crate) fn matching_entities(
    model: &dyn BuildingModel,
    filter: &ClassFilter,
) -> Result<Vec<Entity>, ModelError> {
    Ok(model
        .entities()?
        .into_iter()
        .filter(|e| filter.matches(e))
        .collect())
}

/// Numbers in messages use the shortest round-trip form (`0`, `2.5`).
pub(crate) fn format_number(value: f64) -> String {
    value.to_string()
}
