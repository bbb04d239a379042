//! Rules over an entity's own identity attributes.

use std::collections::HashMap;

use bimcheck_core::model::BuildingModel;
use bimcheck_core::types::ModelError;

use crate::rules::Rule;
use crate::types::{Issue, IssueSource, Severity};

/// Flags entities whose display name is missing, empty or whitespace-only.
#[derive(Debug, Clone, Default)]
pub struct MissingName;

impl MissingName {
    pub const ID: &'static str = "IFC.NAME.MISSING";

    pub fn new() -> Self {
        Self
    }
}

impl Rule for MissingName {
    fn id(&self) -> &str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn evaluate(&self, model: &dyn BuildingModel) -> Result<Vec<Issue>, ModelError> {
        let mut issues = Vec::new();
        for entity in model.entities()? {
            let blank = entity.name.as_deref().map_or(true, |n| n.trim().is_empty());
            if !blank {
                continue;
            }
            issues.push(
                Issue::new(
                    Self::ID,
                    self.severity(),
                    &entity,
                    IssueSource::Entity,
                    "Name",
                    format!("{} has no name", entity.type_name),
                )
                .with_expected("non-empty name")
                .with_actual(entity.name.clone()),
            );
        }
        Ok(issues)
    }
}

/// Flags every entity whose global identifier is shared with another entity.
#[derive(Debug, Clone, Default)]
pub struct DuplicateGlobalId;

impl DuplicateGlobalId {
    pub const ID: &'static str = "IFC.GLOBALID.DUPLICATE";

    pub fn new() -> Self {
        Self
    }
}

impl Rule for DuplicateGlobalId {
    fn id(&self) -> &str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn evaluate(&self, model: &dyn BuildingModel) -> Result<Vec<Issue>, ModelError> {
        let entities = model.entities()?;
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entity in &entities {
            *counts.entry(entity.global_id.as_str()).or_insert(0) += 1;
        }

        // Second pass keeps model order; one issue per participating entity.
        let mut issues = Vec::new();
        for entity in &entities {
            let count = counts.get(entity.global_id.as_str()).copied().unwrap_or(0);
            if count < 2 {
                continue;
            }
            issues.push(
                Issue::new(
                    Self::ID,
                    self.severity(),
                    entity,
                    IssueSource::Entity,
                    "GlobalId",
                    format!(
                        "GlobalId '{}' is shared by {} entities",
                        entity.global_id, count
                    ),
                )
                .with_expected("unique GlobalId")
                .with_actual(Some(entity.global_id.clone())),
            );
        }
        Ok(issues)
    }
}
