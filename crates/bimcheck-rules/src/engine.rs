use std::path::Path;

use bimcheck_core::config::BimcheckConfig;
use bimcheck_core::model::{BuildingModel, ModelProvider};
use bimcheck_core::types::ModelError;

use crate::rules::{
    AllowedValues, DuplicateGlobalId, MissingName, RequireEqualStrings,
    RequireInstanceEqualsType, RequirePropertySet, RequireQtoQuantityValueNumber,
    RequireQuantitySet, Rule, SurveyValue,
};
use crate::types::{Issue, RunResult, Severity};

/// The fixed, ordered default rule list.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MissingName::new()),
        Box::new(DuplicateGlobalId::new()),
        Box::new(RequirePropertySet::wall_has_pset_wall_common()),
        Box::new(RequireQuantitySet::has_qto_wall_base_quantities()),
        Box::new(AllowedValues::wall_is_external()),
        Box::new(AllowedValues::wall_load_bearing()),
        Box::new(RequireEqualStrings::door_reference_matches_model_reference()),
        Box::new(RequireInstanceEqualsType::wall_fire_rating()),
        Box::new(RequireQtoQuantityValueNumber::wall_length_positive()),
        Box::new(SurveyValue::space_reference()),
    ]
}

/// Runs an ordered rule list against one model at a time.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self::new(default_rules())
    }

    /// Default rules minus those the config disables. Order is preserved.
    pub fn with_config(config: &BimcheckConfig) -> Self {
        let rules = default_rules()
            .into_iter()
            .filter(|rule| !config.rules.is_disabled(rule.id()))
            .filter(|rule| config.rules.survey || rule.severity() != Severity::Info)
            .collect();
        Self::new(rules)
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Evaluate every rule to completion, in order. The first model fault
    /// aborts the pass and no issues are returned.
    pub fn evaluate(&self, model: &dyn BuildingModel) -> Result<Vec<Issue>, ModelError> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            let found = rule.evaluate(model).map_err(|e| {
                tracing::debug!(rule = rule.id(), error = %e, "rule aborted");
                e
            })?;
            tracing::debug!(rule = rule.id(), issues = found.len(), "rule evaluated");
            issues.extend(found);
        }
        Ok(issues)
    }

    /// Open `path` through `provider`, evaluate, and wrap the result.
    ///
    /// The model handle lives only inside this call and is released on every
    /// exit path.
    pub fn run(&self, provider: &dyn ModelProvider, path: &Path) -> Result<RunResult, ModelError> {
        let issues = {
            let model = provider.open(path)?;
            self.evaluate(model.as_ref())?
        };
        let result = RunResult {
            ifc_path: path.display().to_string(),
            issues,
        };
        tracing::info!(
            path = %result.ifc_path,
            rules = self.rules.len(),
            errors = result.count(Severity::Error),
            warnings = result.count(Severity::Warning),
            info = result.count(Severity::Info),
            "model checked"
        );
        Ok(result)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
