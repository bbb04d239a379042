use bimcheck_core::types::Entity;
use serde::{Deserialize, Serialize};

/// Closed severity set. Serializes as the bare variant label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    /// Observational finding, not a failure.
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Where the checked value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueSource {
    /// A direct attribute of the entity (name, global id).
    Entity,
    PsetInstance,
    PsetType,
    QtoInstance,
    QtoType,
}

impl IssueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueSource::Entity => "Entity",
            IssueSource::PsetInstance => "PsetInstance",
            IssueSource::PsetType => "PsetType",
            IssueSource::QtoInstance => "QtoInstance",
            IssueSource::QtoType => "QtoType",
        }
    }
}

impl std::fmt::Display for IssueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding emitted by one rule for one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub rule_id: String,
    pub severity: Severity,
    pub ifc_class: String,
    pub global_id: String,
    pub name: Option<String>,
    pub message: String,
    /// `Pset.Key` locator, or a bare set name for existence checks.
    pub path: String,
    pub source: IssueSource,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl Issue {
    pub fn new(
        rule_id: &str,
        severity: Severity,
        entity: &Entity,
        source: IssueSource,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            severity,
            ifc_class: entity.type_name.clone(),
            global_id: entity.global_id.clone(),
            name: entity.name.clone(),
            message: message.into(),
            path: path.into(),
            source,
            expected: None,
            actual: None,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_actual(mut self, actual: Option<String>) -> Self {
        self.actual = actual;
        self
    }
}

/// Every issue of one run against one model, in rule-then-entity order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub ifc_path: String,
    pub issues: Vec<Issue>,
}

impl RunResult {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}
