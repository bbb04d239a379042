//! Configuration file loading for bimcheck.
//!
//! Reads `bimcheck.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "bimcheck.json";

/// Top-level bimcheck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BimcheckConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Rule selection. The rule set itself is fixed; this only switches rules off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Rule ids to skip, e.g. `"IFC.WALL.QTO_BASEQUANTITIES"`.
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Run the informational survey rules.
    #[serde(default = "default_true")]
    pub survey: bool,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            disabled: vec![],
            survey: true,
        }
    }
}

impl Default for BimcheckConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules: RulesConfig::default(),
        }
    }
}

impl RulesConfig {
    pub fn is_disabled(&self, rule_id: &str) -> bool {
        self.disabled.iter().any(|d| d == rule_id)
    }
}

impl BimcheckConfig {
    /// Load configuration from `bimcheck.json` inside the given directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(dir: &Path) -> Self {
        Self::load_file(&dir.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from an explicit file path.
    pub fn load_file(config_path: &Path) -> Self {
        let content = match std::fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}
