use std::path::PathBuf;

use serde::Serialize;

use bimcheck_rules::engine::RuleEngine;
use bimcheck_rules::types::Severity;

#[derive(Debug, Serialize)]
struct RuleEntry<'a> {
    id: &'a str,
    severity: Severity,
}

/// Run `bimcheck rules` -- list the active rules in evaluation order.
pub fn run(json: bool, config: Option<PathBuf>) -> i32 {
    let config = super::load_config(config.as_deref());
    let engine = RuleEngine::with_config(&config);
    let entries: Vec<RuleEntry> = engine
        .rules()
        .iter()
        .map(|rule| RuleEntry {
            id: rule.id(),
            severity: rule.severity(),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&entries) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("error: failed to serialize rules: {}", e);
                return 2;
            }
        }
    } else {
        for entry in &entries {
            println!("{:<8} {}", entry.severity, entry.id);
        }
    }
    0
}
