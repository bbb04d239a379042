use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use bimcheck_core::config::CONFIG_FILE_NAME;
use bimcheck_core::snapshot::SnapshotProvider;
use bimcheck_rules::engine::RuleEngine;
use bimcheck_rules::types::{Issue, RunResult, Severity};

/// Run `bimcheck check` -- evaluate every model and print the results.
///
/// Exit codes: 0 clean, 1 issues that fail the run, 2 a model could not be
/// checked.
pub fn run(json: bool, paths: Vec<PathBuf>, config: Option<PathBuf>, strict: bool) -> i32 {
    let config = super::load_config(config.as_deref());
    let models = collect_models(&paths);
    if models.is_empty() {
        eprintln!("error: no model snapshots found");
        return 2;
    }
    tracing::debug!(models = models.len(), "collected model snapshots");

    let engine = RuleEngine::with_config(&config);
    let mut results = Vec::new();
    let mut fatal = false;
    for model in &models {
        match engine.run(&SnapshotProvider, model) {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("error: {}: {}", model.display(), e);
                fatal = true;
            }
        }
    }

    if json {
        let rendered = if single_file_argument(&paths) {
            results.first().map(serde_json::to_string_pretty)
        } else {
            Some(serde_json::to_string_pretty(&results))
        };
        match rendered {
            Some(Ok(out)) => println!("{}", out),
            Some(Err(e)) => {
                eprintln!("error: failed to serialize results: {}", e);
                return 2;
            }
            None => {}
        }
    } else {
        for result in &results {
            print!("{}", format_result_human(result));
        }
    }

    exit_code(&results, strict, fatal)
}

/// Expand directories into the `*.json` snapshots they contain, sorted by
/// path. Plain paths are kept as given so a missing file is reported later.
pub(crate) fn collect_models(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for path in paths {
        if !path.is_dir() {
            out.push(path.clone());
            continue;
        }
        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|p| is_snapshot(p))
            .collect();
        found.sort();
        out.extend(found);
    }
    out
}

/// One plain file argument prints a bare RunResult; anything else, including
/// a directory holding a single snapshot, prints an array.
pub(crate) fn single_file_argument(paths: &[PathBuf]) -> bool {
    matches!(paths, [only] if !only.is_dir())
}

fn is_snapshot(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        && path.file_name().is_some_and(|name| name != CONFIG_FILE_NAME)
}

pub(crate) fn exit_code(results: &[RunResult], strict: bool, fatal: bool) -> i32 {
    if fatal {
        return 2;
    }
    let failing = results.iter().any(|r| {
        if strict {
            !r.issues.is_empty()
        } else {
            r.has_errors()
        }
    });
    if failing {
        1
    } else {
        0
    }
}

pub(crate) fn format_issue_human(issue: &Issue) -> String {
    let label = match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };
    let mut out = format!(
        "{}[{}]: {} {}",
        label, issue.rule_id, issue.ifc_class, issue.global_id
    );
    if let Some(name) = &issue.name {
        out.push_str(&format!(" \"{}\"", name));
    }
    out.push_str(&format!(
        "\n  {}\n  --> {} ({})\n",
        issue.message, issue.path, issue.source
    ));
    if let Some(expected) = &issue.expected {
        out.push_str(&format!("  expected: {}\n", expected));
    }
    if let Some(actual) = &issue.actual {
        out.push_str(&format!("  actual: '{}'\n", actual));
    }
    out
}

pub(crate) fn format_result_human(result: &RunResult) -> String {
    let mut out = String::new();
    for issue in &result.issues {
        out.push_str(&format_issue_human(issue));
    }
    out.push_str(&format!(
        "{}: {} error(s), {} warning(s), {} info\n",
        result.ifc_path,
        result.count(Severity::Error),
        result.count(Severity::Warning),
        result.count(Severity::Info),
    ));
    out
}
