pub mod check;
pub mod completion;
pub mod rules;

use std::path::Path;

use bimcheck_core::config::BimcheckConfig;

/// Explicit `--config` file, else `bimcheck.json` in the working directory,
/// else defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> BimcheckConfig {
    if let Some(path) = explicit {
        if !path.is_file() {
            eprintln!("warning: config file {} not found, using defaults", path.display());
        }
        return BimcheckConfig::load_file(path);
    }
    match std::env::current_dir() {
        Ok(cwd) => BimcheckConfig::load(&cwd),
        Err(_) => BimcheckConfig::default(),
    }
}
