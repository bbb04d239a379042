use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bimcheck", version, about = "Rule-based quality checks for IFC building models")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Emit log lines as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check model snapshots against the rule set
    Check {
        /// Snapshot files, or directories searched for `*.json` snapshots
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Config file (default: ./bimcheck.json when present)
        #[arg(long, env = "BIMCHECK_CONFIG")]
        config: Option<PathBuf>,
        /// Exit non-zero on any issue, not only errors
        #[arg(long)]
        strict: bool,
    },

    /// List the active rules
    Rules {
        /// Config file (default: ./bimcheck.json when present)
        #[arg(long, env = "BIMCHECK_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
