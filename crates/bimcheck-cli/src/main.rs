//! bimcheck CLI — rule-based quality checks for IFC building models.
//!
//! This binary provides the `bimcheck` command with subcommands for checking
//! model snapshots and listing the rule set. See `bimcheck --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod logging;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_json, logging::default_level(cli.verbose));

    let exit_code = match cli.command {
        Commands::Check {
            paths,
            config,
            strict,
        } => commands::check::run(cli.json, paths, config, strict),
        Commands::Rules { config } => commands::rules::run(cli.json, config),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
