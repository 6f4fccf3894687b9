//! pm - project input validation CLI
//!
//! Checks project creation input against the configured field rules and
//! prints a JSON report.
//!
//! # Examples
//!
//! ```bash
//! # Validate a request body stored in a file
//! pm project validate --file request.json --pretty
//!
//! # Validate from stdin, dropping unknown fields
//! echo '{"name": "Roadmap", "owner": "me"}' | pm project validate --allow-unknown-fields
//!
//! # Show the accepted lifecycle states
//! pm project statuses
//! ```

mod cli;
mod commands;
mod project_commands;

use crate::{cli::Cli, commands::Commands, project_commands::ProjectCommands};

use pm_cli::{
    CliResult, build_validator, lifecycle_states, logger, read_input, validate_project,
};

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the command. `Ok(false)` means the input was rejected.
fn run(cli: Cli) -> CliResult<bool> {
    let config = pm_config::Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    match cli.command {
        Commands::Project { action } => match action {
            ProjectCommands::Validate {
                file,
                allow_unknown_fields,
            } => {
                let validator = build_validator(&config.validation, allow_unknown_fields)?;
                let raw = read_input(file.as_deref())?;
                let report = validate_project(&validator, &raw)?;

                print_json(&report, cli.pretty)?;
                Ok(report.valid)
            }
            ProjectCommands::Statuses => {
                let states = lifecycle_states(&config.validation)?;
                let labels: Vec<&str> = states.iter().collect();

                print_json(&labels, cli.pretty)?;
                Ok(true)
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    println!("{}", json);
    Ok(())
}
