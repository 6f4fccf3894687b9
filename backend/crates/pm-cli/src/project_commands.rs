use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Validate a project creation request (JSON) and print the normalized result
    Validate {
        /// JSON file to read; omit or pass '-' for stdin
        #[arg(long, short)]
        file: Option<PathBuf>,

        /// Drop unknown fields instead of rejecting them
        #[arg(long)]
        allow_unknown_fields: bool,
    },
    /// List the lifecycle states accepted for a project's status
    Statuses,
}
