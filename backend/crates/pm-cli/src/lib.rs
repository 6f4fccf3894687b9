//! pm-cli library
//!
//! Exposes the pieces of the `pm` binary that tests and other crates reuse.

pub mod error;
pub mod logger;
pub mod project_validation;


pub use error::{CliError, Result as CliResult};
pub use project_validation::{
    ValidationReport, build_validator, lifecycle_states, read_input, validate_project,
};
