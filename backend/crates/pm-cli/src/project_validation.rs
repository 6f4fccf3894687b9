//! Glue between configuration, input sources and the project validator.

use crate::{CliError, CliResult};

use pm_config::ValidationConfig;
use pm_core::{
    FieldError, LifecycleStates, ProjectCreateRequest, ProjectCreateValidator, ValidatorOptions,
};

use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

/// Path argument meaning "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Result of validating one project creation input
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectCreateRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn from_result(result: Result<ProjectCreateRequest, Vec<FieldError>>) -> Self {
        match result {
            Ok(project) => Self {
                valid: true,
                project: Some(project),
                errors: Vec::new(),
            },
            Err(errors) => Self {
                valid: false,
                project: None,
                errors,
            },
        }
    }
}

/// Build the lifecycle set configured for this deployment
#[track_caller]
pub fn lifecycle_states(config: &ValidationConfig) -> CliResult<LifecycleStates> {
    Ok(LifecycleStates::new(config.lifecycle_states.iter().cloned())?)
}

/// Build a validator from configuration.
///
/// `allow_unknown_fields` can only relax the configured setting.
#[track_caller]
pub fn build_validator(
    config: &ValidationConfig,
    allow_unknown_fields: bool,
) -> CliResult<ProjectCreateValidator> {
    let options = ValidatorOptions {
        allow_unknown_fields: config.allow_unknown_fields || allow_unknown_fields,
    };

    Ok(ProjectCreateValidator::new(
        lifecycle_states(config)?,
        options,
    ))
}

/// Read the raw input document from a file, or from stdin for `None` / `-`
pub fn read_input(file: Option<&Path>) -> CliResult<String> {
    match file {
        Some(path) if path != Path::new(STDIN_PATH) => {
            std::fs::read_to_string(path).map_err(|e| CliError::from_io(path, e))
        }
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|e| CliError::from_io(PathBuf::from(STDIN_PATH), e))?;
            Ok(raw)
        }
    }
}

/// Parse `raw` as JSON and run it through `validator`.
///
/// Malformed JSON is an error; well-formed but unacceptable input yields an
/// invalid report.
pub fn validate_project(
    validator: &ProjectCreateValidator,
    raw: &str,
) -> CliResult<ValidationReport> {
    let input: Value = serde_json::from_str(raw)?;

    let result = validator.validate(&input);
    match &result {
        Ok(project) => debug!("Project '{}' passed validation", project.name()),
        Err(errors) => info!(
            "Project input rejected: {}",
            errors
                .iter()
                .map(|error| format!("{}={}", error.field, error.constraint))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }

    Ok(ValidationReport::from_result(result))
}
