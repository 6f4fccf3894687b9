use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ALLOW_UNKNOWN_FIELDS, DEFAULT_LIFECYCLE_STATES,
};

use std::collections::HashSet;

use serde::Deserialize;

// Validation constraints
pub const MIN_LIFECYCLE_STATES: usize = 1;
pub const MAX_LIFECYCLE_STATES: usize = 64;
pub const MAX_LIFECYCLE_STATE_LENGTH: usize = 64;

/// Settings for project creation input validation.
///
/// `lifecycle_states` mirrors the status labels of the persistence schema;
/// keep the two in step.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Drop undeclared input fields instead of rejecting them
    pub allow_unknown_fields: bool,
    /// Labels accepted for a project's `status`
    pub lifecycle_states: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allow_unknown_fields: DEFAULT_ALLOW_UNKNOWN_FIELDS,
            lifecycle_states: DEFAULT_LIFECYCLE_STATES
                .iter()
                .map(|state| state.to_string())
                .collect(),
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let count = self.lifecycle_states.len();
        if !(MIN_LIFECYCLE_STATES..=MAX_LIFECYCLE_STATES).contains(&count) {
            return Err(ConfigError::validation(format!(
                "validation.lifecycle_states must have {}-{} entries, got {}",
                MIN_LIFECYCLE_STATES, MAX_LIFECYCLE_STATES, count
            )));
        }

        let mut seen = HashSet::new();
        for state in &self.lifecycle_states {
            if state.trim().is_empty() {
                return Err(ConfigError::validation(
                    "validation.lifecycle_states cannot contain blank entries",
                ));
            }

            if state.chars().count() > MAX_LIFECYCLE_STATE_LENGTH {
                return Err(ConfigError::validation(format!(
                    "validation.lifecycle_states entry '{}' exceeds {} characters",
                    state, MAX_LIFECYCLE_STATE_LENGTH
                )));
            }

            if !seen.insert(state.as_str()) {
                return Err(ConfigError::validation(format!(
                    "validation.lifecycle_states contains duplicate entry '{}'",
                    state
                )));
            }
        }

        Ok(())
    }
}
