//! Input validator for project creation.

use crate::validation::field_rules::{FIELD_RULES, ProjectDraft, is_declared_field};
use crate::{FieldError, LifecycleStates, ProjectCreateRequest, ValidatorOptions};

use serde_json::{Map, Value};

/// Field name reported when the input itself is not a JSON object
pub const ROOT_FIELD: &str = "$";

/// Turns untrusted input into a [`ProjectCreateRequest`].
///
/// Stateless and side-effect free: one instance can be shared by any number of
/// callers. All field errors are collected before returning.
#[derive(Debug, Clone, Default)]
pub struct ProjectCreateValidator {
    states: LifecycleStates,
    options: ValidatorOptions,
}

impl ProjectCreateValidator {
    pub fn new(states: LifecycleStates, options: ValidatorOptions) -> Self {
        Self { states, options }
    }

    pub fn lifecycle_states(&self) -> &LifecycleStates {
        &self.states
    }

    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Validate `input` and normalize it.
    ///
    /// Errors follow the rule order (`name`, `description`, `color`,
    /// `status`, `deadline`), then unknown fields in key order.
    pub fn validate(&self, input: &Value) -> Result<ProjectCreateRequest, Vec<FieldError>> {
        let Some(record) = input.as_object() else {
            return Err(vec![FieldError::wrong_type(ROOT_FIELD, "an object")]);
        };

        let mut errors = Vec::new();
        let mut draft = ProjectDraft::default();

        for rule in FIELD_RULES {
            if let Err(error) = rule.apply(record.get(rule.field), &self.states, &mut draft) {
                errors.push(error);
            }
        }

        if !self.options.allow_unknown_fields {
            errors.extend(unknown_fields(record).map(FieldError::unknown_field));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(draft.into_request())
    }
}

fn unknown_fields(record: &Map<String, Value>) -> impl Iterator<Item = &str> {
    record
        .keys()
        .map(String::as_str)
        .filter(|key| !is_declared_field(key))
}
