//! Ordered rule table for project creation input.
//!
//! Each declared field has one [`FieldRule`]: a presence requirement plus an
//! accept step that parses the field's text once and either stores the typed
//! value on a [`ProjectDraft`] or returns the error it violates. Rules are
//! checked in table order and a field reports at most one error.

use crate::validation::iso8601::parse_iso8601;
use crate::{FieldConstraint, FieldError, LifecycleState, LifecycleStates, ProjectCreateRequest};

use chrono::{DateTime, Utc};
use serde_json::Value;

pub const NAME_FIELD: &str = "name";
pub const DESCRIPTION_FIELD: &str = "description";
pub const COLOR_FIELD: &str = "color";
pub const STATUS_FIELD: &str = "status";
pub const DEADLINE_FIELD: &str = "deadline";

/// Minimum project name length, in characters, after trimming whitespace
pub const MIN_NAME_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    Required,
    Optional,
}

type Accept = fn(&str, &LifecycleStates, &mut ProjectDraft) -> Result<(), FieldError>;

pub(crate) struct FieldRule {
    pub(crate) field: &'static str,
    presence: Presence,
    accept: Accept,
}

pub(crate) const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: NAME_FIELD,
        presence: Presence::Required,
        accept: accept_name,
    },
    FieldRule {
        field: DESCRIPTION_FIELD,
        presence: Presence::Optional,
        accept: |value, _, draft| {
            draft.description = Some(value.to_string());
            Ok(())
        },
    },
    FieldRule {
        field: COLOR_FIELD,
        presence: Presence::Optional,
        accept: |value, _, draft| {
            draft.color = Some(value.to_string());
            Ok(())
        },
    },
    FieldRule {
        field: STATUS_FIELD,
        presence: Presence::Optional,
        accept: accept_status,
    },
    FieldRule {
        field: DEADLINE_FIELD,
        presence: Presence::Optional,
        accept: accept_deadline,
    },
];

/// Typed values accumulated by the rules for one input.
///
/// `name` is only meaningful once every rule passed: the required `name` rule
/// reports an error whenever it leaves the default in place.
#[derive(Debug, Default)]
pub(crate) struct ProjectDraft {
    name: String,
    description: Option<String>,
    color: Option<String>,
    status: Option<LifecycleState>,
    deadline: Option<DateTime<Utc>>,
}

impl ProjectDraft {
    pub(crate) fn into_request(self) -> ProjectCreateRequest {
        ProjectCreateRequest::new(
            self.name,
            self.description,
            self.color,
            self.status,
            self.deadline,
        )
    }
}

fn accept_name(
    value: &str,
    _: &LifecycleStates,
    draft: &mut ProjectDraft,
) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Err(FieldError::new(
            NAME_FIELD,
            FieldConstraint::TooShort,
            format!(
                "{} must be at least {} characters",
                NAME_FIELD, MIN_NAME_LENGTH
            ),
        ));
    }

    draft.name = trimmed.to_string();
    Ok(())
}

fn accept_status(
    value: &str,
    states: &LifecycleStates,
    draft: &mut ProjectDraft,
) -> Result<(), FieldError> {
    let status = states.resolve(value).ok_or_else(|| {
        FieldError::new(
            STATUS_FIELD,
            FieldConstraint::NotInEnum,
            format!("{} must be one of: {}", STATUS_FIELD, states),
        )
    })?;

    draft.status = Some(status);
    Ok(())
}

fn accept_deadline(
    value: &str,
    _: &LifecycleStates,
    draft: &mut ProjectDraft,
) -> Result<(), FieldError> {
    let deadline = parse_iso8601(value).ok_or_else(|| {
        FieldError::new(
            DEADLINE_FIELD,
            FieldConstraint::InvalidDateFormat,
            format!("{} must be a valid ISO-8601 date string", DEADLINE_FIELD),
        )
    })?;

    draft.deadline = Some(deadline);
    Ok(())
}

impl FieldRule {
    /// Check this rule against the field's raw value and record it on `draft`.
    ///
    /// An optional field that is absent leaves `draft` untouched. JSON `null`
    /// counts as absent.
    pub(crate) fn apply(
        &self,
        value: Option<&Value>,
        states: &LifecycleStates,
        draft: &mut ProjectDraft,
    ) -> Result<(), FieldError> {
        let value = match value {
            None | Some(Value::Null) => {
                return match self.presence {
                    Presence::Required => Err(FieldError::missing(self.field)),
                    Presence::Optional => Ok(()),
                };
            }
            Some(value) => value,
        };

        let Some(text) = value.as_str() else {
            return Err(FieldError::wrong_type(self.field, "a string"));
        };

        (self.accept)(text, states, draft)
    }
}

pub(crate) fn is_declared_field(key: &str) -> bool {
    FIELD_RULES.iter().any(|rule| rule.field == key)
}
