use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldConstraint {
    Missing,
    WrongType,
    TooShort,
    NotInEnum,
    InvalidDateFormat,
    UnknownField,
}

impl FieldConstraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::WrongType => "wrong-type",
            Self::TooShort => "too-short",
            Self::NotInEnum => "not-in-enum",
            Self::InvalidDateFormat => "invalid-date-format",
            Self::UnknownField => "unknown-field",
        }
    }
}

impl std::fmt::Display for FieldConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field-level validation failure.
///
/// Always user-correctable: resubmitting the field with a conforming value
/// clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub constraint: FieldConstraint,
    pub message: String,
}

impl FieldError {
    pub fn new<F: Into<String>, M: Into<String>>(
        field: F,
        constraint: FieldConstraint,
        message: M,
    ) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(
            field,
            FieldConstraint::Missing,
            format!("{} is required", field),
        )
    }

    pub fn wrong_type(field: &str, expected: &str) -> Self {
        Self::new(
            field,
            FieldConstraint::WrongType,
            format!("{} must be {}", field, expected),
        )
    }

    pub fn unknown_field(field: &str) -> Self {
        Self::new(
            field,
            FieldConstraint::UnknownField,
            format!("{} is not an allowed field", field),
        )
    }
}
