mod field_error;
mod iso8601;

use crate::{FieldConstraint, FieldError};

/// Reduce errors to `(field, constraint)` pairs for comparison
pub(crate) fn summarize(errors: &[FieldError]) -> Vec<(&str, FieldConstraint)> {
    errors
        .iter()
        .map(|error| (error.field.as_str(), error.constraint))
        .collect()
}
