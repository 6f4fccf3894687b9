use crate::{FieldConstraint, FieldError};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn test_constraint_labels() {
    assert_eq!(FieldConstraint::Missing.as_str(), "missing");
    assert_eq!(FieldConstraint::WrongType.as_str(), "wrong-type");
    assert_eq!(FieldConstraint::TooShort.as_str(), "too-short");
    assert_eq!(FieldConstraint::NotInEnum.as_str(), "not-in-enum");
    assert_eq!(
        FieldConstraint::InvalidDateFormat.as_str(),
        "invalid-date-format"
    );
    assert_eq!(FieldConstraint::UnknownField.as_str(), "unknown-field");
}

#[test]
fn test_constraint_serializes_as_label() {
    for constraint in [
        FieldConstraint::Missing,
        FieldConstraint::WrongType,
        FieldConstraint::TooShort,
        FieldConstraint::NotInEnum,
        FieldConstraint::InvalidDateFormat,
        FieldConstraint::UnknownField,
    ] {
        let json = serde_json::to_value(constraint).unwrap();
        assert_eq!(json, serde_json::json!(constraint.as_str()));
    }
}

#[test]
fn given_field_error_when_serialized_then_has_field_constraint_and_message() {
    // Given
    let error = FieldError::missing("name");

    // When
    let json = serde_json::to_value(&error).unwrap();

    // Then
    assert_that!(json["field"].as_str().unwrap(), eq("name"));
    assert_that!(json["constraint"].as_str().unwrap(), eq("missing"));
    assert_that!(json["message"].as_str().unwrap(), eq("name is required"));
}

#[test]
fn given_field_error_when_displayed_then_field_prefixes_message() {
    // Given
    let error = FieldError::unknown_field("owner");

    // When
    let rendered = error.to_string();

    // Then
    assert_that!(rendered, eq("owner: owner is not an allowed field"));
}
