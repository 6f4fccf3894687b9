use crate::{CoreError, LifecycleStates, ProjectStatus};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};

#[test]
fn given_default_when_listed_then_contains_every_project_status() {
    // Given
    let states = LifecycleStates::default();

    // When
    let labels: Vec<&str> = states.iter().collect();

    // Then
    assert_that!(states.len(), eq(ProjectStatus::ALL.len()));
    for status in ProjectStatus::ALL {
        assert!(labels.contains(&status.as_str()));
    }
}

#[test]
fn given_custom_labels_when_new_then_ok() {
    // When
    let result = LifecycleStates::new(["OPEN", "CLOSED"]);

    // Then
    assert_that!(result, ok(anything()));
    let states = result.unwrap();
    assert!(states.contains("OPEN"));
    assert!(states.contains("CLOSED"));
    assert!(!states.contains("ACTIVE"));
}

#[test]
fn given_duplicate_labels_when_new_then_collapsed() {
    // When
    let states = LifecycleStates::new(["OPEN", "OPEN", "CLOSED"]).unwrap();

    // Then
    assert_that!(states.len(), eq(2));
}

#[test]
fn given_no_labels_when_new_then_error() {
    // When
    let result = LifecycleStates::new(Vec::<String>::new());

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_blank_label_when_new_then_error() {
    // When
    let result = LifecycleStates::new(["OPEN", "   "]);

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_member_when_resolve_then_state_with_same_label() {
    // Given
    let states = LifecycleStates::default();

    // When
    let resolved = states.resolve("ARCHIVED");

    // Then
    assert_that!(resolved, some(anything()));
    assert_that!(resolved.unwrap().as_str(), eq("ARCHIVED"));
}

#[test]
fn given_wrong_case_when_resolve_then_none() {
    // Given
    let states = LifecycleStates::default();

    // When
    let resolved = states.resolve("archived");

    // Then
    assert_that!(resolved, none());
}

#[test]
fn given_states_when_displayed_then_labels_joined_in_order() {
    // Given
    let states = LifecycleStates::new(["B", "A"]).unwrap();

    // When
    let rendered = states.to_string();

    // Then
    assert_that!(rendered, eq("A, B"));
}
