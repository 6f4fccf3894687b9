//! Allowed lifecycle-state labels for a project.
//!
//! The set is owned by the persistence schema and handed to the validator,
//! so nothing in the validation path hardcodes which labels exist.

use crate::{CoreError, ProjectStatus, Result as CoreErrorResult};

use std::collections::BTreeSet;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// A label that was found in a [`LifecycleStates`] set.
///
/// Only obtainable through [`LifecycleStates::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LifecycleState(String);

impl LifecycleState {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of lifecycle-state labels. Membership is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleStates {
    states: BTreeSet<String>,
}

impl LifecycleStates {
    /// Build a set from labels. Duplicates collapse; an empty set or a blank
    /// label is rejected.
    #[track_caller]
    pub fn new<I, S>(labels: I) -> CoreErrorResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut states = BTreeSet::new();

        for label in labels {
            let label = label.into();
            if label.trim().is_empty() {
                return Err(CoreError::Validation {
                    message: "lifecycle state labels cannot be blank".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            states.insert(label);
        }

        if states.is_empty() {
            return Err(CoreError::Validation {
                message: "at least one lifecycle state is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self { states })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.states.contains(label)
    }

    /// Look up `label`, yielding the typed state when it is a member.
    pub fn resolve(&self, label: &str) -> Option<LifecycleState> {
        self.states
            .get(label)
            .map(|state| LifecycleState(state.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Default for LifecycleStates {
    fn default() -> Self {
        Self {
            states: ProjectStatus::ALL
                .iter()
                .map(|status| status.as_str().to_string())
                .collect(),
        }
    }
}

impl std::fmt::Display for LifecycleStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.iter().collect();
        write!(f, "{}", labels.join(", "))
    }
}
