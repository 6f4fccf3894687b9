//! Normalized request for creating a project.

use crate::LifecycleState;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A project creation request that passed validation.
///
/// Only the validator constructs this type, so every value satisfies all field
/// constraints at once. Optional fields that were not supplied stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCreateRequest {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deadline: Option<DateTime<Utc>>,
}

impl ProjectCreateRequest {
    pub(crate) fn new(
        name: String,
        description: Option<String>,
        color: Option<String>,
        status: Option<LifecycleState>,
        deadline: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            name,
            description,
            color,
            status,
            deadline,
        }
    }

    /// Project name, trimmed
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn status(&self) -> Option<&LifecycleState> {
        self.status.as_ref()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }
}
