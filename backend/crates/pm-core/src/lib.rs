//! Project creation input validation.
//!
//! [`ProjectCreateValidator`] turns an untrusted JSON record into a normalized
//! [`ProjectCreateRequest`], or into the full list of [`FieldError`]s that
//! explain why it was rejected.

pub mod error;
pub mod models;
pub mod validation;


pub use error::{CoreError, Result};
pub use models::lifecycle_states::{LifecycleState, LifecycleStates};
pub use models::project_create_request::ProjectCreateRequest;
pub use models::project_status::ProjectStatus;
pub use validation::field_error::{FieldConstraint, FieldError};
pub use validation::field_rules::MIN_NAME_LENGTH;
pub use validation::iso8601::parse_iso8601;
pub use validation::project_create_validator::{ProjectCreateValidator, ROOT_FIELD};
pub use validation::validator_options::ValidatorOptions;
