pub mod lifecycle_states;
pub mod project_create_request;
pub mod project_status;
