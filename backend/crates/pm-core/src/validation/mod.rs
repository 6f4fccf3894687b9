pub mod field_error;
pub mod field_rules;
pub mod iso8601;
pub mod project_create_validator;
pub mod validator_options;
