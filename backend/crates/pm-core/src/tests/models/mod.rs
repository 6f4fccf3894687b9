mod lifecycle_states;
mod project_status;
