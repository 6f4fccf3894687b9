/// Knobs for [`ProjectCreateValidator`](crate::ProjectCreateValidator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidatorOptions {
    /// When `false` (the default) every undeclared input key is reported as
    /// an `unknown-field` error. When `true` undeclared keys are dropped.
    pub allow_unknown_fields: bool,
}
