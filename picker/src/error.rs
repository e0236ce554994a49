//! Configuration errors

use crate::selection::SelectionMode;

/// Errors raised while loading or validating a [`SelectConfig`](crate::SelectConfig).
///
/// The widget itself never fails; these are caught at the configuration
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration was not valid JSON or did not match the expected shape.
    #[error("Invalid select configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Two options share the same value.
    #[error("Duplicate option value (labels {first:?} and {second:?})")]
    DuplicateValue { first: String, second: String },

    /// The initial value has the other selection shape.
    #[error("Initial value does not match {expected:?} selection mode")]
    ModeMismatch { expected: SelectionMode },

    /// The initial value is not one of the options.
    #[error("Initial value {label:?} is not one of the options")]
    UnknownValue { label: String },
}
