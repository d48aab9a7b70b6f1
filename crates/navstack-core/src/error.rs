//! Error types for selection parsing.

use thiserror::Error;

/// An option-axis value that is not part of the axis's enumerated domain.
///
/// This can only arise when a value string comes from outside the closed UI
/// controls (e.g. a hand-edited `<select>`); the documented policy is for
/// callers to ignore the mutation and keep the last valid selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {axis} value: {value:?}")]
pub struct ParseAxisError {
    /// Axis name ("theme", "variant", "framework", ...).
    pub axis: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseAxisError {
    pub(crate) fn new(axis: &'static str, value: &str) -> Self {
        Self {
            axis,
            value: value.to_string(),
        }
    }
}
