//! Error types for the core element model.

use thiserror::Error;

/// Returned when a string does not name any variant of a tag enum.
///
/// # Examples
///
/// ```
/// use astrolabe_core::diagram::DiagramKind;
///
/// let err = "flowchart".parse::<DiagramKind>().unwrap_err();
/// assert_eq!(err.to_string(), "unknown diagram kind `flowchart`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct ParseVariantError {
    kind: &'static str,
    value: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}
