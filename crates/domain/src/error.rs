//! Common error types used across the workspace.
//!
//! Validation itself never fails: the checks in [`crate::automation`]
//! return every problem they find as a plain message. [`ValidationError`]
//! exists for callers that prefer to propagate an invalid configuration
//! with `?`, and [`AutovetError`] is what crosses port boundaries.

/// An automation configuration failed validation.
///
/// Carries every message the validator produced, in order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid automation configuration:\n{}", render_bullets(.errors))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

fn render_bullets(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AutovetError {
    /// A configuration did not pass validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A document source (filesystem, parser, …) failed.
    #[error("document source error")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}
