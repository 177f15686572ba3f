//! Automation — static checks for trigger → condition → action rules.
//!
//! An automation document arrives as a loosely-typed value tree (usually
//! parsed from YAML). [`validate`] walks it and reports every structural
//! problem it finds without ever failing on unexpected shapes: a list
//! where a mapping was expected is an error message, not a panic.
//!
//! Each section has its own checker:
//! - [`validate_triggers`] — `trigger` list against the platform table
//! - [`validate_conditions`] — `condition` list against the condition table
//! - [`validate_actions`] — `action` list, recursing into `parallel` blocks
//!
//! [`summarize`] renders a one-line description for logs.

mod action;
mod condition;
mod summary;
mod trigger;

pub use action::validate_actions;
pub use condition::validate_conditions;
pub use summary::summarize;
pub use trigger::validate_triggers;

use serde_json::Value;

use crate::error::ValidationError;
use crate::taxonomy::Mode;
use crate::value::{describe, type_name};

/// Outcome of a validation pass: every problem found, in document order.
///
/// Valid exactly when no problems were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<String>,
}

impl Validation {
    /// Wrap a list of problems.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Split into the `(is_valid, errors)` pair.
    #[must_use]
    pub fn into_parts(self) -> (bool, Vec<String>) {
        (self.errors.is_empty(), self.errors)
    }

    /// Turn an invalid outcome into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying every message when invalid.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

/// Validate a complete automation document.
///
/// Checks run independently and their messages are concatenated in this
/// order: trigger/id presence, `id`, `alias`, `mode`, `trigger`,
/// `condition`, `action`. `action` is the only section whose absence is
/// always an error.
#[must_use]
pub fn validate(config: &Value) -> Validation {
    let Some(config) = config.as_object() else {
        return Validation::from_errors(vec![format!(
            "Automation must be a mapping, got {}",
            type_name(config)
        )]);
    };

    let mut errors = Vec::new();

    if !config.contains_key("trigger") && !config.contains_key("id") {
        errors.push("Automation must have either 'trigger' or 'id' field".to_string());
    }

    if let Some(id) = config.get("id") {
        match id.as_str() {
            None => errors.push(format!("ID must be a string, got {}", type_name(id))),
            Some("") => errors.push("ID cannot be empty".to_string()),
            Some(_) => {}
        }
    }

    if let Some(alias) = config.get("alias")
        && !alias.is_string()
    {
        errors.push(format!("Alias must be a string, got {}", type_name(alias)));
    }

    if let Some(mode) = config.get("mode")
        && mode.as_str().and_then(Mode::parse).is_none()
    {
        errors.push(format!(
            "Invalid mode '{}'. Must be one of: {}",
            describe(mode),
            Mode::allowed()
        ));
    }

    if let Some(triggers) = config.get("trigger") {
        errors.extend(validate_triggers(triggers));
    }

    if let Some(conditions) = config.get("condition") {
        errors.extend(validate_conditions(conditions));
    }

    match config.get("action") {
        Some(actions) => errors.extend(validate_actions(actions)),
        None => errors.push("Automation must have 'action' field".to_string()),
    }

    Validation::from_errors(errors)
}

/// Validate and fail with every message when the document is invalid.
///
/// # Errors
///
/// Returns [`ValidationError`] listing all problems found by [`validate`].
pub fn assert_valid(config: &Value) -> Result<(), ValidationError> {
    validate(config).into_result()
}
