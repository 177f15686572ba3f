//! Service — a callable command exposed by an integration.
//!
//! Examples: `light.turn_on`, `switch.toggle`, `climate.set_temperature`.
//!
//! Besides parsing service identifiers, this module checks the `data`
//! payload of calls to a handful of well-known services. Only numeric
//! ranges and required keys are checked, and only for the services listed
//! in [`validate_service_data`]; every other call passes.

use serde_json::Value;

use crate::automation::Validation;
use crate::value::{as_number, describe};

/// A `domain.service` identifier split into its two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRef<'a> {
    pub domain: &'a str,
    pub service: &'a str,
}

/// Why a string is not a `domain.service` identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ServiceRefError {
    /// No `.` separator at all.
    #[error("missing '.' separator")]
    MissingSeparator,
    /// The domain or service half is empty.
    #[error("empty domain or service name")]
    EmptyPart,
}

impl<'a> ServiceRef<'a> {
    /// Split `text` on its first `.`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceRefError::MissingSeparator`] when there is no `.`, and
    /// [`ServiceRefError::EmptyPart`] when either half is empty.
    pub fn parse(text: &'a str) -> Result<Self, ServiceRefError> {
        let (domain, service) = text
            .split_once('.')
            .ok_or(ServiceRefError::MissingSeparator)?;
        if domain.is_empty() || service.is_empty() {
            return Err(ServiceRefError::EmptyPart);
        }
        Ok(Self { domain, service })
    }
}

impl std::fmt::Display for ServiceRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.domain, self.service)
    }
}

/// Check the payload of a service call against per-service rules.
///
/// | service | rule |
/// |---|---|
/// | `light.turn_on` | `brightness` in 0–255, `brightness_pct` in 0–100, `color_temp` ≥ 0, `transition` ≥ 0 |
/// | `climate.set_temperature` | `temperature` required, within -50–50 |
/// | `notify.*` | `message` required |
///
/// Constrained fields must be numbers; booleans read as `0` or `1`. A `data`
/// value that is not a mapping is treated as empty.
#[must_use]
pub fn validate_service_data(domain: &str, service: &str, data: &Value) -> Validation {
    let empty = serde_json::Map::new();
    let data = data.as_object().unwrap_or(&empty);
    let mut errors = Vec::new();

    match (domain, service) {
        ("light", "turn_on") => {
            check_number(data, "brightness", "must be 0-255", &mut errors, |n| {
                (0.0..=255.0).contains(&n)
            });
            check_number(data, "brightness_pct", "must be 0-100", &mut errors, |n| {
                (0.0..=100.0).contains(&n)
            });
            check_number(data, "color_temp", "must be positive", &mut errors, |n| n >= 0.0);
            check_number(data, "transition", "must be non-negative", &mut errors, |n| {
                n >= 0.0
            });
        }
        ("climate", "set_temperature") => match data.get("temperature") {
            None => {
                errors.push("climate.set_temperature requires 'temperature' field".to_string());
            }
            Some(temp) => {
                if !as_number(temp).is_some_and(|t| (-50.0..=50.0).contains(&t)) {
                    errors.push(format!("temperature seems unrealistic: {}", describe(temp)));
                }
            }
        },
        ("notify", _) => {
            if !data.contains_key("message") {
                errors.push("notify services require 'message' field".to_string());
            }
        }
        _ => {}
    }

    Validation::from_errors(errors)
}

fn check_number(
    data: &serde_json::Map<String, Value>,
    key: &str,
    rule: &str,
    errors: &mut Vec<String>,
    in_range: impl Fn(f64) -> bool,
) {
    if let Some(value) = data.get(key)
        && !as_number(value).is_some_and(&in_range)
    {
        errors.push(format!("{key} {rule}, got {}", describe(value)));
    }
}
