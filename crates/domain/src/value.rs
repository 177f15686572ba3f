//! Helpers for inspecting loosely-typed configuration values.
//!
//! Documents reach the validator as a [`serde_json::Value`] tree regardless
//! of the format they were written in, so every check starts by asking
//! what shape a node has.

use serde_json::Value;

/// Name the kind of a value for use in error messages.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// Render a value for interpolation into a message.
///
/// Strings are written as-is; everything else uses compact JSON.
#[must_use]
pub fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Return the numeric reading of a value, if it has one.
///
/// Booleans read as `0` and `1`.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        _ => None,
    }
}
