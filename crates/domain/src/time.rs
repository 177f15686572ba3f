//! Time and timestamp helpers.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// UTC timestamp used to stamp scan reports.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Check whether a value is a time of day written as `HH:MM` or `HH:MM:SS`.
///
/// Hours must be within `0..=23`, minutes and seconds within `0..=59`.
/// Each component is read as a plain integer, so `"7:5"` is accepted while
/// `"7:5am"` is not. Non-string values are never valid times.
#[must_use]
pub fn is_valid_time_string(value: &Value) -> bool {
    let Some(text) = value.as_str() else {
        return false;
    };

    let parts: Vec<&str> = text.split(':').collect();
    if !matches!(parts.len(), 2 | 3) {
        return false;
    }

    let mut components = Vec::with_capacity(3);
    for part in &parts {
        match part.trim().parse::<i64>() {
            Ok(n) => components.push(n),
            Err(_) => return false,
        }
    }

    let hours = components[0];
    let minutes = components[1];
    let seconds = components.get(2).copied().unwrap_or(0);

    (0..=23).contains(&hours) && (0..=59).contains(&minutes) && (0..=59).contains(&seconds)
}
