//! Action — the effects performed when an automation fires.

use serde_json::{Map, Value};

use crate::service::{ServiceRef, ServiceRefError};
use crate::taxonomy::{ActionKind, DELAY_UNITS, TARGET_KEYS};
use crate::value::type_name;

/// Validate an `action` list.
///
/// The list must be non-empty. Each entry is classified with
/// [`ActionKind::classify`]; an entry carrying none of the marker keys is
/// an error. `service`, `delay` and `parallel` actions get structural
/// checks, every other kind is accepted as soon as it is recognised.
///
/// `parallel` blocks are validated with this same function. Their messages
/// are re-emitted as `Action <i> parallel: <message>`, so a problem buried
/// under several levels keeps one prefix per level.
#[must_use]
pub fn validate_actions(actions: &Value) -> Vec<String> {
    let Some(actions) = actions.as_array() else {
        return vec![format!("Actions must be a list, got {}", type_name(actions))];
    };

    if actions.is_empty() {
        return vec!["Automation must have at least one action".to_string()];
    }

    let mut errors = Vec::new();
    for (i, action) in actions.iter().enumerate() {
        let Some(action) = action.as_object() else {
            errors.push(format!(
                "Action {i} must be a mapping, got {}",
                type_name(action)
            ));
            continue;
        };

        match ActionKind::classify(action) {
            Some(ActionKind::Service) => check_service(i, action, &mut errors),
            Some(ActionKind::Delay) => check_delay(i, &action["delay"], &mut errors),
            Some(ActionKind::Parallel) => check_parallel(i, &action["parallel"], &mut errors),
            Some(
                ActionKind::WaitTemplate
                | ActionKind::Repeat
                | ActionKind::Choose
                | ActionKind::If
                | ActionKind::Stop
                | ActionKind::Variables
                | ActionKind::Event,
            ) => {}
            None => errors.push(format!("Action {i} has no recognized action type")),
        }
    }
    errors
}

fn check_service(i: usize, action: &Map<String, Value>, errors: &mut Vec<String>) {
    match action["service"].as_str() {
        None => errors.push(format!("Action {i} service must be a string")),
        Some(service) => match ServiceRef::parse(service) {
            Ok(_) => {}
            Err(ServiceRefError::MissingSeparator) => errors.push(format!(
                "Action {i} service '{service}' must be in format 'domain.service'"
            )),
            Err(ServiceRefError::EmptyPart) => errors.push(format!(
                "Action {i} has invalid service format: '{service}'"
            )),
        },
    }

    if let Some(target) = action.get("target") {
        match target.as_object() {
            None => errors.push(format!("Action {i} target must be a mapping")),
            Some(target) if !TARGET_KEYS.iter().any(|key| target.contains_key(*key)) => {
                errors.push(format!(
                    "Action {i} target must have entity_id, device_id, or area_id"
                ));
            }
            Some(_) => {}
        }
    }
}

fn check_delay(i: usize, delay: &Value, errors: &mut Vec<String>) {
    match delay {
        Value::String(_) => {}
        Value::Object(units) => {
            if !DELAY_UNITS.iter().any(|unit| units.contains_key(*unit)) {
                errors.push(format!("Action {i} delay must have time units"));
            }
        }
        _ => errors.push(format!("Action {i} delay must be a mapping or string")),
    }
}

fn check_parallel(i: usize, parallel: &Value, errors: &mut Vec<String>) {
    if !parallel.is_array() {
        errors.push(format!("Action {i} parallel must be a list"));
        return;
    }
    errors.extend(
        validate_actions(parallel)
            .into_iter()
            .map(|nested| format!("Action {i} parallel: {nested}")),
    );
}
