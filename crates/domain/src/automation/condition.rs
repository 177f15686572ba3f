//! Condition — a guard that must be true for the automation to proceed.

use serde_json::{Map, Value};

use crate::taxonomy::ConditionKind;
use crate::time::is_valid_time_string;
use crate::value::{describe, type_name};

/// Validate the `condition` section of an automation.
///
/// Same shape rules as triggers, keyed on `condition` instead of
/// `platform`. Only `state`, `numeric_state` and `time` have kind-specific
/// rules; logical groups (`and`, `or`, `not`) are not descended into.
#[must_use]
pub fn validate_conditions(conditions: &Value) -> Vec<String> {
    let Some(conditions) = conditions.as_array() else {
        return vec![format!(
            "Conditions must be a list, got {}",
            type_name(conditions)
        )];
    };

    let mut errors = Vec::new();
    for (i, condition) in conditions.iter().enumerate() {
        let Some(condition) = condition.as_object() else {
            errors.push(format!(
                "Condition {i} must be a mapping, got {}",
                type_name(condition)
            ));
            continue;
        };

        let Some(kind) = condition.get("condition") else {
            errors.push(format!("Condition {i} missing required 'condition' field"));
            continue;
        };

        let Some(kind) = kind.as_str().and_then(ConditionKind::parse) else {
            errors.push(format!("Condition {i} has invalid type '{}'", describe(kind)));
            continue;
        };

        check_kind(i, kind, condition, &mut errors);
    }
    errors
}

fn check_kind(
    i: usize,
    kind: ConditionKind,
    condition: &Map<String, Value>,
    errors: &mut Vec<String>,
) {
    match kind {
        ConditionKind::State => {
            if !condition.contains_key("entity_id") {
                errors.push(format!("State condition {i} missing required 'entity_id' field"));
            }
            if !condition.contains_key("state") {
                errors.push(format!("State condition {i} missing required 'state' field"));
            }
        }
        ConditionKind::NumericState => {
            if !condition.contains_key("entity_id") {
                errors.push(format!(
                    "Numeric state condition {i} missing required 'entity_id' field"
                ));
            }
            if !condition.contains_key("above") && !condition.contains_key("below") {
                errors.push(format!(
                    "Numeric state condition {i} must have 'above' or 'below'"
                ));
            }
        }
        ConditionKind::Time => {
            let after = condition.get("after");
            let before = condition.get("before");
            if after.is_none() && before.is_none() {
                errors.push(format!("Time condition {i} must have 'after' or 'before'"));
            }
            if after.is_some_and(|t| !is_valid_time_string(t)) {
                errors.push(format!("Time condition {i} has invalid 'after' time format"));
            }
            if before.is_some_and(|t| !is_valid_time_string(t)) {
                errors.push(format!("Time condition {i} has invalid 'before' time format"));
            }
        }
        ConditionKind::And
        | ConditionKind::Or
        | ConditionKind::Not
        | ConditionKind::Device
        | ConditionKind::Sun
        | ConditionKind::Template
        | ConditionKind::Trigger
        | ConditionKind::Zone => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_report_non_list_with_its_type() {
        assert_eq!(
            validate_conditions(&json!("state")),
            ["Conditions must be a list, got string"]
        );
        assert_eq!(
            validate_conditions(&json!(true)),
            ["Conditions must be a list, got boolean"]
        );
    }

    #[test]
    fn should_accept_empty_list() {
        assert!(validate_conditions(&json!([])).is_empty());
    }

    #[test]
    fn should_report_non_mapping_entry() {
        assert_eq!(
            validate_conditions(&json!([["state"]])),
            ["Condition 0 must be a mapping, got list"]
        );
    }

    #[test]
    fn should_report_missing_and_unknown_kind() {
        assert_eq!(
            validate_conditions(&json!([{"entity_id": "a"}, {"condition": "xor"}])),
            [
                "Condition 0 missing required 'condition' field",
                "Condition 1 has invalid type 'xor'",
            ]
        );
    }

    #[test]
    fn should_accept_shallow_kinds_without_further_checks() {
        let conditions = json!([
            {"condition": "and"},
            {"condition": "or", "conditions": "not even a list"},
            {"condition": "not"},
            {"condition": "device"},
            {"condition": "sun"},
            {"condition": "template"},
            {"condition": "trigger"},
            {"condition": "zone"},
        ]);
        assert!(validate_conditions(&conditions).is_empty());
    }

    #[test]
    fn should_require_entity_and_state_for_state_condition() {
        assert_eq!(
            validate_conditions(&json!([{"condition": "state"}])),
            [
                "State condition 0 missing required 'entity_id' field",
                "State condition 0 missing required 'state' field",
            ]
        );
        let ok = json!([{"condition": "state", "entity_id": "sun.sun", "state": "above_horizon"}]);
        assert!(validate_conditions(&ok).is_empty());
    }

    #[test]
    fn should_require_bound_for_numeric_state_condition() {
        assert_eq!(
            validate_conditions(&json!([{"condition": "numeric_state", "entity_id": "sensor.t"}])),
            ["Numeric state condition 0 must have 'above' or 'below'"]
        );
    }

    #[test]
    fn should_require_after_or_before_for_time_condition() {
        assert_eq!(
            validate_conditions(&json!([{"condition": "time"}])),
            ["Time condition 0 must have 'after' or 'before'"]
        );
        assert!(validate_conditions(&json!([{"condition": "time", "before": "06:00"}])).is_empty());
    }

    #[test]
    fn should_check_each_time_bound_format() {
        assert_eq!(
            validate_conditions(&json!([{"condition": "time", "after": "24:00", "before": 600}])),
            [
                "Time condition 0 has invalid 'after' time format",
                "Time condition 0 has invalid 'before' time format",
            ]
        );
    }
}
