//! Trigger — the event pattern that activates an automation.

use serde_json::{Map, Value};

use crate::taxonomy::{SUN_EVENTS, TriggerPlatform};
use crate::time::is_valid_time_string;
use crate::value::{describe, type_name};

/// Validate the `trigger` section of an automation.
///
/// Every entry must be a mapping whose `platform` is a known
/// [`TriggerPlatform`]. Entries that fail that test are reported once and
/// not inspected further; the others get platform-specific checks:
///
/// - `time` needs `at`, a valid `HH:MM[:SS]` string
/// - `state` needs `entity_id`
/// - `numeric_state` needs `entity_id` and at least one of `above`/`below`
/// - `sun` needs `event`, either `sunrise` or `sunset`
#[must_use]
pub fn validate_triggers(triggers: &Value) -> Vec<String> {
    let Some(triggers) = triggers.as_array() else {
        return vec![format!("Triggers must be a list, got {}", type_name(triggers))];
    };

    let mut errors = Vec::new();
    for (i, trigger) in triggers.iter().enumerate() {
        let Some(trigger) = trigger.as_object() else {
            errors.push(format!(
                "Trigger {i} must be a mapping, got {}",
                type_name(trigger)
            ));
            continue;
        };

        let Some(platform) = trigger.get("platform") else {
            errors.push(format!("Trigger {i} missing required 'platform' field"));
            continue;
        };

        let Some(platform) = platform.as_str().and_then(TriggerPlatform::parse) else {
            errors.push(format!(
                "Trigger {i} has invalid platform '{}'",
                describe(platform)
            ));
            continue;
        };

        check_platform(i, platform, trigger, &mut errors);
    }
    errors
}

fn check_platform(
    i: usize,
    platform: TriggerPlatform,
    trigger: &Map<String, Value>,
    errors: &mut Vec<String>,
) {
    match platform {
        TriggerPlatform::Time => match trigger.get("at") {
            None => errors.push(format!("Time trigger {i} missing required 'at' field")),
            Some(at) if !is_valid_time_string(at) => errors.push(format!(
                "Time trigger {i} has invalid time format: {}",
                describe(at)
            )),
            Some(_) => {}
        },
        TriggerPlatform::State => {
            if !trigger.contains_key("entity_id") {
                errors.push(format!("State trigger {i} missing required 'entity_id' field"));
            }
        }
        TriggerPlatform::NumericState => {
            if !trigger.contains_key("entity_id") {
                errors.push(format!(
                    "Numeric state trigger {i} missing required 'entity_id' field"
                ));
            }
            if !trigger.contains_key("above") && !trigger.contains_key("below") {
                errors.push(format!(
                    "Numeric state trigger {i} must have 'above' or 'below'"
                ));
            }
        }
        TriggerPlatform::Sun => match trigger.get("event") {
            None => errors.push(format!("Sun trigger {i} missing required 'event' field")),
            Some(event) if !event.as_str().is_some_and(|e| SUN_EVENTS.contains(&e)) => {
                errors.push(format!(
                    "Sun trigger {i} event must be 'sunrise' or 'sunset'"
                ));
            }
            Some(_) => {}
        },
        TriggerPlatform::Event
        | TriggerPlatform::HomeAssistant
        | TriggerPlatform::Mqtt
        | TriggerPlatform::Tag
        | TriggerPlatform::Template
        | TriggerPlatform::TimePattern
        | TriggerPlatform::Webhook
        | TriggerPlatform::Zone => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_accept_every_platform_without_specific_rules() {
        let triggers = json!([
            {"platform": "event", "event_type": "call"},
            {"platform": "homeassistant", "event": "start"},
            {"platform": "mqtt", "topic": "a/b"},
            {"platform": "tag", "tag_id": "t"},
            {"platform": "template", "value_template": "{{ true }}"},
            {"platform": "time_pattern", "minutes": "/5"},
            {"platform": "webhook", "webhook_id": "w"},
            {"platform": "zone", "entity_id": "person.me", "zone": "zone.home"},
        ]);
        assert!(validate_triggers(&triggers).is_empty());
    }

    #[test]
    fn should_report_non_list_with_its_type() {
        assert_eq!(
            validate_triggers(&json!({"platform": "time"})),
            ["Triggers must be a list, got mapping"]
        );
        assert_eq!(
            validate_triggers(&json!("time")),
            ["Triggers must be a list, got string"]
        );
        assert_eq!(validate_triggers(&json!(null)), ["Triggers must be a list, got null"]);
    }

    #[test]
    fn should_accept_empty_list() {
        assert!(validate_triggers(&json!([])).is_empty());
    }

    #[test]
    fn should_report_non_mapping_entry_and_keep_going() {
        let triggers = json!(["time", {"platform": "state"}]);
        assert_eq!(
            validate_triggers(&triggers),
            [
                "Trigger 0 must be a mapping, got string",
                "State trigger 1 missing required 'entity_id' field",
            ]
        );
    }

    #[test]
    fn should_report_missing_platform() {
        assert_eq!(
            validate_triggers(&json!([{"at": "10:00"}])),
            ["Trigger 0 missing required 'platform' field"]
        );
    }

    #[test]
    fn should_report_unknown_platform_and_skip_platform_checks() {
        assert_eq!(
            validate_triggers(&json!([{"platform": "nope", "at": "99:99"}])),
            ["Trigger 0 has invalid platform 'nope'"]
        );
        assert_eq!(
            validate_triggers(&json!([{"platform": 7}])),
            ["Trigger 0 has invalid platform '7'"]
        );
    }

    #[test]
    fn should_require_at_for_time_trigger() {
        assert_eq!(
            validate_triggers(&json!([{"platform": "time"}])),
            ["Time trigger 0 missing required 'at' field"]
        );
    }

    #[test]
    fn should_report_invalid_time_with_offending_value() {
        assert_eq!(
            validate_triggers(&json!([{"platform": "time", "at": "25:00"}])),
            ["Time trigger 0 has invalid time format: 25:00"]
        );
        assert_eq!(
            validate_triggers(&json!([{"platform": "time", "at": 1030}])),
            ["Time trigger 0 has invalid time format: 1030"]
        );
    }

    #[test]
    fn should_require_entity_id_for_state_trigger() {
        assert!(
            validate_triggers(&json!([{"platform": "state", "entity_id": "light.a"}])).is_empty()
        );
        assert_eq!(
            validate_triggers(&json!([{"platform": "state", "to": "on"}])),
            ["State trigger 0 missing required 'entity_id' field"]
        );
    }

    #[test]
    fn should_report_each_numeric_state_problem_separately() {
        assert_eq!(
            validate_triggers(&json!([{"platform": "numeric_state"}])),
            [
                "Numeric state trigger 0 missing required 'entity_id' field",
                "Numeric state trigger 0 must have 'above' or 'below'",
            ]
        );
    }

    #[test]
    fn should_accept_numeric_state_with_either_bound() {
        let triggers = json!([
            {"platform": "numeric_state", "entity_id": "sensor.t", "above": 20},
            {"platform": "numeric_state", "entity_id": "sensor.t", "below": 5},
        ]);
        assert!(validate_triggers(&triggers).is_empty());
    }

    #[test]
    fn should_check_sun_event() {
        assert!(validate_triggers(&json!([{"platform": "sun", "event": "sunrise"}])).is_empty());
        assert_eq!(
            validate_triggers(&json!([{"platform": "sun"}])),
            ["Sun trigger 0 missing required 'event' field"]
        );
        assert_eq!(
            validate_triggers(&json!([{"platform": "sun", "event": "noon"}])),
            ["Sun trigger 0 event must be 'sunrise' or 'sunset'"]
        );
    }

    #[test]
    fn should_tag_errors_with_entry_index() {
        let triggers = json!([
            {"platform": "time", "at": "10:00"},
            {"platform": "sun", "event": "sunset"},
            {"platform": "time", "at": "10:61"},
        ]);
        assert_eq!(
            validate_triggers(&triggers),
            ["Time trigger 2 has invalid time format: 10:61"]
        );
    }
}
