//! One-line, human-readable description of an automation.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::value::describe;

/// Describe an automation in a single line for logs.
///
/// Includes whichever of `id`, `alias`, `mode`, trigger platforms,
/// condition kinds and called services are present, joined with `" | "`.
/// Never fails: sections that are not lists count as empty, and entries
/// missing their kind key are listed as `unknown`.
#[must_use]
pub fn summarize(config: &Value) -> String {
    let Some(config) = config.as_object() else {
        return String::new();
    };

    let mut parts = Vec::new();

    for (key, label) in [("id", "ID"), ("alias", "Alias"), ("mode", "Mode")] {
        if let Some(value) = config.get(key) {
            parts.push(format!("{label}: {}", describe(value)));
        }
    }

    if let Some(triggers) = config.get("trigger") {
        parts.push(counted_kinds("Triggers", triggers, "platform"));
    }

    if let Some(conditions) = config.get("condition") {
        parts.push(counted_kinds("Conditions", conditions, "condition"));
    }

    if let Some(actions) = config.get("action") {
        let actions = entries(actions);
        let services: Vec<String> = actions
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|action| action.get("service"))
            .map(describe)
            .collect();
        if services.is_empty() {
            parts.push(format!("Actions: {}", actions.len()));
        } else {
            parts.push(format!(
                "Actions: {} (services: {})",
                actions.len(),
                services.join(", ")
            ));
        }
    }

    parts.join(" | ")
}

fn entries(section: &Value) -> &[Value] {
    section.as_array().map(Vec::as_slice).unwrap_or_default()
}

fn counted_kinds(label: &str, section: &Value, kind_key: &str) -> String {
    let items = entries(section);
    let kinds: BTreeSet<String> = items
        .iter()
        .map(|item| {
            item.as_object()
                .and_then(|item| item.get(kind_key))
                .map_or_else(|| "unknown".to_string(), describe)
        })
        .collect();
    let kinds: Vec<String> = kinds.into_iter().collect();
    format!("{label}: {} ({})", items.len(), kinds.join(", "))
}
