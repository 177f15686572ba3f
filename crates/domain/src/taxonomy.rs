//! Taxonomy — the closed sets of kinds an automation may use.
//!
//! Every table here is fixed. Anything outside them is rejected by the
//! validators; there is no registration mechanism.

use serde::{Deserialize, Serialize};

macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in table order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// The configuration keyword for this member.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }

            /// Look up a member by its configuration keyword.
            #[must_use]
            pub fn parse(text: &str) -> Option<Self> {
                match text {
                    $( $text => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_set! {
    /// Value of a trigger's `platform` key.
    pub enum TriggerPlatform {
        Event => "event",
        #[serde(rename = "homeassistant")]
        HomeAssistant => "homeassistant",
        Mqtt => "mqtt",
        NumericState => "numeric_state",
        State => "state",
        Sun => "sun",
        Tag => "tag",
        Template => "template",
        Time => "time",
        TimePattern => "time_pattern",
        Webhook => "webhook",
        Zone => "zone",
    }
}

closed_set! {
    /// Value of a condition's `condition` key.
    pub enum ConditionKind {
        And => "and",
        Or => "or",
        Not => "not",
        Device => "device",
        NumericState => "numeric_state",
        State => "state",
        Sun => "sun",
        Template => "template",
        Time => "time",
        Trigger => "trigger",
        Zone => "zone",
    }
}

closed_set! {
    /// Marker key identifying an action's kind.
    ///
    /// Table order is classification priority: when an action carries more
    /// than one marker, the earliest one wins.
    pub enum ActionKind {
        Service => "service",
        Delay => "delay",
        WaitTemplate => "wait_template",
        Repeat => "repeat",
        Choose => "choose",
        If => "if",
        Stop => "stop",
        Variables => "variables",
        Parallel => "parallel",
        Event => "event",
    }
}

closed_set! {
    /// Run mode of an automation.
    pub enum Mode {
        Single => "single",
        Restart => "restart",
        Queued => "queued",
        Parallel => "parallel",
    }
}

/// Action type names known to the runtime that are not used as
/// classification markers.
pub const UNCLASSIFIED_ACTION_TYPES: &[&str] = &["wait_for_trigger"];

/// Keys that satisfy a service action's `target`.
pub const TARGET_KEYS: &[&str] = &["entity_id", "device_id", "area_id"];

/// Keys that give a mapping-form `delay` a duration.
pub const DELAY_UNITS: &[&str] = &["hours", "minutes", "seconds", "milliseconds"];

/// Accepted values of a sun trigger's `event`.
pub const SUN_EVENTS: &[&str] = &["sunrise", "sunset"];

impl ActionKind {
    /// Classify an action mapping by the first marker key it contains.
    #[must_use]
    pub fn classify(action: &serde_json::Map<String, serde_json::Value>) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| action.contains_key(kind.as_str()))
    }
}

impl Mode {
    /// Comma-separated list of every mode keyword.
    #[must_use]
    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|mode| mode.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
