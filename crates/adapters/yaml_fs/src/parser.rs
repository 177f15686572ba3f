//! Parsing file contents into the value tree the validator consumes.

use serde_json::Value;

use crate::error::YamlFsError;

/// Parse a document according to its file extension.
///
/// `json` files go through `serde_json`; everything else is read as YAML.
///
/// # Errors
///
/// Returns a parse error, or [`YamlFsError::UnsupportedKey`] /
/// [`YamlFsError::UnsupportedNumber`] when the YAML uses features JSON
/// cannot express.
pub fn parse_document(extension: Option<&str>, content: &str) -> Result<Value, YamlFsError> {
    if extension == Some("json") {
        return Ok(serde_json::from_str(content)?);
    }
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    yaml_to_json_value(&yaml)
}

/// Convert a YAML value tree into its JSON equivalent.
///
/// Scalar mapping keys are stringified and tags are dropped.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, YamlFsError> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| YamlFsError::UnsupportedNumber(n.to_string()))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut object = serde_json::Map::new();
            for (key, value) in map {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(YamlFsError::UnsupportedKey(format!("{other:?}"))),
                };
                object.insert(key, yaml_to_json_value(value)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_parse_yaml_automation() {
        let content = "
id: porch
alias: Porch light
trigger:
  - platform: sun
    event: sunset
  - platform: time
    at: '22:30'
action:
  - service: light.turn_on
    target:
      entity_id: light.porch
    data:
      brightness: 200
      transition: 1.5
";
        let value = parse_document(Some("yaml"), content).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "porch",
                "alias": "Porch light",
                "trigger": [
                    {"platform": "sun", "event": "sunset"},
                    {"platform": "time", "at": "22:30"},
                ],
                "action": [{
                    "service": "light.turn_on",
                    "target": {"entity_id": "light.porch"},
                    "data": {"brightness": 200, "transition": 1.5},
                }],
            })
        );
    }

    #[test]
    fn should_keep_unquoted_times_as_strings() {
        let value = parse_document(Some("yml"), "at: 10:00:00\nbefore: 06:30").unwrap();
        assert_eq!(value, json!({"at": "10:00:00", "before": "06:30"}));
    }

    #[test]
    fn should_stringify_scalar_keys() {
        let value = parse_document(Some("yaml"), "1: one\ntrue: yes").unwrap();
        assert_eq!(value, json!({"1": "one", "true": "yes"}));
    }

    #[test]
    fn should_drop_tags() {
        let value = parse_document(Some("yaml"), "secret: !secret api_key").unwrap();
        assert_eq!(value, json!({"secret": "api_key"}));
    }

    #[test]
    fn should_reject_sequence_keys() {
        let result = parse_document(Some("yaml"), "? [1, 2]\n: pair");
        assert!(matches!(result, Err(YamlFsError::UnsupportedKey(_))));
    }

    #[test]
    fn should_reject_nan() {
        let result = parse_document(Some("yaml"), "value: .nan");
        assert!(matches!(result, Err(YamlFsError::UnsupportedNumber(_))));
    }

    #[test]
    fn should_parse_empty_yaml_as_null() {
        assert_eq!(parse_document(Some("yaml"), "").unwrap(), Value::Null);
    }

    #[test]
    fn should_parse_json_by_extension() {
        let value = parse_document(Some("json"), r#"{"id": "x", "action": []}"#).unwrap();
        assert_eq!(value, json!({"id": "x", "action": []}));
    }

    #[test]
    fn should_report_malformed_input() {
        assert!(matches!(
            parse_document(Some("json"), "{"),
            Err(YamlFsError::Json(_))
        ));
        assert!(matches!(
            parse_document(Some("yaml"), "trigger: [a, b"),
            Err(YamlFsError::Yaml(_))
        ));
    }
}
