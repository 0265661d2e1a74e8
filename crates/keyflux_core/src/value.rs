use serde::{Deserialize, Serialize};

/// Value stored under a top-level key.
///
/// Primitives keep their type; objects and arrays are carried opaquely as
/// `Nested` and only ever shown in serialized form.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    Nested(serde_json::Value),
}

impl Value {
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::Text(s),
            nested @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Value::Nested(nested)
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Nested(json) => json.clone(),
        }
    }

    /// Text shown in the key list and used to seed the edit buffer.
    pub fn as_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.clone(),
            Value::Nested(json) => json.to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn primitives_display_as_plain_text() {
        assert_eq!(Value::from_json(json!("hi")).as_display_string(), "hi");
        assert_eq!(Value::from_json(json!(42)).as_display_string(), "42");
        assert_eq!(Value::from_json(json!(1.5)).as_display_string(), "1.5");
        assert_eq!(Value::from_json(json!(true)).as_display_string(), "true");
        assert_eq!(Value::Null.as_display_string(), "");
    }

    #[test]
    fn nested_values_display_as_compact_json() {
        let value = Value::from_json(json!({"nested": true}));

        assert_eq!(value.as_display_string(), r#"{"nested":true}"#);
        assert_eq!(Value::from_json(json!([1, 2])).as_display_string(), "[1,2]");
    }

    #[test]
    fn nested_display_keeps_object_key_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"zeta":1,"alpha":{"b":2,"a":1}}"#).unwrap();

        assert_eq!(
            Value::from_json(json).as_display_string(),
            r#"{"zeta":1,"alpha":{"b":2,"a":1}}"#
        );
    }

    #[test]
    fn serializes_through_json_representation() {
        let value = Value::Nested(json!({"a": [1, "b"]}));
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, value);
        assert_eq!(serde_json::to_string(&Value::from("x")).unwrap(), r#""x""#);
    }
}
