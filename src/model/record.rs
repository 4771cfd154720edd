use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque key-value data as sent by the backend.
///
/// Serializes exactly as the JSON object it was decoded from, so fields this crate knows
/// nothing about survive a load/register round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// A string field, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// A string or number field rendered as text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The record's key: `public_key` when present, otherwise `id`.
    pub fn key(&self) -> Option<String> {
        self.text("public_key").or_else(|| self.text("id"))
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_prefers_public_key() {
        let record = Record::new().with("id", 3).with("public_key", "02ff");
        assert_eq!(record.key().as_deref(), Some("02ff"));
    }

    #[test]
    fn test_key_falls_back_to_numeric_id() {
        let record: Record = serde_json::from_value(json!({"id": 1, "name": "A"})).unwrap();
        assert_eq!(record.key().as_deref(), Some("1"));
        assert_eq!(record.str_field("name"), Some("A"));
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let value = json!({"public_key": "02ff", "name": "A", "meta": {"ward": 4}});
        let record: Record = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_value::<Record>(json!([1, 2])).is_err());
    }
}
