//! The stored record type.
//!
//! A [`Record`] is an opaque JSON object that must carry a non-empty string
//! `id`. Everything else is caller-defined and passed through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Name of the attribute used as the store key.
pub const ID_ATTRIBUTE: &str = "id";

/// Errors raised when a JSON object cannot be used as a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record is missing the \"id\" attribute")]
    MissingId,
    #[error("Record \"id\" must be a non-empty string")]
    InvalidId,
}

/// A stored item identified by its `id` attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    attributes: Map<String, Value>,
}

impl Record {
    /// Builds a record from a JSON object, validating the `id` attribute.
    pub fn from_attributes(attributes: Map<String, Value>) -> Result<Self, RecordError> {
        match attributes.get(ID_ATTRIBUTE) {
            None => Err(RecordError::MissingId),
            Some(Value::String(id)) if !id.is_empty() => Ok(Self { attributes }),
            Some(_) => Err(RecordError::InvalidId),
        }
    }

    /// The record's identifier.
    pub fn id(&self) -> &str {
        // Validated on construction.
        self.attributes
            .get(ID_ATTRIBUTE)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Looks up a single attribute.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }

    /// Sets a non-key attribute. Returns the previous value, if any.
    ///
    /// The `id` attribute is immutable and is left untouched.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        if name == ID_ATTRIBUTE {
            return None;
        }
        self.attributes.insert(name, value)
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = RecordError;

    fn try_from(attributes: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_attributes(attributes)
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(attributes) => Self::from_attributes(attributes),
            _ => Err(RecordError::MissingId),
        }
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record.attributes
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_json() {
        let record: Record = serde_json::from_str(r#"{"id":"u1","name":"Alice"}"#).unwrap();

        assert_eq!(record.id(), "u1");
        assert_eq!(record.get("name"), Some(&json!("Alice")));
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = Record::try_from(json!({"id": "u1", "name": "Alice"})).unwrap();

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":"u1","name":"Alice"}"#
        );
    }

    #[test]
    fn test_record_missing_id() {
        let result = Record::try_from(json!({"name": "Alice"}));
        assert_eq!(result, Err(RecordError::MissingId));

        let parsed = serde_json::from_str::<Record>(r#"{"name":"Alice"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_record_rejects_non_string_or_empty_id() {
        assert_eq!(
            Record::try_from(json!({"id": 42})),
            Err(RecordError::InvalidId)
        );
        assert_eq!(
            Record::try_from(json!({"id": ""})),
            Err(RecordError::InvalidId)
        );
    }

    #[test]
    fn test_record_rejects_non_object() {
        assert!(Record::try_from(json!(["u1"])).is_err());
        assert!(serde_json::from_str::<Record>("\"u1\"").is_err());
    }

    #[test]
    fn test_set_keeps_id_immutable() {
        let mut record = Record::try_from(json!({"id": "u1"})).unwrap();

        assert_eq!(record.set("id", json!("u2")), None);
        assert_eq!(record.id(), "u1");

        record.set("status", json!("active"));
        assert_eq!(record.get("status"), Some(&json!("active")));
    }
}
