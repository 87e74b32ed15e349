//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB `AttributeValue` maps and
//! JSON records. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use axcrud_core::record::{Record, ID_ATTRIBUTE};
use axcrud_core::storage::{Cursor, StoreError};

/// DynamoDB item as returned by the SDK.
pub type Item = HashMap<String, AttributeValue>;

// ============================================================================
// Values
// ============================================================================

/// Convert a JSON value to a DynamoDB attribute.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute to a JSON value.
///
/// String and number sets come back as arrays. Binary attributes have no
/// JSON representation and are rejected.
pub fn attribute_to_json(attribute: &AttributeValue) -> Result<Value, StoreError> {
    match attribute {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => item_to_attributes(map).map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(StoreError::InvalidData(
            "binary attributes are not supported".to_string(),
        )),
        other => Err(StoreError::InvalidData(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

fn parse_number(n: &str) -> Result<Value, StoreError> {
    serde_json::from_str::<Number>(n)
        .map(Value::Number)
        .map_err(|e| StoreError::Serialization(format!("Invalid number {n}: {e}")))
}

// ============================================================================
// Records
// ============================================================================

/// Convert a Record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> Item {
    record
        .attributes()
        .iter()
        .map(|(k, v)| (k.clone(), json_to_attribute(v)))
        .collect()
}

/// Convert a DynamoDB item to a JSON object.
pub fn item_to_attributes(item: &Item) -> Result<Map<String, Value>, StoreError> {
    item.iter()
        .map(|(k, v)| attribute_to_json(v).map(|v| (k.clone(), v)))
        .collect()
}

/// Convert a DynamoDB item to a Record.
pub fn item_to_record(item: &Item) -> Result<Record, StoreError> {
    let attributes = item_to_attributes(item)?;
    Record::from_attributes(attributes).map_err(|e| StoreError::InvalidData(e.to_string()))
}

// ============================================================================
// Keys and cursors
// ============================================================================

/// Primary key attribute for a record ID.
pub fn id_key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

/// Wrap a `LastEvaluatedKey` as a cursor. An absent or empty key ends the scan.
pub fn cursor_from_key(key: Option<&Item>) -> Result<Option<Cursor>, StoreError> {
    match key {
        Some(key) if !key.is_empty() => Ok(Some(Cursor::new(Value::Object(
            item_to_attributes(key)?,
        )))),
        _ => Ok(None),
    }
}

/// Turn a cursor back into an `ExclusiveStartKey`.
pub fn key_from_cursor(cursor: &Cursor) -> Result<Item, StoreError> {
    match cursor.as_value() {
        Value::Object(map) if map.contains_key(ID_ATTRIBUTE) => Ok(map
            .iter()
            .map(|(k, v)| (k.clone(), json_to_attribute(v)))
            .collect()),
        other => Err(StoreError::InvalidData(format!(
            "Invalid scan cursor: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    fn sample_record() -> Record {
        Record::try_from(json!({
            "id": "u1",
            "name": "Alice",
            "age": 30,
            "score": 4.5,
            "active": true,
            "nickname": null,
            "tags": ["admin", "beta"],
            "address": {"city": "Montevideo", "zip": 11000},
        }))
        .unwrap()
    }

    #[test]
    fn test_record_round_trip() {
        let record = sample_record();
        let item = record_to_item(&record);
        let parsed = item_to_record(&item).unwrap();

        assert_eq!(record, parsed);
    }

    #[test]
    fn test_record_item_attribute_types() {
        let item = record_to_item(&sample_record());

        assert_eq!(item.get("id").unwrap().as_s().unwrap(), "u1");
        assert_eq!(item.get("age").unwrap().as_n().unwrap(), "30");
        assert_eq!(item.get("score").unwrap().as_n().unwrap(), "4.5");
        assert!(*item.get("active").unwrap().as_bool().unwrap());
        assert!(item.get("nickname").unwrap().is_null());
        assert_eq!(item.get("tags").unwrap().as_l().unwrap().len(), 2);
        assert!(item.get("address").unwrap().as_m().unwrap().contains_key("city"));
    }

    #[test]
    fn test_sets_read_back_as_arrays() {
        let ss = AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]);
        let ns = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);

        assert_eq!(attribute_to_json(&ss).unwrap(), json!(["a", "b"]));
        assert_eq!(attribute_to_json(&ns).unwrap(), json!([1, 2.5]));
    }

    #[test]
    fn test_binary_is_rejected() {
        let b = AttributeValue::B(Blob::new(vec![1, 2, 3]));
        assert!(matches!(
            attribute_to_json(&b),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_invalid_number_is_serialization_error() {
        let n = AttributeValue::N("not-a-number".to_string());
        assert!(matches!(
            attribute_to_json(&n),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_item_without_id_is_invalid() {
        let mut item = Item::new();
        item.insert("name".to_string(), AttributeValue::S("Alice".to_string()));

        assert!(matches!(
            item_to_record(&item),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_cursor_round_trip() {
        let mut key = Item::new();
        key.insert("id".to_string(), id_key("u9"));

        let cursor = cursor_from_key(Some(&key)).unwrap().unwrap();
        assert_eq!(cursor.as_value(), &json!({"id": "u9"}));

        let back = key_from_cursor(&cursor).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_empty_key_ends_scan() {
        assert_eq!(cursor_from_key(None).unwrap(), None);
        assert_eq!(cursor_from_key(Some(&Item::new())).unwrap(), None);
    }

    #[test]
    fn test_foreign_cursor_is_rejected() {
        let cursor = Cursor::new(json!("u9"));
        assert!(key_from_cursor(&cursor).is_err());
    }
}
