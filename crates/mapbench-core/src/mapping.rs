//! The two JSON mapping strategies.
//!
//! Both start from the same generic tree representation
//! ([`serde_json::Value`]) of the input text:
//!
//! - [`record_from_tree`] hands the tree to the serde derive on
//!   [`MessageRecord`], letting the generated deserializer match member names
//!   to fields.
//! - [`extract_record`] reads each named member out of the tree explicitly
//!   and assigns it, converting as it goes.
//!
//! Both strategies ignore unknown members, and both treat a missing or empty
//! `s_array`/`i_array` as an empty collection. Missing or wrong-typed
//! members, including explicit `null` arrays, are errors.

use crate::error::MapError;
use crate::record::MessageRecord;
use chrono::DateTime;
use serde_json::Value;
use std::collections::HashSet;

/// Parse JSON text into the generic tree representation.
pub fn parse_tree(json: &str) -> Result<Value, MapError> {
    serde_json::from_str(json).map_err(MapError::parse)
}

/// Convert a parsed tree into a record through the serde derive.
pub fn record_from_tree(tree: Value) -> Result<MessageRecord, MapError> {
    serde_json::from_value(tree).map_err(MapError::mapping)
}

/// Parse and map in one step. Convenience for tests and callers that do not
/// need the intermediate tree.
pub fn record_from_str(json: &str) -> Result<MessageRecord, MapError> {
    record_from_tree(parse_tree(json)?)
}

/// Construct a record by explicitly reading each named member of the tree.
pub fn extract_record(tree: &Value) -> Result<MessageRecord, MapError> {
    let kind = require_str(tree, "type")?;
    let message = require_str(tree, "message")?;

    let millis = require_i64(tree, "date")?;
    let date = DateTime::from_timestamp_millis(millis).ok_or_else(|| MapError::FieldType {
        field: "date",
        expected: "epoch milliseconds within the representable range",
        found: millis.to_string(),
    })?;

    let string_values = match tree.get("s_array") {
        None => HashSet::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| MapError::FieldType {
                    field: "s_array",
                    expected: "array of strings",
                    found: json_type_name(item).to_string(),
                })
            })
            .collect::<Result<HashSet<_>, _>>()?,
        Some(other) => {
            return Err(MapError::FieldType {
                field: "s_array",
                expected: "array of strings",
                found: json_type_name(other).to_string(),
            });
        }
    };

    let int_values = match tree.get("i_array") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_i64().ok_or_else(|| MapError::FieldType {
                    field: "i_array",
                    expected: "array of integers",
                    found: json_type_name(item).to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(MapError::FieldType {
                field: "i_array",
                expected: "array of integers",
                found: json_type_name(other).to_string(),
            });
        }
    };

    Ok(MessageRecord {
        kind: kind.to_owned(),
        message: message.to_owned(),
        date,
        string_values,
        int_values,
    })
}

fn require_str<'a>(tree: &'a Value, field: &'static str) -> Result<&'a str, MapError> {
    let value = tree.get(field).ok_or(MapError::MissingField { field })?;
    value.as_str().ok_or_else(|| MapError::FieldType {
        field,
        expected: "string",
        found: json_type_name(value).to_string(),
    })
}

fn require_i64(tree: &Value, field: &'static str) -> Result<i64, MapError> {
    let value = tree.get(field).ok_or(MapError::MissingField { field })?;
    value.as_i64().ok_or_else(|| MapError::FieldType {
        field,
        expected: "integer",
        found: json_type_name(value).to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
