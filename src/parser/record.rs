//! AuditData extraction and normalization.
//!
//! Turns one export row into an [`AuditRecord`]: the AuditData column is
//! decoded as a JSON object and every string inside it is trimmed. The
//! Protection Center pads values with stray line breaks; only the edges are
//! removed, embedded breaks stay.

use super::reader::RawRow;
use crate::utils::config::{AUDIT_DATA_COLUMN, CREATION_TIME_FIELD, WORKLOAD_FIELD};
use crate::utils::error::ParseError;
use serde_json::{Map, Value};

/// A normalized audit event
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    /// Category the event belongs to (the `Workload` field)
    pub workload: String,

    /// Sort key (the `CreationTime` field)
    pub creation_time: String,

    /// Every AuditData field, in source order, strings trimmed
    pub fields: Map<String, Value>,
}

impl AuditRecord {
    /// Build a record from an already-decoded payload
    ///
    /// Strings are trimmed and the required fields checked, same as
    /// [`extract_record`].
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self, ParseError> {
        for value in fields.values_mut() {
            trim_strings(value);
        }

        let workload = required_text(&fields, WORKLOAD_FIELD)?;
        let creation_time = required_text(&fields, CREATION_TIME_FIELD)?;

        Ok(Self {
            workload,
            creation_time,
            fields,
        })
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Extract a normalized record from one export row
///
/// # Errors
/// * `ParseError::MissingField` - no AuditData column, or no Workload/CreationTime
/// * `ParseError::MalformedPayload` - AuditData is not a JSON object
pub fn extract_record(row: &RawRow) -> Result<AuditRecord, ParseError> {
    let payload = row
        .get(AUDIT_DATA_COLUMN)
        .ok_or_else(|| ParseError::MissingField(AUDIT_DATA_COLUMN.to_string()))?;

    AuditRecord::from_fields(decode_payload(payload)?)
}

/// Decode an AuditData string into its top-level object
///
/// No trimming and no required fields; the sanitizer uses this directly.
pub fn decode_payload(payload: &str) -> Result<Map<String, Value>, ParseError> {
    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ParseError::MalformedPayload(format!(
            "expected a JSON object, found {}",
            value_kind(&other)
        ))),
        Err(e) => Err(ParseError::MalformedPayload(e.to_string())),
    }
}

/// Trim leading and trailing whitespace from every string in `value`
pub fn trim_strings(value: &mut Value) {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.len() != s.len() {
                *s = trimmed.to_string();
            }
        }
        Value::Array(items) => items.iter_mut().for_each(trim_strings),
        Value::Object(map) => map.values_mut().for_each(trim_strings),
        _ => {}
    }
}

/// Text of a required field; absent or null counts as missing, empty text does not
fn required_text(fields: &Map<String, Value>, name: &str) -> Result<String, ParseError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(ParseError::MissingField(name.to_string())),
        Some(other) => Ok(other.to_string()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
