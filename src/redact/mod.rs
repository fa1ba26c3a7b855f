//! Field-level redaction of export rows.
//!
//! The sanitizer is a best-effort pass: rows that fail to decode are
//! dropped, everything else is written back in arrival order with the
//! configured AuditData fields and the whole UserIds column masked.

pub mod sanitizer;

pub use sanitizer::{redacted_file_name, sanitize_text, write_sanitized, SanitizeStats};

use crate::parser::{decode_payload, RawRow};
use crate::utils::config::{AUDIT_DATA_COLUMN, REDACTED_FIELDS, REDACTED_MARKER, USER_IDS_COLUMN};
use crate::utils::error::ParseError;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Field names to mask and the marker that replaces them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionSet {
    fields: HashSet<String>,
    marker: String,
}

impl Default for RedactionSet {
    fn default() -> Self {
        Self::new(REDACTED_FIELDS.iter().copied(), REDACTED_MARKER)
    }
}

impl RedactionSet {
    pub fn new<I, S>(fields: I, marker: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            marker: marker.into(),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Replace every top-level field in the set with the marker
    ///
    /// Returns how many fields were replaced.
    pub fn redact_payload(&self, payload: &mut Map<String, Value>) -> usize {
        let mut replaced = 0;
        for (name, value) in payload.iter_mut() {
            if self.contains(name) {
                *value = Value::String(self.marker.clone());
                replaced += 1;
            }
        }
        replaced
    }

    /// Redact one export row
    ///
    /// AuditData is decoded, masked and re-encoded compactly in its original
    /// field order; UserIds is replaced outright.
    ///
    /// # Errors
    /// * `ParseError::MissingField` - the row has no AuditData column
    /// * `ParseError::MalformedPayload` - AuditData is not a JSON object
    pub fn redact_row(&self, mut row: RawRow) -> Result<RawRow, ParseError> {
        let payload = row
            .get(AUDIT_DATA_COLUMN)
            .ok_or_else(|| ParseError::MissingField(AUDIT_DATA_COLUMN.to_string()))?;

        let mut payload = decode_payload(payload)?;
        self.redact_payload(&mut payload);

        let encoded = serde_json::to_string(&payload)
            .map_err(|e| ParseError::MalformedPayload(e.to_string()))?;
        row.set(AUDIT_DATA_COLUMN, encoded);
        row.set(USER_IDS_COLUMN, self.marker.clone());

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(payload: &str) -> RawRow {
        RawRow::from_pairs([
            ("CreationDate", "2019-12-01T10:00:00"),
            ("UserIds", "bob@example.com"),
            ("Operations", "FileAccessed"),
            ("AuditData", payload),
        ])
    }

    #[test]
    fn test_redact_row_masks_listed_fields_only() {
        let set = RedactionSet::new(["ClientIP"], "*REDACTED*");
        let out = set
            .redact_row(row(r#"{"ClientIP":"10.0.0.1","Operation":"FileAccessed"}"#))
            .unwrap();

        let payload: Value = serde_json::from_str(out.get("AuditData").unwrap()).unwrap();
        assert_eq!(payload, json!({"ClientIP": "*REDACTED*", "Operation": "FileAccessed"}));
    }

    #[test]
    fn test_redact_row_replaces_any_type() {
        let set = RedactionSet::new(["ModifiedProperties", "Id"], "X");
        let out = set
            .redact_row(row(r#"{"Id":7,"ModifiedProperties":[{"Name":"a"}],"Keep":{"k":1}}"#))
            .unwrap();

        assert_eq!(
            out.get("AuditData"),
            Some(r#"{"Id":"X","ModifiedProperties":"X","Keep":{"k":1}}"#)
        );
    }

    #[test]
    fn test_redact_row_masks_user_ids_unconditionally() {
        let set = RedactionSet::new(Vec::<String>::new(), "M");
        let out = set.redact_row(row(r#"{"A":" untouched "}"#)).unwrap();

        assert_eq!(out.get("UserIds"), Some("M"));
        assert_eq!(out.get("CreationDate"), Some("2019-12-01T10:00:00"));
        assert_eq!(out.get("Operations"), Some("FileAccessed"));
        assert_eq!(out.get("AuditData"), Some(r#"{"A":" untouched "}"#));
    }

    #[test]
    fn test_redact_row_rejects_bad_payload() {
        let set = RedactionSet::default();
        assert!(matches!(
            set.redact_row(row("AuditData")),
            Err(ParseError::MalformedPayload(_))
        ));
        assert!(matches!(
            set.redact_row(RawRow::from_pairs([("UserIds", "bob")])),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn test_default_set_uses_static_config() {
        let set = RedactionSet::default();
        assert!(set.contains("ClientIP"));
        assert!(set.contains("UserId"));
        assert!(!set.contains("Operation"));
        assert_eq!(set.marker(), "*REDACTED*");
    }
}
