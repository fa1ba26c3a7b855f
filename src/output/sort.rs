//! Time ordering of buckets.

use crate::parser::AuditRecord;

/// Order records by `CreationTime`, oldest first
///
/// Timestamps compare as strings, which orders ISO-8601 values correctly.
/// The sort is stable: records with equal timestamps keep their discovery
/// order. The input is left untouched.
pub fn sort_by_creation_time(records: &[AuditRecord]) -> Vec<&AuditRecord> {
    let mut sorted: Vec<&AuditRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.creation_time.cmp(&b.creation_time));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn record(time: &str, tag: u32) -> AuditRecord {
        let mut fields = Map::new();
        fields.insert("Workload".to_string(), json!("Exchange"));
        fields.insert("CreationTime".to_string(), json!(time));
        fields.insert("Tag".to_string(), json!(tag));
        AuditRecord::from_fields(fields).unwrap()
    }

    fn tags(records: &[&AuditRecord]) -> Vec<u64> {
        records
            .iter()
            .map(|r| r.get("Tag").and_then(|v| v.as_u64()).unwrap())
            .collect()
    }

    #[test]
    fn test_sort_ascending() {
        let records = vec![record("2019-12-01T10:00:00", 1), record("2019-12-01T09:00:00", 2)];
        let sorted = sort_by_creation_time(&records);
        assert_eq!(tags(&sorted), vec![2, 1]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = vec![
            record("2019-12-01T10:00:00", 1),
            record("2019-12-01T08:00:00", 2),
            record("2019-12-01T10:00:00", 3),
            record("2019-12-01T08:00:00", 4),
        ];
        let sorted = sort_by_creation_time(&records);
        assert_eq!(tags(&sorted), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_leaves_input_order() {
        let records = vec![record("b", 1), record("a", 2)];
        let _ = sort_by_creation_time(&records);
        assert_eq!(records[0].creation_time, "b");
    }
}
