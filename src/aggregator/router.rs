//! Routing of records into per-workload buckets.

use crate::parser::AuditRecord;
use std::collections::BTreeMap;

/// Records of one workload, in discovery order
pub type Bucket = Vec<AuditRecord>;

/// Holds one [`Bucket`] per workload, created on first sight
#[derive(Debug, Clone, Default)]
pub struct CategoryRouter {
    buckets: BTreeMap<String, Bucket>,
}

impl CategoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its workload's bucket; duplicates are kept
    pub fn route(&mut self, record: AuditRecord) {
        match self.buckets.get_mut(&record.workload) {
            Some(bucket) => bucket.push(record),
            None => {
                self.buckets.insert(record.workload.clone(), vec![record]);
            }
        }
    }

    pub fn bucket(&self, workload: &str) -> Option<&Bucket> {
        self.buckets.get(workload)
    }

    /// Buckets in workload name order
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &Bucket)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total records across all buckets
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
