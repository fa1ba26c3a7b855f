//! Per-workload field-name unions.
//!
//! Events of the same workload do not all carry the same fields, so the
//! header for a workload is the union of every field seen for it.

use crate::parser::AuditRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Field names observed for one workload, in sorted order
pub type SchemaUnion = BTreeSet<String>;

/// Accumulates a [`SchemaUnion`] per workload; sets only ever grow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaAccumulator {
    unions: BTreeMap<String, SchemaUnion>,
}

impl SchemaAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union the record's field names into the workload's set
    pub fn observe(&mut self, workload: &str, record: &AuditRecord) {
        self.observe_fields(workload, record.field_names());
    }

    /// Union arbitrary field names into the workload's set
    pub fn observe_fields<'a, I>(&mut self, workload: &str, fields: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let union = self.unions.entry(workload.to_string()).or_default();

        for field in fields {
            if !union.contains(field) {
                union.insert(field.to_string());
            }
        }
    }

    /// Field names seen for a workload
    pub fn fields(&self, workload: &str) -> Option<&SchemaUnion> {
        self.unions.get(workload)
    }

    /// Union across every workload, used for combined output
    pub fn combined(&self) -> SchemaUnion {
        self.unions.values().flatten().cloned().collect()
    }

    pub fn workloads(&self) -> impl Iterator<Item = &str> {
        self.unions.keys().map(String::as_str)
    }
}
