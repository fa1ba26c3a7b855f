//! Aggregation of parsed records across the input corpus.
//!
//! This module tracks:
//! - The union of field names per workload (schema reconciliation)
//! - One ordered bucket of records per workload
//! - Per-file and per-run ingestion counters

pub mod ingest;
pub mod router;
pub mod schema;

// Re-export main types and functions
pub use ingest::{collect_input_files, ingest_file, ingest_files, ingest_text, FileStats, IngestSummary};
pub use router::{Bucket, CategoryRouter};
pub use schema::{SchemaAccumulator, SchemaUnion};

use crate::parser::AuditRecord;

/// Schema unions and buckets for everything ingested so far
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub schemas: SchemaAccumulator,
    pub router: CategoryRouter,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the record's fields and route it to its bucket
    pub fn add(&mut self, record: AuditRecord) {
        self.schemas.observe(&record.workload, &record);
        self.router.route(record);
    }

    pub fn record_count(&self) -> usize {
        self.router.record_count()
    }

    pub fn is_empty(&self) -> bool {
        self.router.is_empty()
    }
}
