//! o365 Audit Log Extractor
//!
//! Audit logs exported from the Office 365 Protection Center carry the real
//! event in a JSON `AuditData` column whose fields vary from row to row.
//! This crate reconciles those fields per workload across many export files
//! and re-emits the records sorted by `CreationTime`, as CSV or JSON, one file
//! per workload or one combined file. It also redacts sensitive fields from
//! raw exports.
//!
//! This crate provides the core implementation for the
//! `o365-audit` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! o365-audit extract ./exports -o ./out -w
//! o365-audit extract AuditLog.csv -f json -c
//! o365-audit sanitize AuditLog.csv
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod redact;
pub mod utils;
