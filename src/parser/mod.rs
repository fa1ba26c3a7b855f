//! Input parsing.
//!
//! This module handles:
//! - Decoding export files (Latin-1) into CSV rows
//! - Extracting and normalizing the AuditData payload of each row

pub mod reader;
pub mod record;

// Re-export main types
pub use reader::{decode_latin1, fixed_rows, header_rows, read_latin1, NumberedRow, RawRow};
pub use record::{decode_payload, extract_record, trim_strings, AuditRecord};
