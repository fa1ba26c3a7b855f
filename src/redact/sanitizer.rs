//! Sanitizer path: read a raw export, redact it, write it back.

use super::RedactionSet;
use crate::parser::{fixed_rows, RawRow};
use crate::utils::config::{EXPORT_COLUMNS, REDACTED_FILE_PREFIX};
use crate::utils::error::ExportError;
use csv::{Terminator, WriterBuilder};
use log::debug;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Row counts for one sanitized file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SanitizeStats {
    pub rows_written: usize,
    pub rows_dropped: usize,
}

/// Redact every row of an export, dropping rows that fail to decode
///
/// Rows come back in arrival order. Drops are counted, not reported.
pub fn sanitize_text(text: &str, redactions: &RedactionSet) -> (Vec<RawRow>, SanitizeStats) {
    let mut stats = SanitizeStats::default();
    let mut rows = Vec::new();

    for (_, row) in fixed_rows(text) {
        match row.ok().map(|row| redactions.redact_row(row)) {
            Some(Ok(row)) => {
                rows.push(row);
                stats.rows_written += 1;
            }
            _ => stats.rows_dropped += 1,
        }
    }

    debug!(
        "Sanitized {} rows, dropped {}",
        stats.rows_written, stats.rows_dropped
    );
    (rows, stats)
}

/// Write sanitized rows under the fixed export header
pub fn write_sanitized<W: Write>(writer: W, rows: &[RawRow]) -> Result<(), ExportError> {
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv.write_record(EXPORT_COLUMNS)?;
    for row in rows {
        csv.write_record(EXPORT_COLUMNS.iter().map(|column| row.get(column).unwrap_or("")))?;
    }

    csv.flush()?;
    Ok(())
}

/// Output file name for a sanitized input: `redacted{fileName}`
pub fn redacted_file_name(input: &Path) -> Option<String> {
    input
        .file_name()
        .map(|name| format!("{}{}", REDACTED_FILE_PREFIX, name.to_string_lossy()))
}
