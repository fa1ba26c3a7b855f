//! CSV output writer.
//!
//! One header row, then one row per record. Fields a record lacks become
//! empty cells. Rows end in a bare `\n` on every platform.

use crate::aggregator::SchemaUnion;
use crate::parser::AuditRecord;
use crate::utils::error::ExportError;
use csv::{Terminator, WriterBuilder};
use serde_json::Value;
use std::io::Write;

/// Render one AuditData value as a CSV cell
///
/// Strings are written as-is, null as an empty cell, everything else
/// (numbers, booleans, lists, objects) as compact JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Write records as CSV with `headers` as the column set
pub fn write_tabular<W: Write>(
    writer: W,
    headers: &SchemaUnion,
    records: &[&AuditRecord],
) -> Result<(), ExportError> {
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    if !headers.is_empty() {
        csv.write_record(headers)?;
    }

    for record in records {
        csv.write_record(
            headers
                .iter()
                .map(|field| record.get(field).map(cell_text).unwrap_or_default()),
        )?;
    }

    csv.flush()?;
    Ok(())
}
