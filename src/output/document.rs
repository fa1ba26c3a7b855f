//! JSON output writer.
//!
//! Records are self-describing, so the artifact is a single array of
//! AuditData objects with no header reconciliation.

use crate::parser::AuditRecord;
use crate::utils::error::ExportError;
use serde_json::{Map, Value};
use std::io::Write;

/// Write records as one JSON array, compact unless `pretty`
pub fn write_document<W: Write>(
    mut writer: W,
    records: &[&AuditRecord],
    pretty: bool,
) -> Result<(), ExportError> {
    let documents: Vec<&Map<String, Value>> = records.iter().map(|r| &r.fields).collect();

    if pretty {
        serde_json::to_writer_pretty(&mut writer, &documents)?;
    } else {
        serde_json::to_writer(&mut writer, &documents)?;
    }

    writer.flush()?;
    Ok(())
}
