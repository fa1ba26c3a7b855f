//! Input decoding and CSV row reading.
//!
//! Exports are read as Latin-1 so arbitrary bytes never fail to decode,
//! then handed to the `csv` reader as text.

use crate::utils::config::EXPORT_COLUMNS;
use crate::utils::error::FileError;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::path::Path;

/// A UTF-8 byte order mark as it appears after Latin-1 decoding
const LATIN1_BOM: &str = "\u{ef}\u{bb}\u{bf}";

/// One input row: column names mapped to their string values, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    columns: Vec<(String, String)>,
}

impl RawRow {
    /// Build a row from `(column, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Pair a CSV record with column names; surplus values on either side are dropped
    pub fn from_record<S: AsRef<str>>(names: &[S], record: &StringRecord) -> Self {
        Self::from_pairs(names.iter().map(|n| n.as_ref()).zip(record.iter()))
    }

    /// Value of a column, if the row has it
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Replace a column's value, appending the column if it is absent
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match self.columns.iter_mut().find(|(name, _)| name == column) {
            Some((_, slot)) => *slot = value,
            None => self.columns.push((column.to_string(), value)),
        }
    }

}

/// A parsed CSV row together with the line it started on
pub type NumberedRow = (u64, Result<RawRow, csv::Error>);

/// Decode bytes as Latin-1, dropping a leading byte order mark
pub fn decode_latin1(bytes: &[u8]) -> String {
    let text: String = bytes.iter().map(|&b| char::from(b)).collect();
    match text.strip_prefix(LATIN1_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Read a whole input file as Latin-1 text
pub fn read_latin1(path: &Path) -> Result<String, FileError> {
    let bytes = std::fs::read(path).map_err(|source| FileError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_latin1(&bytes))
}

/// Parse a headered export; column names come from the first line
pub fn header_rows(text: &str) -> Result<Vec<NumberedRow>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    debug!("CSV header: {:?}", headers);

    Ok(reader
        .records()
        .map(|result| numbered(result, &headers[..]))
        .collect())
}

/// Parse an export using the fixed Protection Center column layout
///
/// No header is assumed; a header line present in the file comes back as
/// an ordinary row.
pub fn fixed_rows(text: &str) -> Vec<NumberedRow> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    reader
        .records()
        .map(|result| numbered(result, &EXPORT_COLUMNS[..]))
        .collect()
}

fn numbered<S: AsRef<str>>(result: csv::Result<StringRecord>, names: &[S]) -> NumberedRow {
    match result {
        Ok(record) => {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            (line, Ok(RawRow::from_record(names, &record)))
        }
        Err(e) => {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            (line, Err(e))
        }
    }
}
