//! Ingestion of export files into a [`Corpus`].
//!
//! Row-level failures are logged and skipped; a file that cannot be read is
//! logged and skipped. Nothing here aborts the run.

use super::Corpus;
use crate::parser::{extract_record, header_rows, read_latin1};
use crate::utils::error::{FileError, InputError};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of ingesting one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub path: PathBuf,
    /// Rows turned into records
    pub records: usize,
    /// Rows dropped because they could not be read or parsed
    pub skipped: usize,
}

/// Totals across a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub records: usize,
    pub rows_skipped: usize,
}

impl IngestSummary {
    fn add(&mut self, stats: &FileStats) {
        self.files_processed += 1;
        self.records += stats.records;
        self.rows_skipped += stats.skipped;
    }
}

/// Resolve the input path into the list of files to process
///
/// A file yields itself; a directory yields its regular files (not
/// recursive), sorted by path.
pub fn collect_input_files(input: &Path) -> Result<Vec<PathBuf>, InputError> {
    debug!("Checking input: {}", input.display());

    if !input.exists() {
        return Err(InputError::NotFound(input.to_path_buf()));
    }

    if input.is_file() {
        debug!("Input detected as file");
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(InputError::Unsupported(input.to_path_buf()));
    }

    debug!("Input detected as directory");
    let unreadable = |source| InputError::UnreadableDirectory {
        path: input.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(input).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping non-file entry: {}", path.display());
        }
    }
    files.sort();

    Ok(files)
}

/// Ingest already-decoded export text
///
/// `source` only labels log lines and the returned stats.
pub fn ingest_text(corpus: &mut Corpus, text: &str, source: &Path) -> Result<FileStats, csv::Error> {
    let mut stats = FileStats {
        path: source.to_path_buf(),
        ..Default::default()
    };

    for (line, row) in header_rows(text)? {
        let record = match row {
            Ok(row) => extract_record(&row).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match record {
            Ok(record) => {
                corpus.add(record);
                stats.records += 1;
            }
            Err(message) => {
                stats.skipped += 1;
                error!("Unable to parse line {} in file {}", line, source.display());
                error!("Error message: {}", message);
            }
        }
    }

    Ok(stats)
}

/// Read and ingest one export file
pub fn ingest_file(corpus: &mut Corpus, path: &Path) -> Result<FileStats, FileError> {
    info!("Processing file: {}", path.display());

    let text = read_latin1(path)?;
    let stats = ingest_text(corpus, &text, path).map_err(|source| FileError::BadHeader {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Processing complete, {} records found", stats.records);
    if stats.skipped > 0 {
        warn!("{} rows skipped in {}", stats.skipped, path.display());
    }

    Ok(stats)
}

/// Ingest every file in order, skipping files that fail
pub fn ingest_files(paths: &[PathBuf]) -> (Corpus, IngestSummary) {
    let mut corpus = Corpus::new();
    let mut summary = IngestSummary::default();

    for path in paths {
        match ingest_file(&mut corpus, path) {
            Ok(stats) => summary.add(&stats),
            Err(e) => {
                summary.files_failed += 1;
                error!("Error processing file: {}", path.display());
                error!("Error message: {}", e);
            }
        }
    }

    (corpus, summary)
}
