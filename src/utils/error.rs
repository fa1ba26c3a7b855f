//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors about the input or output location, raised before any processing
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Input path is neither a file nor a directory: {0}")]
    Unsupported(PathBuf),

    #[error("Cannot read input directory {path}: {source}")]
    UnreadableDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors for a single row; the caller logs and skips the row
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed AuditData payload: {0}")]
    MalformedPayload(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors that make a whole input file unusable
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot parse CSV header of {path}: {source}")]
    BadHeader { path: PathBuf, source: csv::Error },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
