//! Sorting and export of the ingested corpus.
//!
//! This module handles writing records to disk in two formats:
//! - CSV, with one reconciled header per artifact
//! - JSON, one array of AuditData objects per artifact
//!
//! Either one artifact per workload or a single combined artifact.

pub mod document;
pub mod sort;
pub mod tabular;

// Re-export main functions
pub use document::write_document;
pub use sort::sort_by_creation_time;
pub use tabular::{cell_text, write_tabular};

use crate::aggregator::{Corpus, SchemaUnion};
use crate::parser::AuditRecord;
use crate::utils::config::{COMBINED_SCOPE, DEFAULT_PREFIX};
use crate::utils::error::{ExportError, InputError};
use clap::ValueEnum;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// How workloads map onto artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Every workload in one artifact
    Combined,
    /// One artifact per workload
    PerCategory,
}

/// Where and how to write artifacts
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub prefix: String,
    pub format: OutputFormat,
    pub mode: OutputMode,
    /// Indent JSON output
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            format: OutputFormat::Csv,
            mode: OutputMode::PerCategory,
            pretty: false,
        }
    }
}

/// One written output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedArtifact {
    /// Workload name, or `combinedRecords`
    pub scope: String,
    pub path: PathBuf,
    pub records: usize,
}

/// File name for an artifact: `{prefix}-{scope}.{ext}`
///
/// Characters that cannot appear in a file name are replaced with `_` in the
/// scope part.
pub fn artifact_name(prefix: &str, scope: &str, format: OutputFormat) -> String {
    let scope: String = scope
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let scope = if scope.is_empty() { "_" } else { scope.as_str() };

    format!("{}-{}.{}", prefix, scope, format.extension())
}

/// Like [`artifact_name`], but never returns a name already in `taken`
///
/// Workloads whose names only differ in replaced characters would otherwise
/// share a file; later ones get `-2`, `-3`, ... before the extension. The
/// returned name is added to `taken`.
pub fn unique_artifact_name(
    prefix: &str,
    scope: &str,
    format: OutputFormat,
    taken: &mut HashSet<String>,
) -> String {
    let base = artifact_name(prefix, scope, format);
    let mut name = base.clone();
    let mut counter = 2;

    while taken.contains(&name) {
        let extension = format!(".{}", format.extension());
        let stem = base.strip_suffix(extension.as_str()).unwrap_or(&base);
        name = format!("{}-{}{}", stem, counter, extension);
        counter += 1;
    }

    if name != base {
        warn!("Workload {:?} collides with another file name, writing {}", scope, name);
    }
    taken.insert(name.clone());
    name
}

/// Create the output directory if needed
pub fn ensure_output_dir(dir: &Path) -> Result<(), InputError> {
    std::fs::create_dir_all(dir).map_err(|source| InputError::OutputDirectory {
        path: dir.to_path_buf(),
        source,
    })
}

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), ExportError> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(ExportError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Sort and write the whole corpus
///
/// **Public** - main entry point for export
///
/// # Returns
/// The artifacts written, in the order they were written
///
/// # Errors
/// * `ExportError` - any artifact cannot be created or written. Earlier
///   artifacts stay on disk.
pub fn export(corpus: &Corpus, options: &ExportOptions) -> Result<Vec<ExportedArtifact>, ExportError> {
    info!("Beginning export");

    match options.mode {
        OutputMode::Combined => {
            let mut records: Vec<&AuditRecord> = Vec::with_capacity(corpus.record_count());
            for (workload, bucket) in corpus.router.buckets() {
                info!(
                    "Sorting {} {} records for {} export",
                    bucket.len(),
                    workload,
                    options.format.extension()
                );
                records.extend(sort_by_creation_time(bucket));
            }

            let headers = corpus.schemas.combined();
            let file_name = artifact_name(&options.prefix, COMBINED_SCOPE, options.format);
            let artifact = write_artifact(options, COMBINED_SCOPE, &file_name, &headers, &records)?;
            Ok(vec![artifact])
        }

        OutputMode::PerCategory => {
            let mut artifacts = Vec::new();
            let mut taken = HashSet::new();
            for (workload, bucket) in corpus.router.buckets() {
                info!(
                    "Sorting and exporting {} {} records to {} file",
                    bucket.len(),
                    workload,
                    options.format.extension()
                );

                let records = sort_by_creation_time(bucket);
                let headers = corpus.schemas.fields(workload).cloned().unwrap_or_default();
                let file_name =
                    unique_artifact_name(&options.prefix, workload, options.format, &mut taken);
                artifacts.push(write_artifact(options, workload, &file_name, &headers, &records)?);
            }
            Ok(artifacts)
        }
    }
}

/// Write one artifact in the configured format
///
/// **Private** - internal helper for export
fn write_artifact(
    options: &ExportOptions,
    scope: &str,
    file_name: &str,
    headers: &SchemaUnion,
    records: &[&AuditRecord],
) -> Result<ExportedArtifact, ExportError> {
    let path = options.output_dir.join(file_name);
    debug!("Path: {}", path.display());

    validate_path(&path)?;

    let writer = BufWriter::new(File::create(&path)?);
    match options.format {
        OutputFormat::Csv => write_tabular(writer, headers, records)?,
        OutputFormat::Json => write_document(writer, records, options.pretty)?,
    }

    Ok(ExportedArtifact {
        scope: scope.to_string(),
        path,
        records: records.len(),
    })
}
