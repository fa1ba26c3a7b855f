use crate::aggregator::IngestSummary;
use crate::output::{ExportedArtifact, OutputFormat, OutputMode};
use crate::utils::config::DEFAULT_PREFIX;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the extract command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ExtractArgs {
    /// File or directory to process
    pub input: PathBuf,

    /// Directory for output files
    pub output_dir: PathBuf,

    /// Prefix for output file names
    pub prefix: String,

    /// Output encoding
    pub format: OutputFormat,

    /// Combined or per-workload output
    pub mode: OutputMode,

    /// Indent JSON output
    pub pretty: bool,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ExtractArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            format: OutputFormat::Csv,
            mode: OutputMode::PerCategory,
            pretty: false,
            print_summary: false,
        }
    }
}

/// Arguments for the sanitize command
#[derive(Debug, Clone)]
pub struct SanitizeArgs {
    /// Export file to sanitize
    pub input: PathBuf,

    /// Directory for the redacted file
    pub output_dir: PathBuf,
}

impl Default for SanitizeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// What an extract run did
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub format: OutputFormat,
    pub mode: OutputMode,
    pub ingest: IngestSummary,
    pub artifacts: Vec<ExportedArtifact>,
}

impl RunReport {
    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} files processed ({} failed), {} records, {} rows skipped, {} files written",
            self.ingest.files_processed,
            self.ingest.files_failed,
            self.ingest.records,
            self.ingest.rows_skipped,
            self.artifacts.len()
        )
    }
}
