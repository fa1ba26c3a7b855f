//! Extract command implementation.
//!
//! The extract command:
//! 1. Resolves the input into a list of files
//! 2. Creates the output directory
//! 3. Ingests every file (schema unions and workload buckets)
//! 4. Sorts and exports the buckets

use super::models::{ExtractArgs, RunReport};
use crate::aggregator::{collect_input_files, ingest_files};
use crate::output::{ensure_output_dir, export, ExportOptions};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the extract command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or unusable input path
/// * Output directory cannot be created
/// * Any output file cannot be written
///
/// Unreadable files and unparseable rows are logged and skipped.
pub fn execute_extract(args: ExtractArgs) -> Result<RunReport> {
    let start_time = Instant::now();

    // Step 1: Resolve input
    info!("Step 1/4: Resolving input: {}", args.input.display());
    let files = collect_input_files(&args.input).context("Invalid input path specified")?;
    debug!("{} files to process", files.len());

    // Step 2: Prepare output directory
    info!("Step 2/4: Preparing output directory: {}", args.output_dir.display());
    ensure_output_dir(&args.output_dir)
        .context("Invalid output path or permissions error")?;

    // Step 3: Ingest
    info!("Step 3/4: Processing {} files...", files.len());
    let (corpus, ingest) = ingest_files(&files);
    debug!("{} workloads discovered", corpus.schemas.workloads().count());
    if corpus.is_empty() {
        warn!("No records were extracted from {}", args.input.display());
    }

    // Step 4: Export
    info!("Step 4/4: Exporting records...");
    let options = ExportOptions {
        output_dir: args.output_dir.clone(),
        prefix: args.prefix.clone(),
        format: args.format,
        mode: args.mode,
        pretty: args.pretty,
    };
    let artifacts = export(&corpus, &options).context("Failed to export records")?;

    for artifact in &artifacts {
        info!("✓ {} records written to: {}", artifact.records, artifact.path.display());
    }

    let report = RunReport {
        format: args.format,
        mode: args.mode,
        ingest,
        artifacts,
    };

    if let Ok(json) = serde_json::to_string(&report) {
        debug!("Run report: {}", json);
    }

    let elapsed = start_time.elapsed();
    info!("Export complete in {:.2}s: {}", elapsed.as_secs_f64(), report.summary());

    Ok(report)
}

/// Validate extract arguments
///
/// **Public** - can be called before execute_extract for early validation
pub fn validate_extract_args(args: &ExtractArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.prefix.is_empty() {
        anyhow::bail!("Output prefix cannot be empty");
    }

    if args.prefix.contains(['/', '\\']) {
        anyhow::bail!("Output prefix cannot contain path separators");
    }

    if args.output_dir.is_file() {
        anyhow::bail!(
            "Output path is a file, not a directory: {}",
            args.output_dir.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_extract_args_valid() {
        let args = ExtractArgs {
            input: PathBuf::from("AuditLog.csv"),
            ..Default::default()
        };

        assert!(validate_extract_args(&args).is_ok());
    }

    #[test]
    fn test_validate_extract_args_empty_input() {
        let args = ExtractArgs::default();
        assert!(validate_extract_args(&args).is_err());
    }

    #[test]
    fn test_validate_extract_args_empty_prefix() {
        let args = ExtractArgs {
            input: PathBuf::from("AuditLog.csv"),
            prefix: String::new(),
            ..Default::default()
        };

        assert!(validate_extract_args(&args).is_err());
    }

    #[test]
    fn test_validate_extract_args_prefix_with_separator() {
        let args = ExtractArgs {
            input: PathBuf::from("AuditLog.csv"),
            prefix: "../escape".to_string(),
            ..Default::default()
        };

        assert!(validate_extract_args(&args).is_err());
    }

    #[test]
    fn test_execute_extract_missing_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ExtractArgs {
            input: temp_dir.path().join("missing.csv"),
            output_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };

        assert!(execute_extract(args).is_err());
    }

    #[test]
    fn test_execute_extract_header_only_input_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("AuditLog.csv");
        std::fs::write(&input, "CreationDate,UserIds,Operations,AuditData\n").unwrap();
        let output_dir = temp_dir.path().join("out");

        let args = ExtractArgs {
            input,
            output_dir: output_dir.clone(),
            ..Default::default()
        };
        let report = execute_extract(args).unwrap();

        assert_eq!(report.ingest.files_processed, 1);
        assert_eq!(report.ingest.records, 0);
        assert!(report.artifacts.is_empty());
        assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);
    }
}
