//! Sanitize command implementation.
//!
//! Reads one raw export, redacts it with the static redaction set and
//! writes `redacted{fileName}` into the output directory.

use super::models::SanitizeArgs;
use crate::output::{ensure_output_dir, validate_path};
use crate::parser::read_latin1;
use crate::redact::{redacted_file_name, sanitize_text, write_sanitized, RedactionSet, SanitizeStats};
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Execute the sanitize command with the default redaction set
///
/// **Public** - main entry point called from main.rs
pub fn execute_sanitize(args: SanitizeArgs) -> Result<(PathBuf, SanitizeStats)> {
    sanitize_with(&args, &RedactionSet::default())
}

/// Sanitize with an explicit redaction set
pub fn sanitize_with(args: &SanitizeArgs, redactions: &RedactionSet) -> Result<(PathBuf, SanitizeStats)> {
    info!("Sanitizing: {}", args.input.display());

    let file_name = redacted_file_name(&args.input)
        .with_context(|| format!("Input has no file name: {}", args.input.display()))?;

    let text = read_latin1(&args.input).context("Failed to read input file")?;
    let (rows, stats) = sanitize_text(&text, redactions);

    ensure_output_dir(&args.output_dir).context("Invalid output path or permissions error")?;
    let output_path = args.output_dir.join(file_name);
    validate_path(&output_path)?;

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    write_sanitized(BufWriter::new(file), &rows).context("Failed to write redacted file")?;

    info!(
        "✓ {} rows written to: {} ({} dropped)",
        stats.rows_written,
        output_path.display(),
        stats.rows_dropped
    );

    Ok((output_path, stats))
}
