use super::models::RunReport;
use crate::utils::config::{TOOL_NAME, TOOL_VERSION};

/// Print a text summary of an extract run
pub fn print_summary(report: &RunReport) {
    println!("\n{}", "=".repeat(80));
    println!("EXTRACT SUMMARY");
    println!("{}", "=".repeat(80));
    println!("Files processed: {}", report.ingest.files_processed);
    println!("Files failed:    {}", report.ingest.files_failed);
    println!("Records:         {}", report.ingest.records);
    println!("Rows skipped:    {}", report.ingest.rows_skipped);
    println!();
    for artifact in &report.artifacts {
        println!(
            "  {:<30} {:>8}  {}",
            artifact.scope,
            artifact.records,
            artifact.path.display()
        );
    }
    println!("{}", "=".repeat(80));
}

/// Display version information
pub fn display_version() {
    println!("{} v{}", TOOL_NAME, TOOL_VERSION);
    println!();
    println!("Reconciles, sorts and redacts Office 365 audit log exports.");
}
