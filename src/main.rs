//! o365 Audit Log Extractor CLI
//!
//! Reconciles the schemas of Office 365 audit log exports and re-emits the
//! records per workload or combined, sorted by creation time. Also redacts
//! sensitive fields from raw exports.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;
use o365_audit_extractor::commands::{
    display_version, execute_extract, execute_sanitize, print_summary, validate_extract_args,
    ExtractArgs, SanitizeArgs,
};
use o365_audit_extractor::output::{OutputFormat, OutputMode};
use o365_audit_extractor::utils::config::{DEFAULT_PREFIX, TOOL_NAME, TOOL_VERSION};
use o365_audit_extractor::utils::logging::init_logging;
use std::path::PathBuf;

/// o365 Audit Log Extractor - schema reconciliation for audit log exports
#[derive(Parser, Debug)]
#[command(name = "o365-audit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write log output to a timestamped file in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconcile, sort and export audit records
    Extract {
        /// File or directory to process
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Prefix for output files
        #[arg(short, long, default_value = DEFAULT_PREFIX)]
        prefix: String,

        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        #[command(flatten)]
        mode: ModeArgs,

        /// Indent JSON output
        #[arg(long)]
        pretty: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Redact sensitive fields from a raw export
    Sanitize {
        /// Export file to sanitize
        input: PathBuf,

        /// Output directory for the redacted file
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Display version information
    Version,
}

/// Output layout; exactly one is required
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct ModeArgs {
    /// Generate individual output files per workload
    #[arg(short, long)]
    workload: bool,

    /// Generate one output file
    #[arg(short, long)]
    combined: bool,
}

impl ModeArgs {
    fn mode(&self) -> OutputMode {
        if self.combined {
            OutputMode::Combined
        } else {
            OutputMode::PerCategory
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    if let Some(path) = init_logging(cli.verbose, cli.log_dir.as_deref())? {
        eprintln!("Logging to {}", path.display());
    }

    // Execute command
    match cli.command {
        Commands::Extract {
            input,
            output,
            prefix,
            format,
            mode,
            pretty,
            summary,
        } => {
            info!("{} v{} Started", TOOL_NAME, TOOL_VERSION);

            let args = ExtractArgs {
                input,
                output_dir: output,
                prefix,
                format,
                mode: mode.mode(),
                pretty,
                print_summary: summary,
            };

            // Validate args first
            validate_extract_args(&args)?;

            let report = execute_extract(args.clone())?;
            if args.print_summary {
                print_summary(&report);
            }
        }

        Commands::Sanitize { input, output } => {
            info!("{} v{} Started", TOOL_NAME, TOOL_VERSION);
            execute_sanitize(SanitizeArgs {
                input,
                output_dir: output,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
