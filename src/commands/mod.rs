//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod extract;
pub mod models;
pub mod sanitize;
pub mod utils;

// Re-export main command functions
pub use extract::{execute_extract, validate_extract_args};
pub use models::{ExtractArgs, RunReport, SanitizeArgs};
pub use sanitize::{execute_sanitize, sanitize_with};
pub use utils::{display_version, print_summary};
