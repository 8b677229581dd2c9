//! Command-line interface
//!
//! Every command loads the process-wide configuration first; any load
//! failure ends the process through [`handle_error`] with a non-zero status.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use serde_json::json;

use crate::domain::error::ConfigError;
use crate::infrastructure::logging::SecretScrubber;

/// Exit status used for every fatal error
pub const EXIT_FAILURE: i32 = 1;

/// Print a fatal error and terminate the process
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    tracing::debug!(error = %SecretScrubber::new().scrub_message(&format!("{err:#}")), "command failed");
    print_report(&error_report(&err), json_mode);
    std::process::exit(EXIT_FAILURE);
}

/// Scrubbed message and offending field for an error
pub fn error_report(err: &anyhow::Error) -> serde_json::Value {
    let scrubber = SecretScrubber::new();
    let field = err.downcast_ref::<ConfigError>().and_then(ConfigError::field);
    json!({
        "success": false,
        "error": scrubber.scrub_message(&format!("{err:#}")),
        "field": field,
    })
}

fn print_report(report: &serde_json::Value, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(report).unwrap_or_default());
    } else if let Some(message) = report["error"].as_str() {
        eprintln!("Error: {message}");
    }
}
