//! JSON output helpers.
//!
//! Provides the JSON renderer and the error-object formatter used by every
//! `--json` code path when a command fails.

use anyhow::{Context, Result};

use crate::domain::{CleanError, CleanReport, ConfigError};

/// Renders results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render a clean report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_clean_report(&self, report: &CleanReport) -> Result<()> {
        let out = serde_json::to_string_pretty(report).context("JSON serialization failed")?;
        println!("{out}");
        Ok(())
    }

    pub fn render_version(&self, version: &str) {
        println!("{}", serde_json::json!({ "version": version }));
    }
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable machine-readable code for a command failure.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<CleanError>().is_some() {
        "CLEAN_FAILED"
    } else if err.chain().any(|cause| cause.is::<ConfigError>()) {
        "INVALID_CONFIG"
    } else {
        "ERROR"
    }
}
