//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Registry errors ───────────────────────────────────────────────────────────

/// Errors raised while assembling a service registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Service '{0}' is registered more than once.")]
    Duplicate(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to installer configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("install_root must be an absolute path, got '{}'", .0.display())]
    RelativeInstallRoot(PathBuf),

    #[error("install_root '{}' is not a safe removal target", .0.display())]
    UnsafeInstallRoot(PathBuf),

    #[error("command_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("systemctl must name a program")]
    EmptySystemctl,
}

// ── Clean errors ──────────────────────────────────────────────────────────────

/// Errors surfaced by the `clean` use-case.
///
/// `ServiceFailed` and `Finalize` are attached as context on top of the
/// underlying cause, so the full chain is preserved in the report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CleanError {
    #[error("failed to uninstall {service}; remaining services were left in place")]
    ServiceFailed { service: String },

    #[error("{} service(s) failed to uninstall: {}", .failed.len(), .failed.join(", "))]
    ServicesFailed { failed: Vec<String> },

    #[error("failed to remove shared installation state")]
    Finalize,
}
