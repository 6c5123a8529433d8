//! Value types for the `clean` use-case.

use serde::{Deserialize, Serialize};

/// What to do when a single service fails to uninstall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanPolicy {
    /// Record the failure, keep going, and still run the finalize step.
    #[default]
    Continue,
    /// Stop at the first failure and skip the finalize step.
    #[serde(rename = "abort")]
    FailFast,
}

/// Options for a single `clean` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanOptions {
    /// Also remove persisted data directories.
    pub remove_data: bool,
    pub policy: CleanPolicy,
}

/// A service whose uninstall step returned an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceFailure {
    pub service: String,
    pub error: String,
}

/// Outcome of a completed `clean` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Service names in the order they were torn down.
    pub services: Vec<String>,
    pub remove_data: bool,
    pub failures: Vec<ServiceFailure>,
}

impl CleanReport {
    /// `true` when every service uninstalled without error.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Names of the services that failed, in teardown order.
    #[must_use]
    pub fn failed_services(&self) -> Vec<String> {
        self.failures.iter().map(|f| f.service.clone()).collect()
    }
}
