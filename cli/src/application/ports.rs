//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::InstallerConfig;

// ── Service Ports ─────────────────────────────────────────────────────────────

/// A managed service that can be torn down.
#[allow(async_fn_in_trait)]
pub trait Service {
    /// Display name, recorded in teardown order and handed to the finalizer.
    fn name(&self) -> &str;
    /// Stop the service and remove what it installed.
    ///
    /// Data directories are removed only when `remove_data` is set. Calling
    /// this on an already-removed service must succeed.
    async fn uninstall(&self, remove_data: bool) -> Result<()>;
}

/// Platform-wide cleanup run once after every service has been torn down.
#[allow(async_fn_in_trait)]
pub trait Finalizer {
    /// Remove shared installation state for the given services.
    async fn finalize(&self, service_names: &[String], remove_data: bool) -> Result<()>;
}

/// Unit management (stop, disable, reload).
///
/// Implementations treat a unit that is not loaded as already stopped and
/// already disabled.
#[allow(async_fn_in_trait)]
pub trait ServiceManager {
    async fn stop(&self, unit: &str) -> Result<()>;
    async fn disable(&self, unit: &str) -> Result<()>;
    async fn daemon_reload(&self) -> Result<()>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Filesystem and Config Ports ───────────────────────────────────────────────

/// Raw filesystem operations used during teardown.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// Loads the installer configuration.
pub trait ConfigStore {
    /// Load and validate the configuration, falling back to defaults when the
    /// file does not exist.
    fn load(&self) -> Result<InstallerConfig>;
    /// Location the configuration is read from.
    fn path(&self) -> &Path;
}
