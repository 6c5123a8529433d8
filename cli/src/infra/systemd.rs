//! Infrastructure implementation of the `ServiceManager` port via `systemctl`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::{CommandRunner, ServiceManager};
use crate::domain::ServiceScope;

/// Exit code `systemctl` uses for "unit not loaded".
const EXIT_UNIT_NOT_LOADED: i32 = 5;

/// Stderr fragments `systemctl` prints for units that are not installed.
const MISSING_UNIT_MARKERS: &[&str] = &["not loaded", "does not exist", "not found"];

/// Drives units through a `systemctl`-compatible program.
pub struct Systemctl<R> {
    runner: R,
    program: String,
    scope: ServiceScope,
}

impl<R: CommandRunner> Systemctl<R> {
    #[must_use]
    pub fn new(runner: R, program: impl Into<String>, scope: ServiceScope) -> Self {
        Self {
            runner,
            program: program.into(),
            scope,
        }
    }

    async fn invoke(&self, verb: &str, unit: Option<&str>) -> Result<Output> {
        let mut args = Vec::with_capacity(3);
        if self.scope == ServiceScope::User {
            args.push("--user");
        }
        args.push(verb);
        args.extend(unit);
        self.runner
            .run(&self.program, &args)
            .await
            .with_context(|| format!("running {} {}", self.program, args.join(" ")))
    }

    async fn unit_action(&self, verb: &str, unit: &str) -> Result<()> {
        let output = self.invoke(verb, Some(unit)).await?;
        if output.status.success() {
            return Ok(());
        }
        if unit_is_missing(&output) {
            debug!(unit, verb, "unit not loaded, nothing to do");
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "{} {verb} {unit} failed ({}): {}",
            self.program,
            output.status,
            stderr.trim()
        )
    }
}

impl<R: CommandRunner> ServiceManager for Systemctl<R> {
    async fn stop(&self, unit: &str) -> Result<()> {
        self.unit_action("stop", unit).await
    }

    async fn disable(&self, unit: &str) -> Result<()> {
        self.unit_action("disable", unit).await
    }

    async fn daemon_reload(&self) -> Result<()> {
        let output = self.invoke("daemon-reload", None).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{} daemon-reload failed: {}", self.program, stderr.trim());
        }
        Ok(())
    }
}

fn unit_is_missing(output: &Output) -> bool {
    if output.status.code() == Some(EXIT_UNIT_NOT_LOADED) {
        return true;
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    MISSING_UNIT_MARKERS.iter().any(|m| stderr.contains(m))
}

/// Directory unit files are installed into for the given scope.
///
/// # Errors
///
/// Returns an error if the user config directory cannot be determined.
pub fn default_unit_dir(scope: ServiceScope) -> Result<PathBuf> {
    match scope {
        ServiceScope::System => Ok(PathBuf::from("/etc/systemd/system")),
        ServiceScope::User => Ok(dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("cannot determine user config directory"))?
            .join("systemd")
            .join("user")),
    }
}
