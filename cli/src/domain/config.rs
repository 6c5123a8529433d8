//! Domain types and validators for installer configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::clean::CleanPolicy;
use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_INSTALL_ROOT: &str = "/opt/yugabyte";
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;
pub const SOFTWARE_DIR: &str = "software";
pub const DATA_DIR: &str = "data";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `yba-ctl.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Root directory of the installation. Must be absolute.
    pub install_root: PathBuf,
    /// Whether units are system units or per-user units.
    pub service_scope: ServiceScope,
    /// Timeout applied to every external command.
    pub command_timeout_secs: u64,
    /// Program used to manage units.
    pub systemctl: String,
    /// Unit file directory. Derived from `service_scope` when unset.
    pub unit_dir: Option<PathBuf>,
    pub clean: CleanConfig,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            install_root: PathBuf::from(DEFAULT_INSTALL_ROOT),
            service_scope: ServiceScope::default(),
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
            systemctl: "systemctl".to_string(),
            unit_dir: None,
            clean: CleanConfig::default(),
        }
    }
}

/// Settings for `yba-ctl clean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// `continue` (default) or `abort`.
    pub on_error: CleanPolicy,
}

/// Where units are installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceScope {
    #[default]
    System,
    User,
}

impl InstallerConfig {
    /// Directory holding service binaries.
    #[must_use]
    pub fn software_root(&self) -> PathBuf {
        self.install_root.join(SOFTWARE_DIR)
    }

    /// Directory holding persisted service data.
    #[must_use]
    pub fn data_root(&self) -> PathBuf {
        self.install_root.join(DATA_DIR)
    }

    #[must_use]
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    /// Check the values that `clean` relies on before anything is removed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_install_root(&self.install_root)?;
        if self.command_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.systemctl.trim().is_empty() {
            return Err(ConfigError::EmptySystemctl);
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates that `root` is absolute and is not the filesystem root.
///
/// # Errors
///
/// Returns an error if the path is relative or has no parent.
pub fn validate_install_root(root: &Path) -> Result<(), ConfigError> {
    if !root.is_absolute() {
        return Err(ConfigError::RelativeInstallRoot(root.to_path_buf()));
    }
    if root.parent().is_none() {
        return Err(ConfigError::UnsafeInstallRoot(root.to_path_buf()));
    }
    Ok(())
}
