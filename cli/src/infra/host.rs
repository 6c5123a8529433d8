//! Platform-wide teardown on the local host — implements the `Finalizer` port.
//!
//! Also assembles the production adapters (`Systemctl`, `HostFs`) so command
//! handlers never construct infrastructure types themselves.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::ports::{Finalizer, LocalFs, ServiceManager};
use crate::domain::{InstallerConfig, RegistryError, ServiceRegistry, platform_services};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::fs::{HostFs, remove_if_exists};
use crate::infra::services::{SystemdService, platform_registry};
use crate::infra::systemd::{Systemctl, default_unit_dir};

/// Removes shared installation state after every service is gone.
///
/// For each service name the unit is stopped and its unit file removed. A
/// failed stop is logged and does not keep the unit file or the roots in
/// place; the service stage already reported it. systemd is reloaded once if
/// any unit file was removed. The software root is
/// then deleted, and with `remove_data` the data root and the installation
/// root follow.
pub struct HostFinalizer<'a, M, F> {
    manager: &'a M,
    fs: &'a F,
    unit_dir: PathBuf,
    install_root: PathBuf,
    software_root: PathBuf,
    data_root: PathBuf,
}

impl<'a, M: ServiceManager, F: LocalFs> HostFinalizer<'a, M, F> {
    #[must_use]
    pub fn new(config: &InstallerConfig, unit_dir: PathBuf, manager: &'a M, fs: &'a F) -> Self {
        Self {
            manager,
            fs,
            unit_dir,
            install_root: config.install_root.clone(),
            software_root: config.software_root(),
            data_root: config.data_root(),
        }
    }
}

impl<M: ServiceManager, F: LocalFs> Finalizer for HostFinalizer<'_, M, F> {
    async fn finalize(&self, service_names: &[String], remove_data: bool) -> Result<()> {
        let mut removed_units = 0_usize;
        for name in service_names {
            let unit = format!("{name}.service");
            if let Err(err) = self.manager.stop(&unit).await {
                warn!(unit = %unit, error = %format!("{err:#}"), "stop failed, removing unit file");
            }
            if remove_if_exists(self.fs, &self.unit_dir.join(&unit))? {
                removed_units += 1;
            }
        }

        if removed_units > 0 {
            debug!(removed_units, "reloading unit definitions");
            self.manager
                .daemon_reload()
                .await
                .context("reloading systemd")?;
        }

        remove_if_exists(self.fs, &self.software_root)?;
        if remove_data {
            remove_if_exists(self.fs, &self.data_root)?;
            remove_if_exists(self.fs, &self.install_root)?;
        }

        info!(
            install_root = %self.install_root.display(),
            remove_data,
            "installation state removed"
        );
        Ok(())
    }
}

// ── Production wiring ─────────────────────────────────────────────────────────

/// Unit manager used on a real host.
pub type HostServiceManager = Systemctl<TokioCommandRunner>;

/// A platform service backed by the host's systemd and filesystem.
pub type HostService<'a> = SystemdService<'a, HostServiceManager, HostFs>;

/// Production adapters built from the installer configuration.
pub struct HostStack {
    config: InstallerConfig,
    manager: HostServiceManager,
    fs: HostFs,
    unit_dir: PathBuf,
}

impl HostStack {
    /// Wire the host adapters for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if no unit directory is configured and the default one
    /// cannot be determined.
    pub fn new(config: InstallerConfig) -> Result<Self> {
        let unit_dir = match &config.unit_dir {
            Some(dir) => dir.clone(),
            None => default_unit_dir(config.service_scope)?,
        };
        let runner = TokioCommandRunner::new(config.command_timeout());
        let manager = Systemctl::new(runner, config.systemctl.clone(), config.service_scope);
        Ok(Self {
            config,
            manager,
            fs: HostFs,
            unit_dir,
        })
    }

    #[must_use]
    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// The platform services, ready to be torn down.
    ///
    /// # Errors
    ///
    /// Returns an error if the service list contains a duplicate identifier.
    pub fn registry(&self) -> Result<ServiceRegistry<HostService<'_>>, RegistryError> {
        platform_registry(platform_services(), &self.config, &self.manager, &self.fs)
    }

    #[must_use]
    pub fn finalizer(&self) -> HostFinalizer<'_, HostServiceManager, HostFs> {
        HostFinalizer::new(&self.config, self.unit_dir.clone(), &self.manager, &self.fs)
    }
}
