//! Systemd-managed platform services — implements the `Service` port.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::ports::{LocalFs, Service, ServiceManager};
use crate::domain::{InstallerConfig, RegistryError, ServiceRegistry, ServiceSpec};
use crate::infra::fs::remove_if_exists;

/// A platform service run as a systemd unit.
///
/// Uninstalling stops and disables the unit, removes the service's software
/// directory and, when asked, its data directory. Absent units and paths are
/// skipped so repeated runs succeed.
pub struct SystemdService<'a, M, F> {
    spec: ServiceSpec,
    install_dir: PathBuf,
    data_dir: PathBuf,
    manager: &'a M,
    fs: &'a F,
}

impl<'a, M: ServiceManager, F: LocalFs> SystemdService<'a, M, F> {
    #[must_use]
    pub fn new(spec: ServiceSpec, config: &InstallerConfig, manager: &'a M, fs: &'a F) -> Self {
        Self {
            install_dir: config.software_root().join(&spec.install_dir),
            data_dir: config.data_root().join(&spec.data_dir),
            spec,
            manager,
            fs,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &ServiceSpec {
        &self.spec
    }
}

impl<M: ServiceManager, F: LocalFs> Service for SystemdService<'_, M, F> {
    fn name(&self) -> &str {
        &self.spec.name
    }

    async fn uninstall(&self, remove_data: bool) -> Result<()> {
        let unit = &self.spec.unit;
        self.manager
            .stop(unit)
            .await
            .with_context(|| format!("stopping {unit}"))?;
        self.manager
            .disable(unit)
            .await
            .with_context(|| format!("disabling {unit}"))?;

        remove_if_exists(self.fs, &self.install_dir)?;
        if remove_data {
            remove_if_exists(self.fs, &self.data_dir)?;
        } else {
            debug!(path = %self.data_dir.display(), "keeping data directory");
        }

        info!(service = %self.spec.name, remove_data, "service uninstalled");
        Ok(())
    }
}

/// Registry of the platform's services, in install order.
///
/// # Errors
///
/// Returns an error if the service list contains a duplicate identifier.
pub fn platform_registry<'a, M: ServiceManager, F: LocalFs>(
    specs: Vec<ServiceSpec>,
    config: &InstallerConfig,
    manager: &'a M,
    fs: &'a F,
) -> Result<ServiceRegistry<SystemdService<'a, M, F>>, RegistryError> {
    ServiceRegistry::new(specs.into_iter().map(|spec| {
        (
            spec.id.clone(),
            SystemdService::new(spec, config, manager, fs),
        )
    }))
}
