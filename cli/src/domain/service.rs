//! Managed service descriptions.
//!
//! A [`ServiceSpec`] is the static shape of one service the installer manages:
//! its display name, its systemd unit and the directories it owns. Paths are
//! relative to the software root and data root of the installation.

use std::fmt;
use std::path::PathBuf;

/// Identifier of the bundled PostgreSQL metadata store.
pub const POSTGRES: &str = "postgres";
/// Identifier of the bundled Prometheus metrics store.
pub const PROMETHEUS: &str = "prometheus";
/// Identifier of the platform application server.
pub const PLATFORM: &str = "yb-platform";

/// Stable identifier of a managed service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(String);

impl ServiceId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Static description of one managed service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub id: ServiceId,
    /// Display name, also the stem of the unit file.
    pub name: String,
    /// Systemd unit, e.g. `postgres.service`.
    pub unit: String,
    /// Install directory relative to the software root.
    pub install_dir: PathBuf,
    /// Data directory relative to the data root.
    pub data_dir: PathBuf,
}

impl ServiceSpec {
    /// Describe a service whose unit, install dir and data dir share its name.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            id: ServiceId::new(name),
            name: name.to_string(),
            unit: format!("{name}.service"),
            install_dir: PathBuf::from(name),
            data_dir: PathBuf::from(name),
        }
    }
}

/// Services managed by the installer, in install order.
///
/// Later entries depend on earlier ones, so teardown walks this list backwards.
#[must_use]
pub fn platform_services() -> Vec<ServiceSpec> {
    [POSTGRES, PROMETHEUS, PLATFORM]
        .into_iter()
        .map(ServiceSpec::named)
        .collect()
}
