//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod clean;
pub mod config;
pub mod error;
pub mod registry;
pub mod service;

pub use clean::{CleanOptions, CleanPolicy, CleanReport, ServiceFailure};
pub use config::{CleanConfig, InstallerConfig, ServiceScope};
pub use error::{CleanError, ConfigError, RegistryError};
pub use registry::ServiceRegistry;
pub use service::{ServiceId, ServiceSpec, platform_services};
