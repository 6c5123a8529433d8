//! Shared test helpers: recording service, finalizer and unit-manager fakes.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use anyhow::Result;
use yba_installer::application::ports::{Finalizer, ProgressReporter, Service, ServiceManager};
use yba_installer::domain::{InstallerConfig, ServiceId, ServiceRegistry};

// ── Call journal ─────────────────────────────────────────────────────────────

/// One observed call against a fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Uninstall {
        service: String,
        remove_data: bool,
    },
    Finalize {
        services: Vec<String>,
        remove_data: bool,
    },
}

/// Shared, ordered record of calls made during one test.
pub type Journal = RefCell<Vec<Call>>;

pub fn journal() -> Journal {
    RefCell::new(Vec::new())
}

pub fn uninstall(service: &str, remove_data: bool) -> Call {
    Call::Uninstall {
        service: service.to_string(),
        remove_data,
    }
}

pub fn finalize(services: &[&str], remove_data: bool) -> Call {
    Call::Finalize {
        services: services.iter().map(ToString::to_string).collect(),
        remove_data,
    }
}

// ── Services ─────────────────────────────────────────────────────────────────

/// Service that records its uninstall and optionally fails.
pub struct RecordingService<'a> {
    name: String,
    fails: bool,
    journal: &'a Journal,
}

impl<'a> RecordingService<'a> {
    pub fn ok(name: &str, journal: &'a Journal) -> Self {
        Self {
            name: name.to_string(),
            fails: false,
            journal,
        }
    }

    pub fn failing(name: &str, journal: &'a Journal) -> Self {
        Self {
            fails: true,
            ..Self::ok(name, journal)
        }
    }
}

impl Service for RecordingService<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn uninstall(&self, remove_data: bool) -> Result<()> {
        self.journal
            .borrow_mut()
            .push(uninstall(&self.name, remove_data));
        if self.fails {
            anyhow::bail!("{} did not stop", self.name);
        }
        Ok(())
    }
}

/// Registry built from `(name, fails)` pairs in install order.
pub fn registry<'a>(
    services: &[(&str, bool)],
    journal: &'a Journal,
) -> ServiceRegistry<RecordingService<'a>> {
    ServiceRegistry::new(services.iter().map(|&(name, fails)| {
        let service = if fails {
            RecordingService::failing(name, journal)
        } else {
            RecordingService::ok(name, journal)
        };
        (ServiceId::from(name), service)
    }))
    .expect("unique service ids")
}

// ── Finalizer ────────────────────────────────────────────────────────────────

pub struct RecordingFinalizer<'a> {
    journal: &'a Journal,
    fails: bool,
}

impl<'a> RecordingFinalizer<'a> {
    pub fn ok(journal: &'a Journal) -> Self {
        Self {
            journal,
            fails: false,
        }
    }

    pub fn failing(journal: &'a Journal) -> Self {
        Self {
            journal,
            fails: true,
        }
    }
}

impl Finalizer for RecordingFinalizer<'_> {
    async fn finalize(&self, service_names: &[String], remove_data: bool) -> Result<()> {
        self.journal.borrow_mut().push(Call::Finalize {
            services: service_names.to_vec(),
            remove_data,
        });
        if self.fails {
            anyhow::bail!("install root is busy");
        }
        Ok(())
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Reporter that keeps messages for assertions.
#[derive(Default)]
pub struct CapturingReporter {
    pub lines: RefCell<Vec<String>>,
}

impl ProgressReporter for CapturingReporter {
    fn step(&self, message: &str) {
        self.lines.borrow_mut().push(format!("step {message}"));
    }
    fn success(&self, message: &str) {
        self.lines.borrow_mut().push(format!("ok {message}"));
    }
    fn warn(&self, message: &str) {
        self.lines.borrow_mut().push(format!("warn {message}"));
    }
}

// ── Unit manager ─────────────────────────────────────────────────────────────

/// Unit manager that records commands instead of running `systemctl`.
#[derive(Default)]
pub struct FakeManager {
    pub calls: RefCell<Vec<String>>,
    /// Unit whose `stop` fails, if any.
    pub refuse_stop: Option<String>,
}

impl FakeManager {
    pub fn refusing(unit: &str) -> Self {
        Self {
            refuse_stop: Some(unit.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ServiceManager for FakeManager {
    async fn stop(&self, unit: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("stop {unit}"));
        if self.refuse_stop.as_deref() == Some(unit) {
            anyhow::bail!("Access denied");
        }
        Ok(())
    }

    async fn disable(&self, unit: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("disable {unit}"));
        Ok(())
    }

    async fn daemon_reload(&self) -> Result<()> {
        self.calls.borrow_mut().push("daemon-reload".to_string());
        Ok(())
    }
}

// ── Installation fixtures ────────────────────────────────────────────────────

/// Config rooted at `<dir>/yugabyte`.
pub fn config_in(dir: &Path) -> InstallerConfig {
    InstallerConfig {
        install_root: dir.join("yugabyte"),
        unit_dir: Some(dir.join("units")),
        ..InstallerConfig::default()
    }
}

/// Lay out software, data and unit files for the named services.
pub fn populate(config: &InstallerConfig, services: &[&str]) -> PathBuf {
    let unit_dir = config.unit_dir.clone().expect("unit_dir set");
    std::fs::create_dir_all(&unit_dir).expect("unit dir");
    for name in services {
        let bin = config.software_root().join(name).join("bin");
        std::fs::create_dir_all(&bin).expect("software dir");
        std::fs::write(bin.join(name), b"#!/bin/sh\n").expect("binary");
        std::fs::create_dir_all(config.data_root().join(name)).expect("data dir");
        std::fs::write(unit_dir.join(format!("{name}.service")), "[Unit]\n").expect("unit");
    }
    unit_dir
}
