//! Unit tests for `HostFinalizer` against a temporary installation tree.

#![allow(clippy::expect_used)]

use yba_installer::application::ports::Finalizer;
use yba_installer::infra::fs::HostFs;
use yba_installer::infra::host::HostFinalizer;

use crate::helpers::{FakeManager, config_in, populate};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn removes_unit_files_and_reloads_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    let unit_dir = populate(&config, &["prometheus", "postgres"]);
    let manager = FakeManager::default();

    HostFinalizer::new(&config, unit_dir.clone(), &manager, &HostFs)
        .finalize(&names(&["prometheus", "postgres"]), false)
        .await
        .expect("finalize");

    assert_eq!(
        manager.calls(),
        [
            "stop prometheus.service",
            "stop postgres.service",
            "daemon-reload",
        ]
    );
    assert!(!unit_dir.join("prometheus.service").exists());
    assert!(!unit_dir.join("postgres.service").exists());
}

#[tokio::test]
async fn keeps_data_root_without_remove_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    let unit_dir = populate(&config, &["postgres"]);
    let manager = FakeManager::default();

    HostFinalizer::new(&config, unit_dir, &manager, &HostFs)
        .finalize(&names(&["postgres"]), false)
        .await
        .expect("finalize");

    assert!(!config.software_root().exists());
    assert!(config.data_root().join("postgres").exists());
    assert!(config.install_root.exists());
}

#[tokio::test]
async fn remove_data_deletes_whole_install_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    let unit_dir = populate(&config, &["postgres"]);
    let manager = FakeManager::default();

    HostFinalizer::new(&config, unit_dir, &manager, &HostFs)
        .finalize(&names(&["postgres"]), true)
        .await
        .expect("finalize");

    assert!(!config.install_root.exists());
}

#[tokio::test]
async fn skips_reload_when_no_unit_files_exist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    let manager = FakeManager::default();

    HostFinalizer::new(&config, dir.path().join("units"), &manager, &HostFs)
        .finalize(&names(&["postgres"]), true)
        .await
        .expect("finalize on an empty host");

    assert_eq!(manager.calls(), ["stop postgres.service"]);
}

#[tokio::test]
async fn empty_name_list_only_removes_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    populate(&config, &["postgres"]);
    let manager = FakeManager::default();

    HostFinalizer::new(&config, dir.path().join("units"), &manager, &HostFs)
        .finalize(&[], false)
        .await
        .expect("finalize");

    assert!(manager.calls().is_empty());
    assert!(!config.software_root().exists());
}

#[tokio::test]
async fn stop_failure_still_removes_unit_files_and_roots() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    let unit_dir = populate(&config, &["yb-platform", "prometheus", "postgres"]);
    let manager = FakeManager::refusing("prometheus.service");

    HostFinalizer::new(&config, unit_dir.clone(), &manager, &HostFs)
        .finalize(&names(&["yb-platform", "prometheus", "postgres"]), true)
        .await
        .expect("a failed stop is not fatal");

    assert_eq!(
        manager.calls(),
        [
            "stop yb-platform.service",
            "stop prometheus.service",
            "stop postgres.service",
            "daemon-reload",
        ]
    );
    for unit in ["yb-platform", "prometheus", "postgres"] {
        assert!(!unit_dir.join(format!("{unit}.service")).exists(), "{unit}");
    }
    assert!(!config.install_root.exists());
}
