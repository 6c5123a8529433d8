//! Application service — platform teardown use-case.
//!
//! Walks the registry in reverse install order, uninstalls each service, then
//! hands the collected names to the finalizer for platform-wide cleanup.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::application::ports::{Finalizer, ProgressReporter, Service};
use crate::domain::{
    CleanError, CleanOptions, CleanPolicy, CleanReport, ServiceFailure, ServiceRegistry,
};

/// Uninstall every registered service and run the finalize step.
///
/// Under [`CleanPolicy::Continue`] a failing service is recorded in the
/// report and teardown carries on; its name is still passed to the finalizer.
/// Under [`CleanPolicy::FailFast`] the first failure is returned and the
/// finalizer is not called.
///
/// # Errors
///
/// Returns an error carrying [`CleanError::ServiceFailed`] when a service fails
/// under `FailFast`, or [`CleanError::Finalize`] when the finalize step fails.
/// If services had already failed under `Continue`, the finalize error is
/// wrapped in [`CleanError::ServicesFailed`] so the failure list is kept.
pub async fn clean<S: Service>(
    registry: &ServiceRegistry<S>,
    finalizer: &impl Finalizer,
    reporter: &impl ProgressReporter,
    options: CleanOptions,
) -> Result<CleanReport> {
    let CleanOptions { remove_data, policy } = options;
    info!(services = registry.len(), remove_data, ?policy, "starting clean");

    let mut names = Vec::with_capacity(registry.len());
    let mut failures = Vec::new();

    for (id, service) in registry.uninstall_order() {
        let name = service.name().to_string();
        reporter.step(&format!("Uninstalling {name}..."));
        debug!(service = %id, remove_data, "uninstalling service");

        match service.uninstall(remove_data).await {
            Ok(()) => reporter.success(&format!("Uninstalled {name}")),
            Err(err) if policy == CleanPolicy::FailFast => {
                reporter.warn(&format!("{name}: {err:#}"));
                return Err(err.context(CleanError::ServiceFailed { service: name }));
            }
            Err(err) => {
                warn!(service = %id, error = %format!("{err:#}"), "uninstall failed, continuing");
                reporter.warn(&format!("{name}: {err:#}"));
                failures.push(ServiceFailure {
                    service: name.clone(),
                    error: format!("{err:#}"),
                });
            }
        }
        names.push(name);
    }

    reporter.step("Removing shared installation state...");
    if let Err(err) = finalizer.finalize(&names, remove_data).await {
        let err = err.context(CleanError::Finalize);
        if failures.is_empty() {
            return Err(err);
        }
        let failed = failures.iter().map(|f| f.service.clone()).collect();
        return Err(err.context(CleanError::ServicesFailed { failed }));
    }
    reporter.success("Removed shared installation state");

    info!(failed = failures.len(), "clean finished");
    Ok(CleanReport {
        services: names,
        remove_data,
        failures,
    })
}
