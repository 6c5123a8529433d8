//! `yba-ctl clean [--all]` — uninstall every managed service.

use anyhow::Result;
use tracing::debug;

use crate::app::AppContext;
use crate::application::services::clean;
use crate::commands::CleanArgs;
use crate::domain::CleanError;
use crate::output::TerminalReporter;

/// Run `yba-ctl clean [ARG] [--all] [--fail-fast]`.
///
/// # Errors
///
/// Returns an error if configuration is invalid, if the finalize step fails,
/// or if any service failed to uninstall.
pub async fn run(app: &AppContext, args: &CleanArgs) -> Result<()> {
    if let Some(target) = &args.target {
        debug!(arg = %target, "positional argument is not used by clean");
    }

    let host = app.host()?;
    let options = args.options(host.config().clean.on_error);
    let registry = host.registry()?;
    let finalizer = host.finalizer();

    let report = {
        let reporter = TerminalReporter::new(&app.output);
        clean::clean(&registry, &finalizer, &reporter, options).await?
    };

    app.renderer().render_clean_report(&report)?;

    if !report.is_clean() {
        return Err(CleanError::ServicesFailed {
            failed: report.failed_services(),
        }
        .into());
    }
    Ok(())
}
