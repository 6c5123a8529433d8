//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::CleanReport;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("yba-ctl {version}");
    }

    /// Render the summary printed after `yba-ctl clean`.
    pub fn render_clean_report(&self, report: &CleanReport) {
        for failure in &report.failures {
            self.ctx
                .error(&format!("{}: {}", failure.service, failure.error));
        }
        if self.ctx.quiet {
            return;
        }

        println!();
        self.ctx.header("Clean summary");
        if report.services.is_empty() {
            self.ctx.info("No managed services registered.");
        } else if report.is_clean() {
            self.ctx
                .success(&format!("Removed services: {}", report.services.join(", ")));
        } else {
            self.ctx.warn(&format!(
                "Removed services with errors: {}",
                report.failed_services().join(", ")
            ));
        }

        if report.remove_data {
            self.ctx.success("Data directories removed");
        } else {
            println!(
                "  {}",
                "Data directories preserved. Remove them with: yba-ctl clean --all"
                    .style(self.ctx.styles.dim)
            );
        }
    }
}
