//! Command implementations

pub mod clean;
pub mod version;

use clap::Args;

use crate::domain::{CleanOptions, CleanPolicy};

/// Arguments for the clean command.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Accepted for compatibility; not used
    #[arg(value_name = "ARG")]
    pub target: Option<String>,

    /// Also clean out data (default: false)
    #[arg(long)]
    pub all: bool,

    /// Stop at the first service that fails to uninstall
    #[arg(long)]
    pub fail_fast: bool,
}

impl CleanArgs {
    /// Resolve run options; `--fail-fast` overrides the configured policy.
    #[must_use]
    pub fn options(&self, configured: CleanPolicy) -> CleanOptions {
        CleanOptions {
            remove_data: self.all,
            policy: if self.fail_fast {
                CleanPolicy::FailFast
            } else {
                configured
            },
        }
    }
}
