//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is constructed once in `Cli::run()` from the global flags.
//! Adding a new cross-cutting concern requires only one field change here.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::InstallerConfig;
use crate::infra::config::YamlConfigStore;
use crate::infra::host::HostStack;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Explicit configuration file, if any.
    pub config: Option<PathBuf>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    ///
    /// Progress output is suppressed in JSON mode so stdout stays parseable.
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Where the installer configuration is read from.
    pub config_store: YamlConfigStore,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let AppFlags { output, config } = flags;
        let mode = if output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(output.no_color, output.quiet || output.json),
            mode,
            config_store: YamlConfigStore::resolve(config),
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Load and validate the installer configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_config(&self) -> Result<InstallerConfig> {
        tracing::debug!(path = %self.config_store.path().display(), "loading configuration");
        self.config_store.load()
    }

    /// Load the configuration and wire the host adapters for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the unit directory
    /// cannot be determined.
    pub fn host(&self) -> Result<HostStack> {
        HostStack::new(self.load_config()?)
    }
}
