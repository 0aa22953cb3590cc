//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and border loading to
//! reduce duplication across command handlers.

use std::path::{Path, PathBuf};

use borderdist::config::ConfigFile;
use borderdist::logging::{init_logging_to, LoggingGuard};
use borderdist::BorderIndex;
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner with optional debug logging.
    ///
    /// Logs always go to the configured file. With `debug_mode` they are
    /// also mirrored to stderr at debug level; stdout stays reserved for
    /// command output so it can be piped.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let logging_guard = init_logging_to(&config.logging.file, debug_mode, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("borderdist v{}", borderdist::VERSION);
        info!("borderdist CLI: {} command", command);
    }

    /// The border file to use: the explicit argument, else the configured default.
    pub fn resolve_border_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
        explicit
            .or_else(|| self.config.border.path.clone())
            .ok_or(CliError::NoBorder)
    }

    /// Load a border file into a query index using the configured solver settings.
    pub fn load_index(&self, path: &Path) -> Result<BorderIndex, CliError> {
        let start = std::time::Instant::now();
        let index = BorderIndex::load(path, self.config.minimizer_config())?;

        info!(
            path = %path.display(),
            segments = index.border().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Border loaded"
        );

        Ok(index)
    }
}
