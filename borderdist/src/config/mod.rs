//! Configuration for borderdist.
//!
//! Two layers, as elsewhere in the crate:
//!
//! - [`ConfigFile`]: the user's `~/.borderdist/config.ini`, one struct per
//!   INI section, loaded with defaults for anything missing.
//! - [`MinimizerConfig`]: the typed runtime view handed to the solver.
//!
//! # Example
//!
//! ```
//! use borderdist::config::{ConfigFile, MinimizerConfig};
//!
//! let file = ConfigFile::default();
//! let minimizer = MinimizerConfig::from(&file);
//! assert_eq!(minimizer.max_iterations(), 15);
//! ```

mod defaults;
mod file;
mod minimizer;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_log_file, DEFAULT_CONVERGENCE_MARGIN, DEFAULT_LOG_FILE,
    DEFAULT_MAX_ITERATIONS, DEFAULT_STEP_SIZE,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use minimizer::MinimizerConfig;
pub use settings::{BorderSettings, ConfigFile, LoggingSettings, SolverSettings};

impl ConfigFile {
    /// The solver tunables from this file as a [`MinimizerConfig`].
    pub fn minimizer_config(&self) -> MinimizerConfig {
        MinimizerConfig::from(self)
    }

    /// Renders this configuration in config.ini form.
    pub fn to_ini_string(&self) -> String {
        writer::to_config_string(self)
    }
}
