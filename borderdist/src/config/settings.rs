//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Newton solver tunables
    pub solver: SolverSettings,
    /// Default border data
    pub border: BorderSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Segment solver configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverSettings {
    /// Newton iterations before falling back to endpoints
    pub max_iterations: u32,
    /// Finite-difference step in segment-fraction units
    pub step_size: f64,
    /// Convergence threshold on successive iterates
    pub convergence_margin: f64,
}

/// Border data configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSettings {
    /// Border file used when a command is not given one explicitly
    /// (GeoJSON or prebuilt segment list)
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
