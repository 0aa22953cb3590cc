//! Default values and limits for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants, the clamping helpers used by the parser,
//! and the `ConfigFile::default()` implementation.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;

// =============================================================================
// Solver
// =============================================================================

/// Newton iterations before the segment solver falls back to endpoints.
pub const DEFAULT_MAX_ITERATIONS: u32 = 15;

/// Finite-difference step, in units of segment fraction.
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// Successive iterates closer than this count as converged.
pub const DEFAULT_CONVERGENCE_MARGIN: f64 = 0.001;

pub const MIN_MAX_ITERATIONS: u32 = 1;
pub const MAX_MAX_ITERATIONS: u32 = 100;

pub const MIN_STEP_SIZE: f64 = 1e-6;
pub const MAX_STEP_SIZE: f64 = 0.1;

pub const MIN_CONVERGENCE_MARGIN: f64 = 1e-9;
pub const MAX_CONVERGENCE_MARGIN: f64 = 0.1;

// =============================================================================
// Logging
// =============================================================================

pub const DEFAULT_LOG_FILE: &str = "borderdist.log";

/// Clamps the iteration budget to its valid range and logs a warning if clamped.
pub(super) fn clamp_max_iterations(value: u32) -> u32 {
    let clamped = value.clamp(MIN_MAX_ITERATIONS, MAX_MAX_ITERATIONS);
    if clamped != value {
        tracing::warn!(
            requested = value,
            min = MIN_MAX_ITERATIONS,
            max = MAX_MAX_ITERATIONS,
            "solver.max_iterations out of range, clamping to {}",
            clamped
        );
    }
    clamped
}

/// Clamps the difference step to its valid range and logs a warning if clamped.
pub(super) fn clamp_step_size(value: f64) -> f64 {
    let clamped = value.clamp(MIN_STEP_SIZE, MAX_STEP_SIZE);
    if clamped != value {
        tracing::warn!(
            requested = value,
            min = MIN_STEP_SIZE,
            max = MAX_STEP_SIZE,
            "solver.step_size out of range, clamping to {}",
            clamped
        );
    }
    clamped
}

/// Clamps the convergence margin to its valid range and logs a warning if clamped.
pub(super) fn clamp_convergence_margin(value: f64) -> f64 {
    let clamped = value.clamp(MIN_CONVERGENCE_MARGIN, MAX_CONVERGENCE_MARGIN);
    if clamped != value {
        tracing::warn!(
            requested = value,
            min = MIN_CONVERGENCE_MARGIN,
            max = MAX_CONVERGENCE_MARGIN,
            "solver.convergence_margin out of range, clamping to {}",
            clamped
        );
    }
    clamped
}

/// Default log file path, next to config.ini (`~/.borderdist/borderdist.log`).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE)
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            solver: SolverSettings {
                max_iterations: DEFAULT_MAX_ITERATIONS,
                step_size: DEFAULT_STEP_SIZE,
                convergence_margin: DEFAULT_CONVERGENCE_MARGIN,
            },
            border: BorderSettings { path: None },
            logging: LoggingSettings {
                file: default_log_file(),
            },
        }
    }
}
