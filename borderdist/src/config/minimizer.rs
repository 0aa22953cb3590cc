//! Newton minimizer configuration.

use super::defaults::{DEFAULT_CONVERGENCE_MARGIN, DEFAULT_MAX_ITERATIONS, DEFAULT_STEP_SIZE};
use super::settings::ConfigFile;

/// Tunables for the Newton minimizer.
///
/// # Example
///
/// ```
/// use borderdist::config::MinimizerConfig;
///
/// // Using defaults
/// let config = MinimizerConfig::default();
/// assert_eq!(config.max_iterations(), 15);
/// assert_eq!(config.step_size(), 0.01);
/// assert_eq!(config.convergence_margin(), 0.001);
///
/// // Custom configuration
/// let config = MinimizerConfig::new()
///     .with_max_iterations(30)
///     .with_convergence_margin(1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimizerConfig {
    /// Newton iterations before giving up
    max_iterations: u32,
    /// Finite-difference step
    step_size: f64,
    /// Convergence threshold on successive iterates
    convergence_margin: f64,
}

impl MinimizerConfig {
    /// Create a new minimizer configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration budget. Default: 15.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the finite-difference step used for both derivative estimates.
    ///
    /// Smaller steps reduce truncation error but amplify rounding noise in
    /// the function values. Default: 0.01.
    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    /// Set the convergence margin. Default: 0.001.
    pub fn with_convergence_margin(mut self, margin: f64) -> Self {
        self.convergence_margin = margin;
        self
    }

    /// Get the iteration budget.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Get the finite-difference step.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Get the convergence margin.
    pub fn convergence_margin(&self) -> f64 {
        self.convergence_margin
    }
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            step_size: DEFAULT_STEP_SIZE,
            convergence_margin: DEFAULT_CONVERGENCE_MARGIN,
        }
    }
}

impl From<&ConfigFile> for MinimizerConfig {
    fn from(config: &ConfigFile) -> Self {
        Self::new()
            .with_max_iterations(config.solver.max_iterations)
            .with_step_size(config.solver.step_size)
            .with_convergence_margin(config.solver.convergence_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinimizerConfig::default();
        assert_eq!(config.max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.step_size(), DEFAULT_STEP_SIZE);
        assert_eq!(config.convergence_margin(), DEFAULT_CONVERGENCE_MARGIN);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(MinimizerConfig::new(), MinimizerConfig::default());
    }

    #[test]
    fn test_with_max_iterations() {
        let config = MinimizerConfig::new().with_max_iterations(40);
        assert_eq!(config.max_iterations(), 40);
        assert_eq!(config.step_size(), DEFAULT_STEP_SIZE); // Unchanged
    }

    #[test]
    fn test_builder_chain() {
        let config = MinimizerConfig::new()
            .with_max_iterations(5)
            .with_step_size(0.005)
            .with_convergence_margin(1e-4);

        assert_eq!(config.max_iterations(), 5);
        assert_eq!(config.step_size(), 0.005);
        assert_eq!(config.convergence_margin(), 1e-4);
    }

    #[test]
    fn test_from_config_file() {
        let mut file = ConfigFile::default();
        file.solver.max_iterations = 25;
        file.solver.step_size = 0.02;

        let config = MinimizerConfig::from(&file);
        assert_eq!(config.max_iterations(), 25);
        assert_eq!(config.step_size(), 0.02);
        assert_eq!(config.convergence_margin(), DEFAULT_CONVERGENCE_MARGIN);
    }
}
