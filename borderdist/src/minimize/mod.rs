//! One-dimensional Newton minimizer.
//!
//! Finds a stationary point of a scalar function by running Newton's method on
//! its derivative. Both derivatives are estimated with central finite
//! differences, so the function only needs to be evaluable, not
//! differentiable in closed form.
//!
//! # Difference scheme
//!
//! With step `h`:
//!
//! ```text
//! f'(x)  ~ (f(x + h) - f(x - h)) / 2h                    error  h^2/6  * f'''(x)
//! f''(x) ~ (f'(x + h/2) - f'(x - h/2)) / h
//!        = (f(x + 3h/2) - f(x + h/2) - f(x - h/2) + f(x - 3h/2)) / 2h^2
//!                                                        error  5h^2/12 * f''''(x)
//! ```
//!
//! The second derivative reuses the first-derivative estimator at `x ± h/2`,
//! so both estimates are symmetric about `x` and second-order accurate.
//!
//! # Flat curvature
//!
//! Each `f` value carries a rounding error of about `EPSILON * |f|`, so the
//! curvature estimate is noise once its magnitude drops near
//! `EPSILON * |f| / h^2`. A step is refused as flat below
//! `max(MIN_CURVATURE, CURVATURE_NOISE_FACTOR * EPSILON * |f| / h^2)`, which
//! scales with the function value instead of assuming `f` is of order one.
//!
//! The minimizer only refines from its initial guess. It gives no global
//! guarantee and may land on a maximum or outside the caller's domain;
//! callers must keep a fallback.

pub use crate::config::MinimizerConfig;

use thiserror::Error;

/// Curvature magnitudes below this are treated as flat whatever `f` is.
const MIN_CURVATURE: f64 = 1e-9;

/// Multiple of the rounding noise in the curvature estimate that still
/// counts as flat. The estimate combines four `f` values over `2h^2`.
const CURVATURE_NOISE_FACTOR: f64 = 16.0;

/// Why the minimizer gave up.
///
/// This is an expected outcome, not a fault: the one caller that runs the
/// minimizer falls back to endpoint candidates when it sees one of these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NotConverged {
    /// Iteration budget exhausted without meeting the convergence margin
    #[error("no convergence after {iterations} iterations (last iterate {last})")]
    MaxIterations { iterations: u32, last: f64 },

    /// Second-derivative estimate too close to zero to divide by
    #[error("second derivative vanished at {at}")]
    FlatCurvature { at: f64 },

    /// The function or an iterate produced NaN or infinity
    #[error("non-finite evaluation at {at}")]
    NonFinite { at: f64 },
}

/// Newton's-method minimizer over a single real variable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NewtonMinimizer {
    config: MinimizerConfig,
}

impl NewtonMinimizer {
    /// Creates a minimizer with the given tunables.
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    /// The tunables this minimizer runs with.
    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    /// Refines `initial_guess` towards a stationary point of `f`.
    ///
    /// Returns the first iterate whose distance from its predecessor is below
    /// the convergence margin.
    pub fn minimize<F>(&self, f: F, initial_guess: f64) -> Result<f64, NotConverged>
    where
        F: Fn(f64) -> f64,
    {
        let h = self.config.step_size();
        let margin = self.config.convergence_margin();
        let mut x = initial_guess;

        for _ in 0..self.config.max_iterations() {
            let (below, above) = (f(x - h), f(x + h));
            let slope = (above - below) / (2.0 * h);
            let curvature = (first_derivative(&f, x + h / 2.0, h)
                - first_derivative(&f, x - h / 2.0, h))
                / h;

            if !slope.is_finite() || !curvature.is_finite() {
                return Err(NotConverged::NonFinite { at: x });
            }
            if curvature.abs() < flat_threshold(below.abs().max(above.abs()), h) {
                return Err(NotConverged::FlatCurvature { at: x });
            }

            let next = x - slope / curvature;
            if !next.is_finite() {
                return Err(NotConverged::NonFinite { at: x });
            }
            if (next - x).abs() < margin {
                return Ok(next);
            }
            x = next;
        }

        Err(NotConverged::MaxIterations {
            iterations: self.config.max_iterations(),
            last: x,
        })
    }
}

/// Smallest curvature worth dividing by when `f` is of magnitude `scale`.
fn flat_threshold(scale: f64, h: f64) -> f64 {
    MIN_CURVATURE.max(CURVATURE_NOISE_FACTOR * f64::EPSILON * scale / (h * h))
}

#[inline]
fn first_derivative<F: Fn(f64) -> f64>(f: &F, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_quadratic_converges_in_one_step() {
        // Differences are exact on a parabola, so Newton lands on the vertex
        // immediately and the second step confirms it.
        let minimizer = NewtonMinimizer::default();
        let x = minimizer.minimize(|x| (x - 0.3) * (x - 0.3) + 2.0, 0.5).unwrap();
        assert!((x - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_quartic_converges_near_minimum() {
        let minimizer = NewtonMinimizer::default();
        let x = minimizer
            .minimize(|x| (x - 0.7).powi(4) + (x - 0.7).powi(2), 0.5)
            .unwrap();
        assert!((x - 0.7).abs() < 1e-3, "got {}", x);
    }

    #[test]
    fn test_cosh_converges() {
        let minimizer = NewtonMinimizer::default();
        let x = minimizer.minimize(|x| (x - 0.25).cosh(), 0.5).unwrap();
        assert!((x - 0.25).abs() < 1e-3, "got {}", x);
    }

    #[test]
    fn test_linear_function_has_flat_curvature() {
        let minimizer = NewtonMinimizer::default();
        let result = minimizer.minimize(|x| 3.0 * x + 1.0, 0.5);
        assert!(matches!(result, Err(NotConverged::FlatCurvature { .. })));
    }

    #[test]
    fn test_rounding_noise_on_large_values_is_flat() {
        // The true curvature (2e-9) is above MIN_CURVATURE, but at 1e7 the
        // spacing between doubles swamps it
        let minimizer = NewtonMinimizer::default();
        let result = minimizer.minimize(|x| 1e7 + 1e-9 * (x - 0.3) * (x - 0.3), 0.5);
        assert!(
            matches!(result, Err(NotConverged::FlatCurvature { .. })),
            "got {:?}",
            result
        );
    }

    #[test]
    fn test_large_values_with_real_curvature_converge() {
        let minimizer = NewtonMinimizer::default();
        let x = minimizer
            .minimize(|x| 1e6 + 1e3 * (x - 0.3) * (x - 0.3), 0.5)
            .unwrap();
        assert!((x - 0.3).abs() < 1e-6, "got {}", x);
    }

    #[test]
    fn test_flat_threshold_scales_with_function_value() {
        assert_eq!(flat_threshold(0.0, 0.01), MIN_CURVATURE);
        assert_eq!(flat_threshold(1.0, 0.01), MIN_CURVATURE);
        let far = flat_threshold(1e7, 0.01);
        assert!(far > 1e-4 && far < 1e-3, "got {}", far);
    }

    #[test]
    fn test_non_finite_function_reported() {
        let minimizer = NewtonMinimizer::default();
        let result = minimizer.minimize(|x| if x > 0.5 { f64::NAN } else { x * x }, 0.5);
        assert!(matches!(result, Err(NotConverged::NonFinite { .. })));
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        // On a quartic each Newton step only removes a third of the error, so
        // two steps from far away cannot meet a tight margin.
        let config = MinimizerConfig::new()
            .with_max_iterations(2)
            .with_convergence_margin(1e-12);
        let minimizer = NewtonMinimizer::new(config);
        let result = minimizer.minimize(|x| (x - 0.1).powi(4), 5.0);
        match result {
            Err(NotConverged::MaxIterations { iterations, .. }) => assert_eq!(iterations, 2),
            other => panic!("expected MaxIterations, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluation_count_per_iteration() {
        // One slope (2 evaluations) and one curvature (4 evaluations) per step
        let calls = Cell::new(0u32);
        let minimizer = NewtonMinimizer::default();
        let _ = minimizer.minimize(
            |x| {
                calls.set(calls.get() + 1);
                (x - 0.3) * (x - 0.3)
            },
            0.5,
        );
        assert_eq!(calls.get(), 12);
    }

    #[test]
    fn test_maximum_is_a_stationary_point_too() {
        // Newton finds stationary points, not minima specifically
        let minimizer = NewtonMinimizer::default();
        let x = minimizer.minimize(|x| -(x - 0.4) * (x - 0.4), 0.5).unwrap();
        assert!((x - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_not_converged_display() {
        let err = NotConverged::FlatCurvature { at: 0.5 };
        assert!(err.to_string().contains("0.5"));
    }
}
