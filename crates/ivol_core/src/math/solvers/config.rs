//! Solver configuration types.

use crate::types::SolverError;
use num_traits::Float;

/// Configuration for the secant root finder.
///
/// Holds the convergence tolerance, the minimum secant denominator and the
/// iteration budget.
///
/// # Tolerance vs. stagnation threshold
///
/// The search stops successfully once `|f(x)| < tolerance`, and gives up with
/// [`SolverError::Stagnation`] once `|f(x1) - f(x0)| < stagnation_threshold`.
/// The two are independent knobs but default to the same value, so out of
/// the box "the two objective values are close" and "converged" are judged
/// against one number. Set the threshold explicitly with
/// [`SecantConfig::with_stagnation_threshold`] to separate them.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerances (e.g., `f64`)
///
/// # Example
///
/// ```
/// use ivol_core::math::solvers::SecantConfig;
///
/// let config: SecantConfig<f64> = SecantConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.tolerance, config.stagnation_threshold);
///
/// let custom = SecantConfig::new(1e-10, 200).with_stagnation_threshold(1e-14);
/// assert!(custom.stagnation_threshold < custom.tolerance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SecantConfig<T: Float> {
    /// Convergence tolerance on the objective value.
    pub tolerance: T,

    /// Smallest `|f(x1) - f(x0)|` the secant update is allowed to divide by.
    pub stagnation_threshold: T,

    /// Maximum number of secant iterations before giving up.
    pub max_iterations: usize,
}

impl<T: Float> Default for SecantConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-6
    /// - `stagnation_threshold`: 1e-6
    /// - `max_iterations`: 100
    fn default() -> Self {
        let tolerance = T::from(1e-6).unwrap();
        Self {
            tolerance,
            stagnation_threshold: tolerance,
            max_iterations: 100,
        }
    }
}

impl<T: Float> SecantConfig<T> {
    /// Create a configuration whose stagnation threshold equals `tolerance`.
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use ivol_core::math::solvers::SecantConfig;
    ///
    /// let config = SecantConfig::new(1e-8, 50);
    /// assert_eq!(config.stagnation_threshold, 1e-8);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            stagnation_threshold: tolerance,
            max_iterations,
        }
    }

    /// Override the stagnation threshold.
    ///
    /// A threshold of zero disables the stagnation check entirely.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is negative.
    pub fn with_stagnation_threshold(mut self, threshold: T) -> Self {
        assert!(
            threshold >= T::zero(),
            "stagnation_threshold must be non-negative"
        );
        self.stagnation_threshold = threshold;
        self
    }

    /// Check the configuration without panicking.
    ///
    /// Used by the solver before every search, since fields are public and
    /// may have been deserialised or assigned directly.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance > T::zero()) {
            return Err(SolverError::InvalidConfig(
                "tolerance must be positive".to_string(),
            ));
        }
        if !(self.stagnation_threshold >= T::zero()) {
            return Err(SolverError::InvalidConfig(
                "stagnation_threshold must be non-negative".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
