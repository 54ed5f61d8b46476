//! Secant-method root-finding solver.

use super::{SearchDomain, SecantConfig};
use crate::types::SolverError;
use num_traits::Float;
use tracing::{debug, trace};

/// Secant root finder over a bounded domain.
///
/// Replaces the derivative in Newton's update with the slope through the two
/// most recent iterates:
///
/// `x_{n+1} = x_n - f(x_n) · (x_n - x_{n-1}) / (f(x_n) - f(x_{n-1}))`
///
/// Each new iterate is clamped into the [`SearchDomain`] before it is
/// evaluated.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Termination
///
/// | Outcome | Condition |
/// |---|---|
/// | `Ok(x)` | `\|f(x)\| < tolerance` for a freshly computed iterate |
/// | [`SolverError::Stagnation`] | `\|f(x1) - f(x0)\| < stagnation_threshold` |
/// | [`SolverError::NonConvergence`] | `max_iterations` updates without success |
/// | [`SolverError::OutOfDomain`] | an initial guess lies outside the domain |
///
/// The method neither brackets a sign change nor checks monotonicity, so a
/// success only certifies the residual, not uniqueness of the root.
///
/// # Example
///
/// ```
/// use ivol_core::math::solvers::{SearchDomain, SecantConfig, SecantSolver};
///
/// let solver = SecantSolver::new(SecantConfig::new(1e-12, 100));
/// let domain = SearchDomain::new(1.0_f64, 2.0).unwrap();
///
/// // Solve x³ - x - 2 = 0
/// let f = |x: f64| x * x * x - x - 2.0;
/// let root = solver.find_root(f, 1.0, 2.0, &domain).unwrap();
/// assert!(f(root).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SecantSolver<T: Float> {
    /// Solver configuration
    config: SecantConfig<T>,
}

/// Outcome of a successful secant search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantReport<T: Float> {
    /// The accepted iterate.
    pub root: T,
    /// Objective value at `root`; `|residual| < tolerance`.
    pub residual: T,
    /// Number of secant updates performed (at least 1).
    pub iterations: usize,
    /// Number of objective evaluations, including the two initial guesses.
    pub evaluations: usize,
}

/// The two most recent iterates and their objective values.
#[derive(Debug, Clone, Copy)]
struct IterationState<T> {
    x0: T,
    f0: T,
    x1: T,
    f1: T,
}

impl<T: Float> IterationState<T> {
    #[inline]
    fn shift(&mut self, x_next: T, f_next: T) {
        self.x0 = self.x1;
        self.f0 = self.f1;
        self.x1 = x_next;
        self.f1 = f_next;
    }
}

impl<T: Float> SecantSolver<T> {
    /// Create a new secant solver with the given configuration.
    pub fn new(config: SecantConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SecantConfig::default(),
        }
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SecantConfig<T> {
        &self.config
    }

    /// Find a root of `f` starting from the guesses `x0` and `x1`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `x0` - First initial guess, inside `domain`
    /// * `x1` - Second initial guess, inside `domain`
    /// * `domain` - Interval every iterate is clamped into
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::OutOfDomain)` - A guess lies outside `domain`
    /// * `Err(SolverError::Stagnation)` - Secant denominator below threshold
    /// * `Err(SolverError::NonConvergence)` - Iteration budget exhausted
    /// * `Err(SolverError::InvalidConfig)` - Configuration unusable
    pub fn find_root<F>(
        &self,
        f: F,
        x0: T,
        x1: T,
        domain: &SearchDomain<T>,
    ) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.find_root_with_report(f, x0, x1, domain)
            .map(|report| report.root)
    }

    /// Same search as [`SecantSolver::find_root`], returning iteration
    /// statistics alongside the root.
    ///
    /// # Example
    ///
    /// ```
    /// use ivol_core::math::solvers::{SearchDomain, SecantConfig, SecantSolver};
    ///
    /// let solver = SecantSolver::new(SecantConfig::new(1e-9, 10));
    /// let domain = SearchDomain::new(0.0_f64, 10.0).unwrap();
    ///
    /// // A line is solved by a single secant step.
    /// let report = solver
    ///     .find_root_with_report(|x| 2.0 * x - 3.0, 0.0, 1.0, &domain)
    ///     .unwrap();
    /// assert_eq!(report.iterations, 1);
    /// assert_eq!(report.evaluations, 3);
    /// assert!((report.root - 1.5).abs() < 1e-12);
    /// ```
    pub fn find_root_with_report<F>(
        &self,
        f: F,
        x0: T,
        x1: T,
        domain: &SearchDomain<T>,
    ) -> Result<SecantReport<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        self.config.validate()?;

        // Guesses are checked before f is evaluated even once.
        for guess in [x0, x1] {
            if !domain.contains(guess) {
                debug!(
                    guess = guess.to_f64(),
                    low = domain.low().to_f64(),
                    high = domain.high().to_f64(),
                    "initial guess outside search domain"
                );
                return Err(domain.out_of_domain(guess));
            }
        }

        let tolerance = self.config.tolerance;
        let threshold = self.config.stagnation_threshold;

        let mut state = IterationState {
            x0,
            f0: f(x0),
            x1,
            f1: f(x1),
        };
        let mut evaluations = 2;

        debug!(
            x0 = x0.to_f64(),
            x1 = x1.to_f64(),
            max_iterations = self.config.max_iterations,
            "secant search started"
        );

        for iteration in 0..self.config.max_iterations {
            let denominator = state.f1 - state.f0;

            if denominator.abs() < threshold {
                debug!(iteration, "secant search stagnated");
                return Err(SolverError::Stagnation {
                    x0: state.x0.to_f64().unwrap_or(f64::NAN),
                    x1: state.x1.to_f64().unwrap_or(f64::NAN),
                    delta: denominator.abs().to_f64().unwrap_or(f64::NAN),
                });
            }

            let mut x_next = state.x1 - state.f1 * (state.x1 - state.x0) / denominator;

            // 0/0 once both iterates sit on the same point; stay put.
            if x_next.is_nan() {
                x_next = state.x1;
            }

            let x_next = domain.clamp(x_next);
            let f_next = f(x_next);
            evaluations += 1;

            trace!(
                iteration,
                x = x_next.to_f64(),
                f = f_next.to_f64(),
                "secant step"
            );

            if f_next.abs() < tolerance {
                debug!(
                    iterations = iteration + 1,
                    root = x_next.to_f64(),
                    "secant search converged"
                );
                return Ok(SecantReport {
                    root: x_next,
                    residual: f_next,
                    iterations: iteration + 1,
                    evaluations,
                });
            }

            state.shift(x_next, f_next);
        }

        debug!(
            iterations = self.config.max_iterations,
            "secant search exhausted its iteration budget"
        );
        Err(SolverError::NonConvergence {
            iterations: self.config.max_iterations,
        })
    }
}
