//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from the secant root finder, one variant per
//!   failure terminal of a search plus the precondition failures detected
//!   before the first iteration

use thiserror::Error;

/// Root-finding errors.
///
/// Every variant is terminal for a single search. Nothing is retried
/// internally and no partial result accompanies the error; callers decide
/// whether to retry with a wider domain, different guesses or a looser
/// tolerance.
///
/// # Variants
/// - `OutOfDomain`: An initial guess lies outside the search domain
/// - `Stagnation`: Consecutive objective values are indistinguishable
/// - `NonConvergence`: Iteration budget exhausted
/// - `InvalidDomain`: Domain bounds are not an ordered finite pair
/// - `InvalidConfig`: Tolerance, threshold or iteration budget is unusable
///
/// # Examples
/// ```
/// use ivol_core::types::SolverError;
///
/// let err = SolverError::NonConvergence { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// An initial guess lies outside the admissible interval.
    #[error("Initial guess {x} outside search domain [{low}, {high}]")]
    OutOfDomain {
        /// The offending initial guess
        x: f64,
        /// Lower bound of the domain
        low: f64,
        /// Upper bound of the domain
        high: f64,
    },

    /// Secant denominator too small to trust.
    #[error("Stagnation: |f(x1) - f(x0)| = {delta} at x0 = {x0}, x1 = {x1}")]
    Stagnation {
        /// Older iterate
        x0: f64,
        /// Newer iterate
        x1: f64,
        /// Absolute difference of the objective values
        delta: f64,
    },

    /// Iteration budget exhausted without meeting the tolerance.
    #[error("Failed to converge after {iterations} iterations")]
    NonConvergence {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Domain bounds are not ordered or not finite.
    #[error("Invalid search domain: [{low}, {high}]")]
    InvalidDomain {
        /// Requested lower bound
        low: f64,
        /// Requested upper bound
        high: f64,
    },

    /// Solver configuration cannot drive a search.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}

impl SolverError {
    /// Returns true for [`SolverError::OutOfDomain`].
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, SolverError::OutOfDomain { .. })
    }

    /// Returns true for [`SolverError::Stagnation`].
    pub fn is_stagnation(&self) -> bool {
        matches!(self, SolverError::Stagnation { .. })
    }

    /// Returns true for [`SolverError::NonConvergence`].
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, SolverError::NonConvergence { .. })
    }
}
