//! Error type for implied volatility searches.

use ivol_core::types::SolverError;
use thiserror::Error;

use crate::analytical::AnalyticalError;

/// Failure of an implied volatility search.
///
/// Solver failures keep their exact [`SolverError`] variant so callers can
/// tell an out-of-domain guess from a stagnated or exhausted search.
///
/// # Examples
/// ```
/// use ivol_core::types::SolverError;
/// use ivol_models::implied::ImpliedVolError;
///
/// let err: ImpliedVolError = SolverError::NonConvergence { iterations: 100 }.into();
/// assert!(err.is_non_convergence());
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImpliedVolError {
    /// The secant search failed.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Inputs rejected before searching.
    #[error("Analytical error: {0}")]
    Analytical(#[from] AnalyticalError),
}

impl ImpliedVolError {
    /// An initial guess lay outside the search domain.
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, ImpliedVolError::Solver(err) if err.is_out_of_domain())
    }

    /// The objective values stopped separating.
    pub fn is_stagnation(&self) -> bool {
        matches!(self, ImpliedVolError::Solver(err) if err.is_stagnation())
    }

    /// The iteration budget ran out.
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, ImpliedVolError::Solver(err) if err.is_non_convergence())
    }
}
