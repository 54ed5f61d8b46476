//! Root-finding solvers for numerical computation.
//!
//! This module provides a derivative-free root finder designed for
//! implied volatility calculation, where the objective is a closed-form
//! price minus an observed price and no analytic slope is supplied.
//!
//! ## Available Solvers
//!
//! - [`SecantSolver`]: Secant iteration confined to a [`SearchDomain`]
//!
//! ## Configuration
//!
//! [`SecantConfig`] controls:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-6)
//! - `stagnation_threshold`: Minimum secant denominator (default: 1e-6)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use ivol_core::math::solvers::{SearchDomain, SecantConfig, SecantSolver};
//! use ivol_core::types::SolverError;
//!
//! let solver = SecantSolver::new(SecantConfig::default());
//! let domain = SearchDomain::new(0.01_f64, 1.0).unwrap();
//!
//! // Guesses outside the domain are rejected up front
//! let err = solver.find_root(|x| x - 0.5, 1.5, 0.2, &domain).unwrap_err();
//! assert!(matches!(err, SolverError::OutOfDomain { .. }));
//! ```

mod config;
mod domain;
mod secant;

// Re-export public types at module level
pub use config::SecantConfig;
pub use domain::SearchDomain;
pub use secant::{SecantReport, SecantSolver};
