//! Implied volatility search.
//!
//! Wires the Black-Scholes pricer into the secant solver from `ivol_core`:
//!
//! 1. [`Objective`] closes over an immutable [`OptionParameters`] record and
//!    the observed price, giving `σ ↦ price(σ) - market_price`.
//! 2. [`implied_volatility`] builds the search domain from an
//!    [`ImpliedVolRequest`] and runs [`SecantSolver`] on the objective.
//!
//! No state survives a call, so searches for different options can run on
//! different threads without coordination.
//!
//! [`OptionParameters`]: crate::analytical::OptionParameters
//! [`SecantSolver`]: ivol_core::math::solvers::SecantSolver

mod error;
mod objective;
mod solver;

pub use error::ImpliedVolError;
pub use objective::{objective, Objective};
pub use solver::{implied_volatility, implied_volatility_with_report, ImpliedVolRequest};
