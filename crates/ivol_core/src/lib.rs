//! # ivol_core: Solver Foundation for Implied Volatility
//!
//! ## Foundation Layer Role
//!
//! ivol_core is the bottom layer of the workspace, providing:
//! - The secant root finder and its configuration (`math::solvers`)
//! - The admissible search interval with clamping (`math::solvers::SearchDomain`)
//! - Structured solver errors (`types::error`)
//!
//! ## Minimal Dependencies
//!
//! This crate knows nothing about option pricing. The root finder operates on
//! any scalar function `Fn(T) -> T` with `T: num_traits::Float`, so the
//! pricing layer (`ivol_models`) can hand it a Black-Scholes objective while
//! tests can hand it a polynomial.
//!
//! ## Usage Examples
//!
//! ```rust
//! use ivol_core::math::solvers::{SearchDomain, SecantConfig, SecantSolver};
//!
//! // Solve x² - 2 = 0 on [0, 2]
//! let solver = SecantSolver::new(SecantConfig::new(1e-10, 100));
//! let domain = SearchDomain::new(0.0_f64, 2.0).unwrap();
//!
//! let root = solver.find_root(|x| x * x - 2.0, 1.0, 1.5, &domain).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `SecantConfig`, `SearchDomain`
//!   and `SolverError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
