//! Numerical routines.
//!
//! - `solvers`: Derivative-free root finding over a bounded domain

pub mod solvers;
