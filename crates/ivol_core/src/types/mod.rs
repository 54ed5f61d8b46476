//! Core error types.
//!
//! # Re-exports
//!
//! For convenience, [`SolverError`] is re-exported at this module level.

pub mod error;

pub use error::SolverError;
