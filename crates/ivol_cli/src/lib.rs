//! # ivol_cli
//!
//! Command-line front end for the implied volatility solver.
//!
//! # Commands
//!
//! - `ivol solve --spot S --strike K --rate R --maturity T --price P` -
//!   solve for the volatility implied by one observed price
//! - `ivol demo` - solve the reference scenario
//!
//! Settings come from defaults, an optional TOML file, `IVOL_*` environment
//! variables and flags, in increasing order of priority. See [`config`].

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
