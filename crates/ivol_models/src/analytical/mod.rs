//! Analytical pricing formulas for European options.
//!
//! This module provides:
//! - Black-Scholes call and put prices for lognormal dynamics
//! - Standard normal CDF/PDF (erfc-based, double precision)
//! - The option parameter record and its validation
//!
//! ## Design Principles
//!
//! - **Volatility as an argument**: Prices are pure functions of
//!   `(sigma, &OptionParameters)` so a solver can vary σ alone
//! - **Validate once**: Parameters are checked at construction; the
//!   formulas trust them

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod params;

// Re-export main types at module level
pub use black_scholes::{d1, d2, price, price_option, price_put};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use params::{OptionParameters, OptionType};
