//! Error types for analytical pricing inputs.
//!
//! This module provides:
//! - `AnalyticalError`: Rejected option parameters and market prices

use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised when constructing [`OptionParameters`](super::OptionParameters)
/// or when a market price is checked against the no-arbitrage band. The
/// pricing formulas themselves never return errors.
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite spot
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidMaturity`: Non-positive or non-finite time to maturity
/// - `InvalidRate`: Non-finite risk-free rate
/// - `InvalidVolatility`: Non-positive volatility bound
/// - `PriceOutOfBounds`: Market price outside the no-arbitrage band
///
/// # Examples
/// ```
/// use ivol_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidSpot { spot: -40.0 };
/// assert_eq!(format!("{}", err), "Invalid spot price: S = -40");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalyticalError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity in years
        maturity: f64,
    },

    /// Invalid risk-free rate.
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate
        rate: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Market price outside the band any volatility could produce.
    #[error("Market price {price} outside no-arbitrage bounds ({lower}, {upper})")]
    PriceOutOfBounds {
        /// The observed market price
        price: f64,
        /// Exclusive lower bound
        lower: f64,
        /// Exclusive upper bound
        upper: f64,
    },
}
