//! Black-Scholes closed form for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Preconditions
//!
//! The volatility is passed per call rather than stored, so the implied
//! volatility search can evaluate many candidates against one
//! [`OptionParameters`] record. Nothing here validates `sigma`: the caller
//! keeps it strictly positive. At σ = 0 the d-terms divide by zero and the
//! result is whatever IEEE arithmetic makes of it.

use super::distributions::norm_cdf;
use super::params::{OptionParameters, OptionType};

/// Computes the d1 term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1(sigma: f64, params: &OptionParameters) -> f64 {
    let vol_sqrt_t = sigma * params.maturity().sqrt();
    let log_moneyness = (params.spot() / params.strike()).ln();
    let drift = (params.rate() + 0.5 * sigma * sigma) * params.maturity();

    (log_moneyness + drift) / vol_sqrt_t
}

/// Computes the d2 term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(sigma: f64, params: &OptionParameters) -> f64 {
    d1(sigma, params) - sigma * params.maturity().sqrt()
}

/// European call price at volatility `sigma`.
///
/// C = S·N(d₁) - K·e^(-rT)·N(d₂)
///
/// # Examples
/// ```
/// use ivol_models::analytical::{price, OptionParameters};
///
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 1.0).unwrap();
/// let call = price(0.2, &params);
/// assert!((call - 10.450583572185565).abs() < 1e-10);
/// ```
#[inline]
pub fn price(sigma: f64, params: &OptionParameters) -> f64 {
    let d1 = d1(sigma, params);
    let d2 = d1 - sigma * params.maturity().sqrt();

    params.spot() * norm_cdf(d1) - params.strike() * params.discount_factor() * norm_cdf(d2)
}

/// European put price at volatility `sigma`.
///
/// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
#[inline]
pub fn price_put(sigma: f64, params: &OptionParameters) -> f64 {
    let d1 = d1(sigma, params);
    let d2 = d1 - sigma * params.maturity().sqrt();

    params.strike() * params.discount_factor() * norm_cdf(-d2) - params.spot() * norm_cdf(-d1)
}

/// Dispatches to [`price`] or [`price_put`].
#[inline]
pub fn price_option(option_type: OptionType, sigma: f64, params: &OptionParameters) -> f64 {
    match option_type {
        OptionType::Call => price(sigma, params),
        OptionType::Put => price_put(sigma, params),
    }
}
