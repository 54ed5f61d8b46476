//! Pricing error as a function of volatility.

use crate::analytical::{price, price_option, OptionParameters, OptionType};

/// `price(sigma, params) - market_price` for a European call.
///
/// # Examples
/// ```
/// use ivol_models::analytical::OptionParameters;
/// use ivol_models::implied::objective;
///
/// let params = OptionParameters::new(40.0, 35.0, 0.08, 1.0).unwrap();
/// assert!(objective(0.370162, &params, 10.0).abs() < 1e-4);
/// ```
#[inline]
pub fn objective(sigma: f64, params: &OptionParameters, market_price: f64) -> f64 {
    price(sigma, params) - market_price
}

/// Objective closed over one option and one observed price.
///
/// Borrowing the parameters keeps the record immutable for the whole search;
/// the value itself carries no state between evaluations.
#[derive(Debug, Clone, Copy)]
pub struct Objective<'a> {
    params: &'a OptionParameters,
    market_price: f64,
    option_type: OptionType,
}

impl<'a> Objective<'a> {
    /// Objective for a call.
    pub fn new(params: &'a OptionParameters, market_price: f64) -> Self {
        Self {
            params,
            market_price,
            option_type: OptionType::Call,
        }
    }

    /// Switch the priced payoff.
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Observed price being matched.
    #[inline]
    pub fn market_price(&self) -> f64 {
        self.market_price
    }

    /// Payoff being priced.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Model price minus market price at `sigma`.
    #[inline]
    pub fn evaluate(&self, sigma: f64) -> f64 {
        price_option(self.option_type, sigma, self.params) - self.market_price
    }
}
