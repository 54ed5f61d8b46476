//! Option contract and market inputs.

use super::error::AnalyticalError;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    #[default]
    Call,
    /// Right to sell at the strike.
    Put,
}

impl std::str::FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(format!("Unknown option type: {}. Supported: call, put", s)),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// Immutable inputs of a European option, everything but the volatility.
///
/// # Examples
/// ```
/// use ivol_models::analytical::OptionParameters;
///
/// let params = OptionParameters::new(40.0, 35.0, 0.08, 1.0).unwrap();
/// assert_eq!(params.spot(), 40.0);
/// assert!((params.discount_factor() - (-0.08_f64).exp()).abs() < 1e-15);
///
/// assert!(OptionParameters::new(40.0, 35.0, 0.08, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParameters {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Continuously compounded risk-free rate (r)
    rate: f64,
    /// Time to maturity in years (T)
    maturity: f64,
}

impl OptionParameters {
    /// Creates a validated parameter record.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidStrike` if strike <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidMaturity` if maturity <= 0 or not finite
    pub fn new(spot: f64, strike: f64, rate: f64, maturity: f64) -> Result<Self, AnalyticalError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }
        if !(maturity > 0.0 && maturity.is_finite()) {
            return Err(AnalyticalError::InvalidMaturity { maturity });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            maturity,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// e^(-rT)
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Open interval of prices reachable by some volatility in (0, ∞).
    ///
    /// - Call: (max(S - K·e^(-rT), 0), S)
    /// - Put: (max(K·e^(-rT) - S, 0), K·e^(-rT))
    pub fn price_bounds(&self, option_type: OptionType) -> (f64, f64) {
        let discounted_strike = self.strike * self.discount_factor();
        match option_type {
            OptionType::Call => ((self.spot - discounted_strike).max(0.0), self.spot),
            OptionType::Put => ((discounted_strike - self.spot).max(0.0), discounted_strike),
        }
    }

    /// Rejects a market price no volatility can reproduce.
    ///
    /// The secant search never calls this; an unreachable price there simply
    /// fails to converge. Call it first to fail fast.
    ///
    /// # Examples
    /// ```
    /// use ivol_models::analytical::{OptionParameters, OptionType};
    ///
    /// let params = OptionParameters::new(40.0, 35.0, 0.08, 1.0).unwrap();
    /// assert!(params.check_arbitrage_bounds(OptionType::Call, 10.0).is_ok());
    /// assert!(params.check_arbitrage_bounds(OptionType::Call, 45.0).is_err());
    /// ```
    pub fn check_arbitrage_bounds(
        &self,
        option_type: OptionType,
        market_price: f64,
    ) -> Result<(), AnalyticalError> {
        let (lower, upper) = self.price_bounds(option_type);
        if market_price > lower && market_price < upper {
            Ok(())
        } else {
            Err(AnalyticalError::PriceOutOfBounds {
                price: market_price,
                lower,
                upper,
            })
        }
    }
}
