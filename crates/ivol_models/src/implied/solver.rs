//! Implied volatility driver.

use ivol_core::math::solvers::{SearchDomain, SecantConfig, SecantReport, SecantSolver};
use tracing::debug;

use super::error::ImpliedVolError;
use super::objective::Objective;
use crate::analytical::{AnalyticalError, OptionParameters, OptionType};

/// Everything about a search except the option and its observed price.
///
/// Defaults reproduce the reference setup: a call, volatility domain
/// [0.01, 1.0], initial guesses 0.1 and 0.2, tolerance 1e-6 and at most 100
/// iterations.
///
/// # Examples
/// ```
/// use ivol_core::math::solvers::SecantConfig;
/// use ivol_models::implied::ImpliedVolRequest;
///
/// let request = ImpliedVolRequest::default()
///     .with_domain(0.05, 2.0)
///     .with_initial_guesses(0.3, 0.4)
///     .with_config(SecantConfig::new(1e-8, 50));
/// assert_eq!(request.high, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolRequest {
    /// Payoff to price.
    pub option_type: OptionType,
    /// Lower volatility bound; must be strictly positive.
    pub low: f64,
    /// Upper volatility bound.
    pub high: f64,
    /// First initial guess.
    pub x0: f64,
    /// Second initial guess.
    pub x1: f64,
    /// Secant tolerances and iteration budget.
    pub config: SecantConfig<f64>,
}

impl Default for ImpliedVolRequest {
    fn default() -> Self {
        Self {
            option_type: OptionType::Call,
            low: 0.01,
            high: 1.0,
            x0: 0.1,
            x1: 0.2,
            config: SecantConfig::default(),
        }
    }
}

impl ImpliedVolRequest {
    /// Set the payoff.
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Set the volatility domain.
    pub fn with_domain(mut self, low: f64, high: f64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Set the two starting volatilities.
    pub fn with_initial_guesses(mut self, x0: f64, x1: f64) -> Self {
        self.x0 = x0;
        self.x1 = x1;
        self
    }

    /// Set the solver configuration.
    pub fn with_config(mut self, config: SecantConfig<f64>) -> Self {
        self.config = config;
        self
    }

    fn domain(&self) -> Result<SearchDomain<f64>, ImpliedVolError> {
        let domain = SearchDomain::new(self.low, self.high)?;
        // σ = 0 divides by zero inside d1.
        if domain.low() <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: domain.low(),
            }
            .into());
        }
        Ok(domain)
    }
}

/// Volatility at which the Black-Scholes price matches `market_price`.
///
/// # Errors
///
/// - `ImpliedVolError::Solver(SolverError::OutOfDomain)` if a guess lies
///   outside `[low, high]`; nothing is priced in that case
/// - `ImpliedVolError::Solver(SolverError::Stagnation)` if two consecutive
///   objective values differ by less than the stagnation threshold
/// - `ImpliedVolError::Solver(SolverError::NonConvergence)` if the budget
///   runs out
/// - `ImpliedVolError::Solver(SolverError::InvalidDomain)` or
///   `ImpliedVolError::Analytical(AnalyticalError::InvalidVolatility)` for a
///   malformed or non-positive domain
///
/// # Examples
/// ```
/// use ivol_models::analytical::OptionParameters;
/// use ivol_models::implied::{implied_volatility, ImpliedVolRequest};
///
/// let params = OptionParameters::new(40.0, 35.0, 0.08, 1.0).unwrap();
///
/// // A guess outside the domain fails before any pricing
/// let request = ImpliedVolRequest::default().with_initial_guesses(1.5, 0.2);
/// let err = implied_volatility(&params, 10.0, &request).unwrap_err();
/// assert!(err.is_out_of_domain());
/// ```
pub fn implied_volatility(
    params: &OptionParameters,
    market_price: f64,
    request: &ImpliedVolRequest,
) -> Result<f64, ImpliedVolError> {
    implied_volatility_with_report(params, market_price, request).map(|report| report.root)
}

/// Same search as [`implied_volatility`], returning the solver's report.
pub fn implied_volatility_with_report(
    params: &OptionParameters,
    market_price: f64,
    request: &ImpliedVolRequest,
) -> Result<SecantReport<f64>, ImpliedVolError> {
    let domain = request.domain()?;
    let objective = Objective::new(params, market_price).with_option_type(request.option_type);
    let solver = SecantSolver::new(request.config);

    debug!(
        spot = params.spot(),
        strike = params.strike(),
        rate = params.rate(),
        maturity = params.maturity(),
        market_price,
        option_type = %request.option_type,
        "solving for implied volatility"
    );

    let report = solver.find_root_with_report(
        |sigma| objective.evaluate(sigma),
        request.x0,
        request.x1,
        &domain,
    )?;

    debug!(
        implied_volatility = report.root,
        iterations = report.iterations,
        "implied volatility found"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::{price, price_put};
    use approx::assert_relative_eq;
    use ivol_core::types::SolverError;

    fn reference() -> OptionParameters {
        OptionParameters::new(40.0, 35.0, 0.08, 1.0).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let vol = implied_volatility(&reference(), 10.0, &ImpliedVolRequest::default()).unwrap();
        assert_relative_eq!(vol, 0.370162, epsilon = 1e-5);
    }

    #[test]
    fn test_reference_scenario_report() {
        let report =
            implied_volatility_with_report(&reference(), 10.0, &ImpliedVolRequest::default())
                .unwrap();
        assert!(report.residual.abs() < 1e-6);
        assert!(report.iterations <= 10);
        assert_eq!(report.evaluations, report.iterations + 2);
    }

    #[test]
    fn test_put_round_trip() {
        let params = reference();
        let target = price_put(0.45, &params);
        let request = ImpliedVolRequest::default()
            .with_option_type(OptionType::Put)
            .with_config(SecantConfig::new(1e-10, 100));

        let vol = implied_volatility(&params, target, &request).unwrap();
        assert_relative_eq!(vol, 0.45, epsilon = 1e-8);
    }

    #[test]
    fn test_out_of_domain_guess() {
        let request = ImpliedVolRequest::default().with_initial_guesses(1.5, 0.2);
        let err = implied_volatility(&reference(), 10.0, &request).unwrap_err();
        assert_eq!(
            err,
            ImpliedVolError::Solver(SolverError::OutOfDomain {
                x: 1.5,
                low: 0.01,
                high: 1.0
            })
        );
    }

    #[test]
    fn test_unreachable_price_pins_to_upper_bound() {
        // price(1.0) ≈ 17.98, so 30 cannot be reached inside [0.01, 1.0].
        assert!(price(1.0, &reference()) < 30.0);
        let request = ImpliedVolRequest::default();
        let err = implied_volatility(&reference(), 30.0, &request).unwrap_err();
        assert_eq!(
            err,
            ImpliedVolError::Solver(SolverError::Stagnation {
                x0: 1.0,
                x1: 1.0,
                delta: 0.0
            })
        );
    }

    #[test]
    fn test_unreachable_price_exhausts_budget_without_stagnation_check() {
        let config = SecantConfig::new(1e-6, 100).with_stagnation_threshold(0.0);
        let request = ImpliedVolRequest::default().with_config(config);

        let err = implied_volatility(&reference(), 30.0, &request).unwrap_err();
        assert_eq!(
            err,
            ImpliedVolError::Solver(SolverError::NonConvergence { iterations: 100 })
        );
    }

    #[test]
    fn test_non_positive_domain_rejected() {
        let request = ImpliedVolRequest::default()
            .with_domain(0.0, 1.0)
            .with_initial_guesses(0.1, 0.2);
        let err = implied_volatility(&reference(), 10.0, &request).unwrap_err();
        assert_eq!(
            err,
            ImpliedVolError::Analytical(AnalyticalError::InvalidVolatility { volatility: 0.0 })
        );
    }

    #[test]
    fn test_unordered_domain_rejected() {
        let request = ImpliedVolRequest::default().with_domain(1.0, 0.01);
        let err = implied_volatility(&reference(), 10.0, &request).unwrap_err();
        assert!(matches!(
            err,
            ImpliedVolError::Solver(SolverError::InvalidDomain { .. })
        ));
    }
}
