//! Solve command implementation
//!
//! Backs out the Black-Scholes volatility implied by one observed price.

use std::io::Write;

use ivol_core::math::solvers::SecantReport;
use ivol_models::analytical::{OptionParameters, OptionType};
use ivol_models::implied::implied_volatility_with_report;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{IvolConfig, OutputFormat};
use crate::{CliError, Result};

/// Market inputs for one search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveInput {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Observed option price
    pub price: f64,
    /// Payoff
    pub option_type: OptionType,
    /// Reject prices outside the no-arbitrage band before searching
    pub check_bounds: bool,
}

/// Result of a successful search, as printed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolveOutput {
    /// Volatility matching the observed price
    pub implied_volatility: f64,
    /// Secant steps taken
    pub iterations: usize,
    /// Objective evaluations, the two initial guesses included
    pub evaluations: usize,
    /// Pricing error at the returned volatility
    pub residual: f64,
}

impl From<SecantReport<f64>> for SolveOutput {
    fn from(report: SecantReport<f64>) -> Self {
        Self {
            implied_volatility: report.root,
            iterations: report.iterations,
            evaluations: report.evaluations,
            residual: report.residual,
        }
    }
}

/// Run the search without printing anything
pub fn solve(config: &IvolConfig, input: &SolveInput) -> Result<SolveOutput> {
    if !input.price.is_finite() || input.price < 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "price must be a finite non-negative number, got {}",
            input.price
        )));
    }

    let params = OptionParameters::new(input.spot, input.strike, input.rate, input.maturity)?;
    if input.check_bounds {
        params.check_arbitrage_bounds(input.option_type, input.price)?;
    }

    let request = config.request(input.option_type);
    debug!(
        low = request.low,
        high = request.high,
        x0 = request.x0,
        x1 = request.x1,
        tolerance = request.config.tolerance,
        max_iterations = request.config.max_iterations,
        "Search configured"
    );

    let report = implied_volatility_with_report(&params, input.price, &request)?;
    Ok(report.into())
}

/// Format a result for stdout
pub fn render(format: OutputFormat, output: &SolveOutput) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let vol = output.implied_volatility;
            Ok(format!("Implied Volatility: {}", vol))
        }
        OutputFormat::Json => Ok(serde_json::to_string(output)?),
    }
}

/// Run the solve command
pub fn run(config: &IvolConfig, input: &SolveInput) -> Result<()> {
    info!(
        spot = input.spot,
        strike = input.strike,
        rate = input.rate,
        maturity = input.maturity,
        price = input.price,
        option_type = %input.option_type,
        "Solving for implied volatility"
    );

    let output = solve(config, input)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", render(config.format, &output)?)?;

    info!(iterations = output.iterations, "Solve complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ivol_models::analytical::AnalyticalError;

    fn reference() -> SolveInput {
        SolveInput {
            spot: 40.0,
            strike: 35.0,
            rate: 0.08,
            maturity: 1.0,
            price: 10.0,
            option_type: OptionType::Call,
            check_bounds: false,
        }
    }

    #[test]
    fn test_solve_reference() {
        let output = solve(&IvolConfig::default(), &reference()).unwrap();
        assert_relative_eq!(output.implied_volatility, 0.370162, epsilon = 1e-5);
        assert_eq!(output.evaluations, output.iterations + 2);
    }

    #[test]
    fn test_render_text() {
        let output = SolveOutput {
            implied_volatility: 0.25,
            iterations: 4,
            evaluations: 6,
            residual: 1e-9,
        };
        assert_eq!(
            render(OutputFormat::Text, &output).unwrap(),
            "Implied Volatility: 0.25"
        );
    }

    #[test]
    fn test_render_json() {
        let output = SolveOutput {
            implied_volatility: 0.25,
            iterations: 4,
            evaluations: 6,
            residual: 0.0,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, &output).unwrap()).unwrap();
        assert_eq!(json["implied_volatility"], 0.25);
        assert_eq!(json["iterations"], 4);
        assert_eq!(json["evaluations"], 6);
        assert_eq!(json["residual"], 0.0);
    }

    #[test]
    fn test_invalid_option_rejected() {
        let input = SolveInput {
            spot: -1.0,
            ..reference()
        };
        let err = solve(&IvolConfig::default(), &input).unwrap_err();
        assert!(matches!(
            err,
            CliError::Analytical(AnalyticalError::InvalidSpot { .. })
        ));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        for price in [f64::NAN, f64::INFINITY, -1.0] {
            let input = SolveInput {
                price,
                ..reference()
            };
            let err = solve(&IvolConfig::default(), &input).unwrap_err();
            assert!(
                matches!(err, CliError::InvalidArgument(_)),
                "price {}",
                price
            );
        }
    }

    #[test]
    fn test_check_bounds() {
        let input = SolveInput {
            price: 45.0,
            check_bounds: true,
            ..reference()
        };
        let err = solve(&IvolConfig::default(), &input).unwrap_err();
        assert!(matches!(
            err,
            CliError::Analytical(AnalyticalError::PriceOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_search_failure_surfaces() {
        let mut config = IvolConfig::default();
        config.search.x0 = 1.5;
        let err = solve(&config, &reference()).unwrap_err();
        assert!(matches!(err, CliError::ImpliedVol(e) if e.is_out_of_domain()));
    }
}
