//! Integration tests for the implied volatility search.
//!
//! Exercises the pricer, objective and secant solver together through the
//! public API.

use std::cell::RefCell;

use approx::assert_relative_eq;
use ivol_core::math::solvers::{SearchDomain, SecantConfig, SecantSolver};
use ivol_core::types::SolverError;
use ivol_models::analytical::{price, OptionParameters, OptionType};
use ivol_models::implied::{
    implied_volatility, implied_volatility_with_report, ImpliedVolError, ImpliedVolRequest,
    Objective,
};
use proptest::prelude::*;

fn reference() -> OptionParameters {
    OptionParameters::new(40.0, 35.0, 0.08, 1.0).unwrap()
}

fn atm() -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 0.05, 1.0).unwrap()
}

#[test]
fn test_reference_run() {
    let request = ImpliedVolRequest::default()
        .with_domain(0.01, 1.0)
        .with_initial_guesses(0.1, 0.2)
        .with_config(SecantConfig::new(1e-6, 100));

    let vol = implied_volatility(&reference(), 10.0, &request).unwrap();

    assert_relative_eq!(vol, 0.370162, epsilon = 1e-5);
    assert!((price(vol, &reference()) - 10.0).abs() < 1e-6);
}

#[test]
fn test_out_of_domain_raised_before_pricing() {
    let params = reference();
    let objective = Objective::new(&params, 10.0);
    let evaluations = RefCell::new(0usize);
    let solver = SecantSolver::new(SecantConfig::default());
    let domain = SearchDomain::new(0.01, 1.0).unwrap();

    let result = solver.find_root(
        |sigma| {
            *evaluations.borrow_mut() += 1;
            objective.evaluate(sigma)
        },
        1.5,
        0.2,
        &domain,
    );

    assert!(matches!(result, Err(SolverError::OutOfDomain { x, .. }) if x == 1.5));
    assert_eq!(*evaluations.borrow(), 0);
}

#[test]
fn test_clamped_step_evaluates_upper_bound_exactly() {
    let params = reference();
    let objective = Objective::new(&params, 10.0);
    let evaluated = RefCell::new(Vec::new());
    let solver = SecantSolver::new(SecantConfig::default());
    // The first unclamped secant step from (0.1, 0.2) lands near 0.555.
    let domain = SearchDomain::new(0.01, 0.5).unwrap();

    let vol = solver
        .find_root(
            |sigma| {
                evaluated.borrow_mut().push(sigma);
                objective.evaluate(sigma)
            },
            0.1,
            0.2,
            &domain,
        )
        .unwrap();

    assert_eq!(evaluated.borrow()[2], 0.5);
    assert_relative_eq!(vol, 0.370162, epsilon = 1e-5);
}

#[test]
fn test_unreachable_price_non_convergence() {
    // Far above price(σ = 1.0) ≈ 17.98.
    let market_price = 30.0;

    let tight_budget = ImpliedVolRequest::default().with_config(SecantConfig::new(1e-6, 1));
    let err = implied_volatility(&reference(), market_price, &tight_budget).unwrap_err();
    assert!(err.is_non_convergence());

    let config = SecantConfig::new(1e-6, 100).with_stagnation_threshold(0.0);
    let no_stagnation_check = ImpliedVolRequest::default().with_config(config);
    let err = implied_volatility(&reference(), market_price, &no_stagnation_check).unwrap_err();
    assert_eq!(
        err,
        ImpliedVolError::Solver(SolverError::NonConvergence { iterations: 100 })
    );
}

#[test]
fn test_unreachable_price_stagnates_with_default_thresholds() {
    let err = implied_volatility(&reference(), 30.0, &ImpliedVolRequest::default()).unwrap_err();
    assert!(err.is_stagnation());
}

#[test]
fn test_unreachable_low_price_pins_to_lower_bound() {
    // Below the discounted intrinsic value no volatility fits: the second
    // step clamps to 0.01, the third sees two identical objective values.
    let err = implied_volatility(&reference(), 5.0, &ImpliedVolRequest::default()).unwrap_err();
    assert_eq!(
        err,
        ImpliedVolError::Solver(SolverError::Stagnation {
            x0: 0.01,
            x1: 0.01,
            delta: 0.0
        })
    );
}

#[test]
fn test_arbitrage_check_flags_unreachable_price() {
    let params = reference();
    assert!(params
        .check_arbitrage_bounds(OptionType::Call, 10.0)
        .is_ok());
    assert!(params
        .check_arbitrage_bounds(OptionType::Call, 45.0)
        .is_err());
}

#[test]
fn test_concurrent_searches_are_independent() {
    let strikes = [30.0, 35.0, 40.0, 45.0, 50.0];
    let results: Vec<(f64, f64)> = std::thread::scope(|scope| {
        let handles: Vec<_> = strikes
            .iter()
            .map(|&strike| {
                scope.spawn(move || {
                    let params = OptionParameters::new(40.0, strike, 0.08, 1.0).unwrap();
                    let target = price(0.4, &params);
                    let request =
                        ImpliedVolRequest::default().with_config(SecantConfig::new(1e-10, 100));
                    (strike, implied_volatility(&params, target, &request).unwrap())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (strike, vol) in results {
        assert!((vol - 0.4).abs() < 1e-6, "strike {} gave {}", strike, vol);
    }
}

#[test]
fn test_report_counts() {
    let report =
        implied_volatility_with_report(&atm(), price(0.25, &atm()), &ImpliedVolRequest::default())
            .unwrap();
    assert_eq!(report.evaluations, report.iterations + 2);
    assert!(report.residual.abs() < 1e-6);
}

proptest! {
    /// Price is strictly increasing in volatility.
    #[test]
    fn prop_price_increasing_in_sigma(sigma in 0.05_f64..2.0, bump in 0.001_f64..0.5) {
        let params = atm();
        prop_assert!(price(sigma + bump, &params) > price(sigma, &params));
    }

    /// Pricing at σ* and solving from bracketing guesses recovers σ*.
    #[test]
    fn prop_round_trip(sigma_star in 0.05_f64..0.95) {
        let params = atm();
        let market_price = price(sigma_star, &params);
        let request = ImpliedVolRequest::default()
            .with_initial_guesses(sigma_star * 0.5, (sigma_star * 1.5).min(1.0))
            .with_config(SecantConfig::new(1e-8, 100));

        let vol = implied_volatility(&params, market_price, &request).unwrap();
        prop_assert!((vol - sigma_star).abs() < 1e-6);
    }
}
