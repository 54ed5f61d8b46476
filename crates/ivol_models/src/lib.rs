//! # ivol_models (Pricer Layer)
//!
//! Black-Scholes pricing and the implied volatility search built on it.
//!
//! This crate provides:
//! - Option parameters and the closed-form European pricer (`analytical`)
//! - The standard normal CDF/PDF the pricer depends on
//! - The `price - market price` objective and the driver that hands it to
//!   the secant solver in `ivol_core` (`implied`)
//!
//! ## Example
//!
//! ```
//! use ivol_models::analytical::OptionParameters;
//! use ivol_models::implied::{implied_volatility, ImpliedVolRequest};
//!
//! let params = OptionParameters::new(40.0, 35.0, 0.08, 1.0).unwrap();
//! let vol = implied_volatility(&params, 10.0, &ImpliedVolRequest::default()).unwrap();
//! assert!((vol - 0.370162).abs() < 1e-5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod implied;
