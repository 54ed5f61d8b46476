//! Demo command
//!
//! Solves the reference scenario: a one-year call struck at 35 on a spot of
//! 40, rate 8%, quoted at 10. The expected answer is about 0.370162.

use ivol_models::analytical::OptionType;

use super::solve::{self, SolveInput};
use crate::config::IvolConfig;
use crate::Result;

/// Reference scenario inputs
pub const REFERENCE: SolveInput = SolveInput {
    spot: 40.0,
    strike: 35.0,
    rate: 0.08,
    maturity: 1.0,
    price: 10.0,
    option_type: OptionType::Call,
    check_bounds: false,
};

/// Run the demo command
pub fn run(config: &IvolConfig) -> Result<()> {
    solve::run(config, &REFERENCE)
}
