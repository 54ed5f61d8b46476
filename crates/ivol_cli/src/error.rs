//! CLI error types

use ivol_models::analytical::AnalyticalError;
use ivol_models::implied::ImpliedVolError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI result type
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be built
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The option record was rejected
    #[error("Invalid option: {0}")]
    Analytical(#[from] AnalyticalError),

    /// The implied volatility search failed
    #[error("Implied volatility search failed: {0}")]
    ImpliedVol(#[from] ImpliedVolError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Result could not be serialised
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Writing the result failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
