//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line arguments.

use ivol_core::math::solvers::SecantConfig;
use ivol_models::analytical::OptionType;
use ivol_models::implied::ImpliedVolRequest;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Implied Volatility: <value>`
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// `[solver]` table
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    /// Convergence tolerance on |price - market price|
    pub tolerance: f64,
    /// Minimum secant denominator; defaults to `tolerance` when unset
    pub stagnation_threshold: Option<f64>,
    /// Iteration budget
    pub max_iterations: usize,
}

impl Default for SolverSection {
    fn default() -> Self {
        let defaults = SecantConfig::<f64>::default();
        Self {
            tolerance: defaults.tolerance,
            stagnation_threshold: None,
            max_iterations: defaults.max_iterations,
        }
    }
}

/// `[search]` table
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Lower volatility bound
    pub low: f64,
    /// Upper volatility bound
    pub high: f64,
    /// First initial guess
    pub x0: f64,
    /// Second initial guess
    pub x1: f64,
}

impl Default for SearchSection {
    fn default() -> Self {
        let defaults = ImpliedVolRequest::default();
        Self {
            low: defaults.low,
            high: defaults.high,
            x0: defaults.x0,
            x1: defaults.x1,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct IvolConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Solver tolerances and budget
    pub solver: SolverSection,
    /// Volatility domain and starting points
    pub search: SearchSection,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

/// Environment variables read by [`IvolConfig::apply_env`]
pub const ENV_LOG_LEVEL: &str = "IVOL_LOG_LEVEL";
/// See [`ENV_LOG_LEVEL`]
pub const ENV_FORMAT: &str = "IVOL_FORMAT";
/// See [`ENV_LOG_LEVEL`]
pub const ENV_TOLERANCE: &str = "IVOL_TOLERANCE";
/// See [`ENV_LOG_LEVEL`]
pub const ENV_STAGNATION_THRESHOLD: &str = "IVOL_STAGNATION_THRESHOLD";
/// See [`ENV_LOG_LEVEL`]
pub const ENV_MAX_ITERATIONS: &str = "IVOL_MAX_ITERATIONS";

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not a valid value", name, value)))
}

impl IvolConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply overrides from the process environment
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.apply_env(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(tolerance) = lookup(ENV_TOLERANCE) {
            self.solver.tolerance = parse_env(ENV_TOLERANCE, &tolerance)?;
        }
        if let Some(threshold) = lookup(ENV_STAGNATION_THRESHOLD) {
            self.solver.stagnation_threshold =
                Some(parse_env(ENV_STAGNATION_THRESHOLD, &threshold)?);
        }
        if let Some(max_iterations) = lookup(ENV_MAX_ITERATIONS) {
            self.solver.max_iterations = parse_env(ENV_MAX_ITERATIONS, &max_iterations)?;
        }
        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(tolerance) = cli.tolerance {
            self.solver.tolerance = tolerance;
        }
        if let Some(threshold) = cli.stagnation_threshold {
            self.solver.stagnation_threshold = Some(threshold);
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.solver.max_iterations = max_iterations;
        }
        if let Some(low) = cli.low {
            self.search.low = low;
        }
        if let Some(high) = cli.high {
            self.search.high = high;
        }
        if let Some(x0) = cli.x0 {
            self.search.x0 = x0;
        }
        if let Some(x1) = cli.x1 {
            self.search.x1 = x1;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !(self.solver.tolerance > 0.0) {
            errors.push(format!(
                "tolerance must be positive, got {}",
                self.solver.tolerance
            ));
        }
        if let Some(threshold) = self.solver.stagnation_threshold {
            if !(threshold >= 0.0) {
                errors.push(format!(
                    "stagnation_threshold must be non-negative, got {}",
                    threshold
                ));
            }
        }
        if self.solver.max_iterations == 0 {
            errors.push("max_iterations must be greater than 0".to_string());
        }

        let search = &self.search;
        if !(search.low > 0.0) {
            errors.push(format!("search.low must be positive, got {}", search.low));
        }
        if !(search.low < search.high) || !search.high.is_finite() {
            errors.push(format!(
                "search domain [{}, {}] must satisfy low < high",
                search.low, search.high
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Solver configuration described by the `[solver]` table
    pub fn secant_config(&self) -> SecantConfig<f64> {
        SecantConfig {
            tolerance: self.solver.tolerance,
            stagnation_threshold: self
                .solver
                .stagnation_threshold
                .unwrap_or(self.solver.tolerance),
            max_iterations: self.solver.max_iterations,
        }
    }

    /// Search request for one option type
    pub fn request(&self, option_type: OptionType) -> ImpliedVolRequest {
        ImpliedVolRequest::default()
            .with_option_type(option_type)
            .with_domain(self.search.low, self.search.high)
            .with_initial_guesses(self.search.x0, self.search.x1)
            .with_config(self.secant_config())
    }
}

/// Configuration-relevant CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
    /// Tolerance override
    pub tolerance: Option<f64>,
    /// Stagnation threshold override
    pub stagnation_threshold: Option<f64>,
    /// Iteration budget override
    pub max_iterations: Option<usize>,
    /// Lower bound override
    pub low: Option<f64>,
    /// Upper bound override
    pub high: Option<f64>,
    /// First guess override
    pub x0: Option<f64>,
    /// Second guess override
    pub x1: Option<f64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<IvolConfig, ConfigError> {
    let config = match &cli.config_file {
        Some(path) => IvolConfig::from_file(path)?,
        None => IvolConfig::default(),
    };

    let mut config = config.with_env_override()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
