//! ivol - implied volatility from an observed option price

use clap::{Parser, Subcommand};
use ivol_cli::commands::{self, solve::SolveInput};
use ivol_cli::config::{build_config, CliArgs};
use ivol_models::analytical::OptionType;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Black-Scholes implied volatility via the secant method
#[derive(Parser, Debug)]
#[command(name = "ivol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Convergence tolerance on the pricing error
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Smallest accepted secant denominator (defaults to the tolerance)
    #[arg(long, global = true)]
    stagnation_threshold: Option<f64>,

    /// Iteration budget
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    /// Lower volatility bound
    #[arg(long, global = true)]
    low: Option<f64>,

    /// Upper volatility bound
    #[arg(long, global = true)]
    high: Option<f64>,

    /// First initial guess
    #[arg(long, global = true)]
    x0: Option<f64>,

    /// Second initial guess
    #[arg(long, global = true)]
    x1: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve for the volatility implied by an observed price
    Solve {
        /// Spot price
        #[arg(long)]
        spot: f64,

        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Continuously compounded risk-free rate
        #[arg(long)]
        rate: f64,

        /// Time to maturity in years
        #[arg(long)]
        maturity: f64,

        /// Observed option price
        #[arg(long)]
        price: f64,

        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: OptionType,

        /// Reject prices outside the no-arbitrage band before searching
        #[arg(long)]
        check_bounds: bool,
    },

    /// Solve the reference scenario (S=40, K=35, r=0.08, T=1, price=10)
    Demo,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
            tolerance: cli.tolerance,
            stagnation_threshold: cli.stagnation_threshold,
            max_iterations: cli.max_iterations,
            low: cli.low,
            high: cli.high,
            x0: cli.x0,
            x1: cli.x1,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        version = ivol_cli::VERSION,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Solve {
            spot,
            strike,
            rate,
            maturity,
            price,
            option_type,
            check_bounds,
        } => {
            let input = SolveInput {
                spot,
                strike,
                rate,
                maturity,
                price,
                option_type,
                check_bounds,
            };
            commands::solve::run(&config, &input)?
        }
        Commands::Demo => commands::demo::run(&config)?,
    }

    Ok(())
}
