//! OPUS CLI - option pricing from the command line
//!
//! # Commands
//!
//! - `opus price --model binomial --style american --type put`
//! - `opus compare --type call --paths 100000 --seed 42`
//! - `opus check`
//!
//! Market inputs and numerical settings come from `--config` (or
//! `opus.toml`), then `OPUS_*` environment variables, then flags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use opus_cli::commands::{self, price::PriceCommand};
use opus_cli::config::{build_config, CliConfig, CliOverrides, LogLevel, OutputFormat};
use opus_core::types::{OptionStyle, OptionType};
use opus_pricing::facade::ModelKind;

/// OPUS option pricing CLI
#[derive(Parser)]
#[command(name = "opus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./opus.toml when present)
    #[arg(short, long, global = true, env = "OPUS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(flatten)]
    market: MarketArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the configured market inputs and numerical settings
#[derive(Args)]
struct MarketArgs {
    /// Spot price
    #[arg(long, global = true)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long, global = true)]
    strike: Option<f64>,

    /// Time to maturity in years
    #[arg(long, global = true)]
    expiry: Option<f64>,

    /// Risk-free rate
    #[arg(long, global = true, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Volatility
    #[arg(long, global = true)]
    volatility: Option<f64>,

    /// Binomial tree steps
    #[arg(long, global = true)]
    steps: Option<usize>,

    /// Monte Carlo paths
    #[arg(long, global = true)]
    paths: Option<usize>,

    /// Monte Carlo monitoring steps for Asian options
    #[arg(long, global = true)]
    mc_steps: Option<usize>,

    /// Monte Carlo seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one option
    Price {
        /// Pricing model (black-scholes, binomial, monte-carlo)
        #[arg(short, long, default_value = "black-scholes")]
        model: ModelKind,

        /// Exercise style (european, american, asian)
        #[arg(short, long, default_value = "european")]
        style: OptionStyle,

        /// Option type (call, put)
        #[arg(short = 't', long = "type", default_value = "call")]
        option_type: OptionType,
    },

    /// Price a European option with every model
    Compare {
        /// Option type (call, put)
        #[arg(short = 't', long = "type", default_value = "call")]
        option_type: OptionType,
    },

    /// Print the resolved configuration
    Check,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            spot: self.market.spot,
            strike: self.market.strike,
            expiry: self.market.expiry,
            rate: self.market.rate,
            volatility: self.market.volatility,
            steps: self.market.steps,
            paths: self.market.paths,
            mc_steps: self.market.mc_steps,
            seed: self.market.seed,
            format: self.market.format,
            log_level: self.log_level,
        }
    }
}

fn init_tracing(config: &CliConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli, config: &CliConfig) -> opus_cli::Result<()> {
    debug!("Resolved configuration: {:?}", config);
    match cli.command {
        Commands::Price {
            model,
            style,
            option_type,
        } => commands::price::run(
            config,
            &PriceCommand {
                model,
                style,
                option_type,
            },
        ),
        Commands::Compare { option_type } => commands::compare::run(config, option_type),
        Commands::Check => commands::check::run(config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
