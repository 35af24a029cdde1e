//! CLI configuration management
//!
//! Settings are resolved from four sources, highest priority last:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `opus.toml` in the working directory)
//! 3. Environment variables (`OPUS_SPOT`, `OPUS_PATHS`, `OPUS_LOG_LEVEL`, ...)
//! 4. Command-line flags

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File read when no `--config` is given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "opus.toml";

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "OPUS_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format name.
    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    /// Value out of its allowed range.
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue {
        /// Setting name
        name: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Unreadable or malformed configuration file.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Environment variable that does not parse.
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Diagnostics
    Debug,
    /// Progress messages
    Info,
    /// Recoverable problems only
    #[default]
    Warn,
    /// Failures only
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

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Resolved CLI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub expiry: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
    /// Binomial lattice depth
    pub steps: usize,
    /// Monte Carlo path count
    pub paths: usize,
    /// Monte Carlo monitoring steps for Asian options
    pub mc_steps: usize,
    /// Monte Carlo seed; unset means a fresh seed per run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Output format
    pub format: OutputFormat,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
            steps: 100,
            paths: 10_000,
            mc_steps: opus_pricing::mc::DEFAULT_ASIAN_STEPS,
            seed: None,
            format: OutputFormat::Table,
            log_level: LogLevel::Warn,
        }
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvError(format!("{}{} has invalid value '{}'", ENV_PREFIX, key, value))
    })
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            reason: format!("must be positive, got {}", value),
        })
    }
}

fn require_count(name: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::InvalidValue {
            name,
            reason: "must be at least 1".to_string(),
        })
    } else {
        Ok(())
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `OPUS_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(format!("{}{}", ENV_PREFIX, key)).ok())
    }

    /// Apply overrides from `lookup`, which maps a key without the `OPUS_`
    /// prefix (e.g. `SPOT`) to its value.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("SPOT") {
            self.spot = parse_env("SPOT", &v)?;
        }
        if let Some(v) = lookup("STRIKE") {
            self.strike = parse_env("STRIKE", &v)?;
        }
        if let Some(v) = lookup("EXPIRY") {
            self.expiry = parse_env("EXPIRY", &v)?;
        }
        if let Some(v) = lookup("RATE") {
            self.rate = parse_env("RATE", &v)?;
        }
        if let Some(v) = lookup("VOLATILITY") {
            self.volatility = parse_env("VOLATILITY", &v)?;
        }
        if let Some(v) = lookup("STEPS") {
            self.steps = parse_env("STEPS", &v)?;
        }
        if let Some(v) = lookup("PATHS") {
            self.paths = parse_env("PATHS", &v)?;
        }
        if let Some(v) = lookup("MC_STEPS") {
            self.mc_steps = parse_env("MC_STEPS", &v)?;
        }
        if let Some(v) = lookup("SEED") {
            self.seed = Some(parse_env("SEED", &v)?);
        }
        if let Some(v) = lookup("FORMAT") {
            self.format = OutputFormat::from_str(&v)?;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&v)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(v) = cli.spot {
            self.spot = v;
        }
        if let Some(v) = cli.strike {
            self.strike = v;
        }
        if let Some(v) = cli.expiry {
            self.expiry = v;
        }
        if let Some(v) = cli.rate {
            self.rate = v;
        }
        if let Some(v) = cli.volatility {
            self.volatility = v;
        }
        if let Some(v) = cli.steps {
            self.steps = v;
        }
        if let Some(v) = cli.paths {
            self.paths = v;
        }
        if let Some(v) = cli.mc_steps {
            self.mc_steps = v;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(v) = cli.format {
            self.format = v;
        }
        if let Some(v) = cli.log_level {
            self.log_level = v;
        }
    }

    /// Validate the configuration
    ///
    /// Market inputs must be positive (rate finite) and every count at
    /// least 1. The pricing library re-checks all of this; failing here
    /// reports the offending setting by its configuration name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;
        require_positive("expiry", self.expiry)?;
        require_positive("volatility", self.volatility)?;
        if !self.rate.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "rate",
                reason: format!("must be finite, got {}", self.rate),
            });
        }
        require_count("steps", self.steps)?;
        require_count("paths", self.paths)?;
        require_count("mc_steps", self.mc_steps)?;
        Ok(())
    }
}

/// Values given on the command line; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Spot override
    pub spot: Option<f64>,
    /// Strike override
    pub strike: Option<f64>,
    /// Expiry override
    pub expiry: Option<f64>,
    /// Rate override
    pub rate: Option<f64>,
    /// Volatility override
    pub volatility: Option<f64>,
    /// Lattice depth override
    pub steps: Option<usize>,
    /// Path count override
    pub paths: Option<usize>,
    /// Asian monitoring steps override
    pub mc_steps: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
///
/// An explicitly named file must exist; the default `opus.toml` is read
/// only when present.
pub fn build_config(cli: &CliOverrides) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| {
        std::env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    })
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliOverrides, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;
    Ok(config)
}
