//! CLI configuration management
//!
//! Settings are layered, lowest priority first:
//! 1. Built-in defaults
//! 2. TOML file (`neutryx.toml` unless `--config` names another; optional)
//! 3. Environment variables prefixed `NEUTRYX_`, with `__` between nested
//!    keys (`NEUTRYX_STEPS=1000`, `NEUTRYX_MARKET__VOLATILITY=0.25`)
//!
//! Command-line flags override the result per command.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};
use crate::output::OutputFormat;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "NEUTRYX";

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "neutryx.toml";

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidLogLevel(s.to_string())),
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

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Default contract parameters used when a flag is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Continuous dividend yield
    pub dividend: f64,
    /// Volatility
    pub volatility: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.06,
            dividend: 0.0,
            volatility: 0.2,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Lattice steps when `--steps` is omitted
    pub steps: usize,
    /// Path simulation seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format when `--format` is omitted
    pub format: OutputFormat,
    /// Default contract parameters
    pub market: MarketConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            steps: pricer_pricing::tree::DEFAULT_STEPS,
            seed: None,
            log_level: LogLevel::Info,
            format: OutputFormat::Table,
            market: MarketConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path` (if it exists) and the process environment.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Loads configuration with an explicit environment map in place of the
    /// process environment when `env` is `Some`.
    pub fn load_with_env(path: &Path, env: Option<HashMap<String, String>>) -> Result<Self> {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env);

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(environment)
            .build()?;

        let config: CliConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(CliError::InvalidSteps(self.steps));
        }
        Ok(())
    }
}
