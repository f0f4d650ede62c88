//! CLI error types.

use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use pricer_pricing::tree::TreeError;
use thiserror::Error;

/// Errors surfaced by the `neutryx` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown log level in configuration.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Step count of zero.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidSteps(usize),

    /// Contract parameters failed validation.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    /// Lattice engine failure.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Closed-form model failure.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// Report serialisation failure.
    #[error("Serialisation error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
