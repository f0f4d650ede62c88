//! Command line front-end for the Neutryx lattice pricers
//!
//! The `neutryx` binary prices vanilla options on a binomial lattice,
//! estimates deltas, simulates paths and tabulates lattice convergence
//! against Black-Scholes.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
