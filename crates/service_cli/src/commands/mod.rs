//! CLI command implementations
//!
//! Each submodule implements a specific CLI command: a `compute` function
//! that builds a serialisable report and a `run` function that prints it.

pub mod convergence;
pub mod delta;
pub mod path;
pub mod price;

use clap::Args;
use pricer_models::instruments::OptionParams;

use crate::config::MarketConfig;

/// Contract flags shared by the pricing commands; omitted ones fall back to
/// the `[market]` configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ContractArgs {
    /// Spot price
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Continuous dividend yield
    #[arg(long, allow_negative_numbers = true)]
    pub dividend: Option<f64>,

    /// Volatility
    #[arg(long)]
    pub volatility: Option<f64>,
}

impl ContractArgs {
    /// Merges the flags over the configured market defaults.
    pub fn resolve(&self, market: &MarketConfig) -> OptionParams<f64> {
        OptionParams::new(
            self.spot.unwrap_or(market.spot),
            self.strike.unwrap_or(market.strike),
            self.expiry.unwrap_or(market.expiry),
            self.rate.unwrap_or(market.rate),
            self.volatility.unwrap_or(market.volatility),
        )
        .with_dividend(self.dividend.unwrap_or(market.dividend))
    }
}
