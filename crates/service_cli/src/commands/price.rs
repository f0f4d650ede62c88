//! Price command implementation
//!
//! Prices a vanilla option on the binomial lattice and, for European
//! exercise, alongside the Black-Scholes closed form.

use clap::Args;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{ExerciseStyle, PayoffType, VanillaOption};
use pricer_pricing::tree::BinomialTree;
use serde::Serialize;
use tracing::info;

use super::ContractArgs;
use crate::config::CliConfig;
use crate::error::Result;
use crate::output::{emit, fmt_value, OutputFormat, Report};

/// Arguments for `neutryx price`.
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    /// Payoff type (call, put)
    #[arg(short, long, default_value = "call")]
    pub payoff: PayoffType,

    /// Exercise style (european, american)
    #[arg(short = 'x', long, default_value = "european")]
    pub style: ExerciseStyle,

    /// Lattice steps (defaults to the configured value)
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Lattice geometry echoed in reports.
#[derive(Debug, Clone, Serialize)]
pub struct LatticeReport {
    /// Step length in years
    pub dt: f64,
    /// Up factor
    pub up: f64,
    /// Down factor
    pub down: f64,
    /// Risk-neutral up probability
    pub prob_up: f64,
}

/// Result of `neutryx price`.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Payoff type
    pub payoff: PayoffType,
    /// Exercise style
    pub style: ExerciseStyle,
    /// Lattice steps
    pub steps: usize,
    /// Binomial lattice price
    pub price: f64,
    /// Black-Scholes price (European only)
    pub black_scholes: Option<f64>,
    /// Lattice geometry
    pub lattice: LatticeReport,
}

impl Report for PriceReport {
    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Payoff".to_string(), self.payoff.to_string()),
            ("Exercise".to_string(), self.style.to_string()),
            ("Steps".to_string(), self.steps.to_string()),
            ("Binomial price".to_string(), fmt_value(self.price)),
        ];
        if let Some(bs) = self.black_scholes {
            rows.push(("Black-Scholes".to_string(), fmt_value(bs)));
            rows.push(("Difference".to_string(), fmt_value(self.price - bs)));
        }
        rows.push(("u".to_string(), fmt_value(self.lattice.up)));
        rows.push(("d".to_string(), fmt_value(self.lattice.down)));
        rows.push(("p".to_string(), fmt_value(self.lattice.prob_up)));
        rows
    }
}

/// Builds the price report.
pub fn compute(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    let params = args.contract.resolve(&config.market);
    let steps = args.steps.unwrap_or(config.steps);
    let option = VanillaOption::new(params, args.payoff, args.style);

    let tree = BinomialTree::new(steps);
    let lattice = tree.lattice(&params)?;
    let price = tree.price(&option)?;

    let black_scholes = match args.style {
        ExerciseStyle::European => Some(BlackScholes::from_params(&params)?.price_option(&option)?),
        ExerciseStyle::American => None,
    };

    Ok(PriceReport {
        payoff: args.payoff,
        style: args.style,
        steps,
        price,
        black_scholes,
        lattice: LatticeReport {
            dt: lattice.dt(),
            up: lattice.up(),
            down: lattice.down(),
            prob_up: lattice.prob_up(),
        },
    })
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!(payoff = %args.payoff, style = %args.style, "Starting pricing...");
    let report = compute(args, config)?;
    emit(&report, format)?;
    info!("Pricing complete");
    Ok(())
}
