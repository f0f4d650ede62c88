//! Convergence command implementation
//!
//! Tabulates European and American lattice prices against Black-Scholes for
//! step counts doubling from 1 up to `--max-steps`.

use clap::Args;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{ExerciseStyle, PayoffType, VanillaOption};
use pricer_pricing::tree::BinomialTree;
use serde::Serialize;
use tracing::{debug, info};

use super::ContractArgs;
use crate::config::CliConfig;
use crate::error::{CliError, Result};
use crate::output::{emit, fmt_value, OutputFormat, Report};

/// Arguments for `neutryx convergence`.
#[derive(Args, Debug, Clone)]
pub struct ConvergenceArgs {
    /// Payoff type (call, put)
    #[arg(short, long, default_value = "call")]
    pub payoff: PayoffType,

    /// Largest step count in the table
    #[arg(short, long, default_value_t = 1024)]
    pub max_steps: usize,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// One row of the convergence table.
#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceRow {
    /// Lattice steps
    pub steps: usize,
    /// European lattice price
    pub european: f64,
    /// American lattice price
    pub american: f64,
    /// European price minus Black-Scholes
    pub error: f64,
}

/// Result of `neutryx convergence`.
#[derive(Debug, Clone, Serialize)]
pub struct ConvergenceReport {
    /// Payoff type
    pub payoff: PayoffType,
    /// Black-Scholes reference price
    pub black_scholes: f64,
    /// Rows by increasing step count
    pub rows: Vec<ConvergenceRow>,
}

impl Report for ConvergenceReport {
    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Payoff".to_string(), self.payoff.to_string()),
            ("Black-Scholes".to_string(), fmt_value(self.black_scholes)),
        ];
        rows.extend(self.rows.iter().map(|row| {
            (
                format!("N = {}", row.steps),
                format!(
                    "eu {}  am {}  err {:+.6}",
                    fmt_value(row.european),
                    fmt_value(row.american),
                    row.error
                ),
            )
        }));
        rows
    }
}

/// Builds the convergence report.
pub fn compute(args: &ConvergenceArgs, config: &CliConfig) -> Result<ConvergenceReport> {
    if args.max_steps == 0 {
        return Err(CliError::InvalidSteps(args.max_steps));
    }

    let params = args.contract.resolve(&config.market);
    let european = VanillaOption::new(params, args.payoff, ExerciseStyle::European);
    let american = VanillaOption::new(params, args.payoff, ExerciseStyle::American);
    let black_scholes = BlackScholes::from_params(&params)?.price_option(&european)?;

    let mut rows = Vec::new();
    let mut steps = 1;
    while steps <= args.max_steps {
        let tree = BinomialTree::new(steps);
        let european_price = tree.price(&european)?;
        let american_price = tree.price(&american)?;
        debug!(steps, european = european_price, american = american_price, "convergence row");

        rows.push(ConvergenceRow {
            steps,
            european: european_price,
            american: american_price,
            error: european_price - black_scholes,
        });
        steps *= 2;
    }

    Ok(ConvergenceReport {
        payoff: args.payoff,
        black_scholes,
        rows,
    })
}

/// Run the convergence command
pub fn run(args: &ConvergenceArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!(max_steps = args.max_steps, "Running convergence study...");
    let report = compute(args, config)?;
    emit(&report, format)
}
