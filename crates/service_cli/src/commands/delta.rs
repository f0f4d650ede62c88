//! Delta command implementation

use clap::{Args, ValueEnum};
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{ExerciseStyle, PayoffType, VanillaOption};
use pricer_pricing::greeks::DeltaMethod;
use pricer_pricing::tree::BinomialTree;
use serde::Serialize;
use tracing::info;

use super::ContractArgs;
use crate::config::CliConfig;
use crate::error::Result;
use crate::output::{emit, fmt_value, OutputFormat, Report};

/// Delta estimator choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DeltaArg {
    /// One-step lattice finite difference
    Simple,
    /// Two-step lattice finite difference
    Binomial,
    /// Analytic Black-Scholes delta
    BlackScholes,
}

/// Arguments for `neutryx delta`.
#[derive(Args, Debug, Clone)]
pub struct DeltaArgs {
    /// Payoff type (call, put)
    #[arg(short, long, default_value = "call")]
    pub payoff: PayoffType,

    /// Estimator
    #[arg(short, long, value_enum, default_value_t = DeltaArg::Simple)]
    pub method: DeltaArg,

    /// Lattice steps (defaults to the configured value)
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Result of `neutryx delta`.
#[derive(Debug, Clone, Serialize)]
pub struct DeltaReport {
    /// Payoff type
    pub payoff: PayoffType,
    /// Estimator used
    pub method: DeltaArg,
    /// Lattice steps, absent for the analytic estimator
    pub steps: Option<usize>,
    /// Delta estimate
    pub delta: f64,
}

impl Report for DeltaReport {
    fn rows(&self) -> Vec<(String, String)> {
        let method = match self.method {
            DeltaArg::Simple => "simple",
            DeltaArg::Binomial => "binomial",
            DeltaArg::BlackScholes => "black-scholes",
        };
        let mut rows = vec![
            ("Payoff".to_string(), self.payoff.to_string()),
            ("Method".to_string(), method.to_string()),
        ];
        if let Some(steps) = self.steps {
            rows.push(("Steps".to_string(), steps.to_string()));
        }
        rows.push(("Delta".to_string(), fmt_value(self.delta)));
        rows
    }
}

/// Builds the delta report.
pub fn compute(args: &DeltaArgs, config: &CliConfig) -> Result<DeltaReport> {
    let params = args.contract.resolve(&config.market);

    let (steps, delta) = match args.method {
        DeltaArg::BlackScholes => {
            params.validate()?;
            let model = BlackScholes::from_params(&params)?;
            (None, model.delta(params.strike(), params.expiry(), args.payoff))
        }
        lattice_method => {
            let method = match lattice_method {
                DeltaArg::Binomial => DeltaMethod::Binomial,
                _ => DeltaMethod::Simple,
            };
            let steps = args.steps.unwrap_or(config.steps);
            let option = VanillaOption::new(params, args.payoff, ExerciseStyle::European);
            (Some(steps), BinomialTree::new(steps).delta(&option, method)?)
        }
    };

    Ok(DeltaReport {
        payoff: args.payoff,
        method: args.method,
        steps,
        delta,
    })
}

/// Run the delta command
pub fn run(args: &DeltaArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!(payoff = %args.payoff, "Computing delta...");
    let report = compute(args, config)?;
    emit(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args(method: DeltaArg, payoff: PayoffType) -> DeltaArgs {
        DeltaArgs {
            payoff,
            method,
            steps: Some(3),
            contract: ContractArgs {
                spot: Some(41.0),
                strike: Some(40.0),
                expiry: Some(1.0),
                rate: Some(0.08),
                dividend: Some(0.0),
                volatility: Some(0.3),
            },
        }
    }

    #[test]
    fn test_lattice_methods() {
        let config = CliConfig::default();
        let simple = compute(&args(DeltaArg::Simple, PayoffType::Call), &config).unwrap();
        let binomial = compute(&args(DeltaArg::Binomial, PayoffType::Call), &config).unwrap();
        assert_relative_eq!(simple.delta, 0.686992, epsilon = 1e-5);
        assert_relative_eq!(binomial.delta, 0.691949, epsilon = 1e-5);
        assert_eq!(simple.steps, Some(3));
    }

    #[test]
    fn test_black_scholes_call_and_put() {
        let config = CliConfig::default();
        let call = compute(&args(DeltaArg::BlackScholes, PayoffType::Call), &config).unwrap();
        let put = compute(&args(DeltaArg::BlackScholes, PayoffType::Put), &config).unwrap();
        assert!(call.steps.is_none());
        assert_relative_eq!(call.delta - put.delta, 1.0, epsilon = 1e-12);
        assert!(call.delta > 0.0 && call.delta < 1.0);
    }

    #[test]
    fn test_json_method_name() {
        let config = CliConfig::default();
        let report = compute(&args(DeltaArg::BlackScholes, PayoffType::Call), &config).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["method"], "black-scholes");
    }
}
