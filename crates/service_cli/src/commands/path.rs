//! Path command implementation
//!
//! Simulates one risk-neutral binomial path. The seed comes from `--seed`,
//! then the configuration, then OS entropy; it is always reported so the
//! path can be replayed.

use clap::Args;
use pricer_pricing::paths::{binomial_path, PathParams};
use pricer_pricing::rng::PricerRng;
use serde::Serialize;
use tracing::info;

use super::ContractArgs;
use crate::config::CliConfig;
use crate::error::{CliError, Result};
use crate::output::{emit, fmt_value, OutputFormat, Report};

/// Arguments for `neutryx path`.
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Path length (defaults to the configured step count)
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub contract: ContractArgs,
}

/// Result of `neutryx path`.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    /// Seed used for the draw
    pub seed: u64,
    /// Path length
    pub steps: usize,
    /// Simulated prices, starting at spot
    pub path: Vec<f64>,
}

impl Report for PathReport {
    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Seed".to_string(), self.seed.to_string()),
            ("Steps".to_string(), self.steps.to_string()),
        ];
        rows.extend(
            self.path
                .iter()
                .enumerate()
                .map(|(i, price)| (format!("S[{}]", i), fmt_value(*price))),
        );
        rows
    }
}

/// Builds the path report.
pub fn compute(args: &PathArgs, config: &CliConfig) -> Result<PathReport> {
    let params = args.contract.resolve(&config.market);
    params.validate()?;

    let steps = args.steps.unwrap_or(config.steps);
    if steps == 0 {
        return Err(CliError::InvalidSteps(steps));
    }

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => PricerRng::from_seed(seed),
        None => PricerRng::from_entropy(),
    };
    info!(seed = rng.seed(), steps, "Simulating binomial path");

    let path = binomial_path(&PathParams::from(&params), steps, &mut rng);

    Ok(PathReport {
        seed: rng.seed(),
        steps,
        path,
    })
}

/// Run the path command
pub fn run(args: &PathArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let report = compute(args, config)?;
    emit(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(seed: Option<u64>) -> PathArgs {
        PathArgs {
            steps: Some(20),
            seed,
            contract: ContractArgs::default(),
        }
    }

    #[test]
    fn test_seeded_path_is_reproducible() {
        let config = CliConfig::default();
        let first = compute(&args(Some(42)), &config).unwrap();
        let second = compute(&args(Some(42)), &config).unwrap();
        assert_eq!(first.seed, 42);
        assert_eq!(first.path, second.path);
        assert_eq!(first.path.len(), 20);
        assert_eq!(first.path[0], config.market.spot);
    }

    #[test]
    fn test_config_seed_used_when_flag_absent() {
        let config = CliConfig {
            seed: Some(9),
            ..CliConfig::default()
        };
        assert_eq!(compute(&args(None), &config).unwrap().seed, 9);
    }

    #[test]
    fn test_entropy_seed_replays() {
        let config = CliConfig::default();
        let drawn = compute(&args(None), &config).unwrap();
        let replay = compute(&args(Some(drawn.seed)), &config).unwrap();
        assert_eq!(drawn.path, replay.path);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let mut zero = args(Some(1));
        zero.steps = Some(0);
        assert!(matches!(
            compute(&zero, &CliConfig::default()),
            Err(CliError::InvalidSteps(0))
        ));
    }
}
