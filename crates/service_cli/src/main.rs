//! Neutryx CLI - binomial lattice option pricing
//!
//! # Commands
//!
//! - `neutryx price` - Price a vanilla option on the lattice
//! - `neutryx delta` - Estimate delta (lattice or Black-Scholes)
//! - `neutryx path` - Simulate one risk-neutral binomial path
//! - `neutryx convergence` - Lattice vs Black-Scholes as steps double

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use service_cli::commands::{convergence, delta, path, price};
use service_cli::config::{CliConfig, DEFAULT_CONFIG_FILE};
use service_cli::output::OutputFormat;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Neutryx binomial lattice pricer
#[derive(Parser)]
#[command(name = "neutryx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Output format (overrides the configuration)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a vanilla option on the binomial lattice
    Price(price::PriceArgs),

    /// Estimate the option delta
    Delta(delta::DeltaArgs),

    /// Simulate a binomial price path
    Path(path::PathArgs),

    /// Compare lattice prices with Black-Scholes for doubling step counts
    Convergence(convergence::ConvergenceArgs),
}

fn init_tracing(log_level: &str) {
    // Logs go to stderr so JSON reports on stdout stay parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(level);

    info!("Neutryx CLI v{}", service_cli::VERSION);
    debug!(?config, "Configuration loaded");

    let format = cli.format.unwrap_or(config.format);

    match &cli.command {
        Commands::Price(args) => price::run(args, &config, format)?,
        Commands::Delta(args) => delta::run(args, &config, format)?,
        Commands::Path(args) => path::run(args, &config, format)?,
        Commands::Convergence(args) => convergence::run(args, &config, format)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pricer_models::instruments::{ExerciseStyle, PayoffType};

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_price() {
        let cli = Cli::try_parse_from([
            "neutryx", "--format", "json", "price", "--payoff", "put", "--style", "american",
            "--steps", "3", "--spot", "41", "--strike", "40", "--rate", "0.08",
            "--volatility", "0.3",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Price(args) => {
                assert_eq!(args.steps, Some(3));
                assert_eq!(args.contract.spot, Some(41.0));
                assert_eq!(args.payoff, PayoffType::Put);
                assert_eq!(args.style, ExerciseStyle::American);
                assert_eq!(args.contract.expiry, None);
            }
            _ => panic!("expected price command"),
        }
    }

    #[test]
    fn test_parse_delta_method() {
        let cli =
            Cli::try_parse_from(["neutryx", "delta", "--method", "black-scholes"]).unwrap();
        match cli.command {
            Commands::Delta(args) => assert_eq!(args.method, delta::DeltaArg::BlackScholes),
            _ => panic!("expected delta command"),
        }
    }

    #[test]
    fn test_negative_rate_accepted() {
        let cli = Cli::try_parse_from(["neutryx", "path", "--rate", "-0.01", "--seed", "3"]).unwrap();
        match cli.command {
            Commands::Path(args) => {
                assert_eq!(args.contract.rate, Some(-0.01));
                assert_eq!(args.seed, Some(3));
            }
            _ => panic!("expected path command"),
        }
    }

    #[test]
    fn test_unknown_payoff_rejected() {
        assert!(Cli::try_parse_from(["neutryx", "price", "--payoff", "straddle"]).is_err());
    }
}
