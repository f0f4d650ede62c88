//! Configuration layering tests: defaults, TOML file, environment.

use std::collections::HashMap;
use std::io::Write;

use service_cli::config::{CliConfig, LogLevel};
use service_cli::output::OutputFormat;
use service_cli::CliError;
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn test_file_overrides_defaults() {
    let file = toml_file(
        r#"
steps = 250
seed = 42
log_level = "DEBUG"
format = "json"

[market]
spot = 41
strike = 40.0
rate = 0.08
volatility = 0.3
"#,
    );

    let config = CliConfig::load_with_env(file.path(), env(&[])).unwrap();
    assert_eq!(config.steps, 250);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.market.spot, 41.0);
    assert_eq!(config.market.strike, 40.0);
    // Unset market fields keep their defaults.
    assert_eq!(config.market.expiry, 1.0);
    assert_eq!(config.market.dividend, 0.0);
}

#[test]
fn test_env_overrides_file() {
    let file = toml_file("steps = 250\n[market]\nvolatility = 0.3\n");
    let config = CliConfig::load_with_env(
        file.path(),
        env(&[
            ("NEUTRYX_STEPS", "1000"),
            ("NEUTRYX_MARKET__VOLATILITY", "0.25"),
            ("UNRELATED_STEPS", "7"),
        ]),
    )
    .unwrap();
    assert_eq!(config.steps, 1000);
    assert_eq!(config.market.volatility, 0.25);
}

#[test]
fn test_zero_steps_rejected() {
    let file = toml_file("steps = 0\n");
    let err = CliConfig::load_with_env(file.path(), env(&[])).unwrap_err();
    assert!(matches!(err, CliError::InvalidSteps(0)));
}

#[test]
fn test_unknown_log_level_rejected() {
    let file = toml_file("log_level = \"loud\"\n");
    let err = CliConfig::load_with_env(file.path(), env(&[])).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
    assert!(err.to_string().contains("loud"));
}

#[test]
fn test_malformed_toml_rejected() {
    let file = toml_file("steps = [\n");
    assert!(CliConfig::load_with_env(file.path(), env(&[])).is_err());
}

#[test]
fn test_missing_file_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    let config =
        CliConfig::load_with_env(&dir.path().join("neutryx.toml"), env(&[("NEUTRYX_SEED", "5")]))
            .unwrap();
    assert_eq!(config.seed, Some(5));
    assert_eq!(config.steps, 500);
}
