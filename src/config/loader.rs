//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::AppConfig;

/// Load configuration from a TOML file, falling back to defaults.
///
/// A missing file is not an error: the CLI is expected to work out of
/// the box with built-in defaults and command-line overrides.
///
/// # Errors
/// Returns detailed error if the file exists but can't be read,
/// fails to parse, or violates a validation rule.
pub fn load_or_default(path: &Path) -> Result<AppConfig> {
  if !path.exists() {
    debug!(path = %path.display(), "No config file, using defaults");
    return Ok(AppConfig::default());
  }

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| format!("Failed to parse {}", path.display()))?;

  validate_config(&config)?;

  debug!(
    odds_file = %config.sources.odds_file,
    bets_file = %config.sources.bets_file,
    threshold = %config.value.threshold,
    "Configuration loaded"
  );

  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.sources.odds_file.is_empty(),
    "sources.odds_file must not be empty"
  );
  anyhow::ensure!(
    !config.sources.bets_file.is_empty(),
    "sources.bets_file must not be empty"
  );
  anyhow::ensure!(
    !config.app.log_level.is_empty(),
    "app.log_level must not be empty"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_missing_file_yields_defaults() {
    let config = load_or_default(Path::new("nonexistent.toml")).unwrap();
    assert_eq!(config.value.threshold, dec!(0.1));
    assert_eq!(config.sources.odds_file, "data/odds.jsonl");
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let config: AppConfig = toml::from_str("[value]\nthreshold = \"0.25\"\n").unwrap();
    assert_eq!(config.value.threshold, dec!(0.25));
    assert_eq!(config.sources.bets_file, "data/bets.jsonl");
    assert_eq!(config.app.log_level, "info");
  }

  #[test]
  fn test_empty_path_rejected() {
    let config: AppConfig = toml::from_str("[sources]\nodds_file = \"\"\n").unwrap();
    assert!(validate_config(&config).is_err());
  }
}
