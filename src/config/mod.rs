//! Configuration Module - TOML-based CLI Configuration
//!
//! Loads and validates configuration from `config.toml`. Every field
//! carries a serde default, so a missing file or a partial file both
//! work: the CLI falls back to built-in defaults and command-line
//! flags override whatever was loaded.

pub mod loader;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  #[serde(default)]
  pub app: AppSection,
  /// Flat-file record locations.
  #[serde(default)]
  pub sources: SourcesConfig,
  /// Value-detection parameters.
  #[serde(default)]
  pub value: ValueConfig,
}

/// Application identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable application name.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
    }
  }
}

/// Flat-file source locations.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
  /// JSONL odds quotes file.
  #[serde(default = "default_odds_file")]
  pub odds_file: String,
  /// JSONL append-only bet log.
  #[serde(default = "default_bets_file")]
  pub bets_file: String,
}

impl Default for SourcesConfig {
  fn default() -> Self {
    Self {
      odds_file: default_odds_file(),
      bets_file: default_bets_file(),
    }
  }
}

/// Value-detection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueConfig {
  /// Edge threshold fraction. Best odds must exceed the average by
  /// strictly more than this to qualify. Negative values are allowed
  /// (they simply admit more candidates).
  #[serde(default = "default_threshold")]
  pub threshold: Decimal,
}

impl Default for ValueConfig {
  fn default() -> Self {
    Self {
      threshold: default_threshold(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "ringside".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_odds_file() -> String {
  "data/odds.jsonl".to_string()
}

fn default_bets_file() -> String {
  "data/bets.jsonl".to_string()
}

fn default_threshold() -> Decimal {
  dec!(0.1)
}
