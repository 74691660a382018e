//! Odds File Reader - JSONL Quote Source
//!
//! Reads parsed odds quotes from a JSONL file, one record per line.
//! Malformed lines and quotes with non-positive odds are skipped with
//! a warning rather than failing the whole load; the domain downstream
//! assumes clean input.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::domain::odds::OddsRecord;
use crate::ports::odds_source::OddsSource;

/// JSONL-backed odds source.
///
/// A missing file is treated as an empty source, not an error, so the
/// CLI stays usable before any quotes have been collected.
pub struct JsonlOddsSource {
    path: PathBuf,
}

impl JsonlOddsSource {
    /// Create a source reading from the given JSONL file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OddsSource for JsonlOddsSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_records(&self) -> Result<Vec<OddsRecord>> {
        if !self.path.exists() {
            info!("Odds file does not exist yet, returning no records");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read odds file: {}", self.path.display()))?;

        let mut records = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<OddsRecord>(line) {
                Ok(record) if record.odds > Decimal::ZERO => records.push(record),
                Ok(record) => {
                    warn!(
                        line = lineno + 1,
                        fighter = %record.fighter,
                        odds = %record.odds,
                        "Skipping quote with non-positive odds"
                    );
                }
                Err(e) => {
                    warn!(
                        line = lineno + 1,
                        error = %e,
                        "Skipping malformed odds record"
                    );
                }
            }
        }

        info!(count = records.len(), "Loaded odds records");
        Ok(records)
    }

    async fn is_healthy(&self) -> bool {
        !self.path.exists() || fs::metadata(&self.path).await.is_ok()
    }
}
