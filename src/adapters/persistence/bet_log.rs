//! Bet Log - Append-only JSONL Bet Records
//!
//! Persists recorded bets to a single JSONL file. Each line is a
//! self-contained JSON record for easy parsing, streaming, and crash
//! recovery. An append writes one complete line in a single call, so
//! concurrent appends never interleave bytes of a single bet.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

use crate::domain::ledger::Bet;
use crate::ports::bet_store::BetStore;

/// Append-only JSONL bet store.
pub struct JsonlBetStore {
    path: PathBuf,
}

impl JsonlBetStore {
    /// Create a store appending to the given JSONL file.
    ///
    /// Creates the parent directory if it does not exist yet.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .context("Failed to create bet log directory")?;
            }
        }
        Ok(Self { path })
    }

    /// Path this store appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BetStore for JsonlBetStore {
    #[instrument(skip(self, bet), fields(bet_id = %bet.id))]
    async fn append_bet(&self, bet: &Bet) -> Result<()> {
        let mut json = serde_json::to_string(bet).context("Failed to serialize bet")?;
        json.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open bet log: {}", self.path.display()))?;

        // One write_all per bet keeps the append atomic line-wise.
        file.write_all(json.as_bytes())
            .await
            .context("Failed to write bet record")?;

        file.flush().await.context("Failed to flush bet log")?;

        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_bets(&self) -> Result<Vec<Bet>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read bet log: {}", self.path.display()))?;

        let mut bets = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Bet>(line) {
                Ok(bet) => bets.push(bet),
                Err(e) => {
                    warn!(
                        line = lineno + 1,
                        error = %e,
                        "Skipping malformed bet record"
                    );
                }
            }
        }

        info!(count = bets.len(), "Loaded bet records");
        Ok(bets)
    }

    async fn is_healthy(&self) -> bool {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let test_path = dir.join(".health_check");
        let result = fs::write(&test_path, b"ok").await;
        let _ = fs::remove_file(&test_path).await;
        result.is_ok()
    }
}
