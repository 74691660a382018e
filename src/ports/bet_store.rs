//! Bet Store Port - Append-only Bet Persistence Interface
//!
//! Defines the trait for persisting recorded bets using JSONL files.
//! No database dependency - lightweight append-only log format
//! optimized for audit trails and crash recovery.

use async_trait::async_trait;

use crate::domain::ledger::Bet;

/// Trait for append-only bet persistence providers.
///
/// Uses JSONL (JSON Lines) format: each line is a self-contained JSON
/// record. An append must write the whole record as one unit so that
/// concurrent appends never interleave bytes of a single bet.
#[async_trait]
pub trait BetStore: Send + Sync + 'static {
  /// Append a bet to the log.
  async fn append_bet(&self, bet: &Bet) -> anyhow::Result<()>;

  /// Load all recorded bets in insertion order.
  async fn load_bets(&self) -> anyhow::Result<Vec<Bet>>;

  /// Check if the store is writable (disk space, permissions).
  async fn is_healthy(&self) -> bool;
}
