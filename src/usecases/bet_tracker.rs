//! Bet Tracker - Recording and Summarizing Bets
//!
//! Validates new bets against the ledger invariants, appends them
//! through the `BetStore` port, and rebuilds the in-memory ledger from
//! the persisted log for summaries and history.

use std::sync::Arc;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::domain::ledger::{Bet, BetLedger, BetOutcome, BetSummary};
use crate::ports::bet_store::BetStore;

/// Bet recording and profit/loss summary use case.
pub struct BetTracker<B: BetStore> {
  /// Append-only bet persistence.
  store: Arc<B>,
}

impl<B: BetStore> BetTracker<B> {
  /// Create a tracker backed by the given bet store.
  pub fn new(store: Arc<B>) -> Self {
    Self { store }
  }

  /// Validate and record a new bet.
  ///
  /// Returns the recorded bet on success. Fails with the ledger's
  /// validation error (naming the offending field) before anything
  /// is written.
  #[instrument(skip(self), fields(fighter = %fighter, stake = %stake))]
  pub async fn record_bet(
    &self,
    fighter: String,
    odds: Decimal,
    stake: Decimal,
    bookmaker: String,
    outcome: Option<BetOutcome>,
    payout: Option<Decimal>,
  ) -> Result<Bet> {
    let mut bet = Bet::new(fighter, odds, stake, bookmaker);
    bet.outcome = outcome;
    bet.payout = payout;
    bet.validate()?;

    self
      .store
      .append_bet(&bet)
      .await
      .context("Failed to persist bet")?;

    info!(bet_id = %bet.id, odds = %bet.odds, "Bet recorded");
    Ok(bet)
  }

  /// Staking totals and settled profit over the whole log.
  #[instrument(skip(self))]
  pub async fn summary(&self) -> Result<BetSummary> {
    let ledger = self.load_ledger().await?;
    Ok(ledger.summary())
  }

  /// All recorded bets in insertion order.
  #[instrument(skip(self))]
  pub async fn history(&self) -> Result<Vec<Bet>> {
    let ledger = self.load_ledger().await?;
    Ok(ledger.history().cloned().collect())
  }

  /// Rebuild the ledger from the persisted log.
  async fn load_ledger(&self) -> Result<BetLedger> {
    let bets = self.store.load_bets().await?;
    BetLedger::from_bets(bets).context("Persisted bet log violates ledger invariants")
  }
}
