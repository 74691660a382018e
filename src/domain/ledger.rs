//! Append-only bet ledger and staking/profit summaries.
//!
//! The ledger is an immutable-record log: bets are appended, never
//! edited or deleted. Settlement is optional metadata recorded with the
//! bet (win/loss, optional realized payout); unsettled bets contribute
//! to staking totals but not to profit.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when a bet violates the ledger invariants.
///
/// Each variant names the offending field and carries the rejected value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Stake must be strictly positive.
    #[error("stake must be positive, got {stake}")]
    NonPositiveStake {
        /// The invalid stake that was provided.
        stake: Decimal,
    },

    /// Decimal odds below 1.0 would imply a guaranteed loss on a win.
    #[error("odds must be at least 1.0, got {odds}")]
    OddsBelowOne {
        /// The invalid odds that were provided.
        odds: Decimal,
    },
}

/// Settled outcome of a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetOutcome {
    Win,
    Loss,
}

impl std::fmt::Display for BetOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
        }
    }
}

/// A recorded bet. Immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    /// Unique bet identifier.
    pub id: Uuid,
    /// When the bet was recorded.
    pub timestamp: DateTime<Utc>,
    /// Fighter backed.
    pub fighter: String,
    /// Decimal odds taken (≥ 1.0).
    pub odds: Decimal,
    /// Amount staked (> 0).
    pub stake: Decimal,
    /// Bookmaker the bet was placed with.
    pub bookmaker: String,
    /// Settled outcome, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<BetOutcome>,
    /// Realized payout, if recorded at settlement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout: Option<Decimal>,
}

impl Bet {
    /// Create a new unsettled bet stamped with the current time.
    pub fn new(fighter: String, odds: Decimal, stake: Decimal, bookmaker: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            fighter,
            odds,
            stake,
            bookmaker,
            outcome: None,
            payout: None,
        }
    }

    /// Check the ledger invariants without appending anywhere.
    ///
    /// # Errors
    /// `LedgerError::NonPositiveStake` when `stake ≤ 0`,
    /// `LedgerError::OddsBelowOne` when `odds < 1.0`.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.stake <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveStake { stake: self.stake });
        }
        if self.odds < Decimal::ONE {
            return Err(LedgerError::OddsBelowOne { odds: self.odds });
        }
        Ok(())
    }

    /// Realized profit, or `None` while the bet is unsettled.
    ///
    /// A recorded payout takes precedence; otherwise the decimal-odds
    /// convention applies: stake × (odds − 1) on a win, −stake on a loss.
    pub fn profit(&self) -> Option<Decimal> {
        match (self.outcome, self.payout) {
            (Some(_), Some(payout)) => Some(payout - self.stake),
            (Some(BetOutcome::Win), None) => Some(self.stake * (self.odds - Decimal::ONE)),
            (Some(BetOutcome::Loss), None) => Some(-self.stake),
            (None, _) => None,
        }
    }
}

/// Staking and profit totals over a ledger.
///
/// An empty ledger yields all-zero totals, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BetSummary {
    /// Sum of stakes over all bets.
    pub total_staked: Decimal,
    /// Number of bets recorded.
    pub count: u64,
    /// Number of bets with a settled outcome.
    pub settled_count: u64,
    /// Realized profit over settled bets only.
    pub settled_profit: Decimal,
}

/// Monotonically growing append log of bets.
///
/// The only states are "empty" and "non-empty": there is no edit or
/// delete transition, so every index handed out stays valid for the
/// ledger's lifetime.
#[derive(Debug, Clone, Default)]
pub struct BetLedger {
    bets: Vec<Bet>,
}

impl BetLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously recorded bets.
    ///
    /// Each bet passes through the same validation as a fresh append,
    /// so a hand-edited log with a non-positive stake is rejected here
    /// rather than silently skewing totals.
    pub fn from_bets(bets: Vec<Bet>) -> Result<Self, LedgerError> {
        let mut ledger = Self::new();
        for bet in bets {
            ledger.add_bet(bet)?;
        }
        Ok(ledger)
    }

    /// Append a bet, enforcing the ledger invariants.
    ///
    /// # Errors
    /// `LedgerError::NonPositiveStake` when `stake ≤ 0`,
    /// `LedgerError::OddsBelowOne` when `odds < 1.0`.
    pub fn add_bet(&mut self, bet: Bet) -> Result<(), LedgerError> {
        bet.validate()?;
        self.bets.push(bet);
        Ok(())
    }

    /// Staking totals and settled profit across the whole ledger.
    pub fn summary(&self) -> BetSummary {
        let mut summary = BetSummary::default();
        for bet in &self.bets {
            summary.total_staked += bet.stake;
            summary.count += 1;
            if let Some(profit) = bet.profit() {
                summary.settled_count += 1;
                summary.settled_profit += profit;
            }
        }
        summary
    }

    /// Bets in insertion order. Re-iterable without side effects.
    pub fn history(&self) -> impl Iterator<Item = &Bet> {
        self.bets.iter()
    }

    /// Number of bets recorded.
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    /// True when no bet has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }
}
