//! Domain layer - Core odds aggregation and ledger logic.
//!
//! This module contains the pure domain logic for the ringside CLI.
//! No external dependencies allowed here (hexagonal architecture inner ring).
//! All types are serializable and testable in isolation.

pub mod aggregate;
pub mod ledger;
pub mod odds;
pub mod value;

// Re-export core types for convenience
pub use aggregate::{all_fighters, best_and_average, group_fights};
pub use ledger::{Bet, BetLedger, BetOutcome, BetSummary, LedgerError};
pub use odds::{FightGroup, FightKey, FighterOddsSummary, OddsRecord};
pub use value::{find_value_bets, ValueBet};
