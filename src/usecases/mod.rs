//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement
//! the CLI's core workflows. Each use case is a self-contained
//! business operation.
//!
//! Use cases:
//! - `MarketReport`: Upcoming fights, best prices, value-bet scan
//! - `BetTracker`: Bet recording, staking totals, history

pub mod bet_tracker;
pub mod market_report;

pub use bet_tracker::BetTracker;
pub use market_report::MarketReport;
