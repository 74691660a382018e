//! Persistence Adapters - JSONL-based File Storage
//!
//! Implements the `OddsSource` and `BetStore` ports using flat JSONL
//! files: a read-only odds quotes file and an append-only bet log.
//! No database dependency — lightweight and crash-recoverable.

pub mod bet_log;
pub mod odds_file;

pub use bet_log::JsonlBetStore;
pub use odds_file::JsonlOddsSource;
