//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `OddsSource`: Loading parsed odds quote records
//! - `BetStore`: Append-only bet persistence (JSONL-based)

pub mod bet_store;
pub mod odds_source;

pub use bet_store::BetStore;
pub use odds_source::OddsSource;
