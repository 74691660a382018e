//! Core odds domain types.
//!
//! Defines the parsed odds quote record and the fight grouping types
//! derived from it. These types are the foundation of the hexagonal
//! architecture's inner ring: no I/O, no async, Decimal arithmetic only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single bookmaker quote for one fighter in one fight.
///
/// Created once at parse time and immutable thereafter. The reading
/// adapter skips malformed rows (non-positive odds, unparseable
/// timestamps); the domain assumes clean input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsRecord {
    /// When the quote was observed.
    pub timestamp: DateTime<Utc>,
    /// Fighter the quote applies to (case-sensitive identity key).
    pub fighter: String,
    /// Opposing fighter. Together with `fighter` this defines the fight.
    pub opponent: String,
    /// Quoting source.
    pub bookmaker: String,
    /// Decimal odds (implied probability = 1/odds).
    pub odds: Decimal,
}

/// Canonical key for an unordered fighter pair.
///
/// The two names are sorted lexicographically on construction, so
/// `FightKey::new("A", "B") == FightKey::new("B", "A")`. Equality and
/// hashing are therefore order-independent without any special casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FightKey {
    first: String,
    second: String,
}

impl FightKey {
    /// Build the canonical key for a fighter/opponent pair.
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    /// Lexicographically smaller fighter name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Lexicographically larger fighter name.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Concatenated pair names, used as the deterministic tie-breaker
    /// when two fights share the same earliest quote time.
    pub fn concat(&self) -> String {
        format!("{}{}", self.first, self.second)
    }
}

impl std::fmt::Display for FightKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.first, self.second)
    }
}

/// All quotes referring to the same two opposing fighters.
///
/// Derived, never persisted. Every input record maps to exactly one
/// group, so a set of groups partitions its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightGroup {
    /// Canonical unordered fighter pair.
    pub key: FightKey,
    /// Minimum timestamp among the group's records ("upcoming" ordering).
    pub earliest_time: DateTime<Utc>,
    /// The quotes belonging to this fight, in input order.
    pub records: Vec<OddsRecord>,
}

/// Best and average price for a single fighter.
///
/// `best_odds >= average_odds` holds whenever at least one record
/// exists; the aggregator returns `None` instead of a summary when the
/// fighter has no records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterOddsSummary {
    /// Fighter identity.
    pub fighter: String,
    /// Maximum odds across all of the fighter's records. Exact ties are
    /// broken by the earliest record in input order.
    pub best_odds: Decimal,
    /// Arithmetic mean over all bookmakers and all fights combined.
    pub average_odds: Decimal,
    /// Bookmaker of the record that won the best-odds fold.
    pub bookmaker: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fight_key_symmetric() {
        let ab = FightKey::new("Usyk", "Fury");
        let ba = FightKey::new("Fury", "Usyk");
        assert_eq!(ab, ba);
        assert_eq!(ab.first(), "Fury");
        assert_eq!(ab.second(), "Usyk");
    }

    #[test]
    fn test_fight_key_display() {
        let key = FightKey::new("Canelo", "Bivol");
        assert_eq!(format!("{key}"), "Bivol vs Canelo");
    }

    #[test]
    fn test_fight_key_concat() {
        let key = FightKey::new("B", "A");
        assert_eq!(key.concat(), "AB");
    }

    #[test]
    fn test_fight_key_identical_names() {
        // Degenerate but must not panic or reorder
        let key = FightKey::new("X", "X");
        assert_eq!(key.first(), "X");
        assert_eq!(key.second(), "X");
    }
}
