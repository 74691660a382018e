//! Value-bet detection over aggregated odds.
//!
//! A fighter's best available price is a "value bet" when it exceeds
//! the market-consensus average by more than a threshold fraction. The
//! threshold is a tuning knob supplied by the caller (default 0.1 via
//! configuration); negative thresholds are accepted and simply admit
//! more candidates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::{all_fighters, best_and_average};
use super::odds::OddsRecord;

/// A best price that deviates favorably from market consensus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueBet {
    /// Fighter the signal applies to.
    pub fighter: String,
    /// Best available decimal odds.
    pub best_odds: Decimal,
    /// Market-consensus (mean) decimal odds.
    pub average_odds: Decimal,
    /// Bookmaker offering the best price.
    pub bookmaker: String,
    /// Fractional excess of best over average: (best − avg) / avg.
    pub edge: Decimal,
}

/// Classify each fighter's best price against the consensus average.
///
/// A fighter is included iff `edge > threshold` (strict). Output is
/// descending by edge, ties broken by fighter name ascending, so the
/// most attractive signal comes first and ordering is deterministic.
pub fn find_value_bets(records: &[OddsRecord], threshold: Decimal) -> Vec<ValueBet> {
    let mut out: Vec<ValueBet> = Vec::new();

    for fighter in all_fighters(records) {
        let Some(summary) = best_and_average(records, &fighter) else {
            continue;
        };
        // Cannot occur for members of all_fighters; guards the division.
        if summary.average_odds == Decimal::ZERO {
            continue;
        }
        let edge = (summary.best_odds - summary.average_odds) / summary.average_odds;
        if edge > threshold {
            out.push(ValueBet {
                fighter,
                best_odds: summary.best_odds,
                average_odds: summary.average_odds,
                bookmaker: summary.bookmaker,
                edge,
            });
        }
    }

    out.sort_by(|a, b| {
        b.edge
            .cmp(&a.edge)
            .then_with(|| a.fighter.cmp(&b.fighter))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(fighter: &str, bookmaker: &str, odds: Decimal) -> OddsRecord {
        OddsRecord {
            timestamp: "2026-09-01T20:00:00Z".parse().unwrap(),
            fighter: fighter.to_string(),
            opponent: "Opponent".to_string(),
            bookmaker: bookmaker.to_string(),
            odds,
        }
    }

    #[test]
    fn test_value_bet_concrete_scenario() {
        let records = vec![
            record("A", "BookX", dec!(2.0)),
            record("A", "BookY", dec!(3.0)),
            record("A", "BookX", dec!(1.5)),
        ];
        let bets = find_value_bets(&records, dec!(0.1));
        assert_eq!(bets.len(), 1);
        assert_eq!(bets[0].fighter, "A");
        assert_eq!(bets[0].best_odds, dec!(3.0));
        assert_eq!(bets[0].bookmaker, "BookY");
        // edge = (3.0 - 2.1667) / 2.1667 ≈ 0.3846
        assert!(bets[0].edge > dec!(0.38) && bets[0].edge < dec!(0.39));
    }

    #[test]
    fn test_threshold_is_strict() {
        // Two quotes at 2.0 and 3.0: avg 2.5, edge exactly 0.2
        let records = vec![
            record("A", "BookX", dec!(2.0)),
            record("A", "BookY", dec!(3.0)),
        ];
        assert!(find_value_bets(&records, dec!(0.2)).is_empty());
        assert_eq!(find_value_bets(&records, dec!(0.19)).len(), 1);
    }

    #[test]
    fn test_single_quote_has_zero_edge() {
        let records = vec![record("A", "BookX", dec!(2.0))];
        assert!(find_value_bets(&records, dec!(0.0)).is_empty());
        // A negative threshold admits even a flat market
        assert_eq!(find_value_bets(&records, dec!(-0.01)).len(), 1);
    }

    #[test]
    fn test_output_sorted_by_edge_then_name() {
        let records = vec![
            // B: avg 2.5, edge 0.2
            record("B", "BookX", dec!(2.0)),
            record("B", "BookY", dec!(3.0)),
            // A: avg 2.0, edge 0.5
            record("A", "BookX", dec!(1.0)),
            record("A", "BookY", dec!(3.0)),
            // C: same stats as B, name breaks the tie
            record("C", "BookX", dec!(2.0)),
            record("C", "BookY", dec!(3.0)),
        ];
        let bets = find_value_bets(&records, dec!(0.05));
        let order: Vec<&str> = bets.iter().map(|b| b.fighter.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_records_empty_output() {
        assert!(find_value_bets(&[], dec!(0.1)).is_empty());
    }
}
