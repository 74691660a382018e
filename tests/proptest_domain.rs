//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that aggregation, value detection, and
//! the bet ledger maintain their invariants across random inputs.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use ringside::domain::aggregate::{all_fighters, best_and_average, group_fights};
use ringside::domain::ledger::{Bet, BetLedger};
use ringside::domain::odds::{FightKey, OddsRecord};
use ringside::domain::value::find_value_bets;

/// Small name pool so random inputs actually collide on fighters/fights.
const NAMES: [&str; 6] = ["Ali", "Bivol", "Canelo", "Dubois", "Eubank", "Fury"];

fn record_from(seed: (usize, usize, u8, u32, i64)) -> OddsRecord {
    let (f, o, book, odds_cents, ts_offset) = seed;
    let fighter = NAMES[f % NAMES.len()];
    let mut opponent = NAMES[o % NAMES.len()];
    if opponent == fighter {
        opponent = NAMES[(o + 1) % NAMES.len()];
    }
    OddsRecord {
        timestamp: Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
            + Duration::minutes(ts_offset),
        fighter: fighter.to_string(),
        opponent: opponent.to_string(),
        bookmaker: format!("Book{}", book % 5),
        odds: Decimal::new(i64::from(odds_cents), 2),
    }
}

fn records_strategy() -> impl Strategy<Value = Vec<OddsRecord>> {
    prop::collection::vec(
        (0usize..6, 0usize..6, any::<u8>(), 100u32..2000, 0i64..10_000)
            .prop_map(record_from),
        0..60,
    )
}

// ── Aggregation Properties ──────────────────────────────────

proptest! {
    /// Best odds can never be below the average for the same fighter.
    #[test]
    fn best_odds_at_least_average(records in records_strategy()) {
        for fighter in all_fighters(&records) {
            let summary = best_and_average(&records, &fighter).unwrap();
            prop_assert!(
                summary.best_odds >= summary.average_odds,
                "best {} < avg {} for {fighter}",
                summary.best_odds,
                summary.average_odds
            );
        }
    }

    /// Grouping partitions the input exactly: every record lands in the
    /// group matching its pair key, and nothing is duplicated or lost.
    #[test]
    fn group_fights_partitions_input(records in records_strategy()) {
        let groups = group_fights(&records);

        let total: usize = groups.iter().map(|g| g.records.len()).sum();
        prop_assert_eq!(total, records.len());

        for group in &groups {
            for record in &group.records {
                prop_assert_eq!(
                    FightKey::new(&record.fighter, &record.opponent),
                    group.key.clone()
                );
            }
        }
    }

    /// Groups come out sorted by earliest time, ties by pair names.
    #[test]
    fn group_fights_output_is_sorted(records in records_strategy()) {
        let groups = group_fights(&records);
        for pair in groups.windows(2) {
            let key = (pair[0].earliest_time, pair[0].key.concat());
            let next = (pair[1].earliest_time, pair[1].key.concat());
            prop_assert!(key <= next);
        }
    }

    /// Queries are pure: running one twice yields identical output.
    #[test]
    fn queries_are_idempotent(records in records_strategy()) {
        prop_assert_eq!(group_fights(&records), group_fights(&records));
        prop_assert_eq!(
            find_value_bets(&records, Decimal::new(1, 1)),
            find_value_bets(&records, Decimal::new(1, 1))
        );
        for fighter in all_fighters(&records) {
            prop_assert_eq!(
                best_and_average(&records, &fighter),
                best_and_average(&records, &fighter)
            );
        }
    }

    /// The average is order-independent.
    #[test]
    fn average_is_commutative(records in records_strategy()) {
        let mut reversed = records.clone();
        reversed.reverse();
        for fighter in all_fighters(&records) {
            let fwd = best_and_average(&records, &fighter).unwrap();
            let rev = best_and_average(&reversed, &fighter).unwrap();
            prop_assert_eq!(fwd.average_odds, rev.average_odds);
            prop_assert_eq!(fwd.best_odds, rev.best_odds);
        }
    }
}

// ── Value Detection Properties ──────────────────────────────

proptest! {
    /// Lowering the threshold can only admit more fighters.
    #[test]
    fn value_bets_monotone_in_threshold(
        records in records_strategy(),
        t1_bps in -500i64..500,
        delta_bps in 1i64..500,
    ) {
        let t1 = Decimal::new(t1_bps, 4);
        let t2 = Decimal::new(t1_bps + delta_bps, 4);

        let loose: Vec<String> = find_value_bets(&records, t1)
            .into_iter()
            .map(|b| b.fighter)
            .collect();
        let strict = find_value_bets(&records, t2);

        for bet in &strict {
            prop_assert!(
                loose.contains(&bet.fighter),
                "{} passed t2={t2} but not t1={t1}",
                bet.fighter
            );
        }
    }

    /// Every reported edge is strictly above the threshold and
    /// consistent with its own best/average figures.
    #[test]
    fn value_bets_edges_consistent(records in records_strategy()) {
        let threshold = Decimal::new(5, 2);
        for bet in find_value_bets(&records, threshold) {
            prop_assert!(bet.edge > threshold);
            let recomputed = (bet.best_odds - bet.average_odds) / bet.average_odds;
            prop_assert_eq!(bet.edge, recomputed);
        }
    }
}

// ── Bet Ledger Properties ───────────────────────────────────

proptest! {
    /// After n appends the summary totals are exactly Σ stakes and n.
    #[test]
    fn ledger_summary_totals(stakes in prop::collection::vec(1u32..100_000, 0..40)) {
        let mut ledger = BetLedger::new();
        let mut expected = Decimal::ZERO;

        for (i, cents) in stakes.iter().enumerate() {
            let stake = Decimal::new(i64::from(*cents), 2);
            expected += stake;
            let bet = Bet::new(
                format!("Fighter{}", i % 4),
                Decimal::new(200, 2),
                stake,
                "BookX".to_string(),
            );
            ledger.add_bet(bet).unwrap();
        }

        let summary = ledger.summary();
        prop_assert_eq!(summary.total_staked, expected);
        prop_assert_eq!(summary.count, stakes.len() as u64);
        prop_assert_eq!(summary.settled_count, 0);
    }

    /// Invalid bets never reach the log, valid ones always do.
    #[test]
    fn ledger_rejects_only_invalid(stake_cents in -1000i64..1000) {
        let mut ledger = BetLedger::new();
        let stake = Decimal::new(stake_cents, 2);
        let bet = Bet::new(
            "Fighter".to_string(),
            Decimal::new(150, 2),
            stake,
            "BookX".to_string(),
        );

        let result = ledger.add_bet(bet);
        if stake_cents > 0 {
            prop_assert!(result.is_ok());
            prop_assert_eq!(ledger.len(), 1);
        } else {
            prop_assert!(result.is_err());
            prop_assert!(ledger.is_empty());
        }
    }
}
