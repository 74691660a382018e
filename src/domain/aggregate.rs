//! Odds aggregation over parsed quote collections.
//!
//! Groups heterogeneous bookmaker quotes by fight (unordered fighter
//! pair) and computes best/average price statistics per fighter. All
//! functions are pure single-pass or sort-then-emit computations; the
//! caller supplies already-filtered records.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;

use super::odds::{FightGroup, FightKey, FighterOddsSummary, OddsRecord};

/// Partition records into fight groups, ordered for display.
///
/// Output is ascending by each group's earliest quote time, ties broken
/// by the lexicographic order of the canonical pair's concatenated
/// names. Empty input yields an empty vector. Within a group, records
/// keep their input order.
pub fn group_fights(records: &[OddsRecord]) -> Vec<FightGroup> {
    let mut groups: HashMap<FightKey, FightGroup> = HashMap::new();

    for record in records {
        let key = FightKey::new(&record.fighter, &record.opponent);
        groups
            .entry(key.clone())
            .and_modify(|g| {
                if record.timestamp < g.earliest_time {
                    g.earliest_time = record.timestamp;
                }
                g.records.push(record.clone());
            })
            .or_insert_with(|| FightGroup {
                key,
                earliest_time: record.timestamp,
                records: vec![record.clone()],
            });
    }

    let mut out: Vec<FightGroup> = groups.into_values().collect();
    out.sort_by(|a, b| {
        a.earliest_time
            .cmp(&b.earliest_time)
            .then_with(|| a.key.concat().cmp(&b.key.concat()))
    });
    out
}

/// Best and average odds for one fighter, or `None` if no record matches.
///
/// Single pass: running max with an explicit "earliest in input order
/// wins on exact tie" comparator (strictly-greater replaces), running
/// sum and count for the mean. The average is order-independent; the
/// retained bookmaker on exact ties is defined by input order.
pub fn best_and_average(records: &[OddsRecord], fighter: &str) -> Option<FighterOddsSummary> {
    let mut best: Option<&OddsRecord> = None;
    let mut sum = Decimal::ZERO;
    let mut count: u64 = 0;

    for record in records.iter().filter(|r| r.fighter == fighter) {
        // Strict inequality keeps the earliest record on ties.
        match best {
            Some(b) if record.odds <= b.odds => {}
            _ => best = Some(record),
        }
        sum += record.odds;
        count += 1;
    }

    best.map(|b| FighterOddsSummary {
        fighter: fighter.to_string(),
        best_odds: b.odds,
        average_odds: sum / Decimal::from(count),
        bookmaker: b.bookmaker.clone(),
    })
}

/// Distinct fighter identities across the collection.
///
/// Only names appearing in the `fighter` field count; opponents that
/// never carry a quote of their own are not listed. Case-sensitive
/// exact match, deterministic (sorted) iteration order.
pub fn all_fighters(records: &[OddsRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.fighter.clone()).collect()
}
