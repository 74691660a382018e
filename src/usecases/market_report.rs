//! Market Report - Odds Views over an Odds Source
//!
//! Loads parsed quotes through the `OddsSource` port and delegates to
//! the pure domain aggregator/detector. Recomputes on every call: one
//! aggregation run per query, no cross-run caching.

use std::sync::Arc;

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::domain::aggregate::{all_fighters, best_and_average, group_fights};
use crate::domain::odds::{FightGroup, FighterOddsSummary};
use crate::domain::value::{find_value_bets, ValueBet};
use crate::ports::odds_source::OddsSource;

/// Read-only odds views: upcoming fights, best prices, value bets.
pub struct MarketReport<S: OddsSource> {
  /// Source of parsed odds quotes.
  source: Arc<S>,
}

impl<S: OddsSource> MarketReport<S> {
  /// Create a report backed by the given odds source.
  pub fn new(source: Arc<S>) -> Self {
    Self { source }
  }

  /// Upcoming fights, ascending by earliest quote time.
  #[instrument(skip(self))]
  pub async fn upcoming_fights(&self) -> Result<Vec<FightGroup>> {
    let records = self.source.load_records().await?;
    let groups = group_fights(&records);
    info!(fights = groups.len(), quotes = records.len(), "Grouped upcoming fights");
    Ok(groups)
  }

  /// Best and average price per fighter, sorted by fighter name.
  #[instrument(skip(self))]
  pub async fn best_prices(&self) -> Result<Vec<FighterOddsSummary>> {
    let records = self.source.load_records().await?;

    // all_fighters iterates sorted, so the output is name-ordered.
    let summaries: Vec<FighterOddsSummary> = all_fighters(&records)
      .iter()
      .filter_map(|fighter| best_and_average(&records, fighter))
      .collect();

    info!(fighters = summaries.len(), "Computed best/average prices");
    Ok(summaries)
  }

  /// Value bets above the given edge threshold, most attractive first.
  #[instrument(skip(self), fields(threshold = %threshold))]
  pub async fn value_bets(&self, threshold: Decimal) -> Result<Vec<ValueBet>> {
    let records = self.source.load_records().await?;
    let bets = find_value_bets(&records, threshold);

    if bets.is_empty() {
      debug!(quotes = records.len(), "No edge above threshold");
    } else {
      info!(
        signals = bets.len(),
        top_edge = %bets[0].edge,
        "Value bets detected"
      );
    }
    Ok(bets)
  }
}
