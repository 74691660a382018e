//! Odds Source Port - Parsed Quote Loading Interface
//!
//! The domain consumes already-parsed [`OddsRecord`] collections and
//! never touches file paths or encodings. Adapters own the flat-file
//! format and the skipping of malformed rows.

use async_trait::async_trait;

use crate::domain::odds::OddsRecord;

/// Trait for providers of parsed odds quote records.
///
/// Implementations are expected to filter out malformed rows
/// (unparseable timestamps, non-positive odds) before returning,
/// so the domain can assume clean input.
#[async_trait]
pub trait OddsSource: Send + Sync + 'static {
  /// Load all available odds records, in source order.
  async fn load_records(&self) -> anyhow::Result<Vec<OddsRecord>>;

  /// Check if the source is reachable/readable.
  async fn is_healthy(&self) -> bool;
}
