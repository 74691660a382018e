//! Command-line interface definitions and table rendering.
//!
//! Argument parsing via clap derive; tabular output via `tabled`.
//! This layer owns all presentation: the domain and usecases never
//! print or format.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use crate::domain::ledger::{Bet, BetSummary};
use crate::domain::odds::{FightGroup, FighterOddsSummary};
use crate::domain::value::ValueBet;

/// Ringside - Boxing odds aggregation and bet tracking.
#[derive(Parser, Debug)]
#[command(name = "ringside")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the odds quotes file
    #[arg(long)]
    pub odds_file: Option<PathBuf>,

    /// Override the bet log file
    #[arg(long)]
    pub bets_file: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List upcoming fights
    Fights,

    /// Show best available odds per fighter
    Best,

    /// List potential value bets
    Value(ValueArgs),

    /// Record a bet
    AddBet(AddBetArgs),

    /// Show bet history and staking totals
    Summary,
}

/// Arguments for the `value` subcommand.
#[derive(Parser, Debug)]
pub struct ValueArgs {
    /// Minimum edge fraction; best odds must exceed the average by
    /// strictly more than this
    #[arg(long)]
    pub threshold: Option<Decimal>,
}

/// Arguments for the `add-bet` subcommand.
#[derive(Parser, Debug)]
pub struct AddBetArgs {
    /// Fighter backed
    pub fighter: String,

    /// Decimal odds taken (at least 1.0)
    pub odds: Decimal,

    /// Amount staked (positive)
    pub stake: Decimal,

    /// Bookmaker the bet was placed with
    pub bookmaker: String,

    /// Settled outcome, if already known
    #[arg(long, value_parser = ["win", "loss"])]
    pub result: Option<String>,

    /// Realized payout, if settled. Only meaningful together with
    /// --result; a payout on an unsettled bet would never be counted.
    #[arg(long, requires = "result")]
    pub payout: Option<Decimal>,
}

// ────────────────────────────────────────────
// Table rendering
// ────────────────────────────────────────────

#[derive(Tabled)]
struct FightRow {
    #[tabled(rename = "Fight")]
    matchup: String,
    #[tabled(rename = "First seen")]
    first_seen: String,
    #[tabled(rename = "Quotes")]
    quotes: usize,
}

#[derive(Tabled)]
struct BestRow {
    #[tabled(rename = "Fighter")]
    fighter: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Best")]
    best: String,
    #[tabled(rename = "Average")]
    average: String,
}

#[derive(Tabled)]
struct ValueRow {
    #[tabled(rename = "Fighter")]
    fighter: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Best")]
    best: String,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Edge")]
    edge: String,
}

#[derive(Tabled)]
struct BetRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Fighter")]
    fighter: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

fn two_dp(value: Decimal) -> String {
    value.round_dp(2).to_string()
}

/// Render upcoming fights as a table, or a placeholder when empty.
pub fn render_fights(groups: &[FightGroup]) -> String {
    if groups.is_empty() {
        return "No data available".to_string();
    }
    let rows: Vec<FightRow> = groups
        .iter()
        .map(|g| FightRow {
            matchup: g.key.to_string(),
            first_seen: g.earliest_time.format("%Y-%m-%d %H:%M").to_string(),
            quotes: g.records.len(),
        })
        .collect();
    Table::new(rows).to_string()
}

/// Render per-fighter best/average prices.
pub fn render_best(summaries: &[FighterOddsSummary]) -> String {
    if summaries.is_empty() {
        return "No data available".to_string();
    }
    let rows: Vec<BestRow> = summaries
        .iter()
        .map(|s| BestRow {
            fighter: s.fighter.clone(),
            bookmaker: s.bookmaker.clone(),
            best: two_dp(s.best_odds),
            average: two_dp(s.average_odds),
        })
        .collect();
    Table::new(rows).to_string()
}

/// Render value bets, most attractive first.
pub fn render_value_bets(bets: &[ValueBet]) -> String {
    if bets.is_empty() {
        return "No value bets above threshold".to_string();
    }
    let rows: Vec<ValueRow> = bets
        .iter()
        .map(|b| ValueRow {
            fighter: b.fighter.clone(),
            bookmaker: b.bookmaker.clone(),
            best: two_dp(b.best_odds),
            average: two_dp(b.average_odds),
            edge: format!("{}%", two_dp(b.edge * Decimal::ONE_HUNDRED)),
        })
        .collect();
    Table::new(rows).to_string()
}

/// Render bet history followed by the staking/profit totals.
pub fn render_summary(bets: &[Bet], summary: &BetSummary) -> String {
    if bets.is_empty() {
        return "No bets recorded".to_string();
    }
    let rows: Vec<BetRow> = bets
        .iter()
        .map(|b| BetRow {
            date: b.timestamp.format("%Y-%m-%d").to_string(),
            fighter: b.fighter.clone(),
            odds: two_dp(b.odds),
            stake: two_dp(b.stake),
            bookmaker: b.bookmaker.clone(),
            result: b.outcome.map_or_else(String::new, |o| o.to_string()),
            profit: b.profit().map_or_else(String::new, two_dp),
        })
        .collect();

    let mut out = Table::new(rows).to_string();
    out.push_str(&format!(
        "\nBets: {}  Total staked: {}",
        summary.count,
        two_dp(summary.total_staked)
    ));
    if summary.settled_count > 0 {
        out.push_str(&format!(
            "  Settled: {}  Profit: {}",
            summary.settled_count,
            two_dp(summary.settled_profit)
        ));
    }
    out
}
