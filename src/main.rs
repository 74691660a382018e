//! Ringside — Entry Point
//!
//! Parses the command line, loads configuration, initializes tracing,
//! and dispatches to the use cases. All presentation happens here and
//! in `cli.rs`; the domain never prints.
//!
//! Wiring sequence:
//! 1. Parse CLI arguments (clap)
//! 2. Load config.toml + validate (missing file → defaults)
//! 3. Init tracing (EnvFilter, level from config unless overridden)
//! 4. Resolve file paths (CLI flag > config value)
//! 5. Construct the JSONL adapters and dispatch the subcommand

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

mod adapters;
mod cli;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::persistence::{JsonlBetStore, JsonlOddsSource};
use cli::{Cli, Commands};
use domain::ledger::BetOutcome;
use usecases::{BetTracker, MarketReport};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = config::loader::load_or_default(&args.config)
        .context("Failed to load configuration")?;

    let log_level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.app.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let odds_file = args
        .odds_file
        .unwrap_or_else(|| PathBuf::from(&config.sources.odds_file));
    let bets_file = args
        .bets_file
        .unwrap_or_else(|| PathBuf::from(&config.sources.bets_file));

    debug!(
        odds_file = %odds_file.display(),
        bets_file = %bets_file.display(),
        "Resolved source files"
    );

    match args.command {
        Commands::Fights => {
            let report = MarketReport::new(Arc::new(JsonlOddsSource::new(odds_file)));
            let groups = report.upcoming_fights().await?;
            println!("{}", cli::render_fights(&groups));
        }
        Commands::Best => {
            let report = MarketReport::new(Arc::new(JsonlOddsSource::new(odds_file)));
            let summaries = report.best_prices().await?;
            println!("{}", cli::render_best(&summaries));
        }
        Commands::Value(value_args) => {
            let threshold = value_args.threshold.unwrap_or(config.value.threshold);
            let report = MarketReport::new(Arc::new(JsonlOddsSource::new(odds_file)));
            let bets = report.value_bets(threshold).await?;
            println!("{}", cli::render_value_bets(&bets));
        }
        Commands::AddBet(bet_args) => {
            let store = JsonlBetStore::new(bets_file).await?;
            let tracker = BetTracker::new(Arc::new(store));
            let outcome = bet_args.result.as_deref().map(|r| match r {
                "win" => BetOutcome::Win,
                _ => BetOutcome::Loss,
            });
            let bet = tracker
                .record_bet(
                    bet_args.fighter,
                    bet_args.odds,
                    bet_args.stake,
                    bet_args.bookmaker,
                    outcome,
                    bet_args.payout,
                )
                .await?;
            println!("Bet recorded: {} @ {} ({})", bet.fighter, bet.odds, bet.id);
        }
        Commands::Summary => {
            let store = JsonlBetStore::new(bets_file).await?;
            let tracker = BetTracker::new(Arc::new(store));
            let history = tracker.history().await?;
            let summary = tracker.summary().await?;
            println!("{}", cli::render_summary(&history, &summary));
        }
    }

    Ok(())
}
