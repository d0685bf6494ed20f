//! Seine CLI binary.
//!
//! Provides the command-line entry point for the Seine stock screener:
//! load a ticker universe, fetch per-ticker data, run the selected
//! strategies, and write the recommendation spreadsheet.

mod data;
mod sheets;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use seine_alphavantage::AlphaVantageClient;
use seine_report::{ReportSheet, ReportWriter};
use seine_strategies::{
    MomentumScreen, ScreenConfig, SkippedTicker, ValueScreen, value::last_close_prices,
};

/// Which ranking strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// High-quality momentum only.
    Momentum,
    /// Robust value only.
    Value,
    /// Both strategies, one sheet each.
    Both,
}

impl Strategy {
    const fn runs_momentum(self) -> bool {
        matches!(self, Self::Momentum | Self::Both)
    }

    const fn runs_value(self) -> bool {
        matches!(self, Self::Value | Self::Both)
    }
}

#[derive(Parser)]
#[command(name = "seine")]
#[command(about = "Cross-sectional stock screener", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV file with a `Ticker` column listing the universe
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the xlsx report to write
    #[arg(short, long, default_value = "recommended_trades.xlsx")]
    output: PathBuf,

    /// Strategy to run
    #[arg(short, long, value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,

    /// Investment budget, applied to each selected ticker independently
    #[arg(short, long, default_value_t = 1000.0)]
    budget: f64,

    /// Number of top-ranked tickers to keep per strategy
    #[arg(long, default_value_t = seine_rank::DEFAULT_LIMIT)]
    top: usize,

    /// Override the Alpha Vantage endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let tickers = data::load_tickers(&cli.input)?;
    if tickers.is_empty() {
        bail!("no tickers found in {}", cli.input.display());
    }
    println!(
        "Screening {} tickers from {}",
        tickers.len(),
        cli.input.display()
    );

    let mut client = AlphaVantageClient::from_env()?
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(base_url) = &cli.base_url {
        client = client.with_base_url(base_url);
    }

    let config = ScreenConfig {
        budget: cli.budget,
        limit: cli.top,
    };

    // The whole universe is fetched before any ranking starts; percentiles
    // are relative to the complete population of usable tickers.
    let monthly = data::fetch_monthly_series(&client, &tickers).await;
    let mut skipped: Vec<SkippedTicker> = monthly.skipped;
    let mut report_sheets: Vec<ReportSheet> = Vec::new();

    if cli.strategy.runs_momentum() {
        let outcome = MomentumScreen::new(config)
            .run(&monthly.series)
            .context("momentum screen failed")?;
        println!("{}: {} picks", sheets::MOMENTUM_SHEET, outcome.picks.len());

        report_sheets.push(sheets::momentum_sheet(&outcome.picks)?);
        skipped.extend(outcome.skipped);
    }

    if cli.strategy.runs_value() {
        let prices = last_close_prices(&monthly.series);
        let fundamentals = data::fetch_fundamentals(&client, &tickers).await;
        skipped.extend(fundamentals.skipped);

        let outcome = ValueScreen::new(config)
            .run(&fundamentals.ratios, &prices)
            .context("value screen failed")?;
        println!("{}: {} picks", sheets::VALUE_SHEET, outcome.picks.len());

        report_sheets.push(sheets::value_sheet(&outcome.picks)?);
        skipped.extend(outcome.skipped);
    }

    ReportWriter::default()
        .write(&cli.output, &report_sheets)
        .with_context(|| format!("failed to write report to {}", cli.output.display()))?;

    if !skipped.is_empty() {
        println!("Skipped {} ticker(s):", skipped.len());
        for entry in &skipped {
            println!("  {}: {}", entry.symbol, entry.reason);
        }
    }

    println!("Recommended trades saved to {}", cli.output.display());
    Ok(())
}
