//! Momentum screen over a small universe.
//!
//! This example demonstrates:
//! - Fetching monthly price history from the Alpha Vantage API
//! - Ranking the universe by four look-back returns
//! - Printing the ranked picks with suggested share counts
//!
//! ## Prerequisites
//!
//! Set your Alpha Vantage API key in the environment or `.env` file:
//! ```bash
//! ALPHAVANTAGE_API_KEY=your_api_key_here
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --example momentum_screen
//! ```

use seine::prelude::*;
use seine_alphavantage::AlphaVantageClient;

/// Universe of stocks to screen.
const UNIVERSE: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "TSLA", "JPM", "V", "WMT",
];

/// Budget applied to each selected ticker independently.
const BUDGET: f64 = 1000.0;

/// Number of picks to keep.
const TOP: usize = 5;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let client = AlphaVantageClient::from_env().map_err(|_| {
        "Failed to initialize client. Set ALPHAVANTAGE_API_KEY environment variable."
    })?;

    // Fetch the whole universe before any ranking starts
    let mut population = Vec::new();
    for symbol in UNIVERSE {
        match client.monthly_time_series(symbol).await {
            Ok(raw) => match raw.into_series() {
                Ok(series) => population.push(series),
                Err(e) => eprintln!("Warning: skipping {symbol}: {e}"),
            },
            Err(e) => eprintln!("Warning: Failed to fetch {symbol}: {e}"),
        }
    }

    let config = ScreenConfig {
        budget: BUDGET,
        limit: TOP,
    };
    let outcome = MomentumScreen::new(config).run(&population)?;

    println!(
        "{:<8} {:>10} {:>8} {:>12} {:>10}",
        "Ticker", "Price", "Shares", "1Y Return", "HQM"
    );
    for pick in &outcome.picks {
        println!(
            "{:<8} {:>10.2} {:>8} {:>11.1}% {:>10.3}",
            pick.symbol, pick.price, pick.shares, pick.returns[0], pick.hqm_score
        );
    }

    if !outcome.skipped.is_empty() {
        println!("Skipped {} ticker(s)", outcome.skipped.len());
    }

    Ok(())
}
