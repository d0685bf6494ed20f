//! Robust-value screen over a small universe.
//!
//! This example demonstrates:
//! - Fetching monthly price history and company fundamentals
//! - Joining last-close prices with five valuation ratios
//! - Ranking the universe by the RV composite score
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
//! cargo run --release --example value_screen
//! ```

use seine::prelude::*;
use seine::strategies::value::last_close_prices;
use seine_alphavantage::AlphaVantageClient;

/// Universe of stocks to screen.
const UNIVERSE: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "JPM", "V", "UNH", "JNJ",
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

    // Prices come from the time-series pull, ratios from the overview pull
    let mut series = Vec::new();
    let mut ratios = Vec::new();
    for symbol in UNIVERSE {
        match client.monthly_time_series(symbol).await {
            Ok(raw) => match raw.into_series() {
                Ok(s) => series.push(s),
                Err(e) => eprintln!("Warning: skipping {symbol}: {e}"),
            },
            Err(e) => eprintln!("Warning: Failed to fetch {symbol}: {e}"),
        }

        match client.company_overview(symbol).await {
            Ok(raw) => match raw.into_ratios() {
                Ok(r) => ratios.push(r),
                Err(e) => eprintln!("Warning: skipping {symbol}: {e}"),
            },
            Err(e) => eprintln!("Warning: Failed to fetch {symbol} overview: {e}"),
        }
    }

    let prices = last_close_prices(&series);
    let config = ScreenConfig {
        budget: BUDGET,
        limit: TOP,
    };
    let outcome = ValueScreen::new(config).run(&ratios, &prices)?;

    println!(
        "{:<8} {:>10} {:>8} {:>8} {:>8}",
        "Ticker", "Price", "Shares", "P/E", "RV"
    );
    for pick in &outcome.picks {
        println!(
            "{:<8} {:>10.2} {:>8} {:>8.1} {:>8.3}",
            pick.symbol, pick.price, pick.shares, pick.ratios[0], pick.rv_score
        );
    }

    if !outcome.skipped.is_empty() {
        println!("Skipped {} ticker(s)", outcome.skipped.len());
    }

    Ok(())
}
