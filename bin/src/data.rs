//! Input loading and data fetching for the Seine CLI.

use std::path::Path;

use anyhow::{Context, Result};
use seine_alphavantage::AlphaVantageClient;
use seine_strategies::SkippedTicker;
use seine_traits::{FundamentalRatios, MonthlySeries, SeineError, Symbol};

/// Load the ticker universe from a CSV file with a `Ticker` column.
///
/// The whole file is read before any network activity begins. Empty ticker
/// cells are ignored.
pub(crate) fn load_tickers(path: &Path) -> Result<Vec<Symbol>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open ticker list {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV headers from {}", path.display()))?
        .clone();
    let ticker_idx = headers
        .iter()
        .position(|h| h == "Ticker")
        .with_context(|| format!("{}: no `Ticker` column", path.display()))?;

    let mut tickers = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record
            .with_context(|| format!("{}: bad CSV record at line {}", path.display(), line + 2))?;
        if let Some(ticker) = record.get(ticker_idx)
            && !ticker.is_empty()
        {
            tickers.push(ticker.to_string());
        }
    }

    Ok(tickers)
}

/// Outcome of the monthly time-series pull.
#[derive(Debug)]
pub(crate) struct FetchedSeries {
    /// Validated series, in input order, for tickers that fetched cleanly.
    pub(crate) series: Vec<MonthlySeries>,
    /// Tickers whose fetch or validation failed.
    pub(crate) skipped: Vec<SkippedTicker>,
}

/// Fetch and validate the monthly series for every ticker.
///
/// Requests are issued serially, one per ticker. A failed ticker is logged
/// and excluded rather than aborting the pull.
pub(crate) async fn fetch_monthly_series(
    client: &AlphaVantageClient,
    tickers: &[Symbol],
) -> FetchedSeries {
    let mut series = Vec::with_capacity(tickers.len());
    let mut skipped = Vec::new();

    for ticker in tickers {
        let result = client
            .monthly_time_series(ticker)
            .await
            .map_err(SeineError::from)
            .and_then(|raw| raw.into_series());

        match result {
            Ok(s) => series.push(s),
            Err(e) => {
                eprintln!("Warning: skipping {ticker}: {e}");
                skipped.push(SkippedTicker {
                    symbol: ticker.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    FetchedSeries { series, skipped }
}

/// Outcome of the fundamentals pull.
#[derive(Debug)]
pub(crate) struct FetchedRatios {
    /// Parsed ratio records, in input order, for tickers that fetched
    /// cleanly.
    pub(crate) ratios: Vec<FundamentalRatios>,
    /// Tickers whose fetch or parsing failed.
    pub(crate) skipped: Vec<SkippedTicker>,
}

/// Fetch and parse the company overview for every ticker.
///
/// Same isolation policy as [`fetch_monthly_series`].
pub(crate) async fn fetch_fundamentals(
    client: &AlphaVantageClient,
    tickers: &[Symbol],
) -> FetchedRatios {
    let mut ratios = Vec::with_capacity(tickers.len());
    let mut skipped = Vec::new();

    for ticker in tickers {
        let result = client
            .company_overview(ticker)
            .await
            .map_err(SeineError::from)
            .and_then(|raw| raw.into_ratios());

        match result {
            Ok(r) => ratios.push(r),
            Err(e) => {
                eprintln!("Warning: skipping {ticker}: {e}");
                skipped.push(SkippedTicker {
                    symbol: ticker.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    FetchedRatios { ratios, skipped }
}
