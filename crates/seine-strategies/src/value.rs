//! Robust-value screening strategy.
//!
//! Ranks the population by five valuation ratios and composites them into
//! the RV score. Prices come from the monthly time-series pull rather than
//! the fundamentals payload, so the strategy joins the two per symbol.

use std::collections::HashMap;

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use seine_rank::{MetricVector, PercentileRanker, PositionSizer, TopSelector};
use seine_traits::{FundamentalRatios, MonthlySeries, Result, SeineError, Symbol};

use crate::screen::{ScreenConfig, ScreenOutcome, SkippedTicker};

/// Valuation metrics used by the robust-value strategy, in report column
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueMetric {
    /// Price-to-earnings ratio.
    PriceToEarnings,
    /// Price-to-book ratio.
    PriceToBook,
    /// Price-to-sales ratio.
    PriceToSales,
    /// Enterprise value to EBITDA.
    EvToEbitda,
    /// Enterprise value to revenue.
    EvToRevenue,
}

impl ValueMetric {
    /// All metrics, in report column order.
    pub const ALL: [Self; 5] = [
        Self::PriceToEarnings,
        Self::PriceToBook,
        Self::PriceToSales,
        Self::EvToEbitda,
        Self::EvToRevenue,
    ];

    /// Report label for the raw ratio column.
    #[must_use]
    pub const fn ratio_label(self) -> &'static str {
        match self {
            Self::PriceToEarnings => "Price-to-Earnings Ratio",
            Self::PriceToBook => "Price-to-Book Ratio",
            Self::PriceToSales => "Price-to-Sales Ratio",
            Self::EvToEbitda => "EV/EBITDA",
            Self::EvToRevenue => "EV/RE",
        }
    }

    /// Report label for the percentile column.
    #[must_use]
    pub const fn percentile_label(self) -> &'static str {
        match self {
            Self::PriceToEarnings => "PE Percentile",
            Self::PriceToBook => "PB Percentile",
            Self::PriceToSales => "PS Percentile",
            Self::EvToEbitda => "EV/EBITDA Percentile",
            Self::EvToRevenue => "EV/RE Percentile",
        }
    }

    /// The metric's value in a parsed ratios record.
    #[must_use]
    pub const fn extract(self, ratios: &FundamentalRatios) -> f64 {
        match self {
            Self::PriceToEarnings => ratios.price_to_earnings,
            Self::PriceToBook => ratios.price_to_book,
            Self::PriceToSales => ratios.price_to_sales,
            Self::EvToEbitda => ratios.ev_to_ebitda,
            Self::EvToRevenue => ratios.ev_to_revenue,
        }
    }
}

/// One ticker's extracted value metrics.
#[derive(Debug, Clone)]
pub struct ValueRow {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Latest monthly close, joined from the time-series pull.
    pub price: f64,
    /// Ratio values, in [`ValueMetric::ALL`] order.
    pub ratios: [f64; 5],
}

/// A selected value recommendation.
#[derive(Debug, Clone)]
pub struct ValuePick {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Latest monthly close.
    pub price: f64,
    /// Whole shares the budget buys at `price`.
    pub shares: u64,
    /// Ratio values, in [`ValueMetric::ALL`] order.
    pub ratios: [f64; 5],
    /// Percentile ranks of the ratios, same order.
    pub percentiles: [f64; 5],
    /// Robust Value score: mean of the five percentiles.
    pub rv_score: f64,
}

/// Build the symbol → latest-close lookup from fetched monthly series.
///
/// The value strategy's prices come from the time-series pull, not from the
/// fundamentals payload.
pub fn last_close_prices(population: &[MonthlySeries]) -> HashMap<Symbol, f64> {
    population
        .iter()
        .map(|series| (series.symbol().to_string(), series.latest_close()))
        .collect()
}

/// Join one ticker's parsed ratios with its last-close price.
///
/// # Errors
///
/// Returns [`SeineError::MissingData`] if the symbol has no price entry.
pub fn value_row(ratios: &FundamentalRatios, prices: &HashMap<Symbol, f64>) -> Result<ValueRow> {
    let price = prices.get(&ratios.symbol).copied().ok_or_else(|| {
        SeineError::MissingData(format!(
            "{}: no price entry from the time-series pull",
            ratios.symbol
        ))
    })?;

    let mut values = [0.0; 5];
    for (slot, metric) in values.iter_mut().zip(ValueMetric::ALL) {
        *slot = metric.extract(ratios);
    }

    Ok(ValueRow {
        symbol: ratios.symbol.clone(),
        price,
        ratios: values,
    })
}

/// The robust-value screen.
#[derive(Debug, Clone)]
pub struct ValueScreen {
    config: ScreenConfig,
}

impl ValueScreen {
    /// Create a screen with the given configuration.
    #[must_use]
    pub const fn new(config: ScreenConfig) -> Self {
        Self { config }
    }

    /// Extract, rank, select, and size the population.
    ///
    /// Tickers without a price entry are skipped and reported in the
    /// outcome; they do not abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if no ticker survives extraction, or if ranking or
    /// sizing fails for the surviving population.
    pub fn run(
        &self,
        population: &[FundamentalRatios],
        prices: &HashMap<Symbol, f64>,
    ) -> Result<ScreenOutcome<ValuePick>> {
        let mut rows = Vec::with_capacity(population.len());
        let mut skipped = Vec::new();

        for ratios in population {
            match value_row(ratios, prices) {
                Ok(row) => rows.push(row),
                Err(e) => skipped.push(SkippedTicker {
                    symbol: ratios.symbol.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        let metrics: Vec<MetricVector> = ValueMetric::ALL
            .iter()
            .enumerate()
            .map(|(i, metric)| MetricVector {
                name: metric.ratio_label().to_string(),
                values: rows.iter().map(|row| row.ratios[i]).collect::<Array1<f64>>(),
            })
            .collect();

        let ranked = PercentileRanker.rank(&metrics)?;
        let order = TopSelector::new(self.config.limit).select(&ranked.composite);
        let sizer = PositionSizer::new(self.config.budget)?;

        let mut picks = Vec::with_capacity(order.len());
        for idx in order {
            let row = &rows[idx];

            let mut percentiles = [0.0; 5];
            for (slot, column) in percentiles.iter_mut().zip(&ranked.percentiles) {
                *slot = column.values[idx];
            }

            picks.push(ValuePick {
                shares: sizer.shares(&row.symbol, row.price)?,
                symbol: row.symbol.clone(),
                price: row.price,
                ratios: row.ratios,
                percentiles,
                rv_score: ranked.composite[idx],
            });
        }

        Ok(ScreenOutcome { picks, skipped })
    }
}

impl Default for ValueScreen {
    fn default() -> Self {
        Self::new(ScreenConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ratios(symbol: &str, scale: f64) -> FundamentalRatios {
        FundamentalRatios {
            symbol: symbol.to_string(),
            price_to_earnings: 20.0 * scale,
            price_to_book: 5.0 * scale,
            price_to_sales: 3.0 * scale,
            ev_to_ebitda: 12.0 * scale,
            ev_to_revenue: 4.0 * scale,
        }
    }

    fn prices(entries: &[(&str, f64)]) -> HashMap<Symbol, f64> {
        entries
            .iter()
            .map(|&(s, p)| (s.to_string(), p))
            .collect()
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(
            ValueMetric::PriceToEarnings.ratio_label(),
            "Price-to-Earnings Ratio"
        );
        assert_eq!(ValueMetric::EvToEbitda.percentile_label(), "EV/EBITDA Percentile");
        assert_eq!(ValueMetric::EvToRevenue.ratio_label(), "EV/RE");
    }

    #[test]
    fn test_value_row_joins_price() {
        let r = ratios("AAPL", 1.0);
        let p = prices(&[("AAPL", 190.0)]);

        let row = value_row(&r, &p).unwrap();
        assert_eq!(row.price, 190.0);
        assert_eq!(row.ratios[0], 20.0);
        assert_eq!(row.ratios[4], 4.0);
    }

    #[test]
    fn test_value_row_missing_price_is_missing_data() {
        let r = ratios("AAPL", 1.0);
        let p = prices(&[("MSFT", 400.0)]);

        let err = value_row(&r, &p).unwrap_err();
        assert!(matches!(err, SeineError::MissingData(_)));
        assert!(err.to_string().contains("AAPL"));
    }

    #[test]
    fn test_screen_ranks_by_composite() {
        // Every ratio scales together, so the composite ordering follows the
        // scale: C > B > A.
        let population = vec![ratios("A", 1.0), ratios("B", 2.0), ratios("C", 3.0)];
        let p = prices(&[("A", 10.0), ("B", 20.0), ("C", 30.0)]);

        let outcome = ValueScreen::default().run(&population, &p).unwrap();
        assert!(outcome.skipped.is_empty());

        let symbols: Vec<&str> = outcome.picks.iter().map(|pick| pick.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "B", "A"]);

        assert_relative_eq!(outcome.picks[0].rv_score, 1.0, epsilon = 1e-12);
        assert_relative_eq!(outcome.picks[1].rv_score, 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(outcome.picks[2].rv_score, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_screen_excludes_ticker_without_price_and_ranks_rest() {
        let population = vec![ratios("A", 1.0), ratios("NOPX", 2.0), ratios("C", 3.0)];
        let p = prices(&[("A", 10.0), ("C", 30.0)]);

        let outcome = ValueScreen::default().run(&population, &p).unwrap();

        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].symbol, "NOPX");

        let symbols: Vec<&str> = outcome.picks.iter().map(|pick| pick.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "A"]);
    }

    #[test]
    fn test_screen_small_population_returns_all() {
        let population: Vec<FundamentalRatios> =
            (0..10).map(|i| ratios(&format!("T{i}"), 1.0 + i as f64)).collect();
        let p: HashMap<Symbol, f64> = population
            .iter()
            .map(|r| (r.symbol.clone(), 50.0))
            .collect();

        let outcome = ValueScreen::default().run(&population, &p).unwrap();
        assert_eq!(outcome.picks.len(), 10);
    }

    #[test]
    fn test_last_close_prices() {
        use seine_traits::Date;

        let series = MonthlySeries::new(
            "AAPL",
            vec![
                (Date::from_ymd_opt(2024, 1, 31).unwrap(), 185.0),
                (Date::from_ymd_opt(2024, 2, 29).unwrap(), 190.0),
            ],
        )
        .unwrap();

        let map = last_close_prices(&[series]);
        assert_eq!(map["AAPL"], 190.0);
    }
}
