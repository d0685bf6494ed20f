//! High-quality momentum screening strategy.
//!
//! Ranks the population by four price returns over fixed monthly look-back
//! windows and composites them into the HQM score.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use seine_rank::{MetricVector, PercentileRanker, PositionSizer, TopSelector};
use seine_traits::{MonthlySeries, Result, SeineError, Symbol};

use crate::screen::{ScreenConfig, ScreenOutcome, SkippedTicker};

/// Minimum number of monthly observations required per ticker.
pub const MIN_HISTORY_MONTHS: usize = 12;

/// Look-back windows used by the momentum strategy, in report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookbackPeriod {
    /// Twelve monthly periods back.
    OneYear,
    /// Six monthly periods back.
    SixMonth,
    /// Three monthly periods back.
    ThreeMonth,
    /// One monthly period back.
    OneMonth,
}

impl LookbackPeriod {
    /// All windows, in report column order.
    pub const ALL: [Self; 4] = [
        Self::OneYear,
        Self::SixMonth,
        Self::ThreeMonth,
        Self::OneMonth,
    ];

    /// Offset into a most-recent-first monthly series.
    ///
    /// The one-month window reads the latest bar itself (offset 0), the
    /// one-year window the bar twelve periods back (offset 11).
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::OneYear => 11,
            Self::SixMonth => 5,
            Self::ThreeMonth => 2,
            Self::OneMonth => 0,
        }
    }

    /// Report label for the raw return column.
    #[must_use]
    pub const fn return_label(self) -> &'static str {
        match self {
            Self::OneYear => "One-Year Price Return",
            Self::SixMonth => "Six-Month Price Return",
            Self::ThreeMonth => "Three-Month Price Return",
            Self::OneMonth => "One-Month Price Return",
        }
    }

    /// Report label for the percentile column.
    #[must_use]
    pub const fn percentile_label(self) -> &'static str {
        match self {
            Self::OneYear => "One-Year Return Percentile",
            Self::SixMonth => "Six-Month Return Percentile",
            Self::ThreeMonth => "Three-Month Return Percentile",
            Self::OneMonth => "One-Month Return Percentile",
        }
    }
}

/// One ticker's extracted momentum metrics.
#[derive(Debug, Clone)]
pub struct MomentumRow {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Latest monthly close.
    pub price: f64,
    /// Percentage returns, in [`LookbackPeriod::ALL`] order.
    pub returns: [f64; 4],
}

/// A selected momentum recommendation.
#[derive(Debug, Clone)]
pub struct MomentumPick {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Latest monthly close.
    pub price: f64,
    /// Whole shares the budget buys at `price`.
    pub shares: u64,
    /// Percentage returns, in [`LookbackPeriod::ALL`] order.
    pub returns: [f64; 4],
    /// Percentile ranks of the returns, same order.
    pub percentiles: [f64; 4],
    /// High-Quality Momentum score: mean of the four percentiles.
    pub hqm_score: f64,
}

/// Compute one ticker's momentum row from its monthly series.
///
/// Each window's return is relative to the latest close:
/// `(latest - past) / past * 100`.
///
/// # Errors
///
/// Returns [`SeineError::MissingData`] if the series holds fewer than
/// [`MIN_HISTORY_MONTHS`] observations and [`SeineError::Computation`] if a
/// historical close is zero.
pub fn momentum_row(series: &MonthlySeries) -> Result<MomentumRow> {
    if series.len() < MIN_HISTORY_MONTHS {
        return Err(SeineError::MissingData(format!(
            "{}: {MIN_HISTORY_MONTHS} months of history required, found {}",
            series.symbol(),
            series.len()
        )));
    }

    let latest = series.latest_close();

    let mut returns = [0.0; 4];
    for (slot, period) in returns.iter_mut().zip(LookbackPeriod::ALL) {
        let past = series.close_months_back(period.offset())?;
        if past == 0.0 {
            return Err(SeineError::Computation(format!(
                "{}: close {} periods back is zero",
                series.symbol(),
                period.offset()
            )));
        }
        *slot = (latest - past) / past * 100.0;
    }

    Ok(MomentumRow {
        symbol: series.symbol().to_string(),
        price: latest,
        returns,
    })
}

/// The high-quality momentum screen.
///
/// Runs over a fully fetched population: no ranking starts until every
/// ticker's series is in hand, so percentiles are relative to the whole
/// population of usable tickers.
#[derive(Debug, Clone)]
pub struct MomentumScreen {
    config: ScreenConfig,
}

impl MomentumScreen {
    /// Create a screen with the given configuration.
    #[must_use]
    pub const fn new(config: ScreenConfig) -> Self {
        Self { config }
    }

    /// Extract, rank, select, and size the population.
    ///
    /// Tickers whose series cannot produce a row are skipped and reported
    /// in the outcome; they do not abort the run.
    ///
    /// # Errors
    ///
    /// Returns an error if no ticker survives extraction, or if ranking or
    /// sizing fails for the surviving population.
    pub fn run(&self, population: &[MonthlySeries]) -> Result<ScreenOutcome<MomentumPick>> {
        let mut rows = Vec::with_capacity(population.len());
        let mut skipped = Vec::new();

        for series in population {
            match momentum_row(series) {
                Ok(row) => rows.push(row),
                Err(e) => skipped.push(SkippedTicker {
                    symbol: series.symbol().to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        let metrics: Vec<MetricVector> = LookbackPeriod::ALL
            .iter()
            .enumerate()
            .map(|(i, period)| MetricVector {
                name: period.return_label().to_string(),
                values: rows.iter().map(|row| row.returns[i]).collect::<Array1<f64>>(),
            })
            .collect();

        let ranked = PercentileRanker.rank(&metrics)?;
        let order = TopSelector::new(self.config.limit).select(&ranked.composite);
        let sizer = PositionSizer::new(self.config.budget)?;

        let mut picks = Vec::with_capacity(order.len());
        for idx in order {
            let row = &rows[idx];

            let mut percentiles = [0.0; 4];
            for (slot, column) in percentiles.iter_mut().zip(&ranked.percentiles) {
                *slot = column.values[idx];
            }

            picks.push(MomentumPick {
                shares: sizer.shares(&row.symbol, row.price)?,
                symbol: row.symbol.clone(),
                price: row.price,
                returns: row.returns,
                percentiles,
                hqm_score: ranked.composite[idx],
            });
        }

        Ok(ScreenOutcome { picks, skipped })
    }
}

impl Default for MomentumScreen {
    fn default() -> Self {
        Self::new(ScreenConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use seine_traits::Date;

    /// Build a 12-month series whose latest close is `latest` and whose
    /// close at each look-back offset is taken from `at_offsets`.
    fn series(symbol: &str, latest: f64, at_offsets: &[(usize, f64)]) -> MonthlySeries {
        let mut closes = vec![latest; MIN_HISTORY_MONTHS];
        for &(offset, close) in at_offsets {
            closes[offset] = close;
        }

        let observations = closes
            .into_iter()
            .enumerate()
            .map(|(months_back, close)| {
                let date = Date::from_ymd_opt(2024, 12, 1).unwrap()
                    - chrono::Months::new(months_back as u32);
                (date, close)
            })
            .collect();

        MonthlySeries::new(symbol, observations).unwrap()
    }

    #[test]
    fn test_lookback_offsets() {
        assert_eq!(LookbackPeriod::OneYear.offset(), 11);
        assert_eq!(LookbackPeriod::SixMonth.offset(), 5);
        assert_eq!(LookbackPeriod::ThreeMonth.offset(), 2);
        assert_eq!(LookbackPeriod::OneMonth.offset(), 0);
    }

    #[test]
    fn test_momentum_row_returns() {
        let s = series("AAPL", 110.0, &[(11, 100.0), (5, 88.0), (2, 110.0)]);
        let row = momentum_row(&s).unwrap();

        assert_eq!(row.price, 110.0);
        // One-Year: (110 - 100) / 100 * 100
        assert_relative_eq!(row.returns[0], 10.0, epsilon = 1e-10);
        // Six-Month: (110 - 88) / 88 * 100
        assert_relative_eq!(row.returns[1], 25.0, epsilon = 1e-10);
        // Three-Month close equals the latest, so the return is zero
        assert_relative_eq!(row.returns[2], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_one_month_window_reads_latest_bar() {
        // Offset 0 is the latest close itself, so the one-month return is
        // zero for any series.
        let s = series("AAPL", 123.45, &[(11, 60.0), (5, 70.0), (2, 80.0)]);
        let row = momentum_row(&s).unwrap();
        assert_eq!(row.returns[3], 0.0);
    }

    #[test]
    fn test_short_history_is_missing_data() {
        let observations = (0..6)
            .map(|i| {
                let date =
                    Date::from_ymd_opt(2024, 12, 1).unwrap() - chrono::Months::new(i as u32);
                (date, 100.0)
            })
            .collect();
        let s = MonthlySeries::new("NEWCO", observations).unwrap();

        let err = momentum_row(&s).unwrap_err();
        assert!(matches!(err, SeineError::MissingData(_)));
        assert!(err.to_string().contains("NEWCO"));
    }

    #[test]
    fn test_zero_historical_close_is_computation_error() {
        let s = series("ZERO", 110.0, &[(11, 0.0)]);
        let err = momentum_row(&s).unwrap_err();
        assert!(matches!(err, SeineError::Computation(_)));
    }

    #[test]
    fn test_screen_ranks_by_one_year_return() {
        // One-Year returns 10% / 20% / 30%, all other windows equal, so the
        // composite ordering follows the one-year column: C > B > A.
        let population = vec![
            series("A", 110.0, &[(11, 100.0)]),
            series("B", 120.0, &[(11, 100.0)]),
            series("C", 130.0, &[(11, 100.0)]),
        ];

        let outcome = MomentumScreen::default().run(&population).unwrap();
        assert!(outcome.skipped.is_empty());

        let symbols: Vec<&str> = outcome.picks.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "B", "A"]);

        // One-Year percentiles are 1, 2/3, 1/3 down the ranked list
        assert_relative_eq!(outcome.picks[0].percentiles[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(outcome.picks[1].percentiles[0], 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(outcome.picks[2].percentiles[0], 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_screen_composite_is_mean_of_percentiles() {
        let population = vec![
            series("A", 110.0, &[(11, 100.0)]),
            series("B", 120.0, &[(11, 100.0)]),
        ];

        let outcome = MomentumScreen::default().run(&population).unwrap();
        for pick in &outcome.picks {
            let expected = pick.percentiles.iter().sum::<f64>() / 4.0;
            assert_relative_eq!(pick.hqm_score, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_screen_skips_unusable_tickers() {
        let short = {
            let observations = vec![(Date::from_ymd_opt(2024, 12, 1).unwrap(), 50.0)];
            MonthlySeries::new("SHORT", observations).unwrap()
        };
        let population = vec![
            series("A", 110.0, &[(11, 100.0)]),
            short,
            series("B", 120.0, &[(11, 100.0)]),
        ];

        let outcome = MomentumScreen::default().run(&population).unwrap();

        assert_eq!(outcome.picks.len(), 2);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].symbol, "SHORT");
    }

    #[test]
    fn test_screen_empty_population_aborts() {
        let outcome = MomentumScreen::default().run(&[]);
        assert!(matches!(outcome, Err(SeineError::MissingData(_))));
    }

    #[test]
    fn test_screen_truncates_to_limit() {
        let population: Vec<MonthlySeries> = (0..60)
            .map(|i| {
                series(
                    &format!("T{i:02}"),
                    100.0 + i as f64,
                    &[(11, 100.0), (5, 90.0), (2, 95.0)],
                )
            })
            .collect();

        let outcome = MomentumScreen::default().run(&population).unwrap();
        assert_eq!(outcome.picks.len(), 50);
    }

    #[test]
    fn test_screen_sizes_positions() {
        let population = vec![series("A", 250.0, &[(11, 200.0)])];
        let outcome = MomentumScreen::default().run(&population).unwrap();

        // Default budget 1000 at price 250
        assert_eq!(outcome.picks[0].shares, 4);
    }
}
