//! Common types used throughout the Seine screener.
//!
//! This module defines the validated per-ticker containers the strategies
//! consume: a monthly close-price history with checked offset access, and a
//! typed record of valuation ratios.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeineError};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Symbols identify securities across the Seine workspace. Typically these
/// are ticker symbols like "AAPL" or "MSFT".
pub type Symbol = String;

/// A validated monthly close-price history for one ticker.
///
/// Observations are held most-recent-first, so offset 0 is the latest close,
/// offset 2 the close three monthly periods back, and so on. Construction
/// sorts and validates the raw observations once; all later access goes
/// through checked accessors instead of raw indexing.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use seine_traits::MonthlySeries;
///
/// let series = MonthlySeries::new(
///     "AAPL",
///     vec![
///         (NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(), 185.0),
///         (NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), 190.0),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(series.latest_close(), 190.0);
/// assert_eq!(series.close_months_back(1).unwrap(), 185.0);
/// ```
#[derive(Debug, Clone)]
pub struct MonthlySeries {
    symbol: Symbol,
    last_refreshed: Date,
    /// Closes ordered most-recent-first.
    closes: Vec<f64>,
}

impl MonthlySeries {
    /// Build a series from raw `(date, close)` observations.
    ///
    /// The observations may arrive in any order; they are sorted
    /// most-recent-first here so offset access is well defined.
    ///
    /// # Errors
    ///
    /// Returns [`SeineError::MissingData`] if the observations are empty or
    /// any close is non-finite.
    pub fn new(symbol: impl Into<Symbol>, mut observations: Vec<(Date, f64)>) -> Result<Self> {
        let symbol = symbol.into();

        if observations.is_empty() {
            return Err(SeineError::MissingData(format!(
                "{symbol}: monthly series is empty"
            )));
        }

        if let Some((date, close)) = observations.iter().find(|(_, c)| !c.is_finite()) {
            return Err(SeineError::MissingData(format!(
                "{symbol}: non-finite close {close} at {date}"
            )));
        }

        observations.sort_by(|a, b| b.0.cmp(&a.0));

        let last_refreshed = observations[0].0;
        let closes = observations.into_iter().map(|(_, c)| c).collect();

        Ok(Self {
            symbol,
            last_refreshed,
            closes,
        })
    }

    /// The ticker symbol this series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The date of the most recent observation.
    pub const fn last_refreshed(&self) -> Date {
        self.last_refreshed
    }

    /// Number of monthly observations.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Whether the series holds no observations.
    ///
    /// Always false for a constructed series; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// The most recent close price.
    pub fn latest_close(&self) -> f64 {
        self.closes[0]
    }

    /// The close `offset` monthly periods back from the latest observation.
    ///
    /// Offset 0 is the latest close itself.
    ///
    /// # Errors
    ///
    /// Returns [`SeineError::MissingData`] if the series is shorter than
    /// `offset + 1` observations.
    pub fn close_months_back(&self, offset: usize) -> Result<f64> {
        self.closes.get(offset).copied().ok_or_else(|| {
            SeineError::MissingData(format!(
                "{}: {} months of history required, found {}",
                self.symbol,
                offset + 1,
                self.closes.len()
            ))
        })
    }
}

/// Valuation ratios for one ticker, parsed to numeric form.
///
/// Produced by the data-source conversion layer; every field is guaranteed
/// finite by construction there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalRatios {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Price-to-earnings ratio.
    pub price_to_earnings: f64,
    /// Price-to-book ratio.
    pub price_to_book: f64,
    /// Price-to-sales ratio (trailing twelve months).
    pub price_to_sales: f64,
    /// Enterprise value to EBITDA.
    pub ev_to_ebitda: f64,
    /// Enterprise value to revenue.
    pub ev_to_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_series_sorts_most_recent_first() {
        let series = MonthlySeries::new(
            "AAPL",
            vec![
                (date(2023, 11, 30), 100.0),
                (date(2024, 1, 31), 120.0),
                (date(2023, 12, 29), 110.0),
            ],
        )
        .unwrap();

        assert_eq!(series.last_refreshed(), date(2024, 1, 31));
        assert_eq!(series.latest_close(), 120.0);
        assert_eq!(series.close_months_back(0).unwrap(), 120.0);
        assert_eq!(series.close_months_back(1).unwrap(), 110.0);
        assert_eq!(series.close_months_back(2).unwrap(), 100.0);
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
    }

    #[test]
    fn test_series_rejects_empty() {
        let result = MonthlySeries::new("AAPL", vec![]);
        assert!(matches!(result, Err(SeineError::MissingData(_))));
    }

    #[test]
    fn test_series_rejects_non_finite_close() {
        let result = MonthlySeries::new("AAPL", vec![(date(2024, 1, 31), f64::NAN)]);
        assert!(matches!(result, Err(SeineError::MissingData(_))));
    }

    #[test]
    fn test_close_months_back_out_of_range() {
        let series = MonthlySeries::new("AAPL", vec![(date(2024, 1, 31), 120.0)]).unwrap();

        let err = series.close_months_back(11).unwrap_err();
        assert!(matches!(err, SeineError::MissingData(_)));
        assert!(err.to_string().contains("12 months"));
    }

    #[test]
    fn test_symbol_type() {
        let symbol: Symbol = "AAPL".to_string();
        assert_eq!(symbol, "AAPL");
    }
}
