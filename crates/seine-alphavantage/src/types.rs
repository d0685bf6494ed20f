//! Data types for Alpha Vantage API responses.
//!
//! The field names here are a versioned external contract: Alpha Vantage
//! keys its JSON with numbered labels like `"2. Symbol"` and `"4. close"`.
//! If the source changes shape, deserialization fails with a schema error
//! instead of silently producing empty rows.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use seine_traits::{FundamentalRatios, MonthlySeries, SeineError};

/// Metadata block of a monthly time-series response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyMetaData {
    /// Human-readable description of the series.
    #[serde(rename = "1. Information", default)]
    pub information: Option<String>,
    /// Ticker symbol.
    #[serde(rename = "2. Symbol")]
    pub symbol: String,
    /// Date of the most recent observation.
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: String,
    /// Exchange time zone.
    #[serde(rename = "4. Time Zone", default)]
    pub time_zone: Option<String>,
}

/// One monthly OHLCV bar. Alpha Vantage serializes every value as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBar {
    /// Opening price.
    #[serde(rename = "1. open")]
    pub open: String,
    /// High price.
    #[serde(rename = "2. high")]
    pub high: String,
    /// Low price.
    #[serde(rename = "3. low")]
    pub low: String,
    /// Closing price.
    #[serde(rename = "4. close")]
    pub close: String,
    /// Traded volume.
    #[serde(rename = "5. volume", default)]
    pub volume: Option<String>,
}

/// Raw `TIME_SERIES_MONTHLY` response for one ticker.
///
/// The date-keyed mapping is held in a `BTreeMap`, so iteration order is
/// chronological regardless of the order the source emitted the keys in;
/// [`MonthlyTimeSeries::into_series`] re-orders to most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTimeSeries {
    /// Response metadata.
    #[serde(rename = "Meta Data")]
    pub meta_data: MonthlyMetaData,
    /// Mapping from `YYYY-MM-DD` date to the bar for that month.
    #[serde(rename = "Monthly Time Series")]
    pub series: BTreeMap<String, MonthlyBar>,
}

impl MonthlyTimeSeries {
    /// Convert the raw payload into a validated [`MonthlySeries`].
    ///
    /// Dates and closes are parsed once here; the resulting series orders
    /// observations most-recent-first and exposes checked offset access.
    ///
    /// # Errors
    ///
    /// Returns [`SeineError::Schema`] if a date key or close value does not
    /// parse, and [`SeineError::MissingData`] if the mapping is empty or a
    /// close is non-finite.
    pub fn into_series(self) -> seine_traits::Result<MonthlySeries> {
        let symbol = self.meta_data.symbol;

        let mut observations = Vec::with_capacity(self.series.len());
        for (date_str, bar) in self.series {
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                SeineError::Schema(format!("{symbol}: bad series date {date_str:?}: {e}"))
            })?;
            let close: f64 = bar.close.trim().parse().map_err(|_| {
                SeineError::Schema(format!(
                    "{symbol}: non-numeric close {:?} at {date_str}",
                    bar.close
                ))
            })?;
            observations.push((date, close));
        }

        MonthlySeries::new(symbol, observations)
    }
}

/// Raw `OVERVIEW` (company fundamentals) response for one ticker.
///
/// Ratio fields arrive as strings and may hold `"None"` or `"-"` when the
/// source has no value; [`CompanyOverview::into_ratios`] turns those into
/// explicit missing-data errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyOverview {
    /// Ticker symbol.
    #[serde(rename = "Symbol")]
    pub symbol: String,
    /// Company name.
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Price-to-earnings ratio.
    #[serde(rename = "PERatio", default)]
    pub pe_ratio: Option<String>,
    /// Price-to-book ratio.
    #[serde(rename = "PriceToBookRatio", default)]
    pub price_to_book_ratio: Option<String>,
    /// Price-to-sales ratio, trailing twelve months.
    #[serde(rename = "PriceToSalesRatioTTM", default)]
    pub price_to_sales_ratio: Option<String>,
    /// Enterprise value to EBITDA.
    #[serde(rename = "EVToEBITDA", default)]
    pub ev_to_ebitda: Option<String>,
    /// Enterprise value to revenue.
    #[serde(rename = "EVToRevenue", default)]
    pub ev_to_revenue: Option<String>,
}

impl CompanyOverview {
    /// Parse the string-typed ratio fields into a numeric
    /// [`FundamentalRatios`] record.
    ///
    /// # Errors
    ///
    /// Returns [`SeineError::MissingData`] naming the offending field if any
    /// required ratio is absent, non-numeric, or non-finite.
    pub fn into_ratios(self) -> seine_traits::Result<FundamentalRatios> {
        let Self {
            symbol,
            pe_ratio,
            price_to_book_ratio,
            price_to_sales_ratio,
            ev_to_ebitda,
            ev_to_revenue,
            ..
        } = self;

        Ok(FundamentalRatios {
            price_to_earnings: parse_ratio(&symbol, "PERatio", pe_ratio)?,
            price_to_book: parse_ratio(&symbol, "PriceToBookRatio", price_to_book_ratio)?,
            price_to_sales: parse_ratio(&symbol, "PriceToSalesRatioTTM", price_to_sales_ratio)?,
            ev_to_ebitda: parse_ratio(&symbol, "EVToEBITDA", ev_to_ebitda)?,
            ev_to_revenue: parse_ratio(&symbol, "EVToRevenue", ev_to_revenue)?,
            symbol,
        })
    }
}

/// Parse one ratio field, treating absent and non-numeric values alike.
fn parse_ratio(symbol: &str, field: &str, raw: Option<String>) -> seine_traits::Result<f64> {
    let raw = raw
        .ok_or_else(|| SeineError::MissingData(format!("{symbol}: {field} absent from overview")))?;

    let value: f64 = raw.trim().parse().map_err(|_| {
        SeineError::MissingData(format!("{symbol}: {field} is not numeric ({raw:?})"))
    })?;

    if !value.is_finite() {
        return Err(SeineError::MissingData(format!(
            "{symbol}: {field} is not finite ({raw:?})"
        )));
    }

    Ok(value)
}
