//! Alpha Vantage API client for Seine.
//!
//! This crate provides a client for fetching monthly price history and
//! company fundamentals from the [Alpha Vantage](https://www.alphavantage.co/)
//! API, plus conversions from the raw response shapes into the validated
//! types the screener strategies consume.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seine_alphavantage::AlphaVantageClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlphaVantageClient::from_env()?;
//!
//!     // Fetch monthly price history
//!     let monthly = client.monthly_time_series("AAPL").await?;
//!     let series = monthly.into_series()?;
//!
//!     // Fetch fundamentals
//!     let overview = client.company_overview("AAPL").await?;
//!     let ratios = overview.into_ratios()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `ALPHAVANTAGE_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! ALPHAVANTAGE_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod types;

pub use client::AlphaVantageClient;
pub use error::AlphaVantageError;
pub use types::*;

/// Result type for Alpha Vantage operations.
pub type Result<T> = std::result::Result<T, AlphaVantageError>;
