//! Error types for the Alpha Vantage API client.

use seine_traits::SeineError;
use thiserror::Error;

/// Errors that can occur when using the Alpha Vantage API.
#[derive(Debug, Error)]
pub enum AlphaVantageError {
    /// Missing API key.
    #[error("ALPHAVANTAGE_API_KEY environment variable not set")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error body.
    #[error("Alpha Vantage API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. The free tier allows 25 requests/day.")]
    RateLimitExceeded,

    /// Response did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

impl From<AlphaVantageError> for SeineError {
    fn from(err: AlphaVantageError) -> Self {
        match err {
            AlphaVantageError::Schema(msg) => Self::Schema(msg),
            other => Self::Fetch(other.to_string()),
        }
    }
}
