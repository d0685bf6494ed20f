//! Alpha Vantage API client implementation.

use crate::{
    Result,
    error::AlphaVantageError,
    types::{CompanyOverview, MonthlyTimeSeries},
};
use reqwest::Client;
use std::env;
use std::time::Duration;

/// Base URL for the Alpha Vantage query API.
const ALPHAVANTAGE_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Default per-request timeout.
///
/// A timed-out ticker surfaces as a fetch failure for that ticker only.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Alpha Vantage API client.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl AlphaVantageClient {
    /// Create a new client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: ALPHAVANTAGE_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a new client from the `ALPHAVANTAGE_API_KEY` environment
    /// variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key =
            env::var("ALPHAVANTAGE_API_KEY").map_err(|_| AlphaVantageError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Override the base URL (useful for proxies and tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a query URL for a function/symbol pair.
    fn url(&self, function: &str, symbol: &str) -> String {
        format!(
            "{}?function={function}&symbol={}&apikey={}",
            self.base_url,
            symbol.to_uppercase(),
            self.api_key
        )
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(&self, function: &str, symbol: &str) -> Result<T> {
        let url = self.url(function, symbol);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AlphaVantageError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AlphaVantageError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // Alpha Vantage reports failures inside a 200 body
        if text.contains("\"Error Message\"") {
            return Err(AlphaVantageError::Api(text));
        }
        if text.contains("\"Note\"") || text.contains("\"Information\":") {
            return Err(AlphaVantageError::RateLimitExceeded);
        }

        serde_json::from_str(&text).map_err(|e| {
            AlphaVantageError::Schema(format!("failed to parse {function} response: {e}"))
        })
    }

    /// Get the monthly price time series for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response does not
    /// match the expected shape.
    pub async fn monthly_time_series(&self, symbol: &str) -> Result<MonthlyTimeSeries> {
        self.get("TIME_SERIES_MONTHLY", symbol).await
    }

    /// Get the company overview (fundamentals) for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response does not
    /// match the expected shape.
    pub async fn company_overview(&self, symbol: &str) -> Result<CompanyOverview> {
        self.get("OVERVIEW", symbol).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = AlphaVantageClient::new("test_key");
        assert_eq!(
            client.url("TIME_SERIES_MONTHLY", "aapl"),
            "https://www.alphavantage.co/query?function=TIME_SERIES_MONTHLY&symbol=AAPL&apikey=test_key"
        );
        assert_eq!(
            client.url("OVERVIEW", "MSFT"),
            "https://www.alphavantage.co/query?function=OVERVIEW&symbol=MSFT&apikey=test_key"
        );
    }

    #[test]
    fn test_base_url_override() {
        let client =
            AlphaVantageClient::new("test_key").with_base_url("http://localhost:8080/query");
        assert_eq!(
            client.url("OVERVIEW", "AAPL"),
            "http://localhost:8080/query?function=OVERVIEW&symbol=AAPL&apikey=test_key"
        );
    }
}
