//! Shared configuration and outcome types for screening runs.

use serde::{Deserialize, Serialize};
use seine_rank::DEFAULT_LIMIT;
use seine_traits::Symbol;

/// Configuration shared by both screening strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Total investment budget, applied to each selected ticker
    /// independently.
    pub budget: f64,
    /// Maximum number of tickers kept by the selector.
    pub limit: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            budget: 1000.0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A ticker excluded from a screen, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct SkippedTicker {
    /// The excluded ticker.
    pub symbol: Symbol,
    /// Human-readable reason.
    pub reason: String,
}

/// Result of a screening run.
///
/// Per-ticker extraction failures are isolated into `skipped`; `picks`
/// holds the ranked, sized recommendation list for the remaining
/// population.
#[derive(Debug, Clone)]
pub struct ScreenOutcome<T> {
    /// Ranked picks, best composite score first.
    pub picks: Vec<T>,
    /// Tickers excluded from the population, in input order.
    pub skipped: Vec<SkippedTicker>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScreenConfig::default();
        assert_eq!(config.budget, 1000.0);
        assert_eq!(config.limit, 50);
    }
}
