//! Position sizing against a fixed investment budget.

use seine_traits::{Result, SeineError};

/// Computes an integer share count per selected ticker.
///
/// Each row is sized independently as `floor(budget / price)`: the full
/// budget is applied to every ticker, so the aggregate cost of the
/// recommendation list is not bounded by the budget. This mirrors the
/// screener's documented behavior and is intentionally not "corrected" into
/// a joint allocation.
#[derive(Debug, Clone, Copy)]
pub struct PositionSizer {
    budget: f64,
}

impl PositionSizer {
    /// Create a sizer for the given total budget.
    ///
    /// # Errors
    ///
    /// Returns [`SeineError::Computation`] if the budget is negative or
    /// non-finite.
    pub fn new(budget: f64) -> Result<Self> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(SeineError::Computation(format!(
                "budget {budget} must be a non-negative number"
            )));
        }

        Ok(Self { budget })
    }

    /// The configured budget.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Number of whole shares of `symbol` the budget buys at `price`.
    ///
    /// # Errors
    ///
    /// Returns [`SeineError::InvalidPrice`] if `price` is zero, negative, or
    /// non-finite.
    pub fn shares(&self, symbol: &str, price: f64) -> Result<u64> {
        if !price.is_finite() || price <= 0.0 {
            return Err(SeineError::InvalidPrice(format!(
                "{symbol}: price {price} is not positive"
            )));
        }

        Ok((self.budget / price).floor() as u64)
    }
}
