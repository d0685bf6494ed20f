//! Top-N selection over composite scores.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Default number of rows kept by the selector.
pub const DEFAULT_LIMIT: usize = 50;

/// Selects the top rows of a ranked population by composite score.
///
/// The sort is descending and stable: rows with equal composite scores keep
/// their relative input order. A population smaller than the limit is
/// returned whole, never an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TopSelector {
    limit: usize,
}

impl TopSelector {
    /// Create a selector keeping at most `limit` rows.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// The configured row limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Row indices ordered by composite score descending, truncated to the
    /// limit.
    ///
    /// The caller uses the returned indices to reorder its row storage, so
    /// the selector stays independent of the row representation.
    pub fn select(&self, composite: &Array1<f64>) -> Vec<usize> {
        let mut order: Vec<usize> = (0..composite.len()).collect();
        order.sort_by(|&a, &b| composite[b].total_cmp(&composite[a]));
        order.truncate(self.limit);
        order
    }
}

impl Default for TopSelector {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}
