//! Ranking primitives for the Seine screener.
//!
//! This crate turns a population of per-ticker metric columns into a ranked
//! recommendation list. It implements the three stages shared by both
//! screening strategies: cross-sectional percentile ranking with a composite
//! score, stable top-N selection, and per-row position sizing.
//!
//! # Examples
//!
//! ```rust
//! use seine_rank::{MetricVector, PercentileRanker, TopSelector};
//! use ndarray::Array1;
//!
//! let metrics = vec![MetricVector {
//!     name: "One-Year Price Return".to_string(),
//!     values: Array1::from_vec(vec![10.0, 20.0, 30.0]),
//! }];
//!
//! let ranked = PercentileRanker.rank(&metrics).unwrap();
//! let order = TopSelector::default().select(&ranked.composite);
//! assert_eq!(order, vec![2, 1, 0]);
//! ```

mod ranker;
mod select;
mod size;

// Re-export main types
pub use ranker::{MetricVector, PercentileRanker, RankedScores};
pub use select::{DEFAULT_LIMIT, TopSelector};
pub use size::PositionSizer;
