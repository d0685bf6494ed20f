//! Screening strategies for the Seine screener.
//!
//! This crate provides the two ranking strategies the screener ships:
//! - Momentum: four price returns over fixed monthly look-back windows,
//!   composited into a High-Quality Momentum (HQM) score
//! - Value: five valuation ratios, composited into a Robust Value (RV) score
//!
//! Both run the same pipeline over a fully fetched population: extract
//! per-ticker metric rows (skipping tickers with unusable data), rank the
//! cross-section by percentile, keep the top of the list, and size each
//! position against the budget.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod momentum;
pub mod screen;
pub mod value;

// Re-export key types
pub use momentum::{LookbackPeriod, MomentumPick, MomentumScreen};
pub use screen::{ScreenConfig, ScreenOutcome, SkippedTicker};
pub use value::{ValueMetric, ValuePick, ValueScreen};
