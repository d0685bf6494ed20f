#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/seinequant/seine/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the Seine stock screener.
//!
//! This crate provides the shared data model and error taxonomy used across
//! the Seine workspace: validated per-ticker market data containers, the
//! cross-sectional percentile statistics both ranking strategies are built
//! on, and the screener-wide error type.

/// The version of the seine-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod stats;
pub mod types;

// Re-exports
pub use error::{Result, SeineError};
pub use types::{Date, FundamentalRatios, MonthlySeries, Symbol};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
