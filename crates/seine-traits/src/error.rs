//! Error types for the Seine screener.
//!
//! This module defines the error taxonomy used throughout the Seine
//! workspace. Per-ticker failures (fetch, extraction) are meant to be
//! isolated by callers, which log and skip the ticker; failures in the
//! ranking stage itself indicate a systemic problem and abort the run.

use thiserror::Error;

/// The main error type for Seine operations.
#[derive(Debug, Error)]
pub enum SeineError {
    /// Network/HTTP failure or error response while fetching a ticker.
    #[error("Data fetch failed: {0}")]
    Fetch(String),

    /// Response from the data source is missing expected fields or has an
    /// unexpected shape.
    #[error("Unexpected response shape: {0}")]
    Schema(String),

    /// Insufficient history or an absent/unusable fundamental field.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// A non-numeric or non-finite metric value reached the ranker.
    #[error("Invalid metric value: {0}")]
    InvalidMetric(String),

    /// Division by zero or other invalid arithmetic.
    #[error("Computation failed: {0}")]
    Computation(String),

    /// A non-positive or non-finite price at position-sizing time.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

/// A specialized Result type for Seine operations.
///
/// This is a convenience type that uses [`SeineError`] as the error type.
pub type Result<T> = std::result::Result<T, SeineError>;
