//! Formatted spreadsheet output for Seine recommendation lists.
//!
//! This crate is the report sink of the screener: it accepts ranked tables
//! plus column metadata and writes one styled worksheet per strategy. The
//! sink knows nothing about strategies; callers describe each sheet as a
//! name, a list of typed columns, and rows of cells.
//!
//! # Example
//!
//! ```rust
//! use seine_report::{CellValue, ColumnFormat, ColumnSpec, ReportSheet, ReportWriter};
//!
//! let mut sheet = ReportSheet::new(
//!     "price_momentum",
//!     vec![
//!         ColumnSpec::new("Ticker", ColumnFormat::Text),
//!         ColumnSpec::new("Price", ColumnFormat::Currency),
//!     ],
//! );
//! sheet
//!     .push_row(vec![
//!         CellValue::Text("AAPL".to_string()),
//!         CellValue::Number(190.0),
//!     ])
//!     .unwrap();
//!
//! let bytes = ReportWriter::default().to_bytes(&[sheet]).unwrap();
//! assert!(!bytes.is_empty());
//! ```

#![warn(missing_docs)]

mod sheet;
mod writer;

pub use sheet::{CellValue, ColumnFormat, ColumnSpec, ReportSheet};
pub use writer::{ReportError, ReportStyle, ReportWriter};
