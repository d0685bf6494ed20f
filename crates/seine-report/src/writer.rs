//! Workbook assembly and styling.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use thiserror::Error;

use crate::sheet::{CellValue, ColumnFormat, ReportSheet};

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Underlying spreadsheet engine error.
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),

    /// A sheet or row did not match its declared columns.
    #[error("Report shape error: {0}")]
    Shape(String),
}

/// Visual styling applied to every sheet.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    /// Cell background color (RGB).
    pub background: u32,
    /// Font color (RGB).
    pub font_color: u32,
    /// Width applied to every written column.
    pub column_width: f64,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            background: 0x0A0A23,
            font_color: 0xFFFFFF,
            column_width: 25.0,
        }
    }
}

/// Writes report sheets into a styled xlsx workbook.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    style: ReportStyle,
}

impl ReportWriter {
    /// Create a writer with the given style.
    #[must_use]
    pub const fn new(style: ReportStyle) -> Self {
        Self { style }
    }

    /// Write the sheets to an xlsx file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if workbook assembly or the file save fails.
    pub fn write(&self, path: impl AsRef<Path>, sheets: &[ReportSheet]) -> Result<(), ReportError> {
        let mut workbook = self.build_workbook(sheets)?;
        workbook.save(path.as_ref())?;
        Ok(())
    }

    /// Render the sheets to an in-memory xlsx byte buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if workbook assembly fails.
    pub fn to_bytes(&self, sheets: &[ReportSheet]) -> Result<Vec<u8>, ReportError> {
        let mut workbook = self.build_workbook(sheets)?;
        Ok(workbook.save_to_buffer()?)
    }

    fn build_workbook(&self, sheets: &[ReportSheet]) -> Result<Workbook, ReportError> {
        let mut workbook = Workbook::new();

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            let formats: Vec<Format> = sheet
                .columns
                .iter()
                .map(|column| self.cell_format(column.format))
                .collect();

            for (col, (column, format)) in sheet.columns.iter().zip(&formats).enumerate() {
                let col = col as u16;
                worksheet.set_column_width(col, self.style.column_width)?;
                worksheet.write_string_with_format(0, col, &column.header, format)?;
            }

            for (row_idx, row) in sheet.rows.iter().enumerate() {
                let row_idx = (row_idx + 1) as u32;
                for (col, (cell, format)) in row.iter().zip(&formats).enumerate() {
                    let col = col as u16;
                    match cell {
                        CellValue::Text(text) => {
                            worksheet.write_string_with_format(row_idx, col, text, format)?;
                        }
                        CellValue::Number(value) => {
                            worksheet.write_number_with_format(row_idx, col, *value, format)?;
                        }
                        CellValue::Integer(value) => {
                            worksheet.write_number_with_format(
                                row_idx,
                                col,
                                *value as f64,
                                format,
                            )?;
                        }
                    }
                }
            }
        }

        Ok(workbook)
    }

    fn cell_format(&self, format: ColumnFormat) -> Format {
        let base = Format::new()
            .set_font_color(Color::RGB(self.style.font_color))
            .set_background_color(Color::RGB(self.style.background))
            .set_border(FormatBorder::Thin);

        match format {
            ColumnFormat::Text => base,
            ColumnFormat::Currency => base.set_num_format("$0.00"),
            ColumnFormat::Percent => base.set_num_format("0.0%"),
            ColumnFormat::Float => base.set_num_format("0.00"),
            ColumnFormat::Integer => base.set_num_format("0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::ColumnSpec;

    fn sample_sheet() -> ReportSheet {
        let mut sheet = ReportSheet::new(
            "price_momentum",
            vec![
                ColumnSpec::new("Ticker", ColumnFormat::Text),
                ColumnSpec::new("Price", ColumnFormat::Currency),
                ColumnSpec::new("HQM Score", ColumnFormat::Percent),
            ],
        );
        sheet
            .push_row(vec![
                CellValue::Text("AAPL".to_string()),
                CellValue::Number(190.0),
                CellValue::Number(0.83),
            ])
            .unwrap();
        sheet
    }

    #[test]
    fn test_default_style() {
        let style = ReportStyle::default();
        assert_eq!(style.background, 0x0A0A23);
        assert_eq!(style.font_color, 0xFFFFFF);
        assert_eq!(style.column_width, 25.0);
    }

    #[test]
    fn test_to_bytes_produces_workbook() {
        let bytes = ReportWriter::default().to_bytes(&[sample_sheet()]).unwrap();

        // xlsx files are zip archives; check the magic header
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_two_sheets() {
        let momentum = sample_sheet();
        let mut value = ReportSheet::new(
            "ratio_analysis",
            vec![ColumnSpec::new("Ticker", ColumnFormat::Text)],
        );
        value
            .push_row(vec![CellValue::Text("MSFT".to_string())])
            .unwrap();

        let bytes = ReportWriter::default().to_bytes(&[momentum, value]).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_empty_sheet_is_written() {
        let sheet = ReportSheet::new(
            "ratio_analysis",
            vec![ColumnSpec::new("Ticker", ColumnFormat::Text)],
        );
        let bytes = ReportWriter::default().to_bytes(&[sheet]).unwrap();
        assert!(!bytes.is_empty());
    }
}
