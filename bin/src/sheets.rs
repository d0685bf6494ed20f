//! Assembly of report sheets from screen outcomes.
//!
//! Column layouts mirror the recommendation spreadsheet exactly: identity
//! and sizing columns first, then alternating raw-metric/percentile pairs,
//! then the composite score.

use seine_report::{CellValue, ColumnFormat, ColumnSpec, ReportError, ReportSheet};
use seine_strategies::{LookbackPeriod, MomentumPick, ValueMetric, ValuePick};

/// Sheet name for the momentum strategy.
pub(crate) const MOMENTUM_SHEET: &str = "price_momentum";

/// Sheet name for the value strategy.
pub(crate) const VALUE_SHEET: &str = "ratio_analysis";

/// Build the momentum sheet from ranked picks.
pub(crate) fn momentum_sheet(picks: &[MomentumPick]) -> Result<ReportSheet, ReportError> {
    let mut columns = vec![
        ColumnSpec::new("Ticker", ColumnFormat::Text),
        ColumnSpec::new("Price", ColumnFormat::Currency),
        ColumnSpec::new("Number of Shares to Buy", ColumnFormat::Integer),
    ];
    for period in LookbackPeriod::ALL {
        columns.push(ColumnSpec::new(period.return_label(), ColumnFormat::Percent));
        columns.push(ColumnSpec::new(period.percentile_label(), ColumnFormat::Percent));
    }
    columns.push(ColumnSpec::new("HQM Score", ColumnFormat::Percent));

    let mut sheet = ReportSheet::new(MOMENTUM_SHEET, columns);
    for pick in picks {
        let mut row = vec![
            CellValue::Text(pick.symbol.clone()),
            CellValue::Number(pick.price),
            CellValue::Integer(pick.shares),
        ];
        for i in 0..LookbackPeriod::ALL.len() {
            row.push(CellValue::Number(pick.returns[i]));
            row.push(CellValue::Number(pick.percentiles[i]));
        }
        row.push(CellValue::Number(pick.hqm_score));
        sheet.push_row(row)?;
    }

    Ok(sheet)
}

/// Build the value sheet from ranked picks.
pub(crate) fn value_sheet(picks: &[ValuePick]) -> Result<ReportSheet, ReportError> {
    let mut columns = vec![
        ColumnSpec::new("Ticker", ColumnFormat::Text),
        ColumnSpec::new("Price", ColumnFormat::Currency),
        ColumnSpec::new("Number of Shares to Buy", ColumnFormat::Integer),
    ];
    for metric in ValueMetric::ALL {
        columns.push(ColumnSpec::new(metric.ratio_label(), ColumnFormat::Float));
        columns.push(ColumnSpec::new(metric.percentile_label(), ColumnFormat::Percent));
    }
    columns.push(ColumnSpec::new("RV Score", ColumnFormat::Float));

    let mut sheet = ReportSheet::new(VALUE_SHEET, columns);
    for pick in picks {
        let mut row = vec![
            CellValue::Text(pick.symbol.clone()),
            CellValue::Number(pick.price),
            CellValue::Integer(pick.shares),
        ];
        for i in 0..ValueMetric::ALL.len() {
            row.push(CellValue::Number(pick.ratios[i]));
            row.push(CellValue::Number(pick.percentiles[i]));
        }
        row.push(CellValue::Number(pick.rv_score));
        sheet.push_row(row)?;
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn momentum_pick(symbol: &str) -> MomentumPick {
        MomentumPick {
            symbol: symbol.to_string(),
            price: 120.0,
            shares: 8,
            returns: [30.0, 12.0, 4.0, 0.0],
            percentiles: [1.0, 0.5, 0.5, 1.0],
            hqm_score: 0.75,
        }
    }

    fn value_pick(symbol: &str) -> ValuePick {
        ValuePick {
            symbol: symbol.to_string(),
            price: 80.0,
            shares: 12,
            ratios: [20.0, 5.0, 3.0, 12.0, 4.0],
            percentiles: [0.5, 0.5, 1.0, 1.0, 0.5],
            rv_score: 0.7,
        }
    }

    #[test]
    fn test_momentum_sheet_layout() {
        let sheet = momentum_sheet(&[momentum_pick("AAPL")]).unwrap();

        assert_eq!(sheet.name(), "price_momentum");
        // Ticker, Price, Shares + 4 x (return, percentile) + HQM Score
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_value_sheet_layout() {
        let sheet = value_sheet(&[value_pick("MSFT"), value_pick("IBM")]).unwrap();

        assert_eq!(sheet.name(), "ratio_analysis");
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_empty_picks_give_header_only_sheet() {
        let sheet = momentum_sheet(&[]).unwrap();
        assert!(sheet.is_empty());
    }
}
