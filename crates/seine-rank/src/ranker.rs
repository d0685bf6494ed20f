//! Cross-sectional percentile ranking with a composite score.

use ndarray::Array1;
use seine_traits::{Result, SeineError, stats};

/// One named metric column over the screening population.
///
/// Every metric for a strategy holds one value per ticker, aligned by index
/// across all columns.
#[derive(Debug, Clone)]
pub struct MetricVector {
    /// Metric name (for diagnostics and report headers)
    pub name: String,

    /// One value per row of the population
    pub values: Array1<f64>,
}

/// Output of a ranking pass: percentile columns plus composite score.
#[derive(Debug, Clone)]
pub struct RankedScores {
    /// One percentile column per input metric, values in [0, 1], in input
    /// metric order.
    pub percentiles: Vec<MetricVector>,

    /// Unweighted arithmetic mean of each row's percentile columns.
    pub composite: Array1<f64>,
}

/// Percentile ranker shared by the momentum and value strategies.
///
/// For each metric column the ranker computes every row's percentile rank
/// within the entire current population (fraction of rows with a value less
/// than or equal to the row's own, see
/// [`seine_traits::stats::percentile_of_score`]), then averages the
/// percentile columns row-wise into one composite score. Percentiles are
/// population-relative: the same row ranks differently if the population
/// changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileRanker;

impl PercentileRanker {
    /// Rank the population described by `metrics`.
    ///
    /// # Arguments
    ///
    /// * `metrics` - Metric columns, all with the same length. The row order
    ///   is preserved in the output.
    ///
    /// # Errors
    ///
    /// Returns [`SeineError::MissingData`] if the population is empty, and
    /// [`SeineError::InvalidMetric`] if no metric columns are given, the
    /// columns have mismatched lengths, or any value is non-finite.
    pub fn rank(&self, metrics: &[MetricVector]) -> Result<RankedScores> {
        if metrics.is_empty() {
            return Err(SeineError::InvalidMetric(
                "no metric columns to rank".to_string(),
            ));
        }

        let n_rows = metrics[0].values.len();
        if n_rows == 0 {
            return Err(SeineError::MissingData(
                "ranking population is empty".to_string(),
            ));
        }

        // Validate all columns before touching any of them
        for metric in metrics {
            if metric.values.len() != n_rows {
                return Err(SeineError::InvalidMetric(format!(
                    "metric '{}' has {} rows, expected {}",
                    metric.name,
                    metric.values.len(),
                    n_rows
                )));
            }

            if let Some(bad) = metric.values.iter().find(|v| !v.is_finite()) {
                return Err(SeineError::InvalidMetric(format!(
                    "metric '{}' contains non-finite value {bad}",
                    metric.name
                )));
            }
        }

        let mut percentiles = Vec::with_capacity(metrics.len());
        for metric in metrics {
            let population = metric.values.to_vec();
            let ranks: Array1<f64> = metric
                .values
                .iter()
                .map(|&v| stats::percentile_of_score(&population, v))
                .collect();

            percentiles.push(MetricVector {
                name: metric.name.clone(),
                values: ranks,
            });
        }

        let mut composite = Array1::zeros(n_rows);
        for column in &percentiles {
            composite += &column.values;
        }
        composite /= percentiles.len() as f64;

        Ok(RankedScores {
            percentiles,
            composite,
        })
    }
}
