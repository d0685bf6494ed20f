//! Cross-sectional statistics for percentile ranking.
//!
//! This module provides the percentile-of-score and mean operations shared
//! by the momentum and value ranking pipelines.

/// Percentile rank of `score` within `population`, scaled to [0, 1].
///
/// Uses the inclusive definition: the fraction of the population whose value
/// is less than or equal to `score`. Tied values therefore share the same
/// percentile, and the maximum of the population always ranks at 1.0.
///
/// # Edge Cases
///
/// - Empty population: returns NaN
/// - Single-element population containing `score`: returns 1.0
///
/// # Examples
///
/// ```
/// use seine_traits::stats::percentile_of_score;
///
/// let population = [10.0, 20.0, 30.0];
/// assert!((percentile_of_score(&population, 10.0) - 1.0 / 3.0).abs() < 1e-12);
/// assert!((percentile_of_score(&population, 20.0) - 2.0 / 3.0).abs() < 1e-12);
/// assert!((percentile_of_score(&population, 30.0) - 1.0).abs() < 1e-12);
/// ```
pub fn percentile_of_score(population: &[f64], score: f64) -> f64 {
    if population.is_empty() {
        return f64::NAN;
    }

    let at_or_below = population.iter().filter(|&&v| v <= score).count();
    at_or_below as f64 / population.len() as f64
}

/// Arithmetic mean of `values`.
///
/// # Edge Cases
///
/// - Empty input: returns NaN
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_distinct_values() {
        let population = [10.0, 20.0, 30.0];

        assert!((percentile_of_score(&population, 10.0) - 1.0 / 3.0).abs() < 1e-12);
        assert!((percentile_of_score(&population, 20.0) - 2.0 / 3.0).abs() < 1e-12);
        assert!((percentile_of_score(&population, 30.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_ties_share_rank() {
        let population = [5.0, 5.0, 10.0, 20.0];

        // Both tied values count each other, so each ranks at 2/4.
        assert!((percentile_of_score(&population, 5.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_bounds() {
        let population = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

        for &v in &population {
            let p = percentile_of_score(&population, v);
            assert!(p > 0.0);
            assert!(p <= 1.0);
        }
    }

    #[test]
    fn test_percentile_deterministic() {
        let population = [3.0, 1.0, 4.0, 1.0, 5.0];
        let first = percentile_of_score(&population, 4.0);
        let second = percentile_of_score(&population, 4.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_percentile_empty_population() {
        assert!(percentile_of_score(&[], 1.0).is_nan());
    }

    #[test]
    fn test_percentile_single_value() {
        assert!((percentile_of_score(&[42.0], 42.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_basic() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((mean(&values) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_mean_single_value() {
        assert!((mean(&[0.25]) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_nan());
    }
}
