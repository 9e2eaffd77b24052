/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and dispersion
/// for a dataset of `f64` values. Variance and standard deviation are
/// *population* statistics (the sum of squared deviations is divided by `n`,
/// not `n - 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The sum of all values.
    pub sum: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from a slice of values.
    ///
    /// Values are accumulated in slice order, so two slices holding the same
    /// values in the same order always produce bit-identical results.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the slice contains at least one value
    /// * `None` - if the slice is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use rlmon_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_slice(&[42.0]).unwrap();
    /// assert_eq!(stats.mean, 42.0);
    /// assert_eq!(stats.std_dev, 0.0);
    ///
    /// assert!(DescriptiveStats::from_slice(&[]).is_none());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let (min, max) = values
            .iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));
        let count = values.len();
        let n = count as f64;
        let sum = values.iter().sum::<f64>();
        let mean = sum / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            min,
            max,
            sum,
            mean,
            variance,
            std_dev,
        })
    }
}

/// Arithmetic mean of the values, or `None` when there are none.
///
/// ```
/// # use rlmon_stats::descriptive::mean;
/// assert_eq!(mean([1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(mean(std::iter::empty()), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::from_slice(&[]).is_none());
        assert!(mean(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let stats = DescriptiveStats::from_slice(&[0.3]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 0.3);
        assert_eq!(stats.max, 0.3);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_population_not_sample_variance() {
        // Sample variance would be 0.005 here.
        let stats = DescriptiveStats::from_slice(&[0.1, 0.2]).unwrap();
        assert_close(stats.mean, 0.15);
        assert_close(stats.variance, 0.0025);
        assert_close(stats.std_dev, 0.05);
    }

    #[test]
    fn test_min_max_ignore_order() {
        let stats = DescriptiveStats::from_slice(&[3.0, -1.0, 7.5, 2.0]).unwrap();
        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.max, 7.5);
        assert_eq!(stats.sum, 11.5);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn test_mean_matches_descriptive_mean() {
        let values = [0.048_709, 0.049_719, 0.050_014, 0.048_784];
        let stats = DescriptiveStats::from_slice(&values).unwrap();
        assert_eq!(mean(values), Some(stats.mean));
    }
}
