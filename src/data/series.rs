//! Benchmark Series Module
//! Holds the measured training times shown in the chart.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SeriesError {
    #[error("Column lengths differ: {labels} labels, {means} means, {stddevs} std devs")]
    LengthMismatch {
        labels: usize,
        means: usize,
        stddevs: usize,
    },
    #[error("Mean for '{0}' is not a finite number")]
    InvalidMean(String),
    #[error("Standard deviation for '{0}' must be finite and non-negative")]
    InvalidStdDev(String),
}

/// One measured category.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    pub label: String,
    /// Mean time in seconds
    pub mean: f64,
    /// Standard deviation in seconds
    pub stddev: f64,
}

/// Ordered, index-aligned benchmark measurements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSeries {
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkSeries {
    /// Build a series from three parallel columns.
    pub fn from_columns(
        labels: &[&str],
        means: &[f64],
        stddevs: &[f64],
    ) -> Result<Self, SeriesError> {
        if labels.len() != means.len() || labels.len() != stddevs.len() {
            return Err(SeriesError::LengthMismatch {
                labels: labels.len(),
                means: means.len(),
                stddevs: stddevs.len(),
            });
        }

        let records = labels
            .iter()
            .zip(means)
            .zip(stddevs)
            .map(|((&label, &mean), &stddev)| {
                if !mean.is_finite() {
                    return Err(SeriesError::InvalidMean(label.to_string()));
                }
                if !stddev.is_finite() || stddev < 0.0 {
                    return Err(SeriesError::InvalidStdDev(label.to_string()));
                }
                Ok(BenchmarkRecord {
                    label: label.to_string(),
                    mean,
                    stddev,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Training time measurements for the three processing types.
pub fn training_benchmarks() -> Result<BenchmarkSeries, SeriesError> {
    const LABELS: [&str; 3] = ["SIMD", "Sequential", "Parallel"];
    const MEANS: [f64; 3] = [8055.410, 9616.945, 13204.468];
    const STD_DEVS: [f64; 3] = [6.529, 2.155, 47.202];

    BenchmarkSeries::from_columns(&LABELS, &MEANS, &STD_DEVS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn training_benchmarks_are_index_aligned() {
        let series = training_benchmarks().unwrap();
        assert_eq!(series.len(), 3);
        let labels: Vec<&str> = series.records().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["SIMD", "Sequential", "Parallel"]);

        let means: Vec<f64> = series.records().iter().map(|r| r.mean).collect();
        let stddevs: Vec<f64> = series.records().iter().map(|r| r.stddev).collect();
        assert_eq!(means, vec![8055.410, 9616.945, 13204.468]);
        assert_eq!(stddevs, vec![6.529, 2.155, 47.202]);
    }

    #[test]
    fn training_benchmarks_are_rebuilt_identically() {
        assert_eq!(training_benchmarks().unwrap(), training_benchmarks().unwrap());
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = BenchmarkSeries::from_columns(&["a", "b"], &[1.0], &[0.1, 0.2]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                labels: 2,
                means: 1,
                stddevs: 2
            }
        );
    }

    #[test]
    fn negative_stddev_is_rejected() {
        let err = BenchmarkSeries::from_columns(&["a"], &[1.0], &[-0.5]).unwrap_err();
        assert_eq!(err, SeriesError::InvalidStdDev("a".to_string()));
    }

    #[test]
    fn non_finite_mean_is_rejected() {
        let err = BenchmarkSeries::from_columns(&["a"], &[f64::NAN], &[0.0]).unwrap_err();
        assert_eq!(err, SeriesError::InvalidMean("a".to_string()));
    }

    #[test]
    fn empty_columns_make_empty_series() {
        let series = BenchmarkSeries::from_columns(&[], &[], &[]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
    }
}
