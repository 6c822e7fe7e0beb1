//! Streaming statistics over (possibly ragged) vector sets.
//!
//! Statistics are accumulated `batch_size` vectors at a time and merged, so a
//! batch's partial state is all that is held besides the running totals. The
//! merge is exact up to floating-point rounding, so results do not depend on
//! the batch size.

use molvec_model::Vector;
use serde::{Deserialize, Serialize};

use crate::error::{NormalizationError, Result};

/// Direction along which statistics are grouped.
///
/// `None` (no axis) means one global group over every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// One group per vector position (column-wise). Ragged vectors only
    /// contribute to the positions they have.
    Feature,
    /// One group per vector (row-wise).
    Sample,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Sample => "sample",
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "feature" | "features" | "0" => Ok(Self::Feature),
            "sample" | "samples" | "1" => Ok(Self::Sample),
            other => Err(format!("unknown axis '{other}' (expected feature or sample)")),
        }
    }
}

/// Group a value at (`row`, `column`) belongs to.
pub(crate) fn group_index(axis: Option<Axis>, row: usize, column: usize) -> usize {
    match axis {
        None => 0,
        Some(Axis::Feature) => column,
        Some(Axis::Sample) => row,
    }
}

/// Running count, mean, sum of squared deviations and extrema.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Accumulator {
    pub(crate) fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub(crate) fn merge(&mut self, other: &Self) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }
        let count = self.count + other.count;
        let delta = other.mean - self.mean;
        let weight = other.count as f64 / count as f64;
        self.mean += delta * weight;
        self.m2 += other.m2 + delta * delta * self.count as f64 * weight;
        self.count = count;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation.
    pub(crate) fn std(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.m2 / self.count as f64).max(0.0).sqrt()
    }

    pub(crate) fn min(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.min }
    }

    pub(crate) fn max(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.max }
    }
}

/// Accumulate grouped statistics over `vectors`, `batch_size` vectors at a time.
pub(crate) fn accumulate(
    vectors: &[Vector],
    axis: Option<Axis>,
    batch_size: usize,
) -> Result<Vec<Accumulator>> {
    if batch_size == 0 {
        return Err(NormalizationError::InvalidBatchSize);
    }

    let mut totals: Vec<Accumulator> = Vec::new();
    for (batch_idx, batch) in vectors.chunks(batch_size).enumerate() {
        let offset = batch_idx * batch_size;
        let mut partial: Vec<Accumulator> = Vec::new();
        for (local_row, vector) in batch.iter().enumerate() {
            for (column, &value) in vector.iter().enumerate() {
                if !value.is_finite() {
                    return Err(NormalizationError::NonFinite {
                        row: offset + local_row,
                        column,
                        value,
                    });
                }
                let group = group_index(axis, local_row, column);
                if partial.len() <= group {
                    partial.resize(group + 1, Accumulator::default());
                }
                partial[group].push(value);
            }
        }

        if axis == Some(Axis::Sample) {
            // Rows are their own groups; keep one slot per row, empty or not.
            partial.resize(batch.len(), Accumulator::default());
            totals.extend(partial);
        } else {
            if totals.len() < partial.len() {
                totals.resize(partial.len(), Accumulator::default());
            }
            for (total, part) in totals.iter_mut().zip(&partial) {
                total.merge(part);
            }
        }
    }

    if totals.iter().all(|acc| acc.count() == 0) {
        return Err(NormalizationError::Empty);
    }

    tracing::debug!(
        vectors = vectors.len(),
        groups = totals.len(),
        batch_size,
        axis = axis.map_or("global", Axis::as_str),
        "Accumulated normalization statistics"
    );
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_global_statistics() {
        let vectors = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let stats = accumulate(&vectors, None, 128).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].count(), 4);
        assert!(close(stats[0].mean(), 2.5));
        assert!(close(stats[0].std(), 1.25_f64.sqrt()));
        assert_eq!(stats[0].min(), 1.0);
        assert_eq!(stats[0].max(), 4.0);
    }

    #[test]
    fn test_batch_size_does_not_change_results() {
        let vectors: Vec<Vector> = (0..17)
            .map(|i| vec![i as f64, (i * i) as f64 * 0.5, -(i as f64)])
            .collect();
        let whole = accumulate(&vectors, Some(Axis::Feature), 128).unwrap();
        let chunked = accumulate(&vectors, Some(Axis::Feature), 3).unwrap();
        assert_eq!(whole.len(), chunked.len());
        for (a, b) in whole.iter().zip(&chunked) {
            assert_eq!(a.count(), b.count());
            assert!(close(a.mean(), b.mean()));
            assert!(close(a.std(), b.std()));
            assert_eq!(a.min(), b.min());
            assert_eq!(a.max(), b.max());
        }
    }

    #[test]
    fn test_feature_axis_with_ragged_vectors() {
        let vectors = vec![vec![1.0, 10.0, 100.0], vec![3.0], vec![5.0, 20.0]];
        let stats = accumulate(&vectors, Some(Axis::Feature), 2).unwrap();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].count(), 3);
        assert!(close(stats[0].mean(), 3.0));
        assert_eq!(stats[1].count(), 2);
        assert!(close(stats[1].mean(), 15.0));
        assert_eq!(stats[2].count(), 1);
    }

    #[test]
    fn test_sample_axis_keeps_one_group_per_row() {
        let vectors = vec![vec![1.0, 3.0], vec![], vec![10.0]];
        let stats = accumulate(&vectors, Some(Axis::Sample), 2).unwrap();
        assert_eq!(stats.len(), 3);
        assert!(close(stats[0].mean(), 2.0));
        assert_eq!(stats[1].count(), 0);
        assert_eq!(stats[1].min(), 0.0);
        assert!(close(stats[2].mean(), 10.0));
    }

    #[test]
    fn test_rejects_zero_batch_size() {
        let err = accumulate(&[vec![1.0]], None, 0).unwrap_err();
        assert!(matches!(err, NormalizationError::InvalidBatchSize));
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        assert!(matches!(
            accumulate(&[], None, 4),
            Err(NormalizationError::Empty)
        ));
        assert!(matches!(
            accumulate(&[vec![1.0], vec![f64::NAN]], None, 4),
            Err(NormalizationError::NonFinite { row: 1, column: 0, .. })
        ));
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("feature".parse::<Axis>(), Ok(Axis::Feature));
        assert_eq!("Samples".parse::<Axis>(), Ok(Axis::Sample));
        assert!("diagonal".parse::<Axis>().is_err());
    }
}
