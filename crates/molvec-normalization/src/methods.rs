//! Normalization methods and their inverses.
//!
//! Every method maps a set of vectors to normalized vectors plus the
//! [`NormParams`] needed to undo the mapping. Parameters hold one entry per
//! statistic group (one for global, one per position for [`Axis::Feature`],
//! one per vector for [`Axis::Sample`]).
//!
//! Degenerate groups are mapped to a constant instead of dividing by zero:
//! - `unit_scale` with `max == min` yields `0.0`
//! - `z_score` with `std == 0` yields `0.0`
//!
//! The inverses reproduce the constant input exactly in both cases.

use molvec_model::Vector;
use serde::{Deserialize, Serialize};

use crate::error::{NormalizationError, Result};
use crate::stats::{Accumulator, Axis, accumulate, group_index};

/// Recoverable parameters of a normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum NormParams {
    UnitScale {
        axis: Option<Axis>,
        min: Vec<f64>,
        max: Vec<f64>,
    },
    ZScore {
        axis: Option<Axis>,
        mean: Vec<f64>,
        std: Vec<f64>,
    },
    /// Z-score shifted so that each group's minimum lands on zero.
    PositiveZScore {
        axis: Option<Axis>,
        mean: Vec<f64>,
        std: Vec<f64>,
        shift: Vec<f64>,
    },
}

impl NormParams {
    /// Registry name of the method that produced these parameters.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::UnitScale { .. } => "unit_scale",
            Self::ZScore { .. } => "z_score",
            Self::PositiveZScore { .. } => "positive_z_score",
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            Self::UnitScale { axis, .. }
            | Self::ZScore { axis, .. }
            | Self::PositiveZScore { axis, .. } => *axis,
        }
    }

    /// Number of statistic groups.
    pub fn groups(&self) -> usize {
        match self {
            Self::UnitScale { min, .. } => min.len(),
            Self::ZScore { mean, .. } | Self::PositiveZScore { mean, .. } => mean.len(),
        }
    }
}

/// Apply `f(value, group)` to every value, keeping the vectors' shape.
fn map_grouped(
    vectors: &[Vector],
    axis: Option<Axis>,
    groups: usize,
    f: impl Fn(f64, usize) -> f64,
) -> Result<Vec<Vector>> {
    vectors
        .iter()
        .enumerate()
        .map(|(row, vector)| {
            vector
                .iter()
                .enumerate()
                .map(|(column, &value)| {
                    let group = group_index(axis, row, column);
                    if group >= groups {
                        return Err(NormalizationError::ParameterMismatch {
                            row,
                            column,
                            group,
                            groups,
                        });
                    }
                    Ok(f(value, group))
                })
                .collect()
        })
        .collect()
}

fn scaled(value: f64, center: f64, scale: f64) -> f64 {
    if scale > 0.0 {
        (value - center) / scale
    } else {
        0.0
    }
}

/// Min-max scaling to `[0, 1]`: `(x - min) / (max - min)`.
pub fn unit_normalization(
    vectors: &[Vector],
    axis: Option<Axis>,
    batch_size: usize,
) -> Result<(Vec<Vector>, NormParams)> {
    let stats = accumulate(vectors, axis, batch_size)?;
    let min: Vec<f64> = stats.iter().map(Accumulator::min).collect();
    let max: Vec<f64> = stats.iter().map(Accumulator::max).collect();
    let normalized = map_grouped(vectors, axis, stats.len(), |x, g| {
        scaled(x, min[g], max[g] - min[g])
    })?;
    Ok((normalized, NormParams::UnitScale { axis, min, max }))
}

/// Standard score: `(x - mean) / std` with the population standard deviation.
pub fn zscore_normalization(
    vectors: &[Vector],
    axis: Option<Axis>,
    batch_size: usize,
) -> Result<(Vec<Vector>, NormParams)> {
    let stats = accumulate(vectors, axis, batch_size)?;
    let mean: Vec<f64> = stats.iter().map(Accumulator::mean).collect();
    let std: Vec<f64> = stats.iter().map(Accumulator::std).collect();
    let normalized = map_grouped(vectors, axis, stats.len(), |x, g| scaled(x, mean[g], std[g]))?;
    Ok((normalized, NormParams::ZScore { axis, mean, std }))
}

/// Standard score shifted by the group minimum so every output is `>= 0`.
pub fn positive_zscore_normalization(
    vectors: &[Vector],
    axis: Option<Axis>,
    batch_size: usize,
) -> Result<(Vec<Vector>, NormParams)> {
    let stats = accumulate(vectors, axis, batch_size)?;
    let mean: Vec<f64> = stats.iter().map(Accumulator::mean).collect();
    let std: Vec<f64> = stats.iter().map(Accumulator::std).collect();
    let shift: Vec<f64> = stats
        .iter()
        .map(|s| scaled(s.min(), s.mean(), s.std()))
        .collect();
    let normalized = map_grouped(vectors, axis, stats.len(), |x, g| {
        (scaled(x, mean[g], std[g]) - shift[g]).max(0.0)
    })?;
    Ok((
        normalized,
        NormParams::PositiveZScore {
            axis,
            mean,
            std,
            shift,
        },
    ))
}

/// Inverse of [`unit_normalization`]: `y * (max - min) + min`.
pub fn inverse_unit_normalization(vectors: &[Vector], params: &NormParams) -> Result<Vec<Vector>> {
    match params {
        NormParams::UnitScale { axis, min, max } => {
            map_grouped(vectors, *axis, min.len().min(max.len()), |y, g| {
                y * (max[g] - min[g]) + min[g]
            })
        }
        other => Err(NormalizationError::MethodMismatch {
            expected: "unit_scale",
            found: other.method_name(),
        }),
    }
}

/// Inverse of [`zscore_normalization`]: `y * std + mean`.
pub fn inverse_zscore_normalization(
    vectors: &[Vector],
    params: &NormParams,
) -> Result<Vec<Vector>> {
    match params {
        NormParams::ZScore { axis, mean, std } => {
            map_grouped(vectors, *axis, mean.len().min(std.len()), |y, g| {
                y * std[g] + mean[g]
            })
        }
        other => Err(NormalizationError::MethodMismatch {
            expected: "z_score",
            found: other.method_name(),
        }),
    }
}

/// Inverse of [`positive_zscore_normalization`]: `(y + shift) * std + mean`.
pub fn inverse_positive_zscore_normalization(
    vectors: &[Vector],
    params: &NormParams,
) -> Result<Vec<Vector>> {
    match params {
        NormParams::PositiveZScore {
            axis,
            mean,
            std,
            shift,
        } => {
            let groups = mean.len().min(std.len()).min(shift.len());
            map_grouped(vectors, *axis, groups, |y, g| (y + shift[g]) * std[g] + mean[g])
        }
        other => Err(NormalizationError::MethodMismatch {
            expected: "positive_z_score",
            found: other.method_name(),
        }),
    }
}
