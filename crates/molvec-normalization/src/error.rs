//! Error types for normalization.

use thiserror::Error;

/// Errors raised while normalizing vectors or inverting a normalization.
#[derive(Debug, Error)]
pub enum NormalizationError {
    /// Method name not present in the registry.
    #[error("unknown normalization method '{name}'; recognized methods are: {recognized}")]
    UnknownMethod { name: String, recognized: String },

    /// Method has no registered inverse.
    #[error("normalization method '{method}' has no inverse; invertible methods are: {recognized}")]
    NoInverse { method: String, recognized: String },

    /// `batch_size` must be at least one.
    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    /// No values to compute statistics from.
    #[error("cannot normalize an empty set of vectors")]
    Empty,

    /// Input contains NaN or infinity.
    #[error("non-finite value {value} at vector {row}, position {column}")]
    NonFinite { row: usize, column: usize, value: f64 },

    /// Parameters were produced by a different method than the inverse requested.
    #[error("parameters were produced by '{found}' but '{expected}' was requested")]
    MethodMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Parameters do not cover the vectors being inverted.
    #[error("parameters cover {groups} groups but vector {row}, position {column} needs group {group}")]
    ParameterMismatch {
        row: usize,
        column: usize,
        group: usize,
        groups: usize,
    },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_method_lists_recognized() {
        let err = NormalizationError::UnknownMethod {
            name: "bogus".to_string(),
            recognized: "unit_scale, z_score".to_string(),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"unknown normalization method 'bogus'; recognized methods are: unit_scale, z_score"
        );
    }

    #[test]
    fn test_non_finite_display() {
        let err = NormalizationError::NonFinite {
            row: 2,
            column: 0,
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "non-finite value NaN at vector 2, position 0");
    }
}
