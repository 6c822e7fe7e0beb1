//! Error types for dataset operations.

use molvec_model::SpecieError;
use molvec_normalization::NormalizationError;
use thiserror::Error;

/// Errors that can occur while building, transforming or generating datasets.
#[derive(Debug, Error)]
pub enum DataError {
    // === Subclass Responsibility ===
    /// A data model capability was not overridden.
    #[error("{method} method is not implemented in this data model")]
    NotImplemented { method: &'static str },

    // === Validation Errors ===
    /// Invalid argument or collaborator.
    #[error("{message}")]
    Validation { message: String },

    /// Two aligned sequences have different lengths.
    #[error("{what} has {found} entries but {expected} were expected")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// An input index does not point into the dataset.
    #[error("input index {index} is out of range for {len} inputs")]
    IndexOutOfRange { index: usize, len: usize },

    // === State Errors ===
    /// The attribute has not been populated yet.
    #[error("'{attribute}' is not set")]
    MissingAttribute { attribute: &'static str },

    /// A raw record has no numeric view and was not vectorized by the model.
    #[error("input {index} has no numeric representation")]
    NotVectorizable { index: usize },

    // === Collaborator Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Worker pool could not be created.
    #[error("failed to start worker pool: {message}")]
    WorkerPool { message: String },

    /// The external computation protocol failed.
    #[error("computation protocol '{protocol}' failed: {message}")]
    Protocol { protocol: String, message: String },

    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    #[error(transparent)]
    Specie(#[from] SpecieError),
}

impl DataError {
    pub fn not_implemented(method: &'static str) -> Self {
        Self::NotImplemented { method }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Failure reported by a protocol runner.
    pub fn protocol(protocol: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Protocol {
            protocol: protocol.into(),
            message: message.into(),
        }
    }

    /// Returns true for unimplemented data model or specie capabilities.
    pub fn is_not_implemented(&self) -> bool {
        match self {
            Self::NotImplemented { .. } => true,
            Self::Specie(err) => err.is_not_implemented(),
            _ => false,
        }
    }

    /// Returns true for invalid arguments, unknown methods and length mismatches.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::LengthMismatch { .. }
                | Self::IndexOutOfRange { .. }
                | Self::Normalization(
                    NormalizationError::UnknownMethod { .. }
                        | NormalizationError::InvalidBatchSize
                )
        )
    }
}

impl From<polars::prelude::PolarsError> for DataError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;
