//! Error types for specie (de)serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`Specie`](crate::Specie) capabilities.
#[derive(Debug, Error)]
pub enum SpecieError {
    /// The capability has no implementation for this specie type.
    #[error("the method '{method}' is not implemented and can't be used")]
    NotImplemented { method: &'static str },

    /// The string representation could not be parsed.
    #[error("failed to parse specie: {message}")]
    Parse { message: String },

    /// Failed to read a specie file.
    #[error("failed to read specie file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpecieError {
    /// Shorthand for the not-implemented error of `method`.
    pub fn not_implemented(method: &'static str) -> Self {
        Self::NotImplemented { method }
    }

    /// Returns true for the not-implemented kind.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

/// Result type for specie operations.
pub type Result<T> = std::result::Result<T, SpecieError>;
