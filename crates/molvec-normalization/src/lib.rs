//! Reversible normalization and padding of numeric vectors.
//!
//! # Overview
//!
//! This crate provides:
//! - **Normalization methods**: `unit_scale`, `z_score` and `positive_z_score`,
//!   each returning the normalized vectors plus [`NormParams`]
//! - **Inverses**: reconstruct the original values from normalized vectors and
//!   their parameters
//! - **Registries**: name-based lookup used by datasets and configuration
//! - **Padding**: pad variable-length sequences to a uniform length
//!
//! # Example
//!
//! ```
//! use molvec_normalization::{Axis, NormalizationMethod, inverse_normalize};
//!
//! let vectors = vec![vec![0.0, 10.0], vec![5.0, 20.0]];
//! let (scaled, params) = NormalizationMethod::UnitScale
//!     .normalize(&vectors, Some(Axis::Feature), 128)
//!     .unwrap();
//! assert_eq!(scaled, vec![vec![0.0, 0.0], vec![1.0, 1.0]]);
//!
//! let restored = inverse_normalize(&scaled, &params).unwrap();
//! assert_eq!(restored, vectors);
//! ```
//!
//! # Design Principles
//!
//! - **Pure functions**: inputs are never mutated; results are returned
//! - **Batch-independent**: `batch_size` bounds working memory while
//!   statistics are gathered, it never changes the result
//! - **No division by zero**: degenerate groups map to a constant

mod error;
mod methods;
mod padding;
mod registry;
mod stats;

pub use error::{NormalizationError, Result};
pub use methods::{
    NormParams, inverse_positive_zscore_normalization, inverse_unit_normalization,
    inverse_zscore_normalization, positive_zscore_normalization, unit_normalization,
    zscore_normalization,
};
pub use padding::{max_len, pad_vectors};
pub use registry::{
    INVERSE_NORMALIZATION_METHODS, InverseFn, NORMALIZATION_METHODS, NormalizationMethod,
    NormalizeFn, inverse_normalization_method, inverse_normalize, normalization_method,
};
pub use stats::Axis;

/// Default number of vectors processed per statistics batch.
pub const DEFAULT_BATCH_SIZE: usize = 128;
