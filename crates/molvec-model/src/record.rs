//! Raw input records.

use std::fmt;

/// Numeric vector produced by vectorization.
pub type Vector = Vec<f64>;

/// A raw input record held by a dataset.
///
/// Records are arbitrary domain representations (SMILES strings, coordinate
/// lists, descriptor rows). The numeric view is what the default identity
/// vectorization and the dataframe export use; records without one must be
/// vectorized by their data model.
pub trait Record: Clone + fmt::Debug + Send + Sync {
    /// Numeric view of the record, if it has one.
    fn as_vector(&self) -> Option<Vector> {
        None
    }
}

impl Record for Vector {
    fn as_vector(&self) -> Option<Vector> {
        Some(self.clone())
    }
}

impl Record for f64 {
    fn as_vector(&self) -> Option<Vector> {
        Some(vec![*self])
    }
}

impl Record for String {}

impl Record for &'static str {}
