//! Data model capabilities.
//!
//! A [`DataModel`] supplies the behavior that differs between kinds of
//! datasets: how raw inputs become vectors and how they convert to and from
//! species. Every capability has a default, so a model only overrides what
//! it supports:
//!
//! | Capability         | Default                                         |
//! |--------------------|-------------------------------------------------|
//! | `vectorize_inputs` | identity over each record's numeric view        |
//! | `vectorize_labels` | identity                                        |
//! | `to_specie`        | fails with [`DataError::NotImplemented`]        |
//! | `from_specie`      | fails with [`DataError::NotImplemented`]        |

use std::fmt;
use std::marker::PhantomData;

use molvec_model::{BaseSpecie, Record, Specie, Vector};

use crate::error::{DataError, Result};

/// Behavior of a kind of dataset.
pub trait DataModel: Send + Sync {
    /// Raw input record type.
    type Input: Record;
    /// Specie type inputs convert into.
    type Specie: Specie;

    /// Vectorize raw inputs without touching the dataset.
    fn vectorize_inputs(&self, inputs: &[Self::Input]) -> Result<Vec<Vector>> {
        inputs
            .iter()
            .enumerate()
            .map(|(index, input)| input.as_vector().ok_or(DataError::NotVectorizable { index }))
            .collect()
    }

    /// Vectorize labels without touching the dataset.
    fn vectorize_labels(&self, labels: &[Vector]) -> Result<Vec<Vector>> {
        Ok(labels.to_vec())
    }

    /// Convert a single input entry into a specie.
    fn to_specie(&self, _input: &Self::Input) -> Result<Self::Specie> {
        Err(DataError::not_implemented("to_specie"))
    }

    /// Convert a specie back into an input entry.
    fn from_specie(_specie: &Self::Specie) -> Result<Self::Input>
    where
        Self: Sized,
    {
        Err(DataError::not_implemented("from_specie"))
    }
}

/// Data model with no overrides.
pub struct GenericModel<I> {
    _input: PhantomData<fn() -> I>,
}

impl<I> GenericModel<I> {
    pub fn new() -> Self {
        Self {
            _input: PhantomData,
        }
    }
}

impl<I> Default for GenericModel<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for GenericModel<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GenericModel")
    }
}

impl<I: Record> DataModel for GenericModel<I> {
    type Input = I;
    type Specie = BaseSpecie;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vectorization_is_identity() {
        let model = GenericModel::<Vector>::new();
        let inputs = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(model.vectorize_inputs(&inputs).unwrap(), inputs);
        let labels = vec![vec![0.5]];
        assert_eq!(model.vectorize_labels(&labels).unwrap(), labels);
    }

    #[test]
    fn test_text_inputs_need_a_vectorizer() {
        let model = GenericModel::<String>::new();
        let err = model
            .vectorize_inputs(&["CCO".to_string()])
            .unwrap_err();
        assert!(matches!(err, DataError::NotVectorizable { index: 0 }));
    }

    #[test]
    fn test_conversions_not_implemented() {
        let model = GenericModel::<Vector>::new();
        let err = model.to_specie(&vec![1.0]).unwrap_err();
        assert!(err.is_not_implemented());
        let err = GenericModel::<Vector>::from_specie(&BaseSpecie).unwrap_err();
        assert!(err.is_not_implemented());
    }
}
