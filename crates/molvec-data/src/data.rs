//! The dataset container.
//!
//! [`Data`] holds raw inputs and labels together with their vectorized forms
//! and the normalization parameters needed to undo normalization. Behavior
//! that depends on the kind of dataset is delegated to its [`DataModel`].
//!
//! # Sharing
//!
//! Vectorized sets, representations and normalization parameters are held
//! behind `Arc`. Cloning a dataset, or deriving one through protocol-driven
//! generation, shares them until one side reassigns the attribute. Raw
//! inputs and labels are owned by each dataset.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use molvec_model::{Record, SpecieRegistry, SpecieType, Vector};
use molvec_normalization::{Axis, NormParams, inverse_normalize, normalization_method, pad_vectors};
use thiserror::Error;

use crate::error::{DataError, Result};
use crate::model::{DataModel, GenericModel};
use crate::options::NormalizeOptions;

/// Non-fatal warning raised when representations do not line up with inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "number of reps ({found}) is different than number of inputs ({expected}); this might cause problems"
)]
pub struct ConsistencyWarning {
    pub expected: usize,
    pub found: usize,
}

/// Which vectorized sets [`Data::normalize_vectors`] touches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalizeTarget {
    #[default]
    All,
    Inputs,
    Labels,
}

impl NormalizeTarget {
    fn inputs(self) -> bool {
        matches!(self, Self::All | Self::Inputs)
    }

    fn labels(self) -> bool {
        matches!(self, Self::All | Self::Labels)
    }
}

impl FromStr for NormalizeTarget {
    type Err = DataError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "all" => Ok(Self::All),
            "inputs" => Ok(Self::Inputs),
            "labels" => Ok(Self::Labels),
            other => Err(DataError::validation(format!(
                "unknown normalize target '{other}'; expected one of: all, inputs, labels"
            ))),
        }
    }
}

/// Which attributes [`Data::pad_data`] pads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PadTarget {
    /// Raw inputs and labels.
    #[default]
    All,
    Inputs,
    Labels,
    /// Vectorized inputs and labels.
    AllVecs,
    VectorizedInputs,
    VectorizedLabels,
}

impl FromStr for PadTarget {
    type Err = DataError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "all" => Ok(Self::All),
            "inputs" => Ok(Self::Inputs),
            "labels" => Ok(Self::Labels),
            "all_vecs" => Ok(Self::AllVecs),
            "vectorized_inputs" => Ok(Self::VectorizedInputs),
            "vectorized_labels" => Ok(Self::VectorizedLabels),
            other => Err(DataError::validation(format!(
                "unknown pad target '{other}'; expected one of: all, inputs, labels, \
                 all_vecs, vectorized_inputs, vectorized_labels"
            ))),
        }
    }
}

/// Padded copies of the attributes selected by a [`PadTarget`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaddedData {
    pub inputs: Option<Vec<Vector>>,
    pub labels: Option<Vec<Vector>>,
    pub vectorized_inputs: Option<Vec<Vector>>,
    pub vectorized_labels: Option<Vec<Vector>>,
}

/// General container for a modeling dataset.
pub struct Data<M: DataModel> {
    model: Arc<M>,
    inputs: Vec<M::Input>,
    labels: Option<Vec<Vector>>,
    vectorized_inputs: Option<Arc<[Vector]>>,
    vectorized_labels: Option<Arc<[Vector]>>,
    input_norm_params: Option<Arc<NormParams>>,
    label_norm_params: Option<Arc<NormParams>>,
    parent_specie: Option<SpecieType>,
    reps: Option<Arc<[Vector]>>,
}

impl<I: Record> Data<GenericModel<I>> {
    /// Dataset with the default model behavior.
    pub fn generic(inputs: Vec<I>) -> Self {
        Self::new(GenericModel::new(), inputs)
    }
}

impl<M: DataModel> Data<M> {
    pub fn new(model: M, inputs: Vec<M::Input>) -> Self {
        Self::with_shared_model(Arc::new(model), inputs)
    }

    /// Build a dataset around a model shared with other datasets.
    pub fn with_shared_model(model: Arc<M>, inputs: Vec<M::Input>) -> Self {
        Self {
            model,
            inputs,
            labels: None,
            vectorized_inputs: None,
            vectorized_labels: None,
            input_norm_params: None,
            label_norm_params: None,
            parent_specie: None,
            reps: None,
        }
    }

    /// Attach labels, builder style.
    pub fn with_labels(mut self, labels: Vec<Vector>) -> Result<Self> {
        self.set_labels(labels)?;
        Ok(self)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn inputs(&self) -> &[M::Input] {
        &self.inputs
    }

    pub fn labels(&self) -> Option<&[Vector]> {
        self.labels.as_deref()
    }

    pub fn vectorized_inputs(&self) -> Option<&[Vector]> {
        self.vectorized_inputs.as_deref()
    }

    pub fn vectorized_labels(&self) -> Option<&[Vector]> {
        self.vectorized_labels.as_deref()
    }

    pub fn input_norm_params(&self) -> Option<&NormParams> {
        self.input_norm_params.as_deref()
    }

    pub fn label_norm_params(&self) -> Option<&NormParams> {
        self.label_norm_params.as_deref()
    }

    pub fn parent_specie(&self) -> Option<SpecieType> {
        self.parent_specie
    }

    pub fn reps(&self) -> Option<&[Vector]> {
        self.reps.as_deref()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Replace the raw inputs.
    ///
    /// Vectorized inputs, their normalization parameters and the labels are
    /// dropped since they no longer line up with the new inputs.
    pub fn set_inputs(&mut self, inputs: Vec<M::Input>) {
        self.inputs = inputs;
        self.vectorized_inputs = None;
        self.input_norm_params = None;
        self.clear_labels();
    }

    /// Replace the labels. Vectorized labels are dropped.
    pub fn set_labels(&mut self, labels: Vec<Vector>) -> Result<()> {
        ensure_len("labels", self.inputs.len(), labels.len())?;
        self.labels = Some(labels);
        self.vectorized_labels = None;
        self.label_norm_params = None;
        Ok(())
    }

    pub fn clear_labels(&mut self) {
        self.labels = None;
        self.vectorized_labels = None;
        self.label_norm_params = None;
    }

    pub fn set_vectorized_inputs(&mut self, vectors: Vec<Vector>) -> Result<()> {
        ensure_len("vectorized_inputs", self.inputs.len(), vectors.len())?;
        self.vectorized_inputs = Some(vectors.into());
        self.input_norm_params = None;
        Ok(())
    }

    pub fn set_vectorized_labels(&mut self, vectors: Vec<Vector>) -> Result<()> {
        let labels = self
            .labels
            .as_ref()
            .ok_or(DataError::MissingAttribute { attribute: "labels" })?;
        ensure_len("vectorized_labels", labels.len(), vectors.len())?;
        self.vectorized_labels = Some(vectors.into());
        self.label_norm_params = None;
        Ok(())
    }

    /// Set the specie type all inputs belong to.
    pub fn set_parent_specie(&mut self, specie: SpecieType) {
        self.parent_specie = Some(specie);
    }

    /// Set the parent specie by registered name.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when `name` is not a registered specie.
    pub fn set_parent_specie_named(
        &mut self,
        registry: &SpecieRegistry,
        name: &str,
    ) -> Result<SpecieType> {
        let specie = registry.resolve(name).ok_or_else(|| {
            DataError::validation(format!(
                "parent specie must be a Specie; '{name}' is not one (known species: {})",
                registry.names().join(", ")
            ))
        })?;
        self.parent_specie = Some(specie);
        Ok(specie)
    }

    /// Set the per-input representations.
    ///
    /// The assignment always completes. When the count differs from the
    /// number of inputs a [`ConsistencyWarning`] is logged and returned.
    pub fn set_reps(&mut self, reps: Vec<Vector>) -> Option<ConsistencyWarning> {
        let warning = (reps.len() != self.inputs.len()).then_some(ConsistencyWarning {
            expected: self.inputs.len(),
            found: reps.len(),
        });
        if let Some(warning) = &warning {
            tracing::warn!(
                expected = warning.expected,
                found = warning.found,
                "Number of reps differs from number of inputs"
            );
        }
        self.reps = Some(reps.into());
        warning
    }

    /// Vectorized inputs as computed by the model. Does not modify `self`.
    pub fn vectorize_inputs(&self) -> Result<Vec<Vector>> {
        self.model.vectorize_inputs(&self.inputs)
    }

    /// Vectorized labels as computed by the model, or `None` without labels.
    pub fn vectorize_labels(&self) -> Result<Option<Vec<Vector>>> {
        self.labels
            .as_deref()
            .map(|labels| self.model.vectorize_labels(labels))
            .transpose()
    }

    /// Run both vectorizers and store the results.
    ///
    /// Nothing is stored unless both outputs match their source lengths.
    pub fn vectorize(&mut self) -> Result<()> {
        let inputs = self.vectorize_inputs()?;
        let labels = self.vectorize_labels()?;
        ensure_len("vectorized_inputs", self.inputs.len(), inputs.len())?;
        if let (Some(source), Some(vectors)) = (&self.labels, &labels) {
            ensure_len("vectorized_labels", source.len(), vectors.len())?;
        }

        self.vectorized_inputs = Some(inputs.into());
        self.input_norm_params = None;
        if let Some(labels) = labels {
            self.vectorized_labels = Some(labels.into());
            self.label_norm_params = None;
        }
        tracing::debug!(
            inputs = self.inputs.len(),
            labelled = self.labels.is_some(),
            "Vectorized dataset"
        );
        Ok(())
    }

    /// Convert one raw input to a specie.
    pub fn to_specie(&self, input: &M::Input) -> Result<M::Specie> {
        self.model.to_specie(input)
    }

    /// Convert a specie back into a raw input.
    pub fn from_specie(specie: &M::Specie) -> Result<M::Input> {
        M::from_specie(specie)
    }

    /// Normalize vectorized inputs and/or labels in place.
    ///
    /// `method` is looked up in the normalization registry. Nothing is
    /// modified unless every selected attribute normalizes successfully.
    ///
    /// # Errors
    ///
    /// Fails with a validation error listing the recognized methods when
    /// `method` is unknown, and with [`DataError::MissingAttribute`] when a
    /// selected attribute has not been vectorized.
    pub fn normalize_vectors(
        &mut self,
        normalize: NormalizeTarget,
        method: &str,
        axis: Option<Axis>,
        batch_size: usize,
    ) -> Result<()> {
        let norm_func = normalization_method(method)?;

        let inputs = if normalize.inputs() {
            let vectors = self
                .vectorized_inputs
                .as_deref()
                .ok_or(DataError::MissingAttribute {
                    attribute: "vectorized_inputs",
                })?;
            Some(norm_func(vectors, axis, batch_size)?)
        } else {
            None
        };
        let labels = if normalize.labels() {
            let vectors = self
                .vectorized_labels
                .as_deref()
                .ok_or(DataError::MissingAttribute {
                    attribute: "vectorized_labels",
                })?;
            Some(norm_func(vectors, axis, batch_size)?)
        } else {
            None
        };

        if let Some((vectors, params)) = inputs {
            self.vectorized_inputs = Some(vectors.into());
            self.input_norm_params = Some(Arc::new(params));
        }
        if let Some((vectors, params)) = labels {
            self.vectorized_labels = Some(vectors.into());
            self.label_norm_params = Some(Arc::new(params));
        }
        tracing::debug!(method, target = ?normalize, "Normalized vectors");
        Ok(())
    }

    /// [`normalize_vectors`](Self::normalize_vectors) driven by typed options.
    pub fn normalize_with(
        &mut self,
        normalize: NormalizeTarget,
        options: &NormalizeOptions,
    ) -> Result<()> {
        self.normalize_vectors(
            normalize,
            options.method.as_str(),
            options.axis,
            options.batch_size,
        )
    }

    /// Undo normalization using the stored parameters, then forget them.
    ///
    /// Attributes that were never normalized are left as they are.
    pub fn denormalize_vectors(&mut self, target: NormalizeTarget) -> Result<()> {
        let inputs = match (target.inputs(), &self.vectorized_inputs, &self.input_norm_params) {
            (true, Some(vectors), Some(params)) => Some(inverse_normalize(vectors, params)?),
            _ => None,
        };
        let labels = match (target.labels(), &self.vectorized_labels, &self.label_norm_params) {
            (true, Some(vectors), Some(params)) => Some(inverse_normalize(vectors, params)?),
            _ => None,
        };
        if let Some(vectors) = inputs {
            self.vectorized_inputs = Some(vectors.into());
            self.input_norm_params = None;
        }
        if let Some(vectors) = labels {
            self.vectorized_labels = Some(vectors.into());
            self.label_norm_params = None;
        }
        Ok(())
    }

    /// Padded copies of the selected attributes. `self` is not modified.
    ///
    /// Raw inputs are padded through their numeric view.
    pub fn pad_data(
        &self,
        pad_char: f64,
        end_char: Option<f64>,
        pad: PadTarget,
    ) -> Result<PaddedData> {
        let padd_attr = |vectors: &[Vector]| pad_vectors(vectors, end_char, pad_char);
        let mut padded = PaddedData::default();
        if matches!(pad, PadTarget::All | PadTarget::Inputs) {
            let inputs = self.numeric_inputs()?;
            padded.inputs = Some(padd_attr(inputs.as_slice()));
        }
        if matches!(pad, PadTarget::All | PadTarget::Labels) {
            padded.labels = Some(padd_attr(self.require_labels()?));
        }
        if matches!(pad, PadTarget::AllVecs | PadTarget::VectorizedInputs) {
            let vectors = self
                .vectorized_inputs()
                .ok_or(DataError::MissingAttribute {
                    attribute: "vectorized_inputs",
                })?;
            padded.vectorized_inputs = Some(padd_attr(vectors));
        }
        if matches!(pad, PadTarget::AllVecs | PadTarget::VectorizedLabels) {
            let vectors = self
                .vectorized_labels()
                .ok_or(DataError::MissingAttribute {
                    attribute: "vectorized_labels",
                })?;
            padded.vectorized_labels = Some(padd_attr(vectors));
        }
        Ok(padded)
    }

    /// Raw inputs through their numeric view.
    pub(crate) fn numeric_inputs(&self) -> Result<Vec<Vector>> {
        self.inputs
            .iter()
            .enumerate()
            .map(|(index, input)| input.as_vector().ok_or(DataError::NotVectorizable { index }))
            .collect()
    }

    pub(crate) fn require_labels(&self) -> Result<&[Vector]> {
        self.labels()
            .ok_or(DataError::MissingAttribute { attribute: "labels" })
    }

    /// Field-by-field derivation used by data generation.
    ///
    /// `inputs`, `vectorized_inputs` and `labels` are replaced; the model,
    /// parent specie, representations, vectorized labels and both sets of
    /// normalization parameters are shared with `self` as they are.
    pub(crate) fn derive(
        &self,
        inputs: Vec<M::Input>,
        vectorized_inputs: Option<Vec<Vector>>,
        labels: Vec<Vector>,
    ) -> Self {
        Self {
            model: Arc::clone(&self.model),
            inputs,
            labels: Some(labels),
            vectorized_inputs: vectorized_inputs.map(Into::into),
            vectorized_labels: self.vectorized_labels.clone(),
            input_norm_params: self.input_norm_params.clone(),
            label_norm_params: self.label_norm_params.clone(),
            parent_specie: self.parent_specie,
            reps: self.reps.clone(),
        }
    }

    /// Replace inputs, labels and representations loaded from an external table.
    pub(crate) fn replace_loaded(
        &mut self,
        inputs: Vec<M::Input>,
        labels: Option<Vec<Vector>>,
        reps: Option<Vec<Vector>>,
    ) -> Option<ConsistencyWarning> {
        self.set_inputs(inputs);
        self.labels = labels;
        match reps {
            Some(reps) => self.set_reps(reps),
            None => {
                self.reps = None;
                None
            }
        }
    }
}

impl<M: DataModel> Clone for Data<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            inputs: self.inputs.clone(),
            labels: self.labels.clone(),
            vectorized_inputs: self.vectorized_inputs.clone(),
            vectorized_labels: self.vectorized_labels.clone(),
            input_norm_params: self.input_norm_params.clone(),
            label_norm_params: self.label_norm_params.clone(),
            parent_specie: self.parent_specie,
            reps: self.reps.clone(),
        }
    }
}

impl<M: DataModel> fmt::Debug for Data<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("inputs", &self.inputs.len())
            .field("labels", &self.labels.as_ref().map(Vec::len))
            .field("vectorized_inputs", &self.vectorized_inputs.as_ref().map(|v| v.len()))
            .field("vectorized_labels", &self.vectorized_labels.as_ref().map(|v| v.len()))
            .field("parent_specie", &self.parent_specie)
            .field("reps", &self.reps.as_ref().map(|v| v.len()))
            .finish_non_exhaustive()
    }
}

fn ensure_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(DataError::LengthMismatch {
            what,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use molvec_model::Specie;

    #[derive(Debug)]
    struct Molecule;

    impl Specie for Molecule {
        const NAME: &'static str = "Molecule";
    }

    fn numeric() -> Data<GenericModel<Vector>> {
        let mut data = Data::generic(vec![vec![0.0, 10.0], vec![5.0, 20.0], vec![10.0]])
            .with_labels(vec![vec![1.0], vec![2.0], vec![3.0]])
            .unwrap();
        data.vectorize().unwrap();
        data
    }

    #[test]
    fn test_vectorize_is_identity_without_overrides() {
        let data = numeric();
        assert_eq!(data.vectorized_inputs().unwrap(), data.inputs());
        assert_eq!(data.vectorized_labels(), data.labels());
    }

    #[test]
    fn test_labels_must_align() {
        let err = Data::generic(vec![vec![1.0]])
            .with_labels(vec![vec![1.0], vec![2.0]])
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_reps_mismatch_warns_but_assigns() {
        let mut data = numeric();
        let warning = data.set_reps(vec![vec![0.1]]).unwrap();
        assert_eq!(warning, ConsistencyWarning { expected: 3, found: 1 });
        assert_eq!(data.reps().unwrap().len(), 1);
        assert!(data.set_reps(vec![vec![]; 3]).is_none());
    }

    #[test]
    fn test_parent_specie_by_name() {
        let registry = SpecieRegistry::new().with::<Molecule>();
        let mut data = numeric();
        let err = data.set_parent_specie_named(&registry, "int").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("known species: Molecule"));
        assert!(data.parent_specie().is_none());
        data.set_parent_specie_named(&registry, "molecule").unwrap();
        assert!(data.parent_specie().unwrap().is::<Molecule>());
    }

    #[test]
    fn test_normalize_inputs_only() {
        let mut data = numeric();
        data.normalize_vectors(NormalizeTarget::Inputs, "unit_scale", None, 128)
            .unwrap();
        assert_eq!(
            data.vectorized_inputs().unwrap(),
            &[vec![0.0, 0.5], vec![0.25, 1.0], vec![0.5]]
        );
        assert!(data.input_norm_params().is_some());
        assert_eq!(data.vectorized_labels().unwrap(), data.labels().unwrap());
        assert!(data.label_norm_params().is_none());
    }

    #[test]
    fn test_unknown_method_leaves_data_untouched() {
        let mut data = numeric();
        let err = data
            .normalize_vectors(NormalizeTarget::All, "bogus", None, 128)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("unit_scale, z_score, positive_z_score"));
        assert!(data.input_norm_params().is_none());
    }

    #[test]
    fn test_missing_vectorized_labels_is_atomic() {
        let mut data = Data::generic(vec![vec![1.0, 2.0]]);
        data.vectorize().unwrap();
        let err = data
            .normalize_vectors(NormalizeTarget::All, "z_score", None, 128)
            .unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingAttribute {
                attribute: "vectorized_labels"
            }
        ));
        assert_eq!(data.vectorized_inputs().unwrap(), &[vec![1.0, 2.0]]);
    }

    #[test]
    fn test_denormalize_restores_vectors() {
        let mut data = numeric();
        let original = data.vectorized_inputs().unwrap().to_vec();
        data.normalize_with(
            NormalizeTarget::All,
            &NormalizeOptions {
                method: molvec_normalization::NormalizationMethod::ZScore,
                axis: Some(Axis::Feature),
                batch_size: 2,
            },
        )
        .unwrap();
        data.denormalize_vectors(NormalizeTarget::All).unwrap();
        let restored = data.vectorized_inputs().unwrap();
        for (a, b) in restored.iter().flatten().zip(original.iter().flatten()) {
            assert!((a - b).abs() < 1e-9);
        }
        assert!(data.input_norm_params().is_none());
        assert!(data.label_norm_params().is_none());
    }

    #[test]
    fn test_pad_all_returns_inputs_and_labels() {
        let data = numeric();
        let padded = data.pad_data(0.0, None, PadTarget::All).unwrap();
        assert_eq!(
            padded.inputs.unwrap(),
            vec![vec![0.0, 10.0], vec![5.0, 20.0], vec![10.0, 0.0]]
        );
        assert_eq!(padded.labels.unwrap(), vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert!(padded.vectorized_inputs.is_none());
        assert_eq!(data.inputs()[2], vec![10.0]);
    }

    #[test]
    fn test_pad_all_vecs() {
        let data = numeric();
        let padded = data.pad_data(-1.0, Some(9.0), PadTarget::AllVecs).unwrap();
        assert_eq!(padded.vectorized_inputs.unwrap()[2], vec![10.0, 9.0]);
        assert!(padded.vectorized_labels.is_some());
        assert!(padded.inputs.is_none());
    }

    #[test]
    fn test_targets_from_str() {
        assert_eq!("labels".parse::<NormalizeTarget>().unwrap(), NormalizeTarget::Labels);
        assert_eq!(
            "vectorized_labels".parse::<PadTarget>().unwrap(),
            PadTarget::VectorizedLabels
        );
        assert!("everything".parse::<PadTarget>().unwrap_err().is_validation());
    }

    #[test]
    fn test_clone_shares_vectorized_sets() {
        let data = numeric();
        let copy = data.clone();
        assert!(std::ptr::eq(
            data.vectorized_inputs().unwrap().as_ptr(),
            copy.vectorized_inputs().unwrap().as_ptr()
        ));
    }

    struct ShortLabels;

    impl DataModel for ShortLabels {
        type Input = Vector;
        type Specie = molvec_model::BaseSpecie;

        fn vectorize_labels(&self, labels: &[Vector]) -> Result<Vec<Vector>> {
            Ok(labels[1..].to_vec())
        }
    }

    #[test]
    fn test_failed_vectorize_keeps_normalized_state() {
        let mut data = Data::new(ShortLabels, vec![vec![0.0, 10.0], vec![5.0, 20.0]])
            .with_labels(vec![vec![1.0], vec![2.0]])
            .unwrap();
        let raw = data.inputs().to_vec();
        data.set_vectorized_inputs(raw).unwrap();
        data.normalize_vectors(NormalizeTarget::Inputs, "unit_scale", None, 128)
            .unwrap();
        let normalized = data.vectorized_inputs().unwrap().to_vec();

        let err = data.vectorize().unwrap_err();
        assert!(matches!(
            err,
            DataError::LengthMismatch { what: "vectorized_labels", expected: 2, found: 1 }
        ));
        assert_eq!(data.vectorized_inputs().unwrap(), normalized.as_slice());
        assert!(data.input_norm_params().is_some());
        assert!(data.vectorized_labels().is_none());
    }

    #[test]
    fn test_vectorized_sets_must_match_source_lengths() {
        let mut data = numeric();
        let err = data.set_vectorized_inputs(vec![vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            DataError::LengthMismatch { what: "vectorized_inputs", expected: 3, found: 1 }
        ));
        let err = data
            .set_vectorized_labels(vec![vec![1.0]; 4])
            .unwrap_err();
        assert!(matches!(
            err,
            DataError::LengthMismatch { what: "vectorized_labels", expected: 3, found: 4 }
        ));
        assert_eq!(data.vectorized_inputs().unwrap(), data.inputs());
    }
}
