//! Batch conversion of dataset inputs into species.

use std::borrow::Cow;

use crate::data::Data;
use crate::error::{DataError, Result};
use crate::model::DataModel;
use crate::options::ConversionOptions;
use crate::pool::WorkerPool;

/// Pick the inputs a batch operation works on.
///
/// Explicit `inputs` take precedence over `input_idxs`; when both are given
/// the indices are ignored. Supplying neither is a validation error.
pub(crate) fn select_inputs<'a, M: DataModel>(
    data: &'a Data<M>,
    inputs: Option<&'a [M::Input]>,
    input_idxs: Option<&[usize]>,
) -> Result<Cow<'a, [M::Input]>> {
    match (inputs, input_idxs) {
        (Some(inputs), idxs) => {
            if idxs.is_some() {
                tracing::warn!("Both inputs and input_idxs given; ignoring input_idxs");
            }
            Ok(Cow::Borrowed(inputs))
        }
        (None, Some(idxs)) => Ok(Cow::Owned(subset(data.inputs(), idxs)?)),
        (None, None) => Err(DataError::validation(
            "either inputs or input_idxs must be supplied",
        )),
    }
}

/// Copy the entries at `idxs`, in index order.
pub(crate) fn subset<T: Clone>(items: &[T], idxs: &[usize]) -> Result<Vec<T>> {
    idxs.iter()
        .map(|&index| {
            items.get(index).cloned().ok_or(DataError::IndexOutOfRange {
                index,
                len: items.len(),
            })
        })
        .collect()
}

/// Convert dataset inputs into species.
///
/// Explicit `inputs` win over `input_idxs`; one of them must be given.
/// When `options.nprocs > 1` the conversion runs on a worker pool sized
/// `nprocs`; the output order always matches the selection order.
///
/// # Errors
///
/// Fails with [`DataError::IndexOutOfRange`] for a bad index and with the
/// model's error when a conversion fails, including
/// [`DataError::NotImplemented`] for models without `to_specie`.
pub fn convert_inputs<M: DataModel>(
    data: &Data<M>,
    inputs: Option<&[M::Input]>,
    input_idxs: Option<&[usize]>,
    options: &ConversionOptions,
) -> Result<Vec<M::Specie>> {
    let selected = select_inputs(data, inputs, input_idxs)?;
    if options.verbose > 0 {
        tracing::info!(
            count = selected.len(),
            nprocs = options.nprocs,
            "Converting inputs to species"
        );
    }

    let model = data.model();
    let species = if options.nprocs > 1 {
        let pool = WorkerPool::new(options.nprocs)?;
        pool.map(&*selected, |input| model.to_specie(input))?
    } else {
        selected
            .iter()
            .map(|input| model.to_specie(input))
            .collect::<Result<Vec<_>>>()?
    };

    tracing::debug!(count = species.len(), "Converted inputs");
    Ok(species)
}
