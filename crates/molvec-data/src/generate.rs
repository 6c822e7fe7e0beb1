//! Protocol-driven data generation.

use crate::convert::{convert_inputs, subset};
use crate::data::Data;
use crate::error::{DataError, Result};
use crate::model::DataModel;
use crate::options::GenerateOptions;
use crate::protocol::{CompProtocol, ProtocolRunner, RunSettings};

/// Label a selection of inputs by running a computation protocol on them.
///
/// The selected inputs are converted to species, handed to `runner`, and
/// the primary result table's rows (minus their last column) become the
/// labels of the returned dataset. The returned dataset:
///
/// - has the selected inputs as `inputs` and the extracted `labels`
/// - re-subsets `vectorized_inputs` when selecting by `input_idxs`, and
///   clears them when explicit `inputs` are given
/// - shares the model, parent specie, reps, vectorized labels and all
///   normalization parameters with `data`
///
/// # Errors
///
/// Fails with a validation error when the runner does not recognize
/// `protocol` or when no selection is given, and with
/// [`DataError::LengthMismatch`] when the protocol returns a different
/// number of rows than inputs it was given.
pub fn generate_data_using_comp_protocol<M, R>(
    data: &Data<M>,
    protocol: &dyn CompProtocol,
    runner: &R,
    input_idxs: Option<&[usize]>,
    inputs: Option<&[M::Input]>,
    options: &GenerateOptions,
) -> Result<Data<M>>
where
    M: DataModel,
    R: ProtocolRunner,
{
    if !runner.recognizes(protocol) {
        return Err(DataError::validation(format!(
            "'{}' is not a recognized computation protocol",
            protocol.name()
        )));
    }

    let conversion = &options.conversion;
    let species = convert_inputs(data, inputs, input_idxs, conversion)?;
    let settings = RunSettings {
        verbose: conversion.verbose,
        timeout: options.timeout,
        nprocs: conversion.nprocs,
    };
    let output = runner.run_protocol(protocol, &species, &settings)?;
    let labels = output.results.labels();
    if labels.len() != species.len() {
        return Err(DataError::LengthMismatch {
            what: "protocol results",
            expected: species.len(),
            found: labels.len(),
        });
    }

    let (new_inputs, vectorized_inputs) = match (inputs, input_idxs) {
        // Explicit inputs win over input_idxs, so there is nothing to re-subset.
        (Some(inputs), _) => (inputs.to_vec(), None),
        (None, Some(idxs)) => {
            let vectorized = data
                .vectorized_inputs()
                .map(|vectors| subset(vectors, idxs))
                .transpose()?;
            (subset(data.inputs(), idxs)?, vectorized)
        }
        (None, None) => {
            return Err(DataError::validation(
                "either inputs or input_idxs must be supplied",
            ));
        }
    };

    tracing::info!(
        protocol = protocol.name(),
        inputs = new_inputs.len(),
        auxiliary_rows = output.auxiliary.len(),
        "Generated labels from computation protocol"
    );
    Ok(data.derive(new_inputs, vectorized_inputs, labels))
}
