//! Command implementations.
//!
//! Each command reads headerless CSV vector files, runs the library
//! operation and writes its results, returning a report for the summary
//! table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use molvec_data::{
    Data, FieldValue, NormalizeOptions, NormalizeTarget, PadTarget, model_data_to_dataframe,
    records_to_dataframe,
};
use molvec_normalization::{NormParams, inverse_normalize, max_len};

use crate::vectors::{read_vectors, write_vectors};

/// Result of `molvec normalize`.
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    pub rows: usize,
    pub options: NormalizeOptions,
    pub groups: usize,
    pub output: PathBuf,
    pub params: PathBuf,
}

/// Result of `molvec denormalize`.
#[derive(Debug, Clone)]
pub struct DenormalizeReport {
    pub rows: usize,
    pub method: &'static str,
    pub output: PathBuf,
}

/// Result of `molvec pad`.
#[derive(Debug, Clone)]
pub struct PadReport {
    pub rows: usize,
    pub width: usize,
    /// Rows that were shorter than `width`.
    pub padded_rows: usize,
    pub output: PathBuf,
}

/// Normalize the vectors in `input`, writing the normalized vectors to
/// `output` and the parameters needed to invert them to `params` as JSON.
pub fn run_normalize(
    input: &Path,
    output: &Path,
    params: &Path,
    options: &NormalizeOptions,
) -> Result<NormalizeReport> {
    let span = info_span!("normalize", method = %options.method);
    let _guard = span.enter();

    let vectors = read_vectors(input)?;
    let rows = vectors.len();
    let mut data = Data::generic(vectors);
    data.vectorize()?;
    data.normalize_with(NormalizeTarget::Inputs, options)
        .with_context(|| format!("normalize {}", input.display()))?;

    let (Some(normalized), Some(norm_params)) = (data.vectorized_inputs(), data.input_norm_params())
    else {
        bail!("normalization produced no output");
    };
    write_vectors(output, normalized)?;
    let json = serde_json::to_string_pretty(norm_params).context("serialize parameters")?;
    std::fs::write(params, json)
        .with_context(|| format!("write parameters to {}", params.display()))?;
    info!(rows, groups = norm_params.groups(), "Normalized vectors");

    Ok(NormalizeReport {
        rows,
        options: *options,
        groups: norm_params.groups(),
        output: output.to_path_buf(),
        params: params.to_path_buf(),
    })
}

/// Undo a normalization using parameters written by [`run_normalize`].
pub fn run_denormalize(input: &Path, params: &Path, output: &Path) -> Result<DenormalizeReport> {
    let content = std::fs::read_to_string(params)
        .with_context(|| format!("read parameters {}", params.display()))?;
    let norm_params: NormParams = serde_json::from_str(&content)
        .with_context(|| format!("parse parameters {}", params.display()))?;
    let vectors = read_vectors(input)?;
    let restored = inverse_normalize(&vectors, &norm_params)
        .with_context(|| format!("denormalize {}", input.display()))?;
    write_vectors(output, &restored)?;
    info!(rows = restored.len(), method = norm_params.method_name(), "Denormalized vectors");

    Ok(DenormalizeReport {
        rows: restored.len(),
        method: norm_params.method_name(),
        output: output.to_path_buf(),
    })
}

/// Pad the vectors in `input` to a common length.
pub fn run_pad(
    input: &Path,
    output: &Path,
    pad_char: f64,
    end_char: Option<f64>,
) -> Result<PadReport> {
    let vectors = read_vectors(input)?;
    let width = max_len(&vectors);
    let padded_rows = vectors.iter().filter(|vector| vector.len() < width).count();
    let data = Data::generic(vectors);
    let padded = data
        .pad_data(pad_char, end_char, PadTarget::Inputs)?
        .inputs
        .unwrap_or_default();
    write_vectors(output, &padded)?;
    debug!(rows = padded.len(), width, padded_rows, "Padded vectors");

    Ok(PadReport {
        rows: padded.len(),
        width: max_len(&padded),
        padded_rows,
        output: output.to_path_buf(),
    })
}

/// Build a model-data table from an input file and an optional label file.
///
/// Single-value label rows become scalar labels.
pub fn run_frame(
    input: &Path,
    labels: Option<&Path>,
    input_names: Option<&[String]>,
    label_names: Option<&[String]>,
) -> Result<DataFrame> {
    let inputs = read_vectors(input)?;
    let labels: Option<Vec<FieldValue>> = labels
        .map(|path| -> Result<Vec<FieldValue>> {
            Ok(read_vectors(path)?
                .into_iter()
                .map(|label| match label.as_slice() {
                    [value] => FieldValue::Scalar(*value),
                    _ => FieldValue::Vector(label),
                })
                .collect())
        })
        .transpose()?;
    let input_names: Option<Vec<&str>> =
        input_names.map(|names| names.iter().map(String::as_str).collect());
    let label_names: Option<Vec<&str>> =
        label_names.map(|names| names.iter().map(String::as_str).collect());

    let records = model_data_to_dataframe(
        &inputs,
        labels.as_deref(),
        input_names.as_deref(),
        label_names.as_deref(),
    )?;
    let df = records_to_dataframe(&records)?;
    debug!(rows = df.height(), columns = df.width(), "Built model data frame");
    Ok(df)
}
