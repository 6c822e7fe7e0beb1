//! Dataset container and batch operations for molvec.
//!
//! - [`Data`]: inputs, labels, their vectorized forms, normalization
//!   parameters and representations, with model-specific behavior supplied
//!   by a [`DataModel`]
//! - [`convert_inputs`]: ordered batch conversion of inputs into species,
//!   optionally on a [`WorkerPool`]
//! - [`generate_data_using_comp_protocol`]: label inputs by running an
//!   external computation protocol through a [`ProtocolRunner`]
//! - [`model_data_to_dataframe`] and [`records_to_dataframe`]: tabular
//!   export through polars
//!
//! # Example
//!
//! ```
//! use molvec_data::{Data, NormalizeTarget, PadTarget};
//!
//! let mut data = Data::generic(vec![vec![1.0, 2.0], vec![3.0]]);
//! data.vectorize()?;
//! data.normalize_vectors(NormalizeTarget::Inputs, "unit_scale", None, 128)?;
//! assert_eq!(data.vectorized_inputs().unwrap()[1], vec![1.0]);
//!
//! let padded = data.pad_data(0.0, None, PadTarget::VectorizedInputs)?;
//! assert_eq!(padded.vectorized_inputs.unwrap()[1], vec![1.0, 0.0]);
//! # Ok::<(), molvec_data::DataError>(())
//! ```

mod convert;
mod data;
mod error;
mod frame;
mod generate;
mod model;
mod options;
mod pool;
mod protocol;

pub use convert::convert_inputs;
pub use data::{ConsistencyWarning, Data, NormalizeTarget, PadTarget, PaddedData};
pub use error::{DataError, Result};
pub use frame::{
    ExportInclude, FieldValue, INPUTS_FIELD, LABELS_FIELD, ModelRecord, column_vectors,
    model_data_to_dataframe, records_to_dataframe,
};
pub use generate::generate_data_using_comp_protocol;
pub use model::{DataModel, GenericModel};
pub use options::{ConversionOptions, GenerateOptions, NormalizeOptions, default_nprocs};
pub use pool::WorkerPool;
pub use protocol::{CompProtocol, ProtocolOutput, ProtocolRunner, ResultTable, RunSettings};
