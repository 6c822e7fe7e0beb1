//! Tabular record sets and DataFrame conversion.
//!
//! Model data is first turned into [`ModelRecord`]s, an ordered set of named
//! fields per row, and then into a polars [`DataFrame`]. Scalar fields become
//! `Float64` columns; vector fields become `List(Float64)` columns.

use polars::prelude::{Column, DataFrame, DataType, NamedFrom, Series};

use molvec_model::Vector;

use crate::data::Data;
use crate::error::{DataError, Result};
use crate::model::DataModel;

/// Field name used for unnamed inputs.
pub const INPUTS_FIELD: &str = "inputs";
/// Field name used for unnamed labels.
pub const LABELS_FIELD: &str = "labels";

/// A single field value of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(f64),
    Vector(Vector),
}

impl FieldValue {
    /// Number of components; 1 for scalars.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Component `index`. A scalar is its own component 0.
    pub fn component(&self, index: usize) -> Option<f64> {
        match self {
            Self::Scalar(value) => (index == 0).then_some(*value),
            Self::Vector(values) => values.get(index).copied(),
        }
    }

    pub fn to_vector(&self) -> Vector {
        match self {
            Self::Scalar(value) => vec![*value],
            Self::Vector(values) => values.clone(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vector> for FieldValue {
    fn from(values: Vector) -> Self {
        Self::Vector(values)
    }
}

/// One row of model data with ordered, named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRecord {
    fields: Vec<(String, FieldValue)>,
}

impl ModelRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Set a field, replacing an existing field of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Build one record per input.
///
/// Without names, each record holds the whole input under `"inputs"` and the
/// label under `"labels"`. With names, each input component (and each label
/// component) becomes its own scalar field.
///
/// # Errors
///
/// Fails with a validation error when `labels` and `inputs` differ in length,
/// when a row has a different number of components than `input_names` or
/// `label_names`, or when `label_names` is given without labels.
pub fn model_data_to_dataframe(
    inputs: &[Vector],
    labels: Option<&[FieldValue]>,
    input_names: Option<&[&str]>,
    label_names: Option<&[&str]>,
) -> Result<Vec<ModelRecord>> {
    if let Some(labels) = labels
        && labels.len() != inputs.len()
    {
        return Err(DataError::LengthMismatch {
            what: "labels",
            expected: inputs.len(),
            found: labels.len(),
        });
    }
    if label_names.is_some() && labels.is_none() {
        return Err(DataError::validation("label_names given without labels"));
    }

    let mut records = Vec::with_capacity(inputs.len());
    for (row, input) in inputs.iter().enumerate() {
        let mut record = ModelRecord::new();
        match input_names {
            Some(names) => {
                check_width("input_names", row, names.len(), input.len())?;
                for (name, value) in names.iter().zip(input) {
                    record.insert(*name, *value);
                }
            }
            None => record.insert(INPUTS_FIELD, input.clone()),
        }
        if let Some(label) = labels.map(|labels| &labels[row]) {
            match label_names {
                Some(names) => {
                    check_width("label_names", row, names.len(), label.len())?;
                    for (index, name) in names.iter().enumerate() {
                        if let Some(value) = label.component(index) {
                            record.insert(*name, value);
                        }
                    }
                }
                None => record.insert(LABELS_FIELD, label.clone()),
            }
        }
        records.push(record);
    }
    Ok(records)
}

fn check_width(what: &str, row: usize, names: usize, values: usize) -> Result<()> {
    if names == values {
        Ok(())
    } else {
        Err(DataError::validation(format!(
            "{what} has {names} names but row {row} has {values} values"
        )))
    }
}

/// Convert records into a DataFrame.
///
/// All records must carry the same field names in the same order. A field
/// whose values are all scalars becomes a `Float64` column, any other field
/// a list column.
pub fn records_to_dataframe(records: &[ModelRecord]) -> Result<DataFrame> {
    let Some(first) = records.first() else {
        return Ok(DataFrame::empty());
    };
    let names: Vec<&str> = first.names().collect();
    for (row, record) in records.iter().enumerate() {
        if !record.names().eq(names.iter().copied()) {
            return Err(DataError::validation(format!(
                "record {row} has fields [{}] but [{}] were expected",
                record.names().collect::<Vec<_>>().join(", "),
                names.join(", ")
            )));
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let values: Vec<&FieldValue> = records
            .iter()
            .map(|record| &record.fields[index].1)
            .collect();
        let all_scalar = values
            .iter()
            .all(|value| matches!(value, FieldValue::Scalar(_)));
        if all_scalar {
            let scalars: Vec<f64> = values.iter().filter_map(|value| value.component(0)).collect();
            columns.push(Series::new((*name).into(), scalars).into());
        } else {
            let lists: Vec<Series> = values
                .iter()
                .map(|value| Series::new("".into(), value.to_vector()))
                .collect();
            columns.push(Series::new((*name).into(), lists).into());
        }
    }
    Ok(DataFrame::new(columns)?)
}

/// Read one vector per row by concatenating the given columns.
///
/// Numeric columns contribute one value per row; list columns contribute
/// every non-null element.
pub fn column_vectors(df: &DataFrame, names: &[&str]) -> Result<Vec<Vector>> {
    let mut rows: Vec<Vector> = vec![Vec::with_capacity(names.len()); df.height()];
    for name in names {
        let series = df.column(name)?.as_materialized_series();
        if matches!(series.dtype(), DataType::List(_)) {
            for (row, value) in series.list()?.into_iter().enumerate() {
                if let Some(inner) = value {
                    let inner = inner.cast(&DataType::Float64)?;
                    rows[row].extend(inner.f64()?.into_iter().flatten());
                }
            }
        } else {
            let values = series.cast(&DataType::Float64)?;
            for (row, value) in values.f64()?.into_iter().enumerate() {
                let value = value.ok_or_else(|| {
                    DataError::validation(format!("column '{name}' is missing a value at row {row}"))
                })?;
                rows[row].push(value);
            }
        }
    }
    Ok(rows)
}

/// Which attributes [`Data::export_to_dataframe`] writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportInclude {
    /// Raw inputs and labels.
    #[default]
    Raw,
    /// Vectorized inputs and labels.
    Vectorized,
    /// Raw and vectorized inputs and labels, plus representations.
    All,
}

impl<M: DataModel> Data<M> {
    /// Replace inputs, labels and representations with columns of `df`.
    ///
    /// Each selected column group is read row-wise into one vector per row.
    /// Vectorized sets and normalization parameters are cleared.
    pub fn load_from_dataframe(
        &mut self,
        df: &DataFrame,
        input_columns: &[&str],
        label_columns: Option<&[&str]>,
        reps_columns: Option<&[&str]>,
    ) -> Result<()>
    where
        M::Input: From<Vector>,
    {
        if input_columns.is_empty() {
            return Err(DataError::validation("at least one input column is required"));
        }
        let inputs = column_vectors(df, input_columns)?
            .into_iter()
            .map(Into::into)
            .collect();
        let labels = label_columns
            .map(|names| column_vectors(df, names))
            .transpose()?;
        let reps = reps_columns
            .map(|names| column_vectors(df, names))
            .transpose()?;
        self.replace_loaded(inputs, labels, reps);
        tracing::debug!(rows = df.height(), "Loaded dataset from DataFrame");
        Ok(())
    }

    /// Write the selected attributes to a DataFrame, one row per input.
    ///
    /// Raw inputs are written through their numeric view. Attributes that are
    /// not set are skipped.
    pub fn export_to_dataframe(&self, include: ExportInclude) -> Result<DataFrame> {
        let mut sets: Vec<(&str, Vec<Vector>)> = Vec::new();
        if matches!(include, ExportInclude::Raw | ExportInclude::All) {
            sets.push(("inputs", self.numeric_inputs()?));
            if let Some(labels) = self.labels() {
                sets.push(("labels", labels.to_vec()));
            }
        }
        if matches!(include, ExportInclude::Vectorized | ExportInclude::All) {
            if let Some(vectors) = self.vectorized_inputs() {
                sets.push(("vectorized_inputs", vectors.to_vec()));
            }
            if let Some(vectors) = self.vectorized_labels() {
                sets.push(("vectorized_labels", vectors.to_vec()));
            }
        }
        if include == ExportInclude::All
            && let Some(reps) = self.reps()
        {
            if reps.len() != self.len() {
                return Err(DataError::LengthMismatch {
                    what: "reps",
                    expected: self.len(),
                    found: reps.len(),
                });
            }
            sets.push(("reps", reps.to_vec()));
        }

        let columns: Vec<Column> = sets
            .into_iter()
            .map(|(name, vectors)| {
                let lists: Vec<Series> = vectors
                    .into_iter()
                    .map(|vector| Series::new("".into(), vector))
                    .collect();
                Series::new(name.into(), lists).into()
            })
            .collect();
        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GenericModel;

    #[test]
    fn test_unnamed_records() {
        let inputs = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let labels = vec![FieldValue::from(5.0), FieldValue::from(6.0)];
        let records = model_data_to_dataframe(&inputs, Some(&labels), None, None).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("inputs"),
            Some(&FieldValue::Vector(vec![1.0, 2.0]))
        );
        assert_eq!(records[1].get("labels"), Some(&FieldValue::Scalar(6.0)));
    }

    #[test]
    fn test_named_records() {
        let inputs = vec![vec![1.0, 2.0]];
        let labels = vec![FieldValue::from(vec![7.0, 8.0])];
        let records = model_data_to_dataframe(
            &inputs,
            Some(&labels),
            Some(&["x", "y"]),
            Some(&["energy", "gap"]),
        )
        .unwrap();
        let names: Vec<&str> = records[0].names().collect();
        assert_eq!(names, ["x", "y", "energy", "gap"]);
        assert_eq!(records[0].get("gap"), Some(&FieldValue::Scalar(8.0)));
    }

    #[test]
    fn test_record_validation() {
        let inputs = vec![vec![1.0, 2.0], vec![3.0]];
        let err = model_data_to_dataframe(&inputs, None, Some(&["x", "y"]), None).unwrap_err();
        assert!(err.is_validation());
        let labels = vec![FieldValue::from(1.0)];
        let err = model_data_to_dataframe(&inputs, Some(&labels), None, None).unwrap_err();
        assert!(matches!(err, DataError::LengthMismatch { what: "labels", .. }));
        let err = model_data_to_dataframe(&inputs, None, None, Some(&["e"])).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut record = ModelRecord::new();
        record.insert("a", 1.0);
        record.insert("b", 2.0);
        record.insert("a", 3.0);
        assert_eq!(record.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(record.get("a"), Some(&FieldValue::Scalar(3.0)));
    }

    #[test]
    fn test_records_to_dataframe_column_types() {
        let inputs = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let labels = vec![FieldValue::from(5.0), FieldValue::from(6.0)];
        let records = model_data_to_dataframe(&inputs, Some(&labels), None, None).unwrap();
        let df = records_to_dataframe(&records).unwrap();
        assert_eq!(df.shape(), (2, 2));
        assert!(matches!(df.column("inputs").unwrap().dtype(), DataType::List(_)));
        assert_eq!(df.column("labels").unwrap().dtype(), &DataType::Float64);
        assert_eq!(column_vectors(&df, &["inputs", "labels"]).unwrap()[1], vec![3.0, 4.0, 6.0]);
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(records_to_dataframe(&[]).unwrap().height(), 0);
    }

    #[test]
    fn test_load_and_export_round_trip() {
        let df = DataFrame::new(vec![
            Series::new("x".into(), vec![1.0, 2.0]).into(),
            Series::new("y".into(), vec![3i64, 4]).into(),
            Series::new("target".into(), vec![0.5, 0.25]).into(),
        ])
        .unwrap();
        let mut data: Data<GenericModel<Vector>> = Data::generic(Vec::new());
        data.load_from_dataframe(&df, &["x", "y"], Some(&["target"]), None)
            .unwrap();
        assert_eq!(data.inputs(), &[vec![1.0, 3.0], vec![2.0, 4.0]]);
        assert_eq!(data.labels().unwrap(), &[vec![0.5], vec![0.25]]);

        let exported = data.export_to_dataframe(ExportInclude::Raw).unwrap();
        assert_eq!(exported.get_column_names_str(), ["inputs", "labels"]);
        assert_eq!(
            column_vectors(&exported, &["inputs"]).unwrap(),
            vec![vec![1.0, 3.0], vec![2.0, 4.0]]
        );
    }

    #[test]
    fn test_load_rejects_missing_values() {
        let df = DataFrame::new(vec![
            Series::new("x".into(), vec![Some(1.0), None]).into(),
        ])
        .unwrap();
        let mut data: Data<GenericModel<Vector>> = Data::generic(Vec::new());
        let err = data.load_from_dataframe(&df, &["x"], None, None).unwrap_err();
        assert!(err.is_validation());
    }

    fn labelled() -> Data<GenericModel<Vector>> {
        let mut data = Data::generic(vec![vec![1.0, 2.0], vec![3.0]])
            .with_labels(vec![vec![0.5], vec![0.25]])
            .unwrap();
        data.vectorize().unwrap();
        data
    }

    #[test]
    fn test_export_vectorized_only() {
        let data = labelled();
        let exported = data.export_to_dataframe(ExportInclude::Vectorized).unwrap();
        assert_eq!(
            exported.get_column_names_str(),
            ["vectorized_inputs", "vectorized_labels"]
        );
        assert_eq!(
            column_vectors(&exported, &["vectorized_inputs"]).unwrap(),
            vec![vec![1.0, 2.0], vec![3.0]]
        );
    }

    #[test]
    fn test_export_all_includes_reps() {
        let mut data = labelled();
        assert!(data.set_reps(vec![vec![9.0], vec![8.0]]).is_none());
        let exported = data.export_to_dataframe(ExportInclude::All).unwrap();
        assert_eq!(exported.shape(), (2, 5));
        assert_eq!(
            exported.get_column_names_str(),
            ["inputs", "labels", "vectorized_inputs", "vectorized_labels", "reps"]
        );
        assert_eq!(
            column_vectors(&exported, &["reps"]).unwrap(),
            vec![vec![9.0], vec![8.0]]
        );
    }

    #[test]
    fn test_export_all_rejects_misaligned_reps() {
        let mut data = labelled();
        assert!(data.set_reps(vec![vec![9.0]]).is_some());
        let err = data.export_to_dataframe(ExportInclude::All).unwrap_err();
        assert!(matches!(
            err,
            DataError::LengthMismatch { what: "reps", expected: 2, found: 1 }
        ));
    }
}
