//! Headerless CSV files of numeric vectors.
//!
//! One vector per line. Rows may have different lengths; an empty vector is
//! written as a single empty field.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use molvec_model::Vector;

/// Read vectors from a CSV file.
pub fn read_vectors(path: &Path) -> Result<Vec<Vector>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open vector file {}", path.display()))?;
    read_vectors_from(file).with_context(|| format!("read vectors from {}", path.display()))
}

pub fn read_vectors_from<R: Read>(reader: R) -> Result<Vec<Vector>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut vectors = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("row {}", row + 1))?;
        if record.len() == 1 && record[0].is_empty() {
            vectors.push(Vec::new());
            continue;
        }
        let mut vector = Vec::with_capacity(record.len());
        for (column, field) in record.iter().enumerate() {
            let value: f64 = field.parse().with_context(|| {
                format!("row {} column {}: '{field}' is not a number", row + 1, column + 1)
            })?;
            if !value.is_finite() {
                bail!("row {} column {}: '{field}' is not finite", row + 1, column + 1);
            }
            vector.push(value);
        }
        vectors.push(vector);
    }
    Ok(vectors)
}

/// Write vectors to a CSV file, replacing it.
pub fn write_vectors(path: &Path, vectors: &[Vector]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create vector file {}", path.display()))?;
    write_vectors_to(file, vectors).with_context(|| format!("write vectors to {}", path.display()))
}

pub fn write_vectors_to<W: Write>(writer: W, vectors: &[Vector]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);
    for vector in vectors {
        if vector.is_empty() {
            writer.write_record([""])?;
        } else {
            writer.write_record(vector.iter().map(f64::to_string))?;
        }
    }
    writer.flush()?;
    Ok(())
}
