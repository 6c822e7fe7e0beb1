//! Tests for specie capabilities implemented by a concrete type.

use std::io::Write;
use std::path::Path;

use molvec_model::{Result, Sentinel, Specie, SpecieError, SpecieRegistry};

#[derive(Debug, PartialEq)]
struct Smiles {
    code: String,
}

impl Specie for Smiles {
    const NAME: &'static str = "smiles";

    fn to_str(&self) -> Sentinel<String> {
        Sentinel::Value(self.code.clone())
    }

    fn from_str(string: &str) -> Result<Self> {
        let code = string.trim();
        if code.is_empty() {
            return Err(SpecieError::Parse {
                message: "empty SMILES string".to_string(),
            });
        }
        Ok(Self {
            code: code.to_string(),
        })
    }

    fn from_file(path: &Path) -> Sentinel<Result<Self>> {
        let loaded = std::fs::read_to_string(path)
            .map_err(|source| SpecieError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|content| Self::from_str(&content));
        Sentinel::Value(loaded)
    }
}

#[test]
fn string_round_trip() {
    let specie = Smiles::from_str("c1ccccc1").unwrap();
    let text = specie.to_str().into_option().unwrap();
    assert_eq!(Smiles::from_str(&text).unwrap(), specie);
}

#[test]
fn from_file_reads_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "CCO").unwrap();
    let loaded = Smiles::from_file(file.path()).into_option().unwrap().unwrap();
    assert_eq!(loaded.code, "CCO");
}

#[test]
fn from_file_missing_path_is_io_error() {
    let outcome = Smiles::from_file(Path::new("/definitely/not/here.smi"));
    let err = outcome.into_option().unwrap().unwrap_err();
    assert!(matches!(err, SpecieError::Io { .. }));
}

#[test]
fn registry_resolves_concrete_type() {
    let registry = SpecieRegistry::new().with::<Smiles>();
    let specie = registry.resolve("SMILES").unwrap();
    assert!(specie.is::<Smiles>());
    assert_eq!(specie.name(), "smiles");
}
