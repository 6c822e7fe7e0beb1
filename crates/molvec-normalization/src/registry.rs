//! Named registries of normalization methods and inverses.
//!
//! Names are the public vocabulary used by datasets, config files and the CLI.
//! The inverse registry keeps the historical `unite_scale` key for the unit
//! scale inverse; lookups accept `unit_scale` as an alias for it.

use std::fmt;
use std::str::FromStr;

use molvec_model::Vector;
use serde::{Deserialize, Serialize};

use crate::error::{NormalizationError, Result};
use crate::methods::{
    NormParams, inverse_positive_zscore_normalization, inverse_unit_normalization,
    inverse_zscore_normalization, positive_zscore_normalization, unit_normalization,
    zscore_normalization,
};
use crate::stats::Axis;

/// Signature shared by every normalization method.
pub type NormalizeFn = fn(&[Vector], Option<Axis>, usize) -> Result<(Vec<Vector>, NormParams)>;

/// Signature shared by every inverse normalization.
pub type InverseFn = fn(&[Vector], &NormParams) -> Result<Vec<Vector>>;

/// Registered normalization methods, in lookup-listing order.
pub const NORMALIZATION_METHODS: &[(&str, NormalizeFn)] = &[
    ("unit_scale", unit_normalization),
    ("z_score", zscore_normalization),
    ("positive_z_score", positive_zscore_normalization),
];

/// Registered inverse normalizations.
pub const INVERSE_NORMALIZATION_METHODS: &[(&str, InverseFn)] = &[
    ("unite_scale", inverse_unit_normalization),
    ("z_score", inverse_zscore_normalization),
    ("positive_z_score", inverse_positive_zscore_normalization),
];

fn recognized<F>(table: &[(&str, F)]) -> String {
    table
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Look up a normalization method by registry name.
pub fn normalization_method(name: &str) -> Result<NormalizeFn> {
    NORMALIZATION_METHODS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, f)| *f)
        .ok_or_else(|| NormalizationError::UnknownMethod {
            name: name.to_string(),
            recognized: recognized(NORMALIZATION_METHODS),
        })
}

/// Look up an inverse normalization by registry name.
pub fn inverse_normalization_method(name: &str) -> Result<InverseFn> {
    let key = if name == "unit_scale" { "unite_scale" } else { name };
    INVERSE_NORMALIZATION_METHODS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, f)| *f)
        .ok_or_else(|| NormalizationError::NoInverse {
            method: name.to_string(),
            recognized: recognized(INVERSE_NORMALIZATION_METHODS),
        })
}

/// Undo a normalization using the inverse registered for `params`' method.
pub fn inverse_normalize(vectors: &[Vector], params: &NormParams) -> Result<Vec<Vector>> {
    let inverse = inverse_normalization_method(params.method_name())?;
    inverse(vectors, params)
}

/// Typed handle on a registered normalization method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    #[default]
    UnitScale,
    ZScore,
    PositiveZScore,
}

impl NormalizationMethod {
    pub const ALL: [Self; 3] = [Self::UnitScale, Self::ZScore, Self::PositiveZScore];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnitScale => "unit_scale",
            Self::ZScore => "z_score",
            Self::PositiveZScore => "positive_z_score",
        }
    }

    /// Normalize `vectors`, grouping statistics by `axis`.
    pub fn normalize(
        self,
        vectors: &[Vector],
        axis: Option<Axis>,
        batch_size: usize,
    ) -> Result<(Vec<Vector>, NormParams)> {
        let normalize = normalization_method(self.as_str())?;
        normalize(vectors, axis, batch_size)
    }

    /// Whether an inverse is registered for this method.
    pub fn is_invertible(self) -> bool {
        inverse_normalization_method(self.as_str()).is_ok()
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationMethod {
    type Err = NormalizationError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == name)
            .ok_or_else(|| NormalizationError::UnknownMethod {
                name: name.to_string(),
                recognized: recognized(NORMALIZATION_METHODS),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_methods() {
        for (name, _) in NORMALIZATION_METHODS {
            assert!(normalization_method(name).is_ok());
            assert_eq!(name.parse::<NormalizationMethod>().unwrap().as_str(), *name);
        }
    }

    #[test]
    fn test_unknown_method_names_recognized_methods() {
        let err = normalization_method("bogus").unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"unknown normalization method 'bogus'; recognized methods are: unit_scale, z_score, positive_z_score"
        );
        assert!("bogus".parse::<NormalizationMethod>().is_err());
    }

    #[test]
    fn test_inverse_alias() {
        assert!(inverse_normalization_method("unite_scale").is_ok());
        assert!(inverse_normalization_method("unit_scale").is_ok());
        let err = inverse_normalization_method("bogus").unwrap_err();
        assert!(matches!(err, NormalizationError::NoInverse { .. }));
    }

    #[test]
    fn test_every_method_is_invertible() {
        assert!(NormalizationMethod::ALL.iter().all(|m| m.is_invertible()));
    }

    #[test]
    fn test_inverse_normalize_dispatches_on_params() {
        let vectors = vec![vec![2.0, 4.0, 8.0]];
        for method in NormalizationMethod::ALL {
            let (normalized, params) = method.normalize(&vectors, None, 2).unwrap();
            let restored = inverse_normalize(&normalized, &params).unwrap();
            for (a, b) in restored[0].iter().zip(&vectors[0]) {
                assert!((a - b).abs() < 1e-9, "{method}: {a} != {b}");
            }
        }
    }
}
