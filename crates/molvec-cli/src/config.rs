//! TOML configuration file.
//!
//! ```toml
//! [normalize]
//! method = "z_score"
//! axis = "feature"
//! batch_size = 64
//!
//! [convert]
//! nprocs = 4
//! ```
//!
//! Missing tables and keys fall back to the library defaults. Command-line
//! flags override file values.

use std::path::Path;

use anyhow::{Context, Result};
use molvec_data::{ConversionOptions, NormalizeOptions};
use molvec_normalization::{Axis, NormalizationMethod};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub normalize: NormalizeOptions,
    /// Batch conversion settings. Reserved: no command converts species yet,
    /// so this table is only validated and shown by `molvec config`.
    pub convert: ConversionOptions,
}

impl FileConfig {
    /// Load a configuration file, or the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Normalization settings given on the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOverrides {
    pub method: Option<NormalizationMethod>,
    pub axis: Option<Axis>,
    /// Force global statistics even if the file sets an axis.
    pub global: bool,
    pub batch_size: Option<usize>,
}

impl NormalizeOverrides {
    pub fn apply(self, base: NormalizeOptions) -> NormalizeOptions {
        let axis = if self.global {
            None
        } else {
            self.axis.or(base.axis)
        };
        NormalizeOptions {
            method: self.method.unwrap_or(base.method),
            axis,
            batch_size: self.batch_size.unwrap_or(base.batch_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = FileConfig::parse("[normalize]\nmethod = \"z_score\"\n").unwrap();
        assert_eq!(config.normalize.method, NormalizationMethod::ZScore);
        assert_eq!(config.normalize.batch_size, 128);
        assert_eq!(config.convert, ConversionOptions::default());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(FileConfig::parse("[normalise]\nmethod = \"z_score\"\n").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let file = NormalizeOptions {
            method: NormalizationMethod::ZScore,
            axis: Some(Axis::Feature),
            batch_size: 16,
        };
        let merged = NormalizeOverrides {
            batch_size: Some(4),
            ..NormalizeOverrides::default()
        }
        .apply(file);
        assert_eq!(merged.method, NormalizationMethod::ZScore);
        assert_eq!(merged.axis, Some(Axis::Feature));
        assert_eq!(merged.batch_size, 4);

        let merged = NormalizeOverrides {
            global: true,
            ..NormalizeOverrides::default()
        }
        .apply(file);
        assert_eq!(merged.axis, None);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = FileConfig {
            convert: ConversionOptions::sequential(),
            ..FileConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(FileConfig::parse(&text).unwrap(), config);
    }
}
