//! Typed options for normalization, conversion and generation.

use std::time::Duration;

use molvec_normalization::{Axis, DEFAULT_BATCH_SIZE, NormalizationMethod};
use serde::{Deserialize, Serialize};

/// Options for [`Data::normalize_with`](crate::Data::normalize_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub method: NormalizationMethod,
    /// Statistic grouping; `None` computes global statistics.
    pub axis: Option<Axis>,
    pub batch_size: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            method: NormalizationMethod::UnitScale,
            axis: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Options for batch specie conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Worker count. Values above 1 convert on a worker pool.
    pub nprocs: usize,
    pub verbose: u8,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            nprocs: default_nprocs(),
            verbose: 0,
        }
    }
}

impl ConversionOptions {
    /// Sequential conversion.
    pub fn sequential() -> Self {
        Self {
            nprocs: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_nprocs(mut self, nprocs: usize) -> Self {
        self.nprocs = nprocs;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Options for protocol-driven data generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub conversion: ConversionOptions,
    /// Forwarded to the protocol runner; not enforced here.
    pub timeout: Option<Duration>,
}

/// Number of CPUs available to this process.
pub fn default_nprocs() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}
