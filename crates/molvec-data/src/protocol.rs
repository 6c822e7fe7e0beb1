//! Interfaces to the external computation-protocol engine.
//!
//! The engine itself lives outside this crate. A [`ProtocolRunner`] receives
//! species and returns an auxiliary table plus a primary [`ResultTable`]
//! whose rows become labels.

use std::fmt::Debug;
use std::time::Duration;

use molvec_model::{Specie, Vector};

use crate::error::Result;

/// A computation procedure that consumes species and produces results.
pub trait CompProtocol: Debug + Send + Sync {
    fn name(&self) -> &str;
}

/// Numeric result table produced by a protocol run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vector>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vector>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every column except the last, row by row. The last column is
    /// reserved by the protocol engine.
    pub fn labels(&self) -> Vec<Vector> {
        self.rows
            .iter()
            .map(|row| row[..row.len().saturating_sub(1)].to_vec())
            .collect()
    }
}

/// Both tables returned by a protocol run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtocolOutput {
    pub auxiliary: ResultTable,
    pub results: ResultTable,
}

/// Execution settings forwarded to the runner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSettings {
    pub verbose: u8,
    pub timeout: Option<Duration>,
    pub nprocs: usize,
}

/// Executes computation protocols.
pub trait ProtocolRunner {
    /// Whether `protocol` is a type this runner can execute.
    fn recognizes(&self, protocol: &dyn CompProtocol) -> bool;

    fn run_protocol<S: Specie>(
        &self,
        protocol: &dyn CompProtocol,
        species: &[S],
        settings: &RunSettings,
    ) -> Result<ProtocolOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_drop_last_column() {
        let table = ResultTable::new(
            vec!["energy".into(), "dipole".into(), "status".into()],
            vec![vec![1.0, 2.0, 0.0], vec![3.0, 4.0, 1.0], vec![]],
        );
        assert_eq!(table.labels(), vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![]]);
        assert_eq!(table.len(), 3);
    }
}
