//! Shared model types for molvec.
//!
//! This crate defines the vocabulary the rest of the workspace is written in:
//! - **Species**: domain entities (molecules and the like) with string and
//!   file (de)serialization capabilities, see [`Specie`]
//! - **Specie types**: runtime descriptors of specie implementations,
//!   see [`SpecieType`] and [`SpecieRegistry`]
//! - **Records**: raw dataset inputs and their numeric view, see [`Record`]
//!
//! # Example
//!
//! ```
//! use molvec_model::{Sentinel, Specie, SpecieRegistry, SpecieType};
//!
//! #[derive(Debug)]
//! struct Molecule {
//!     smiles: String,
//! }
//!
//! impl Specie for Molecule {
//!     const NAME: &'static str = "Molecule";
//!
//!     fn to_str(&self) -> Sentinel<String> {
//!         Sentinel::Value(self.smiles.clone())
//!     }
//! }
//!
//! let registry = SpecieRegistry::new().with::<Molecule>();
//! assert_eq!(registry.resolve("molecule"), Some(SpecieType::of::<Molecule>()));
//! ```

mod error;
mod record;
mod registry;
mod specie;

pub use error::{Result, SpecieError};
pub use record::{Record, Vector};
pub use registry::SpecieRegistry;
pub use specie::{BaseSpecie, DEFAULT_SPECIE_NAME, Sentinel, Specie, SpecieType};
