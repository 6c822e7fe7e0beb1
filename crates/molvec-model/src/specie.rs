//! Specie capability trait.
//!
//! A specie is a domain entity (a molecule, a crystal, a reaction) that inputs
//! of a dataset can be converted into. Concrete species implement the
//! capabilities they support and inherit defaults for the rest:
//!
//! | Capability   | Default                                   |
//! |--------------|-------------------------------------------|
//! | `to_str`     | returns [`Sentinel::NotImplemented`]      |
//! | `from_str`   | fails with [`SpecieError::NotImplemented`] |
//! | `from_file`  | returns [`Sentinel::NotImplemented`]      |
//!
//! The asymmetry is intentional: callers probing serialization support get a
//! value back, while deserialization without an implementation is a hard error.

use std::any::TypeId;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecieError};

/// Name reported by species that do not set their own.
pub const DEFAULT_SPECIE_NAME: &str = "None";

/// Value returned by capabilities that may be left unimplemented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentinel<T> {
    /// The capability produced a value.
    Value(T),
    /// The capability is not implemented for this type.
    NotImplemented,
}

impl<T> Sentinel<T> {
    /// Returns true when the capability is not implemented.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// Converts into an `Option`, dropping the sentinel.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::NotImplemented => None,
        }
    }

    /// Maps the contained value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sentinel<U> {
        match self {
            Self::Value(value) => Sentinel::Value(f(value)),
            Self::NotImplemented => Sentinel::NotImplemented,
        }
    }
}

impl<T> From<T> for Sentinel<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// A domain entity with string and file (de)serialization capabilities.
pub trait Specie: fmt::Debug + Send + 'static {
    /// Identifier shared by every instance of the type.
    const NAME: &'static str = DEFAULT_SPECIE_NAME;

    /// Instance name. Defaults to [`Specie::NAME`].
    fn name(&self) -> &str {
        Self::NAME
    }

    /// Serializes the specie to a string.
    fn to_str(&self) -> Sentinel<String> {
        Sentinel::NotImplemented
    }

    /// Parses a specie from its string form.
    fn from_str(_string: &str) -> Result<Self>
    where
        Self: Sized,
    {
        Err(SpecieError::not_implemented("from_str"))
    }

    /// Reads a specie from a file.
    fn from_file(_path: &Path) -> Sentinel<Result<Self>>
    where
        Self: Sized,
    {
        Sentinel::NotImplemented
    }
}

/// Specie with every capability left at its default.
///
/// Used by data models that never convert their inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseSpecie;

impl Specie for BaseSpecie {}

/// Type-level reference to a [`Specie`] implementation.
///
/// Stands in for "the class of species" a dataset's inputs belong to. It can
/// only be built from a type implementing [`Specie`], so holding one is proof
/// the type is a specie.
#[derive(Clone, Copy)]
pub struct SpecieType {
    name: &'static str,
    type_name: &'static str,
    type_id: TypeId,
}

impl SpecieType {
    /// Descriptor for the specie type `S`.
    pub fn of<S: Specie>() -> Self {
        Self {
            name: S::NAME,
            type_name: std::any::type_name::<S>(),
            type_id: TypeId::of::<S>(),
        }
    }

    /// The specie's [`Specie::NAME`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fully qualified Rust type name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true when this descriptor refers to `S`.
    pub fn is<S: Specie>(&self) -> bool {
        self.type_id == TypeId::of::<S>()
    }
}

impl PartialEq for SpecieType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for SpecieType {}

impl fmt::Debug for SpecieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecieType")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl fmt::Display for SpecieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
