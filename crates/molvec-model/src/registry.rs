//! Name lookup for specie types.
//!
//! Runtime configuration (CLI flags, config files) names species by string.
//! The registry resolves those names to [`SpecieType`] descriptors so that an
//! unknown name is rejected before it reaches a dataset.

use std::collections::BTreeMap;

use crate::specie::{Specie, SpecieType};

/// Registry of known specie types keyed by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct SpecieRegistry {
    types: BTreeMap<String, SpecieType>,
}

impl SpecieRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `S` under its [`Specie::NAME`].
    ///
    /// Returns the previously registered type for that name, if any.
    pub fn register<S: Specie>(&mut self) -> Option<SpecieType> {
        let specie = SpecieType::of::<S>();
        self.types.insert(normalize_key(specie.name()), specie)
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with<S: Specie>(mut self) -> Self {
        self.register::<S>();
        self
    }

    /// Look up a specie type by name.
    pub fn resolve(&self, name: &str) -> Option<SpecieType> {
        self.types.get(&normalize_key(name)).copied()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.types.values().map(SpecieType::name).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn normalize_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Molecule;

    impl Specie for Molecule {
        const NAME: &'static str = "Molecule";
    }

    #[derive(Debug)]
    struct Crystal;

    impl Specie for Crystal {
        const NAME: &'static str = "Crystal";
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = SpecieRegistry::new().with::<Molecule>().with::<Crystal>();
        assert_eq!(registry.len(), 2);
        assert!(registry.resolve("molecule").unwrap().is::<Molecule>());
        assert!(registry.resolve("  CRYSTAL ").unwrap().is::<Crystal>());
        assert!(registry.resolve("int").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let registry = SpecieRegistry::new().with::<Molecule>().with::<Crystal>();
        assert_eq!(registry.names(), vec!["Crystal", "Molecule"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = SpecieRegistry::new();
        assert!(registry.register::<Molecule>().is_none());
        assert!(registry.register::<Molecule>().is_some());
        assert_eq!(registry.len(), 1);
    }
}
