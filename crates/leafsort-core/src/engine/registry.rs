use crate::core::models::selection::Selection;
use crate::core::models::system::MolecularSystem;
use std::collections::HashMap;

/// Ordered set of the distinct residue names of a membrane.
///
/// Each name owns a fixed slot, assigned in the order in which the names are first
/// encountered. Slots never change for the lifetime of the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    names: Vec<String>,
    slots: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn build(system: &MolecularSystem, selection: &Selection) -> Self {
        let mut registry = Self::default();
        for atom in system.atoms_of(selection) {
            if !registry.slots.contains_key(&atom.res_name) {
                registry
                    .slots
                    .insert(atom.res_name.clone(), registry.names.len());
                registry.names.push(atom.res_name.clone());
            }
        }
        registry
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub fn name(&self, slot: usize) -> Option<&str> {
        self.names.get(slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
