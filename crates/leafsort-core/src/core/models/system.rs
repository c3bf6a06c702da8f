use super::atom::Atom;
use super::ids::AtomId;
use super::selection::Selection;
use super::simbox::SimBox;
use slotmap::SlotMap;

/// Represents a complete simulation snapshot: all atoms in file order and the simulation box.
///
/// Atoms are stored in a slot map so that selections can refer to them through stable
/// [`AtomId`] keys. The original file order is kept separately and defines the iteration
/// order of every method returning multiple atoms.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    /// Title line of the structure file.
    pub(crate) title: String,
    /// Primary storage for atoms.
    pub(crate) atoms: SlotMap<AtomId, Atom>,
    /// Atom IDs in the order in which the atoms were read.
    pub(crate) order: Vec<AtomId>,
    /// Periodic simulation box, if the source defined one.
    pub(crate) simbox: Option<SimBox>,
}

impl MolecularSystem {
    /// Creates a new, empty molecular system without a simulation box.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn simbox(&self) -> Option<&SimBox> {
        self.simbox.as_ref()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns the number of atoms in the system.
    pub fn atom_count(&self) -> usize {
        self.order.len()
    }

    /// Returns an iterator over all atoms in file order.
    ///
    /// # Return
    ///
    /// An iterator yielding `(AtomId, &Atom)` pairs.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.order.iter().map(|&id| (id, &self.atoms[id]))
    }

    /// Finds an atom by its 1-based serial number (the identifier used by NDX files).
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if `serial` lies within `1..=atom_count()`, otherwise `None`.
    pub fn find_atom_by_serial(&self, serial: usize) -> Option<AtomId> {
        serial
            .checked_sub(1)
            .and_then(|index| self.order.get(index))
            .copied()
    }

    /// Selects every atom of the system in file order.
    #[cfg(test)]
    pub(crate) fn select_all(&self) -> Selection {
        self.order.iter().copied().collect()
    }

    /// Resolves the atoms of a selection, skipping IDs that do not belong to this system.
    pub fn atoms_of<'a>(&'a self, selection: &'a Selection) -> impl Iterator<Item = &'a Atom> + 'a {
        selection.iter().filter_map(|&id| self.atoms.get(id))
    }
}
