use super::ids::AtomId;
use std::slice::Iter;

/// An ordered sequence of references to atoms of a [`MolecularSystem`](super::system::MolecularSystem).
///
/// A selection does not own atoms. Two selections refer to the same atom only if they
/// contain the same [`AtomId`], regardless of whether other atoms share its name or position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    atoms: Vec<AtomId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn push(&mut self, id: AtomId) {
        self.atoms.push(id);
    }

    pub fn iter(&self) -> Iter<'_, AtomId> {
        self.atoms.iter()
    }

    pub fn first(&self) -> Option<AtomId> {
        self.atoms.first().copied()
    }
}

impl FromIterator<AtomId> for Selection {
    fn from_iter<T: IntoIterator<Item = AtomId>>(iter: T) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a AtomId;
    type IntoIter = Iter<'a, AtomId>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}
