use super::classifier::Leaflet;
use super::registry::NameRegistry;
use crate::core::models::ids::AtomId;
use crate::core::models::selection::Selection;
use crate::core::models::system::MolecularSystem;

/// Collects classified residues into one group per (residue name, leaflet) pair.
///
/// Groups are addressed as `2 * slot + leaflet`, where `slot` comes from a [`NameRegistry`].
pub struct GroupAccumulator {
    groups: Vec<Vec<AtomId>>,
    residue_counts: Vec<usize>,
}

impl GroupAccumulator {
    pub fn new(n_names: usize) -> Self {
        Self {
            groups: vec![Vec::new(); 2 * n_names],
            residue_counts: vec![0; 2 * n_names],
        }
    }

    #[inline]
    fn index(slot: usize, leaflet: Leaflet) -> usize {
        2 * slot + leaflet.offset()
    }

    /// Appends all atoms of `residue` to the group of `slot` and `leaflet`, keeping their order.
    ///
    /// `slot` must be lower than the number of names the accumulator was created for.
    pub(crate) fn append(&mut self, slot: usize, leaflet: Leaflet, residue: &Selection) {
        let index = Self::index(slot, leaflet);
        debug_assert!(
            index < self.groups.len(),
            "slot {} out of bounds for {} residue names",
            slot,
            self.groups.len() / 2
        );
        self.groups[index].extend(residue.iter().copied());
        self.residue_counts[index] += 1;
    }

    /// Converts the accumulated atoms into named groups of atom serials.
    pub fn finish(self, system: &MolecularSystem, registry: &NameRegistry) -> LeafletGroups {
        let groups = self
            .groups
            .into_iter()
            .zip(self.residue_counts)
            .enumerate()
            .map(|(index, (atoms, residue_count))| {
                let residue_name = registry.name(index / 2).unwrap_or_default().to_string();
                let leaflet = if index % 2 == 0 {
                    Leaflet::Lower
                } else {
                    Leaflet::Upper
                };
                LeafletGroup {
                    name: format!("{}_{}", residue_name, leaflet.suffix()),
                    residue_name,
                    leaflet,
                    residue_count,
                    atoms: atoms
                        .into_iter()
                        .filter_map(|id| system.atom(id).map(|atom| atom.serial))
                        .collect(),
                }
            })
            .collect();
        LeafletGroups { groups }
    }
}

/// Atoms of one residue name in one leaflet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafletGroup {
    /// Group name, `<residue name>_lower` or `<residue name>_upper`.
    pub name: String,
    pub residue_name: String,
    pub leaflet: Leaflet,
    /// Number of residues whose atoms were added to the group.
    pub residue_count: usize,
    /// Atom serials in the order in which they were classified.
    pub atoms: Vec<usize>,
}

impl LeafletGroup {
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Result of a classification pass: every (residue name, leaflet) group, including empty ones.
///
/// Groups are ordered by registry slot with the lower leaflet first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafletGroups {
    groups: Vec<LeafletGroup>,
}

impl LeafletGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeafletGroup> {
        self.groups.iter()
    }

    pub fn get(&self, name: &str) -> Option<&LeafletGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Groups to be written: all of them if `include_empty`, otherwise only those with atoms.
    pub fn emitted(&self, include_empty: bool) -> impl Iterator<Item = &LeafletGroup> {
        self.groups
            .iter()
            .filter(move |group| include_empty || !group.is_empty())
    }
}
