use super::error::EngineError;
use crate::core::models::selection::Selection;
use crate::core::models::system::MolecularSystem;
use std::collections::HashMap;

/// Splits `selection` into one sub-selection per residue number.
///
/// Residues are returned in the order in which their numbers are first seen and atoms
/// keep their relative order. Atoms with the same residue number belong to the same
/// residue even if they are not contiguous.
///
/// # Errors
///
/// Returns [`EngineError::EmptySelection`] if `selection` contains no atoms.
pub fn split_by_residue(
    system: &MolecularSystem,
    selection: &Selection,
) -> Result<Vec<Selection>, EngineError> {
    if selection.is_empty() {
        return Err(EngineError::EmptySelection("membrane".to_string()));
    }

    let mut residues: Vec<Selection> = Vec::new();
    let mut slot_of: HashMap<isize, usize> = HashMap::new();

    for &id in selection {
        let Some(atom) = system.atom(id) else {
            continue;
        };
        let slot = *slot_of.entry(atom.res_number).or_insert_with(|| {
            residues.push(Selection::new());
            residues.len() - 1
        });
        residues[slot].push(id);
    }

    Ok(residues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::MolecularSystemBuilder;
    use nalgebra::Point3;

    fn resids(system: &MolecularSystem, residues: &[Selection]) -> Vec<Vec<usize>> {
        residues
            .iter()
            .map(|r| system.atoms_of(r).map(|a| a.serial).collect())
            .collect()
    }

    #[test]
    fn contiguous_residues_are_split() {
        let mut builder = MolecularSystemBuilder::new();
        builder
            .add_atom("NC3", "POPC", 1, Point3::origin())
            .add_atom("PO4", "POPC", 1, Point3::origin())
            .add_atom("NH3", "DOPE", 2, Point3::origin())
            .add_atom("PO4", "DOPE", 2, Point3::origin())
            .add_atom("GL1", "DOPE", 2, Point3::origin());
        let system = builder.build();

        let residues = split_by_residue(&system, &system.select_all()).unwrap();
        assert_eq!(resids(&system, &residues), vec![vec![1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn interleaved_residue_numbers_keep_first_seen_order() {
        let mut builder = MolecularSystemBuilder::new();
        builder
            .add_atom("A", "POPC", 7, Point3::origin())
            .add_atom("A", "POPC", 3, Point3::origin())
            .add_atom("B", "POPC", 7, Point3::origin())
            .add_atom("B", "POPC", 3, Point3::origin());
        let system = builder.build();

        let residues = split_by_residue(&system, &system.select_all()).unwrap();
        assert_eq!(resids(&system, &residues), vec![vec![1, 3], vec![2, 4]]);
    }

    #[test]
    fn every_atom_appears_exactly_once() {
        let mut builder = MolecularSystemBuilder::new();
        for i in 0..30 {
            builder.add_atom("C", "LIP", (i / 4) as isize, Point3::origin());
        }
        let system = builder.build();

        let residues = split_by_residue(&system, &system.select_all()).unwrap();
        let mut all: Vec<usize> = resids(&system, &residues).into_iter().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, (1..=30).collect::<Vec<_>>());
        assert_eq!(residues.len(), 8);
    }

    #[test]
    fn empty_selection_is_an_error() {
        let system = MolecularSystemBuilder::new().build();
        assert!(matches!(
            split_by_residue(&system, &Selection::new()),
            Err(EngineError::EmptySelection(_))
        ));
    }
}
