//! Atom selection through the `groan_rs` selection language.
//!
//! Queries are evaluated by `groan_rs` against the system the structure was read
//! into, so every keyword, operator, regular expression and index group it knows is
//! available. The matched atoms are mapped onto a [`MolecularSystem`] converted from
//! that same system.
//!
//! ```text
//! name PO4 and not resname CHOL
//! Membrane && (resid 1 to 128 || name r'^PO')
//! ```

pub use groan_rs::errors::{GroupError, SelectError};

use crate::core::models::selection::Selection;
use crate::core::models::system::MolecularSystem;
use groan_rs::system::System;

/// Name of the scratch group each query is evaluated into.
const QUERY_GROUP: &str = "xxxLeafsortReservedxxx-Query";

/// Selects the atoms of `system` matching `query`, in file order.
///
/// `source` is the `groan_rs` system `system` was converted from; it holds the
/// index groups a query may refer to.
///
/// # Errors
///
/// Returns [`GroupError::InvalidQuery`] if `query` cannot be parsed or names an
/// unknown group.
pub fn select(
    source: &mut System,
    system: &MolecularSystem,
    query: &str,
) -> Result<Selection, GroupError> {
    match source.group_create(QUERY_GROUP, query) {
        Ok(_) | Err(GroupError::AlreadyExistsWarning(_)) => (),
        Err(e) => return Err(e),
    }

    let selection = source
        .group_iter(QUERY_GROUP)?
        .filter_map(|atom| system.find_atom_by_serial(atom.get_index() + 1))
        .collect();
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use groan_rs::prelude::{Atom, SimBox, Vector3D};

    fn source() -> System {
        let atoms = vec![
            Atom::new(1, "POPC", 1, "NC3"),
            Atom::new(1, "POPC", 2, "PO4"),
            Atom::new(2, "POPE", 3, "NH3"),
            Atom::new(2, "POPE", 4, "PO4"),
            Atom::new(3, "W", 5, "W"),
        ]
        .into_iter()
        .map(|atom| atom.with_position(Vector3D::new(1.0, 1.0, 1.0)))
        .collect();
        System::new("test", atoms, Some(SimBox::from([5.0, 5.0, 5.0])))
    }

    fn serials(system: &MolecularSystem, selection: &Selection) -> Vec<usize> {
        system.atoms_of(selection).map(|a| a.serial).collect()
    }

    #[test]
    fn keyword_queries_select_in_file_order() {
        let mut source = source();
        let system = MolecularSystem::try_from(&source).unwrap();

        let heads = select(&mut source, &system, "name PO4").unwrap();
        assert_eq!(serials(&system, &heads), vec![2, 4]);

        let lipids = select(&mut source, &system, "not resname W").unwrap();
        assert_eq!(serials(&system, &lipids), vec![1, 2, 3, 4]);

        let second = select(&mut source, &system, "resid 2 to 3 and serial 3").unwrap();
        assert_eq!(serials(&system, &second), vec![3]);
    }

    #[test]
    fn regular_expressions_are_supported() {
        let mut source = source();
        let system = MolecularSystem::try_from(&source).unwrap();

        let selection = select(&mut source, &system, "name r'^PO'").unwrap();
        assert_eq!(serials(&system, &selection), vec![2, 4]);
    }

    #[test]
    fn repeated_queries_replace_the_previous_result() {
        let mut source = source();
        let system = MolecularSystem::try_from(&source).unwrap();

        select(&mut source, &system, "all").unwrap();
        let water = select(&mut source, &system, "resname W").unwrap();
        assert_eq!(serials(&system, &water), vec![5]);
    }

    #[test]
    fn index_groups_can_be_referenced() {
        let mut source = source();
        source.group_create("Membrane", "serial 1 to 4").unwrap();
        let system = MolecularSystem::try_from(&source).unwrap();

        let selection = select(&mut source, &system, "Membrane and name PO4").unwrap();
        assert_eq!(serials(&system, &selection), vec![2, 4]);
    }

    #[test]
    fn unknown_group_is_an_invalid_query() {
        let mut source = source();
        let system = MolecularSystem::try_from(&source).unwrap();

        assert!(matches!(
            select(&mut source, &system, "Membrane"),
            Err(GroupError::InvalidQuery(SelectError::GroupNotFound(_)))
        ));
    }

    #[test]
    fn malformed_query_is_an_invalid_query() {
        let mut source = source();
        let system = MolecularSystem::try_from(&source).unwrap();

        assert!(matches!(
            select(&mut source, &system, "name PO4 and (resname POPC"),
            Err(GroupError::InvalidQuery(_))
        ));
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let mut source = source();
        let system = MolecularSystem::try_from(&source).unwrap();
        assert!(select(&mut source, &system, "resname CHOL").unwrap().is_empty());
    }
}
