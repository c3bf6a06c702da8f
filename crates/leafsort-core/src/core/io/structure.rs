use crate::core::models::builder::MolecularSystemBuilder;
use crate::core::models::simbox::{SimBox, SimBoxError};
use crate::core::models::system::MolecularSystem;
use groan_rs::system::System;
use nalgebra::Point3;
use std::error::Error;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("Could not read structure file '{path}': {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    #[error("Atom {0} has no position")]
    UndefinedPosition(usize),
    #[error("Simulation box is not orthogonal")]
    NotOrthogonalBox,
    #[error(transparent)]
    InvalidBox(#[from] SimBoxError),
}

/// Reads a structure file in any format `groan_rs` recognizes from its extension.
pub fn read_structure(path: impl AsRef<Path>) -> Result<System, StructureError> {
    let path = path.as_ref();
    System::from_file(path).map_err(|source| StructureError::Read {
        path: path.to_path_buf(),
        source,
    })
}

impl TryFrom<&System> for MolecularSystem {
    type Error = StructureError;

    /// Copies atom names, residues and positions of `source` in file order.
    ///
    /// Serials are assigned from file positions, so they agree with the atom indices
    /// used by `source` groups. A zero box is treated as no box at all.
    fn try_from(source: &System) -> Result<Self, Self::Error> {
        let mut builder = MolecularSystemBuilder::with_capacity(source.get_n_atoms());
        builder.title(source.get_name());

        if let Some(simbox) = source.get_box() {
            if !simbox.is_orthogonal() {
                return Err(StructureError::NotOrthogonalBox);
            }
            if simbox.is_zero() {
                warn!("Simulation box of '{}' has zero size.", source.get_name());
            } else {
                builder.simbox(SimBox::new(
                    simbox.x as f64,
                    simbox.y as f64,
                    simbox.z as f64,
                )?);
            }
        }

        for atom in source.atoms_iter() {
            let position = atom
                .get_position()
                .ok_or(StructureError::UndefinedPosition(atom.get_index() + 1))?;
            builder.add_atom(
                atom.get_atom_name(),
                atom.get_residue_name(),
                atom.get_residue_number() as isize,
                Point3::new(position.x as f64, position.y as f64, position.z as f64),
            );
        }

        let system = builder.build();
        debug!("Converted {} atoms.", system.atom_count());
        Ok(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::geometry::Axis;
    use groan_rs::prelude::{Atom, SimBox as GroanBox, Vector3D};
    use std::fs;

    const GRO: &str = "\
Two lipids
    4
    1POPC   PO4    1   1.000   1.500   7.000
    1POPC   C1A    2   1.000   1.500   6.000
    2DOPE   PO4    3   2.000   2.500   3.000
    2DOPE   C1A    4   2.000   2.500   4.000
  10.00000  11.00000  12.00000
";

    #[test]
    fn gro_file_is_converted_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("system.gro");
        fs::write(&path, GRO).unwrap();

        let source = read_structure(&path).unwrap();
        let system = MolecularSystem::try_from(&source).unwrap();

        assert_eq!(system.atom_count(), 4);
        assert_eq!(system.title(), "Two lipids");
        let simbox = system.simbox().unwrap();
        assert!((simbox.edge(Axis::Y) - 11.0).abs() < 1e-5);

        let atoms: Vec<_> = system.atoms_iter().map(|(_, a)| a).collect();
        assert_eq!(atoms[2].serial, 3);
        assert_eq!(atoms[2].name, "PO4");
        assert_eq!(atoms[2].res_name, "DOPE");
        assert_eq!(atoms[2].res_number, 2);
        assert!((atoms[2].position.y - 2.5).abs() < 1e-5);
    }

    #[test]
    fn unreadable_structure_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.gro");
        fs::write(&path, "title\nnot a number\n").unwrap();

        match read_structure(&path) {
            Err(StructureError::Read { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result: {:?}", other.map(|s| s.get_n_atoms())),
        }
    }

    #[test]
    fn atom_without_position_is_rejected() {
        let atoms = vec![
            Atom::new(1, "POPC", 1, "PO4").with_position(Vector3D::new(1.0, 1.0, 1.0)),
            Atom::new(1, "POPC", 2, "C1A"),
        ];
        let source = System::new("no position", atoms, Some(GroanBox::from([5.0, 5.0, 5.0])));

        assert!(matches!(
            MolecularSystem::try_from(&source),
            Err(StructureError::UndefinedPosition(2))
        ));
    }

    #[test]
    fn missing_or_zero_box_leaves_the_system_without_box() {
        let atoms =
            vec![Atom::new(1, "POPC", 1, "PO4").with_position(Vector3D::new(1.0, 1.0, 1.0))];
        let source = System::new("no box", atoms.clone(), None);
        assert!(MolecularSystem::try_from(&source).unwrap().simbox().is_none());

        let source = System::new("zero box", atoms, Some(GroanBox::from([0.0, 0.0, 0.0])));
        assert!(MolecularSystem::try_from(&source).unwrap().simbox().is_none());
    }
}
