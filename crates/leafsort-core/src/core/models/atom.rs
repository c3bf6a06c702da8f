use nalgebra::Point3;

/// Represents a single atom (or coarse-grained bead) of a simulation snapshot.
///
/// Atoms are immutable once they are part of a [`MolecularSystem`](super::system::MolecularSystem).
/// Selections never copy atoms; they refer to them through [`AtomId`](super::ids::AtomId).
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The 1-based position of the atom in the structure file.
    /// This is the identifier used by index (NDX) files.
    pub serial: usize,
    /// The name of the atom (e.g., "PO4", "P", "C2").
    pub name: String,
    /// The name of the residue this atom belongs to (e.g., "POPC").
    pub res_name: String,
    /// The residue number as read from the structure file.
    pub res_number: isize,
    /// The 3D coordinates of the atom in nanometers.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom`.
    ///
    /// # Arguments
    ///
    /// * `serial` - The 1-based atom identifier.
    /// * `name` - The name of the atom.
    /// * `res_name` - The name of the parent residue.
    /// * `res_number` - The number of the parent residue.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        serial: usize,
        name: &str,
        res_name: &str,
        res_number: isize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial,
            name: name.to_string(),
            res_name: res_name.to_string(),
            res_number,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_all_fields() {
        let atom = Atom::new(7, "PO4", "POPC", 3, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.serial, 7);
        assert_eq!(atom.name, "PO4");
        assert_eq!(atom.res_name, "POPC");
        assert_eq!(atom.res_number, 3);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new(1, "NC3", "POPC", 1, Point3::new(0.5, 0.5, 4.0));
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
