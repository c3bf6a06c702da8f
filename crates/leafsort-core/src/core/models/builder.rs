use super::atom::Atom;
use super::simbox::SimBox;
use super::system::MolecularSystem;
use nalgebra::Point3;

/// Incrementally assembles a [`MolecularSystem`].
///
/// Atoms receive consecutive 1-based serial numbers in the order they are added.
pub struct MolecularSystemBuilder {
    system: MolecularSystem,
}

impl Default for MolecularSystemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MolecularSystemBuilder {
    pub fn new() -> Self {
        Self {
            system: MolecularSystem::new(),
        }
    }

    pub fn with_capacity(n_atoms: usize) -> Self {
        let mut system = MolecularSystem::new();
        system.order.reserve(n_atoms);
        Self { system }
    }

    pub fn title(&mut self, title: &str) -> &mut Self {
        self.system.title = title.to_string();
        self
    }

    pub fn simbox(&mut self, simbox: SimBox) -> &mut Self {
        self.system.simbox = Some(simbox);
        self
    }

    pub fn add_atom(
        &mut self,
        name: &str,
        res_name: &str,
        res_number: isize,
        position: Point3<f64>,
    ) -> &mut Self {
        let serial = self.system.order.len() + 1;
        let atom = Atom::new(serial, name, res_name, res_number, position);
        let id = self.system.atoms.insert(atom);
        self.system.order.push(id);
        self
    }

    pub fn build(self) -> MolecularSystem {
        self.system
    }
}
