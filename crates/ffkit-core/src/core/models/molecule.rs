use super::atom::Atom;
use super::bond::{Bond, BondOrder};
use crate::core::utils::geometry::Coordinates;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("Atom index {index} is out of range for a molecule with {count} atoms")]
    AtomOutOfRange { index: usize, count: usize },
    #[error("Atom {0} cannot be bonded to itself")]
    SelfBond(usize),
}

/// A molecular graph: atoms, bonds and a cached adjacency list.
///
/// Atoms are addressed by their insertion index, which is also the index used
/// by interaction tuples, coordinate arrays and per-atom gradients. The molecule
/// is owned by the caller; force fields only borrow it while they are set up.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Primary storage for atoms, indexed by insertion order.
    atoms: Vec<Atom>,
    /// List of all bonds in the molecule, in insertion order.
    bonds: Vec<Bond>,
    /// Cached adjacency list for bond connectivity, indexed by atom.
    adjacency: Vec<Vec<usize>>,
}

impl Molecule {
    /// Creates a new, empty molecule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an atom and returns its index.
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.adjacency.push(Vec::new());
        self.atoms.len() - 1
    }

    /// Adds a bond between two atoms.
    ///
    /// Adding a bond between an already bonded pair is a no-op that succeeds,
    /// keeping the first bond order.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::AtomOutOfRange`] if either index is unknown and
    /// [`MoleculeError::SelfBond`] if both indices are equal.
    pub fn add_bond(&mut self, atom1: usize, atom2: usize, order: BondOrder) -> Result<(), MoleculeError> {
        for index in [atom1, atom2] {
            if index >= self.atoms.len() {
                return Err(MoleculeError::AtomOutOfRange {
                    index,
                    count: self.atoms.len(),
                });
            }
        }
        if atom1 == atom2 {
            return Err(MoleculeError::SelfBond(atom1));
        }

        if self.adjacency[atom1].contains(&atom2) {
            // Bond already exists, operation is successful (idempotent)
            return Ok(());
        }

        self.bonds.push(Bond::new(atom1, atom2, order));
        self.adjacency[atom1].push(atom2);
        self.adjacency[atom2].push(atom1);
        Ok(())
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn atom_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Returns the bonded neighbors of `index` in bond insertion order.
    ///
    /// An unknown index has no neighbors.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bond_between(&self, atom1: usize, atom2: usize) -> Option<&Bond> {
        self.bonds
            .iter()
            .find(|bond| bond.partner(atom1) == Some(atom2))
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns a snapshot of all atom positions.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.atoms.iter().map(|atom| atom.position).collect())
    }

    /// Writes positions back into the atoms, e.g. after a minimization step.
    ///
    /// Extra coordinates are ignored; missing ones leave the remaining atoms untouched.
    pub fn set_coordinates(&mut self, coordinates: &Coordinates) {
        for (atom, position) in self.atoms.iter_mut().zip(coordinates.positions()) {
            atom.position = *position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;
    use nalgebra::Point3;

    fn water() -> Molecule {
        let mut molecule = Molecule::new();
        let o = molecule.add_atom(Atom::new(Element::OXYGEN, Point3::new(0.0, 0.0, 0.0)));
        let h1 = molecule.add_atom(Atom::new(Element::HYDROGEN, Point3::new(0.96, 0.0, 0.0)));
        let h2 = molecule.add_atom(Atom::new(Element::HYDROGEN, Point3::new(0.0, 0.96, 0.0)));
        molecule.add_bond(o, h1, BondOrder::Single).unwrap();
        molecule.add_bond(o, h2, BondOrder::Single).unwrap();
        molecule
    }

    #[test]
    fn add_atom_returns_sequential_indices() {
        let mut molecule = Molecule::new();
        assert!(molecule.is_empty());
        assert_eq!(molecule.add_atom(Atom::new(Element::CARBON, Point3::origin())), 0);
        assert_eq!(molecule.add_atom(Atom::new(Element::CARBON, Point3::origin())), 1);
        assert_eq!(molecule.atom_count(), 2);
    }

    #[test]
    fn add_bond_updates_adjacency_for_both_atoms() {
        let molecule = water();
        assert_eq!(molecule.neighbors(0), &[1, 2]);
        assert_eq!(molecule.neighbors(1), &[0]);
        assert_eq!(molecule.neighbors(2), &[0]);
        assert_eq!(molecule.bond_count(), 2);
    }

    #[test]
    fn add_bond_is_idempotent() {
        let mut molecule = water();
        molecule.add_bond(1, 0, BondOrder::Double).unwrap();
        assert_eq!(molecule.bond_count(), 2);
        assert_eq!(molecule.bond_between(0, 1).unwrap().order, BondOrder::Single);
    }

    #[test]
    fn add_bond_rejects_invalid_indices_and_self_bonds() {
        let mut molecule = water();
        assert_eq!(
            molecule.add_bond(0, 9, BondOrder::Single),
            Err(MoleculeError::AtomOutOfRange { index: 9, count: 3 })
        );
        assert_eq!(
            molecule.add_bond(1, 1, BondOrder::Single),
            Err(MoleculeError::SelfBond(1))
        );
    }

    #[test]
    fn bond_between_is_order_independent() {
        let molecule = water();
        assert!(molecule.bond_between(0, 2).is_some());
        assert!(molecule.bond_between(2, 0).is_some());
        assert!(molecule.bond_between(1, 2).is_none());
    }

    #[test]
    fn neighbors_of_unknown_atom_is_empty() {
        assert!(water().neighbors(42).is_empty());
    }

    #[test]
    fn coordinates_round_trip_through_set_coordinates() {
        let mut molecule = water();
        let mut coordinates = molecule.coordinates();
        assert_eq!(coordinates.len(), 3);

        coordinates.set_position(1, Point3::new(1.5, 0.0, 0.0));
        molecule.set_coordinates(&coordinates);
        assert_eq!(molecule.atom(1).unwrap().position, Point3::new(1.5, 0.0, 0.0));
    }
}
