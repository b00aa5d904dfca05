//! # Topology Module
//!
//! Derived, read-only views of a [`Molecule`] that atom typers and force-field
//! parameterization query: ring membership, aromaticity, neighbor statistics and the
//! interaction tuples a force field builds one calculation per.
//!
//! ## Key Components
//!
//! - [`Topology`] - Borrowed view with per-atom chemical-environment queries
//! - [`rings`] - Smallest-ring perception
//! - [`interactions`] - Enumeration of bond, angle, torsion, inversion and nonbonded tuples

pub mod interactions;
pub mod rings;

use crate::core::models::bond::BondOrder;
use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use rings::Ring;

/// The chemical environment of every atom in a molecule.
///
/// A `Topology` is built once per force-field setup and stays immutable while atoms
/// are typed and calculations parameterized. Ring perception happens at construction.
#[derive(Debug, Clone)]
pub struct Topology<'m> {
    molecule: &'m Molecule,
    rings: Vec<Ring>,
    /// Indices into `rings` for each atom, smallest ring first.
    atom_rings: Vec<Vec<usize>>,
    aromatic: Vec<bool>,
}

impl<'m> Topology<'m> {
    pub fn new(molecule: &'m Molecule) -> Self {
        let rings = rings::perceive_rings(molecule);

        let mut atom_rings = vec![Vec::new(); molecule.atom_count()];
        for (ring_index, ring) in rings.iter().enumerate() {
            for &atom in ring.atoms() {
                atom_rings[atom].push(ring_index);
            }
        }

        let mut aromatic: Vec<bool> = molecule.atoms().iter().map(|atom| atom.aromatic).collect();
        for bond in molecule.bonds() {
            if bond.order == BondOrder::Aromatic {
                aromatic[bond.atom1] = true;
                aromatic[bond.atom2] = true;
            }
        }

        Self {
            molecule,
            rings,
            atom_rings,
            aromatic,
        }
    }

    pub fn molecule(&self) -> &'m Molecule {
        self.molecule
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.molecule.atom_count()
    }

    #[inline]
    pub fn element(&self, atom: usize) -> Element {
        self.molecule.atoms()[atom].element
    }

    #[inline]
    pub fn formal_charge(&self, atom: usize) -> i8 {
        self.molecule.atoms()[atom].formal_charge
    }

    #[inline]
    pub fn neighbors(&self, atom: usize) -> &'m [usize] {
        self.molecule.neighbors(atom)
    }

    #[inline]
    pub fn neighbor_count(&self, atom: usize) -> usize {
        self.neighbors(atom).len()
    }

    /// Counts the neighbors of `atom` that are of the given element.
    pub fn neighbor_count_of(&self, atom: usize, element: Element) -> usize {
        self.neighbors(atom)
            .iter()
            .filter(|&&neighbor| self.element(neighbor) == element)
            .count()
    }

    /// An atom with exactly one bonded neighbor.
    #[inline]
    pub fn is_terminal(&self, atom: usize) -> bool {
        self.neighbor_count(atom) == 1
    }

    #[inline]
    pub fn is_aromatic(&self, atom: usize) -> bool {
        self.aromatic[atom]
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn is_in_ring(&self, atom: usize) -> bool {
        !self.atom_rings[atom].is_empty()
    }

    pub fn is_in_ring_of_size(&self, atom: usize, size: usize) -> bool {
        self.atom_rings[atom]
            .iter()
            .any(|&ring| self.rings[ring].size() == size)
    }

    pub fn smallest_ring(&self, atom: usize) -> Option<&Ring> {
        self.atom_rings[atom].first().map(|&ring| &self.rings[ring])
    }

    pub fn ring_element_count(&self, ring: &Ring, element: Element) -> usize {
        ring.atoms()
            .iter()
            .filter(|&&atom| self.element(atom) == element)
            .count()
    }

    pub fn share_ring(&self, atom1: usize, atom2: usize) -> bool {
        self.atom_rings[atom1]
            .iter()
            .any(|ring| self.atom_rings[atom2].contains(ring))
    }

    pub fn bond_order(&self, atom1: usize, atom2: usize) -> Option<BondOrder> {
        self.molecule
            .bond_between(atom1, atom2)
            .map(|bond| bond.order)
    }

    /// Returns `true` if `atom` has a neighbor of `element` joined by a bond of `order`.
    pub fn is_bonded_to(&self, atom: usize, element: Element, order: BondOrder) -> bool {
        self.neighbors(atom).iter().any(|&neighbor| {
            self.element(neighbor) == element && self.bond_order(atom, neighbor) == Some(order)
        })
    }

    /// Real-valued bond order for empirical corrections.
    ///
    /// Aromatic bonds, and any bond between two aromatic atoms, count as 1.5; everything
    /// else uses its integer order. Returns `None` for unbonded atoms.
    pub fn effective_bond_order(&self, atom1: usize, atom2: usize) -> Option<f64> {
        let order = self.bond_order(atom1, atom2)?;
        if order == BondOrder::Aromatic || (self.is_aromatic(atom1) && self.is_aromatic(atom2)) {
            Some(1.5)
        } else {
            Some(order.value())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_molecules::*;
    use super::*;

    #[test]
    fn neighbor_queries_reflect_the_bond_graph() {
        let molecule = water();
        let topology = Topology::new(&molecule);
        assert_eq!(topology.neighbor_count(0), 2);
        assert_eq!(topology.neighbor_count_of(0, Element::HYDROGEN), 2);
        assert!(topology.is_terminal(1));
        assert!(!topology.is_terminal(0));
    }

    #[test]
    fn aromatic_bonds_mark_atoms_aromatic() {
        let molecule = benzene();
        let topology = Topology::new(&molecule);
        assert!((0..6).all(|atom| topology.is_aromatic(atom)));
        assert!((6..12).all(|atom| !topology.is_aromatic(atom)));
    }

    #[test]
    fn ring_queries_find_the_benzene_ring() {
        let molecule = benzene();
        let topology = Topology::new(&molecule);
        assert_eq!(topology.rings().len(), 1);
        assert!(topology.is_in_ring_of_size(0, 6));
        assert!(!topology.is_in_ring_of_size(0, 5));
        assert!(!topology.is_in_ring(6));
        assert_eq!(topology.smallest_ring(3).map(Ring::size), Some(6));
        assert_eq!(topology.ring_element_count(&topology.rings()[0], Element::CARBON), 6);
    }

    #[test]
    fn effective_bond_order_uses_one_and_a_half_for_aromatic_bonds() {
        let molecule = benzene();
        let topology = Topology::new(&molecule);
        assert_eq!(topology.effective_bond_order(0, 1), Some(1.5));
        assert_eq!(topology.effective_bond_order(0, 6), Some(1.0));
        assert_eq!(topology.effective_bond_order(0, 3), None);
    }

    #[test]
    fn single_bond_between_aromatic_rings_counts_as_one_and_a_half() {
        use crate::core::models::atom::Atom;
        use nalgebra::Point3;

        let mut biphenyl = Molecule::new();
        let mut rings = Vec::new();
        for _ in 0..2 {
            let ring: Vec<usize> = (0..6)
                .map(|_| biphenyl.add_atom(Atom::new(Element::CARBON, Point3::origin())))
                .collect();
            for k in 0..6 {
                biphenyl.add_bond(ring[k], ring[(k + 1) % 6], BondOrder::Aromatic).unwrap();
            }
            rings.push(ring);
        }
        let (a0, b0) = (rings[0][0], rings[1][0]);
        biphenyl.add_bond(a0, b0, BondOrder::Single).unwrap();

        let topology = Topology::new(&biphenyl);
        assert!(!topology.share_ring(a0, b0));
        assert_eq!(topology.effective_bond_order(a0, b0), Some(1.5));
        assert_eq!(topology.effective_bond_order(a0, rings[0][1]), Some(1.5));
    }

    #[test]
    fn is_bonded_to_checks_element_and_order() {
        let molecule = benzene();
        let topology = Topology::new(&molecule);
        assert!(topology.is_bonded_to(0, Element::CARBON, BondOrder::Aromatic));
        assert!(topology.is_bonded_to(0, Element::HYDROGEN, BondOrder::Single));
        assert!(!topology.is_bonded_to(0, Element::CARBON, BondOrder::Double));
    }
}
