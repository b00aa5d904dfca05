use crate::core::models::element::Element;
use crate::core::models::molecule::Molecule;
use itertools::Itertools;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonbondedPair {
    pub atoms: [usize; 2],
    /// The two atoms are separated by exactly three bonds.
    pub one_four: bool,
}

/// Interaction tuples derived from a molecule's connectivity.
///
/// Every list is generated once and is duplicate-free:
/// - bonds follow the molecule's bond order;
/// - angles are `(n_i, center, n_j)` for each non-terminal center and each neighbor pair `i < j`;
/// - torsions are `(a, b, c, d)` for each bond `b-c` between non-terminal atoms;
/// - inversions are the three out-of-plane permutations `(n0, c, n1, n2)`, `(n0, c, n2, n1)`,
///   `(n1, c, n2, n0)` of every three-coordinate C, N, P, As, Sb or Bi center;
/// - nonbonded pairs are all `i < j` not related 1-2 or 1-3, flagged when 1-4.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interactions {
    pub bonds: Vec<[usize; 2]>,
    pub angles: Vec<[usize; 3]>,
    pub torsions: Vec<[usize; 4]>,
    pub inversions: Vec<[usize; 4]>,
    pub nonbonded: Vec<NonbondedPair>,
}

impl Interactions {
    pub fn enumerate(molecule: &Molecule) -> Self {
        Self {
            bonds: bonded_pairs(molecule),
            angles: angle_triples(molecule),
            torsions: torsion_quadruples(molecule),
            inversions: inversion_quadruples(molecule),
            nonbonded: nonbonded_pairs(molecule),
        }
    }
}

pub fn bonded_pairs(molecule: &Molecule) -> Vec<[usize; 2]> {
    molecule
        .bonds()
        .iter()
        .map(|bond| [bond.atom1, bond.atom2])
        .collect()
}

pub fn angle_triples(molecule: &Molecule) -> Vec<[usize; 3]> {
    (0..molecule.atom_count())
        .filter(|&center| molecule.neighbors(center).len() > 1)
        .flat_map(|center| {
            molecule
                .neighbors(center)
                .iter()
                .tuple_combinations()
                .map(move |(&a, &c)| [a, center, c])
        })
        .collect()
}

pub fn torsion_quadruples(molecule: &Molecule) -> Vec<[usize; 4]> {
    let mut torsions = Vec::new();
    for bond in molecule.bonds() {
        let (b, c) = (bond.atom1, bond.atom2);
        if molecule.neighbors(b).len() < 2 || molecule.neighbors(c).len() < 2 {
            continue;
        }
        for &a in molecule.neighbors(b).iter().filter(|&&a| a != c) {
            for &d in molecule.neighbors(c).iter().filter(|&&d| d != b && d != a) {
                torsions.push([a, b, c, d]);
            }
        }
    }
    torsions
}

/// Elements whose trigonal centers carry an out-of-plane term.
const INVERSION_CENTERS: [Element; 6] = [
    Element::CARBON,
    Element::NITROGEN,
    Element::PHOSPHORUS,
    Element::ARSENIC,
    Element::ANTIMONY,
    Element::BISMUTH,
];

pub fn inversion_quadruples(molecule: &Molecule) -> Vec<[usize; 4]> {
    (0..molecule.atom_count())
        .filter(|&center| INVERSION_CENTERS.contains(&molecule.atoms()[center].element))
        .filter_map(|center| match molecule.neighbors(center) {
            &[n0, n1, n2] => Some([
                [n0, center, n1, n2],
                [n0, center, n2, n1],
                [n1, center, n2, n0],
            ]),
            _ => None,
        })
        .flatten()
        .collect()
}

pub fn nonbonded_pairs(molecule: &Molecule) -> Vec<NonbondedPair> {
    let mut pairs = Vec::new();
    for i in 0..molecule.atom_count() {
        let separation = bond_separation_within(molecule, i, 3);
        for j in (i + 1)..molecule.atom_count() {
            match separation[j] {
                Some(1) | Some(2) => {}
                Some(3) => pairs.push(NonbondedPair {
                    atoms: [i, j],
                    one_four: true,
                }),
                _ => pairs.push(NonbondedPair {
                    atoms: [i, j],
                    one_four: false,
                }),
            }
        }
    }
    pairs
}

/// Shortest bond count from `start` to every atom reachable within `limit` bonds.
fn bond_separation_within(molecule: &Molecule, start: usize, limit: usize) -> Vec<Option<usize>> {
    let mut separation = vec![None; molecule.atom_count()];
    separation[start] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let Some(depth) = separation[current] else {
            continue;
        };
        if depth == limit {
            continue;
        }
        for &next in molecule.neighbors(current) {
            if separation[next].is_none() {
                separation[next] = Some(depth + 1);
                queue.push_back(next);
            }
        }
    }
    separation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::BondOrder;
    use crate::core::topology::test_molecules::{benzene, ethane, water};
    use nalgebra::Point3;

    #[test]
    fn molecule_without_bonds_has_no_bonded_interactions() {
        let mut molecule = Molecule::new();
        for x in 0..3 {
            molecule.add_atom(Atom::new(Element::ARGON, Point3::new(4.0 * x as f64, 0.0, 0.0)));
        }
        let interactions = Interactions::enumerate(&molecule);
        assert!(interactions.bonds.is_empty());
        assert!(interactions.angles.is_empty());
        assert!(interactions.torsions.is_empty());
        assert!(interactions.inversions.is_empty());
        assert_eq!(interactions.nonbonded.len(), 3);
    }

    #[test]
    fn water_has_two_bonds_one_angle_and_no_nonbonded_pairs() {
        let interactions = Interactions::enumerate(&water());
        assert_eq!(interactions.bonds, vec![[0, 1], [0, 2]]);
        assert_eq!(interactions.angles, vec![[1, 0, 2]]);
        assert!(interactions.torsions.is_empty());
        assert!(interactions.nonbonded.is_empty());
    }

    #[test]
    fn ethane_enumerates_nine_hcch_torsions_as_one_four_pairs() {
        let interactions = Interactions::enumerate(&ethane(60.0));
        assert_eq!(interactions.bonds.len(), 7);
        assert_eq!(interactions.angles.len(), 12);
        assert_eq!(interactions.torsions.len(), 9);
        assert!(interactions.torsions.iter().all(|t| t[1] == 0 && t[2] == 1));
        assert_eq!(interactions.nonbonded.len(), 9);
        assert!(interactions.nonbonded.iter().all(|pair| pair.one_four));
    }

    #[test]
    fn benzene_tuples_are_unique() {
        let interactions = Interactions::enumerate(&benzene());
        assert_eq!(interactions.torsions.len(), 24);
        assert!(interactions.torsions.iter().all_unique());
        assert!(interactions.angles.iter().all_unique());
        // Six aromatic carbons, three out-of-plane permutations each.
        assert_eq!(interactions.inversions.len(), 18);
    }

    #[test]
    fn trigonal_boron_has_no_inversion_terms() {
        let mut molecule = Molecule::new();
        let boron = molecule.add_atom(Atom::new(Element::BORON, Point3::origin()));
        for _ in 0..3 {
            let h = molecule.add_atom(Atom::new(Element::HYDROGEN, Point3::origin()));
            molecule.add_bond(boron, h, BondOrder::Single).unwrap();
        }
        assert!(inversion_quadruples(&molecule).is_empty());
        assert_eq!(angle_triples(&molecule).len(), 3);
    }

    #[test]
    fn nonbonded_pairs_distinguish_one_four_from_longer_range() {
        // Linear chain 0-1-2-3-4.
        let mut molecule = Molecule::new();
        for x in 0..5 {
            molecule.add_atom(Atom::new(Element::CARBON, Point3::new(1.5 * x as f64, 0.0, 0.0)));
        }
        for i in 0..4 {
            molecule
                .add_bond(i, i + 1, BondOrder::Single)
                .unwrap();
        }
        let pairs = nonbonded_pairs(&molecule);
        assert_eq!(
            pairs,
            vec![
                NonbondedPair { atoms: [0, 3], one_four: true },
                NonbondedPair { atoms: [0, 4], one_four: false },
                NonbondedPair { atoms: [1, 4], one_four: true },
            ]
        );
    }
}
