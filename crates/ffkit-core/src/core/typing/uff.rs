use super::{AtomType, AtomTyper};
use crate::core::models::bond::BondOrder;
use crate::core::models::element::Element;
use crate::core::topology::Topology;

/// Assigns UFF atom labels.
///
/// A UFF label is the element symbol padded to two characters with `_`, followed by a
/// hybridization character (`1`, `2`, `3` or `R` for resonant) and, for some metals,
/// a formal oxidation state.
#[derive(Debug, Clone, Copy, Default)]
pub struct UffTyper;

impl AtomTyper for UffTyper {
    fn assign_type(&self, topology: &Topology, atom: usize) -> Option<AtomType> {
        uff_type(topology, atom).map(AtomType::from)
    }
}

fn uff_type(topology: &Topology, atom: usize) -> Option<&'static str> {
    let neighbors = topology.neighbor_count(atom);
    let aromatic = topology.is_aromatic(atom);

    match topology.element(atom) {
        Element::HYDROGEN => match neighbors {
            1 => Some("H_"),
            2 => Some("H_b"),
            _ => None,
        },
        Element::HELIUM => Some("He4+4"),
        Element::LITHIUM => Some("Li"),
        Element::BERYLLIUM => Some("Be3+2"),
        Element::BORON => match neighbors {
            2 => Some("B_2"),
            3 => Some("B_3"),
            _ => None,
        },
        Element::CARBON => match neighbors {
            4 => Some("C_3"),
            _ if aromatic => Some("C_R"),
            3 => Some("C_2"),
            2 => Some("C_1"),
            _ => None,
        },
        Element::NITROGEN => match neighbors {
            4 => Some("N_3"),
            _ if aromatic => Some("N_R"),
            3 if has_only_single_bonds(topology, atom) => Some("N_3"),
            3 => Some("N_2"),
            2 => Some("N_1"),
            _ => None,
        },
        Element::OXYGEN => match neighbors {
            _ if aromatic => Some("O_R"),
            2 => Some("O_3"),
            1 => Some("O_2"),
            _ => None,
        },
        Element::FLUORINE => Some("F_"),
        Element::NEON => Some("Ne4+4"),
        Element::SODIUM => Some("Na"),
        Element::MAGNESIUM => Some("Mg3+2"),
        Element::ALUMINUM => Some("Al3"),
        Element::SILICON => Some("Si3"),
        Element::PHOSPHORUS => (neighbors == 4).then_some("P_3+3"),
        Element::SULFUR => match neighbors {
            4 => Some("S_3+2"),
            _ if aromatic => Some("S_R"),
            2 => Some("S_3+2"),
            3 | 1 => Some("S_2"),
            _ => None,
        },
        Element::CHLORINE => Some("Cl"),
        Element::ARGON => Some("Ar4+4"),
        Element::POTASSIUM => Some("K_"),
        Element::CALCIUM => Some("Ca6+2"),
        Element::SCANDIUM => Some("Sc3+3"),
        Element::TITANIUM => Some("Ti3+4"),
        Element::VANADIUM => Some("V_3+5"),
        Element::CHROMIUM => Some("Cr6+3"),
        Element::MANGANESE => Some("Mn6+2"),
        Element::IRON => Some("Fe3+2"),
        Element::COBALT => Some("Co6+3"),
        Element::NICKEL => Some("Ni4+2"),
        Element::COPPER => Some("Cu3+1"),
        Element::ZINC => Some("Zn3+2"),
        Element::GALLIUM => Some("Ga3+3"),
        Element::GERMANIUM => Some("Ge3"),
        Element::ARSENIC => Some("As3+3"),
        Element::SELENIUM => Some("Se3+2"),
        Element::BROMINE => Some("Br"),
        Element::KRYPTON => Some("Kr4+4"),
        Element::RUBIDIUM => Some("Rb"),
        Element::IODINE => Some("I_"),
        _ => None,
    }
}

fn has_only_single_bonds(topology: &Topology, atom: usize) -> bool {
    topology
        .neighbors(atom)
        .iter()
        .all(|&neighbor| topology.bond_order(atom, neighbor) == Some(BondOrder::Single))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::molecule::Molecule;
    use crate::core::topology::test_molecules::{benzene, ethane, methanol, water};
    use nalgebra::Point3;

    fn types_of(molecule: &Molecule) -> Vec<Option<String>> {
        let topology = Topology::new(molecule);
        UffTyper
            .assign_types(&topology)
            .into_iter()
            .map(|t| t.map(|t| t.to_string()))
            .collect()
    }

    #[test]
    fn ethane_is_sp3_carbon_and_hydrogen() {
        let types = types_of(&ethane(60.0));
        assert_eq!(types[0].as_deref(), Some("C_3"));
        assert_eq!(types[1].as_deref(), Some("C_3"));
        assert!(types[2..].iter().all(|t| t.as_deref() == Some("H_")));
    }

    #[test]
    fn benzene_carbons_are_resonant() {
        let types = types_of(&benzene());
        assert!(types[..6].iter().all(|t| t.as_deref() == Some("C_R")));
    }

    #[test]
    fn water_and_methanol_oxygens_are_sp3() {
        assert_eq!(types_of(&water())[0].as_deref(), Some("O_3"));
        assert_eq!(types_of(&methanol())[1].as_deref(), Some("O_3"));
    }

    #[test]
    fn nitrogen_hybridization_follows_bond_orders() {
        // H3N (amine), H-N=C (imine), N#C (nitrile) as separate fragments.
        let mut molecule = Molecule::new();
        let add = |molecule: &mut Molecule, element| molecule.add_atom(Atom::new(element, Point3::origin()));

        let amine = add(&mut molecule, Element::NITROGEN);
        for _ in 0..3 {
            let h = add(&mut molecule, Element::HYDROGEN);
            molecule.add_bond(amine, h, BondOrder::Single).unwrap();
        }

        let imine = add(&mut molecule, Element::NITROGEN);
        let imine_c = add(&mut molecule, Element::CARBON);
        let imine_h = add(&mut molecule, Element::HYDROGEN);
        let imine_h2 = add(&mut molecule, Element::HYDROGEN);
        molecule.add_bond(imine, imine_c, BondOrder::Double).unwrap();
        molecule.add_bond(imine, imine_h, BondOrder::Single).unwrap();
        molecule.add_bond(imine, imine_h2, BondOrder::Single).unwrap();

        let nitrile = add(&mut molecule, Element::NITROGEN);
        let nitrile_c = add(&mut molecule, Element::CARBON);
        let cap = add(&mut molecule, Element::HYDROGEN);
        molecule.add_bond(nitrile, nitrile_c, BondOrder::Triple).unwrap();
        molecule.add_bond(nitrile_c, cap, BondOrder::Single).unwrap();

        let types = types_of(&molecule);
        assert_eq!(types[amine].as_deref(), Some("N_3"));
        assert_eq!(types[imine].as_deref(), Some("N_2"));
        assert_eq!(types[nitrile].as_deref(), Some("N_1"));
        assert_eq!(types[nitrile_c].as_deref(), Some("C_1"));
    }

    #[test]
    fn thiophene_sulfur_is_resonant_while_thioether_sulfur_is_sp3() {
        let mut thiophene = Molecule::new();
        let ring: Vec<usize> = [Element::SULFUR, Element::CARBON, Element::CARBON, Element::CARBON, Element::CARBON]
            .into_iter()
            .map(|element| thiophene.add_atom(Atom::new(element, Point3::origin()).with_aromatic(true)))
            .collect();
        for k in 0..ring.len() {
            thiophene
                .add_bond(ring[k], ring[(k + 1) % ring.len()], BondOrder::Aromatic)
                .unwrap();
        }
        let types = types_of(&thiophene);
        assert_eq!(types[ring[0]].as_deref(), Some("S_R"));
        assert!(types[1..].iter().all(|t| t.as_deref() == Some("C_R")));

        let mut thioether = Molecule::new();
        let s = thioether.add_atom(Atom::new(Element::SULFUR, Point3::origin()));
        for _ in 0..2 {
            let c = thioether.add_atom(Atom::new(Element::CARBON, Point3::origin()));
            thioether.add_bond(s, c, BondOrder::Single).unwrap();
        }
        assert_eq!(types_of(&thioether)[s].as_deref(), Some("S_3+2"));
    }

    #[test]
    fn bridging_hydrogen_and_unsupported_elements() {
        let mut molecule = Molecule::new();
        let b1 = molecule.add_atom(Atom::new(Element::BORON, Point3::origin()));
        let h = molecule.add_atom(Atom::new(Element::HYDROGEN, Point3::origin()));
        let b2 = molecule.add_atom(Atom::new(Element::BORON, Point3::origin()));
        molecule.add_bond(b1, h, BondOrder::Single).unwrap();
        molecule.add_bond(h, b2, BondOrder::Single).unwrap();
        let xenon = molecule.add_atom(Atom::new(Element::XENON, Point3::origin()));

        let types = types_of(&molecule);
        assert_eq!(types[h].as_deref(), Some("H_b"));
        assert_eq!(types[b1], None);
        assert_eq!(types[xenon], None);
    }
}
