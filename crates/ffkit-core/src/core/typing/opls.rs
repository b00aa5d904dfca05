use super::{AtomType, AtomTyper};
use crate::core::models::bond::BondOrder;
use crate::core::models::element::Element;
use crate::core::topology::Topology;

/// Assigns OPLS-AA numeric atom types.
///
/// Types are the integer identifiers of the OPLS-AA parameter set rendered as strings;
/// bonded parameters are looked up through each type's class.
#[derive(Debug, Clone, Copy, Default)]
pub struct OplsTyper;

impl AtomTyper for OplsTyper {
    fn assign_type(&self, topology: &Topology, atom: usize) -> Option<AtomType> {
        opls_type(topology, atom).map(|id| AtomType::new(id.to_string()))
    }
}

fn opls_type(topology: &Topology, atom: usize) -> Option<u16> {
    let charge = topology.formal_charge(atom);

    match topology.element(atom) {
        Element::HYDROGEN => hydrogen_type(topology, atom),
        Element::HELIUM => Some(43),
        Element::LITHIUM => Some(345),
        Element::CARBON => carbon_type(topology, atom),
        Element::NITROGEN => (topology.neighbor_count(atom) == 3
            && topology.neighbor_count_of(atom, Element::HYDROGEN) == 3)
            .then_some(69),
        Element::OXYGEN => oxygen_type(topology, atom),
        Element::FLUORINE if charge < 0 => Some(340),
        Element::NEON => Some(44),
        Element::SODIUM => Some(346),
        Element::MAGNESIUM => Some(350),
        Element::PHOSPHORUS => (topology.neighbor_count(atom) == 4
            && topology.neighbor_count_of(atom, Element::OXYGEN) > 0)
            .then_some(378),
        Element::SULFUR => sulfur_type(topology, atom),
        Element::CHLORINE if charge < 0 => Some(341),
        Element::ARGON => Some(45),
        Element::POTASSIUM => Some(347),
        Element::CALCIUM => Some(351),
        Element::ZINC if charge == 2 => Some(834),
        Element::BROMINE if charge < 0 => Some(342),
        Element::KRYPTON => Some(46),
        Element::IODINE => Some(343),
        Element::XENON => Some(47),
        _ => None,
    }
}

fn hydrogen_type(topology: &Topology, atom: usize) -> Option<u16> {
    if !topology.is_terminal(atom) {
        return None;
    }
    let neighbor = topology.neighbors(atom)[0];

    match topology.element(neighbor) {
        Element::OXYGEN
            if topology.neighbor_count(neighbor) == 2
                && topology.neighbor_count_of(neighbor, Element::HYDROGEN) == 2 =>
        {
            Some(76)
        }
        Element::OXYGEN => Some(94),
        Element::CARBON if topology.is_aromatic(neighbor) => Some(91),
        Element::CARBON => Some(82),
        Element::NITROGEN if topology.neighbor_count_of(neighbor, Element::HYDROGEN) == 3 => Some(70),
        _ => None,
    }
}

fn carbon_type(topology: &Topology, atom: usize) -> Option<u16> {
    match topology.neighbor_count(atom) {
        4 => {
            let carbons = topology.neighbor_count_of(atom, Element::CARBON);
            let hydrogens = topology.neighbor_count_of(atom, Element::HYDROGEN);
            let oxygens = topology.neighbor_count_of(atom, Element::OXYGEN);
            if carbons == 2 {
                Some(78)
            } else if carbons == 1 && hydrogens == 3 {
                Some(77)
            } else if oxygens == 1 {
                Some(96)
            } else {
                None
            }
        }
        3 if topology.is_aromatic(atom) => Some(87),
        _ => None,
    }
}

fn oxygen_type(topology: &Topology, atom: usize) -> Option<u16> {
    match topology.neighbor_count(atom) {
        1 => topology
            .is_bonded_to(atom, Element::CARBON, BondOrder::Double)
            .then_some(220),
        2 => match topology.neighbor_count_of(atom, Element::HYDROGEN) {
            2 => Some(75),
            1 => Some(93),
            _ => None,
        },
        _ => None,
    }
}

fn sulfur_type(topology: &Topology, atom: usize) -> Option<u16> {
    if topology.neighbor_count(atom) != 2 {
        return None;
    }
    Some(match topology.neighbor_count_of(atom, Element::HYDROGEN) {
        1 => 139,
        2 => 140,
        _ if topology.neighbor_count_of(atom, Element::SULFUR) == 1 => 142,
        _ => 141,
    })
}
