use super::{AtomType, AtomTyper};
use crate::core::models::bond::BondOrder;
use crate::core::models::element::Element;
use crate::core::topology::Topology;

/// Assigns AMBER (parm94-style) atom types.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmberTyper;

impl AtomTyper for AmberTyper {
    fn assign_type(&self, topology: &Topology, atom: usize) -> Option<AtomType> {
        amber_type(topology, atom).map(AtomType::from)
    }
}

fn amber_type(topology: &Topology, atom: usize) -> Option<&'static str> {
    let element = topology.element(atom);
    let neighbor_count = topology.neighbor_count(atom);

    match element {
        Element::HYDROGEN => hydrogen_type(topology, atom),
        Element::LITHIUM => Some("Li"),
        Element::CARBON => match neighbor_count {
            4 => Some("CT"),
            3 if topology.is_aromatic(atom) => Some(aromatic_carbon_type(topology, atom)),
            3 => Some("C"),
            2 if topology.is_bonded_to(atom, Element::NITROGEN, BondOrder::Triple) => Some("CY"),
            2 => Some("CZ"),
            _ => None,
        },
        Element::NITROGEN => nitrogen_type(topology, atom),
        Element::OXYGEN => oxygen_type(topology, atom),
        Element::FLUORINE => Some("F"),
        Element::SODIUM => Some("Na"),
        Element::MAGNESIUM => Some("MG"),
        Element::PHOSPHORUS => Some("P"),
        Element::SULFUR if topology.neighbor_count_of(atom, Element::HYDROGEN) == 1 => Some("SH"),
        Element::SULFUR => Some("S"),
        Element::CHLORINE => Some("Cl"),
        Element::POTASSIUM => Some("K"),
        Element::CALCIUM => Some("C0"),
        Element::IRON => Some("FE"),
        Element::COPPER => Some("CU"),
        Element::BROMINE => Some("Br"),
        Element::RUBIDIUM => Some("Rb"),
        Element::IODINE => Some("I"),
        Element::CESIUM => Some("Cs"),
        Element::ZINC => Some("Zn"),
        _ => None,
    }
}

fn hydrogen_type(topology: &Topology, atom: usize) -> Option<&'static str> {
    if !topology.is_terminal(atom) {
        return None;
    }
    let neighbor = topology.neighbors(atom)[0];

    match topology.element(neighbor) {
        Element::OXYGEN if topology.neighbor_count_of(neighbor, Element::HYDROGEN) == 2 => Some("HW"),
        Element::OXYGEN => Some("HO"),
        Element::CARBON => carbon_hydrogen_type(topology, neighbor),
        Element::NITROGEN => Some("H"),
        Element::SULFUR => Some("HS"),
        _ => None,
    }
}

/// Hydrogen on carbon, classified by the groups attached to that carbon.
fn carbon_hydrogen_type(topology: &Topology, carbon: usize) -> Option<&'static str> {
    let mut withdrawing_groups = 0;
    let mut positive_group = false;
    for &second in topology.neighbors(carbon) {
        if topology.formal_charge(second) > 0 {
            positive_group = true;
        } else if matches!(topology.element(second), Element::OXYGEN | Element::NITROGEN) {
            withdrawing_groups += 1;
        }
    }
    let aromatic = topology.is_aromatic(carbon);

    if positive_group {
        return Some("HP");
    }
    if topology.neighbor_count(carbon) == 2 {
        return Some("HZ");
    }
    match (withdrawing_groups, aromatic) {
        (0, true) => Some("HA"),
        (0, false) => Some("HC"),
        (1, true) => Some("H4"),
        (1, false) => Some("H1"),
        (2, true) => Some("H5"),
        (2, false) => Some("H2"),
        (3, _) => Some("H3"),
        _ => None,
    }
}

fn aromatic_carbon_type(topology: &Topology, atom: usize) -> &'static str {
    let in_five = topology.is_in_ring_of_size(atom, 5);
    let in_six = topology.is_in_ring_of_size(atom, 6);

    if in_five && in_six {
        "CB"
    } else if in_six {
        let ring_nitrogens = topology
            .neighbors(atom)
            .iter()
            .filter(|&&n| topology.element(n) == Element::NITROGEN && topology.is_in_ring_of_size(n, 6))
            .count();
        if ring_nitrogens == 2 { "CQ" } else { "CA" }
    } else if in_five
        && topology
            .smallest_ring(atom)
            .is_some_and(|ring| topology.ring_element_count(ring, Element::NITROGEN) == 2)
    {
        "CK"
    } else {
        "CA"
    }
}

fn nitrogen_type(topology: &Topology, atom: usize) -> Option<&'static str> {
    let aromatic = topology.is_aromatic(atom);
    let smallest_ring = topology.smallest_ring(atom).map(|ring| ring.size());

    match topology.neighbor_count(atom) {
        1 => {
            let neighbor = topology.neighbors(atom)[0];
            let triple_to_carbon = topology.element(neighbor) == Element::CARBON
                && topology.bond_order(atom, neighbor) == Some(BondOrder::Triple);
            triple_to_carbon.then_some("NY")
        }
        2 => Some(match (aromatic, smallest_ring) {
            (true, Some(5)) => "NB",
            (true, Some(6)) => "NC",
            _ => "N",
        }),
        3 => {
            let hydrogens = topology.neighbor_count_of(atom, Element::HYDROGEN);
            if aromatic && smallest_ring == Some(5) && hydrogens == 1 {
                Some("NA")
            } else if hydrogens == 2 {
                Some("N2")
            } else {
                Some("N*")
            }
        }
        4 if topology.formal_charge(atom) == 1 => Some("N3"),
        _ => None,
    }
}

fn oxygen_type(topology: &Topology, atom: usize) -> Option<&'static str> {
    match topology.neighbor_count(atom) {
        1 => {
            let neighbor = topology.neighbors(atom)[0];
            if topology.element(neighbor) != Element::CARBON {
                return None;
            }
            let carboxylate = topology.neighbors(neighbor).iter().any(|&second| {
                topology.element(second) == Element::OXYGEN && topology.formal_charge(second) < 0
            });
            Some(if carboxylate { "O2" } else { "O" })
        }
        2 => Some(match topology.neighbor_count_of(atom, Element::HYDROGEN) {
            2 => "OW",
            1 => "OH",
            _ => "OS",
        }),
        _ => None,
    }
}
