use crate::core::models::molecule::Molecule;
use std::collections::{HashSet, VecDeque};

/// A cycle of atoms, stored in path order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    atoms: Vec<usize>,
}

impl Ring {
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn contains(&self, atom: usize) -> bool {
        self.atoms.contains(&atom)
    }
}

/// Perceives the smallest ring through every ring bond.
///
/// For each bond the shortest path between its two atoms that does not use the
/// bond itself closes the smallest cycle containing it. Identical cycles found from
/// different bonds are reported once. The result covers every ring an atom typer
/// asks about (fused five/six-membered systems included) and is deterministic for a
/// given bond insertion order.
pub fn perceive_rings(molecule: &Molecule) -> Vec<Ring> {
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut rings = Vec::new();

    for bond in molecule.bonds() {
        let Some(path) = shortest_path_avoiding_edge(molecule, bond.atom1, bond.atom2) else {
            continue;
        };
        let mut key = path.clone();
        key.sort_unstable();
        if seen.insert(key) {
            rings.push(Ring { atoms: path });
        }
    }

    rings.sort_by_key(Ring::size);
    rings
}

fn shortest_path_avoiding_edge(molecule: &Molecule, start: usize, goal: usize) -> Option<Vec<usize>> {
    let mut parent: Vec<Option<usize>> = vec![None; molecule.atom_count()];
    let mut visited = vec![false; molecule.atom_count()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(current) = queue.pop_front() {
        for &next in molecule.neighbors(current) {
            if current == start && next == goal {
                continue;
            }
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parent[next] = Some(current);
            if next == goal {
                let mut path = vec![goal];
                let mut cursor = goal;
                while let Some(previous) = parent[cursor] {
                    path.push(previous);
                    cursor = previous;
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(next);
        }
    }
    None
}
