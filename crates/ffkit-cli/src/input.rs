//! The TOML system description read by the `types` and `energy` commands.
//!
//! ```toml
//! [[atoms]]
//! element = "O"
//! position = [0.0, 0.0, 0.0]
//!
//! [[atoms]]
//! element = "H"
//! position = [0.9572, 0.0, 0.0]
//! partial-charge = 0.417
//!
//! [[bonds]]
//! atoms = [0, 1]
//! order = "single"
//! ```

use crate::error::{CliError, Result};
use ffkit::core::models::atom::Atom;
use ffkit::core::models::bond::BondOrder;
use ffkit::core::models::element::Element;
use ffkit::core::models::molecule::Molecule;
use nalgebra::Point3;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct SystemFile {
    #[serde(default)]
    atoms: Vec<AtomEntry>,
    #[serde(default)]
    bonds: Vec<BondEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct AtomEntry {
    element: String,
    position: [f64; 3],
    #[serde(default)]
    charge: i8,
    partial_charge: Option<f64>,
    #[serde(default)]
    aromatic: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BondEntry {
    atoms: [usize; 2],
    #[serde(default = "default_order")]
    order: String,
}

fn default_order() -> String {
    "single".to_string()
}

pub fn read_system(path: &Path) -> Result<Molecule> {
    let text = std::fs::read_to_string(path)?;
    parse_system(&text).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

pub fn parse_system(text: &str) -> Result<Molecule> {
    let file: SystemFile =
        toml::from_str(text).map_err(|e| CliError::Input(e.message().to_string()))?;

    let mut molecule = Molecule::new();
    for (index, entry) in file.atoms.iter().enumerate() {
        let element = Element::from_symbol(&entry.element).ok_or_else(|| {
            CliError::Input(format!("atom {}: unknown element '{}'", index, entry.element))
        })?;
        let [x, y, z] = entry.position;
        let mut atom = Atom::new(element, Point3::new(x, y, z))
            .with_formal_charge(entry.charge)
            .with_aromatic(entry.aromatic);
        if let Some(q) = entry.partial_charge {
            atom = atom.with_partial_charge(q);
        }
        molecule.add_atom(atom);
    }

    for (index, entry) in file.bonds.iter().enumerate() {
        let order: BondOrder = entry.order.parse().map_err(|_| {
            CliError::Input(format!("bond {}: unknown bond order '{}'", index, entry.order))
        })?;
        let [a, b] = entry.atoms;
        molecule
            .add_bond(a, b, order)
            .map_err(|e| CliError::Input(format!("bond {}: {}", index, e)))?;
    }

    debug!(
        atoms = molecule.atom_count(),
        bonds = molecule.bond_count(),
        "System description parsed."
    );
    Ok(molecule)
}
