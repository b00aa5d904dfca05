use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

const AMBER_PARAMETERS: &str = include_str!("../../../data/amber.prm");
const OPLS_PARAMETERS: &str = include_str!("../../../data/opls.prm");

/// Wildcard accepted in the outer positions of torsion records.
pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub class: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondParams {
    /// kcal/(mol·Å²)
    pub force_constant: f64,
    /// Å
    pub length: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleParams {
    /// kcal/(mol·rad²)
    pub force_constant: f64,
    /// Equilibrium angle in degrees, as stored in the file.
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorsionTerm {
    pub amplitude: f64,
    /// Phase in degrees, as stored in the file.
    pub phase: f64,
    pub periodicity: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TorsionParams {
    pub terms: Vec<TorsionTerm>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VdwParams {
    /// Per-type radius (R* for AMBER, σ for OPLS) in Å.
    pub radius: f64,
    pub well_depth: f64,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

type TorsionKey = (String, String, String, String);

/// Empirical constants of one force-field family, keyed by atom type.
///
/// Records are stored in canonical order so lookups are independent of the direction
/// an interaction is traversed in. Bonded lookups translate each type to its class
/// (the type itself when no `atom` record names one); van der Waals and charge lookups
/// use the type directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterTable {
    atoms: HashMap<String, AtomRecord>,
    bonds: HashMap<(String, String), BondParams>,
    angles: HashMap<(String, String, String), AngleParams>,
    torsions: HashMap<TorsionKey, TorsionParams>,
    vdw: HashMap<String, VdwParams>,
    charges: HashMap<String, f64>,
}

impl ParameterTable {
    /// Parses the line-oriented parameter format.
    ///
    /// Each line starts with a keyword:
    ///
    /// ```text
    /// atom    <type> <class> "<description>"
    /// bond    <a> <b> <force constant> <length>
    /// angle   <a> <b> <c> <force constant> <angle in degrees>
    /// torsion <a> <b> <c> <d> (<amplitude> <phase in degrees> <periodicity>){1,4}
    /// vdw     <type> <radius> <well depth>
    /// charge  <type> <charge>
    /// ```
    ///
    /// Blank lines and `#` comments are ignored. Malformed lines are skipped with a
    /// warning; for duplicate records the first one wins.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::default();
        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let content = line.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }
            if let Err(reason) = table.parse_line(content) {
                warn!(line = line_number, "Skipping malformed parameter line: {}", reason);
            }
        }
        table
    }

    pub fn from_path(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(Self::parse(&content))
    }

    /// The embedded parm94-derived AMBER table.
    pub fn amber() -> Self {
        Self::parse(AMBER_PARAMETERS)
    }

    /// The embedded OPLS-AA table.
    pub fn opls() -> Self {
        Self::parse(OPLS_PARAMETERS)
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    pub fn record_count(&self) -> usize {
        self.atoms.len()
            + self.bonds.len()
            + self.angles.len()
            + self.torsions.len()
            + self.vdw.len()
            + self.charges.len()
    }

    pub fn atom(&self, atom_type: &str) -> Option<&AtomRecord> {
        self.atoms.get(atom_type)
    }

    pub fn atom_class<'a>(&'a self, atom_type: &'a str) -> &'a str {
        self.atoms
            .get(atom_type)
            .map_or(atom_type, |record| record.class.as_str())
    }

    pub fn bond_parameters(&self, a: &str, b: &str) -> Option<&BondParams> {
        let key = bond_key(self.atom_class(a), self.atom_class(b));
        self.bonds.get(&key)
    }

    pub fn angle_parameters(&self, a: &str, b: &str, c: &str) -> Option<&AngleParams> {
        let key = angle_key(self.atom_class(a), self.atom_class(b), self.atom_class(c));
        self.angles.get(&key)
    }

    /// Looks up a torsion by exact classes first, then with wildcard outer atoms.
    pub fn torsion_parameters(&self, a: &str, b: &str, c: &str, d: &str) -> Option<&TorsionParams> {
        let (b, c) = (self.atom_class(b), self.atom_class(c));
        self.torsions
            .get(&torsion_key(self.atom_class(a), b, c, self.atom_class(d)))
            .or_else(|| self.torsions.get(&torsion_key(WILDCARD, b, c, WILDCARD)))
    }

    pub fn vdw_parameters(&self, atom_type: &str) -> Option<&VdwParams> {
        self.vdw.get(atom_type)
    }

    pub fn charge(&self, atom_type: &str) -> Option<f64> {
        self.charges.get(atom_type).copied()
    }

    fn parse_line(&mut self, line: &str) -> Result<(), String> {
        let mut fields = line.split_whitespace();
        let keyword = fields.next().unwrap_or_default();
        let fields: Vec<&str> = fields.collect();

        match keyword {
            "atom" => {
                let [atom_type, class, description @ ..] = fields.as_slice() else {
                    return Err("atom record needs a type and a class".to_string());
                };
                let description = description.join(" ").trim_matches('"').to_string();
                insert_first(
                    &mut self.atoms,
                    atom_type.to_string(),
                    AtomRecord {
                        class: class.to_string(),
                        description,
                    },
                    "atom",
                );
            }
            "bond" => {
                let [a, b, k, r0] = fields.as_slice() else {
                    return Err(format!("bond record needs 4 fields, found {}", fields.len()));
                };
                let params = BondParams {
                    force_constant: number(k)?,
                    length: number(r0)?,
                };
                insert_first(&mut self.bonds, bond_key(a, b), params, "bond");
            }
            "angle" => {
                let [a, b, c, k, theta0] = fields.as_slice() else {
                    return Err(format!("angle record needs 5 fields, found {}", fields.len()));
                };
                let params = AngleParams {
                    force_constant: number(k)?,
                    angle: number(theta0)?,
                };
                insert_first(&mut self.angles, angle_key(a, b, c), params, "angle");
            }
            "torsion" => {
                let [a, b, c, d, values @ ..] = fields.as_slice() else {
                    return Err("torsion record needs four atom types".to_string());
                };
                if values.is_empty() || values.len() % 3 != 0 || values.len() > 12 {
                    return Err(format!(
                        "torsion record needs 1 to 4 (amplitude, phase, periodicity) triplets, found {} values",
                        values.len()
                    ));
                }
                let terms = values
                    .chunks(3)
                    .map(|triplet| -> Result<TorsionTerm, String> {
                        Ok(TorsionTerm {
                            amplitude: number(triplet[0])?,
                            phase: number(triplet[1])?,
                            periodicity: triplet[2]
                                .parse()
                                .map_err(|_| format!("invalid periodicity '{}'", triplet[2]))?,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let key = torsion_key(
                    normalize_wildcard(a),
                    b,
                    c,
                    normalize_wildcard(d),
                );
                insert_first(&mut self.torsions, key, TorsionParams { terms }, "torsion");
            }
            "vdw" => {
                let [atom_type, radius, well_depth] = fields.as_slice() else {
                    return Err(format!("vdw record needs 3 fields, found {}", fields.len()));
                };
                let params = VdwParams {
                    radius: number(radius)?,
                    well_depth: number(well_depth)?,
                };
                insert_first(&mut self.vdw, atom_type.to_string(), params, "vdw");
            }
            "charge" => {
                let [atom_type, charge] = fields.as_slice() else {
                    return Err(format!("charge record needs 2 fields, found {}", fields.len()));
                };
                insert_first(&mut self.charges, atom_type.to_string(), number(charge)?, "charge");
            }
            other => return Err(format!("unknown keyword '{}'", other)),
        }
        Ok(())
    }
}

fn number(field: &str) -> Result<f64, String> {
    field
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("invalid number '{}'", field))
}

fn insert_first<K, V>(map: &mut HashMap<K, V>, key: K, value: V, record: &str)
where
    K: std::hash::Hash + Eq + std::fmt::Debug,
{
    match map.entry(key) {
        Entry::Occupied(entry) => debug!("Ignoring duplicate {} record for {:?}", record, entry.key()),
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
    }
}

fn normalize_wildcard(atom_type: &str) -> &str {
    if atom_type == "X" { WILDCARD } else { atom_type }
}

fn bond_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

fn angle_key(a: &str, b: &str, c: &str) -> (String, String, String) {
    let (a, c) = if a <= c { (a, c) } else { (c, a) };
    (a.to_string(), b.to_string(), c.to_string())
}

/// Reverses the whole quadruple when the central pair is out of order, so each outer
/// atom stays attached to its own center.
fn torsion_key(a: &str, b: &str, c: &str, d: &str) -> TorsionKey {
    let reverse = b > c || (b == c && a > d);
    if reverse {
        (d.to_string(), c.to_string(), b.to_string(), a.to_string())
    } else {
        (a.to_string(), b.to_string(), c.to_string(), d.to_string())
    }
}
