//! # Atom Typing Module
//!
//! Rule-based classifiers that assign force-field-specific atom types from the local
//! bonding environment of each atom.
//!
//! ## Overview
//!
//! Each force-field family ships its own typer. A typer inspects an atom's element,
//! neighbor count, neighbor elements, aromaticity, ring sizes and formal charge, and
//! walks a fixed priority list of rules (specific environments before element-only
//! fallbacks). Atoms that match no rule come back as `None`; the force field surfaces
//! this as a setup failure of every calculation touching such an atom.
//!
//! ## Key Components
//!
//! - [`AtomType`] - The type label driving parameter lookup
//! - [`AtomTyper`] - The trait implemented by every family's typer
//! - [`amber`], [`opls`], [`uff`] - The three rule sets

pub mod amber;
pub mod opls;
pub mod uff;

use crate::core::topology::Topology;
use std::fmt;

/// A force-field atom type label such as `"CT"`, `"C_3"` or `"77"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomType(String);

impl AtomType {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AtomType {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait AtomTyper {
    /// Assigns a type to a single atom, or `None` when no rule matches.
    fn assign_type(&self, topology: &Topology, atom: usize) -> Option<AtomType>;

    /// Types every atom of the topology in index order.
    fn assign_types(&self, topology: &Topology) -> Vec<Option<AtomType>> {
        (0..topology.atom_count())
            .map(|atom| self.assign_type(topology, atom))
            .collect()
    }
}
