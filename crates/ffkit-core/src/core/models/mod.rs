//! # Core Models Module
//!
//! This module contains the data structures used to describe a molecule to the
//! force-field engine.
//!
//! ## Overview
//!
//! The models are deliberately small: a [`Molecule`](molecule::Molecule) is a graph of
//! [`Atom`](atom::Atom)s joined by [`Bond`](bond::Bond)s, with atoms addressed by their
//! insertion index. Everything a typer or a calculation needs beyond this (rings,
//! aromaticity, interaction tuples) is derived on demand by the
//! [`topology`](crate::core::topology) module.
//!
//! ## Key Components
//!
//! - [`element`] - Chemical elements by atomic number, with symbol lookup
//! - [`atom`] - Individual atom representation with position and charges
//! - [`bond`] - Bond orders and bond records
//! - [`molecule`] - The molecular graph with adjacency and coordinate access
//!
//! ## Usage
//!
//! ```ignore
//! use ffkit::core::models::{atom::Atom, bond::BondOrder, element::Element, molecule::Molecule};
//!
//! let mut molecule = Molecule::new();
//! let o = molecule.add_atom(Atom::new(Element::OXYGEN, Point3::new(0.0, 0.0, 0.0)));
//! let h = molecule.add_atom(Atom::new(Element::HYDROGEN, Point3::new(0.96, 0.0, 0.0)));
//! molecule.add_bond(o, h, BondOrder::Single)?;
//! ```

pub mod atom;
pub mod bond;
pub mod element;
pub mod molecule;
