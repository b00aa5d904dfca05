//! # Core Module
//!
//! Stateless building blocks of the force-field engine.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Elements, atoms, bonds and molecules
//! - **Connectivity** ([`topology`]) - Ring perception, aromaticity and interaction enumeration
//! - **Atom Typing** ([`typing`]) - Rule-based AMBER, OPLS-AA and UFF type assignment
//! - **Energy Terms** ([`forcefield`]) - Parameter tables, potentials and calculations
//! - **Geometry** ([`utils`]) - Internal coordinates and their Cartesian gradients
//!
//! ## Key Capabilities
//!
//! - **Deterministic typing** from the static molecular graph in a single pass
//! - **Order-independent parameter lookup** with wildcard torsion records
//! - **Analytic gradients** for every interaction kind through the chain rule

pub mod forcefield;
pub mod models;
pub mod topology;
pub mod typing;
pub mod utils;
