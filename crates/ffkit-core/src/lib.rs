//! # ffkit
//!
//! Molecular mechanics force fields for small molecules: rule-based atom typing,
//! empirical parameter tables and analytic energies and gradients for the AMBER,
//! OPLS-AA and UFF families.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Molecule`, `Topology`),
//!   Cartesian geometry with analytic Jacobians, the per-family atom typers, parameter
//!   tables and the closed set of calculations with their potentials.
//!
//! - **[`engine`]: The Logic Core.** The stateful layer. A `ForceField` owns the
//!   calculation arena of one molecule, the `ForceFieldRegistry` loads each family's
//!   parameters once and hands out force fields by name, and the `EnergyMinimizer`
//!   drives a force field through its setup and minimization states.

pub mod core;
pub mod engine;
