//! # Engine Module
//!
//! The stateful layer of ffkit: force fields built for one molecule, the registry that
//! creates them and the state machine that drives them through a minimization.
//!
//! ## Overview
//!
//! A [`forcefield::ForceField`] types the atoms of a molecule, enumerates every
//! interaction from its connectivity and parameterizes one calculation per interaction.
//! Calculations that cannot be parameterized are kept and reported, so a partially
//! parameterized force field still yields diagnostic energies.
//!
//! ## Architecture
//!
//! - **Force Field** ([`forcefield`]) - Calculation arena, setup, energy and gradient aggregation
//! - **Registry** ([`registry`]) - Force-field selection by name and shared parameter tables
//! - **Minimizer** ([`minimizer`]) - Setup and step state machine around one force field
//! - **Configuration** ([`config`]) - Nonbonded settings, parameter overrides and stopping criteria
//! - **State Reporting** ([`progress`]) - Observer hook for minimizer state changes
//! - **Error Handling** ([`error`]) - Setup and registry errors
//!
//! ## Key Capabilities
//!
//! - **Parallel parameterization** of independent calculations (feature `parallel`)
//! - **Per-kind energy breakdown** and per-atom energies
//! - **Analytic and central-difference gradients** for validation and convergence checks

pub mod config;
pub mod error;
pub mod forcefield;
pub mod minimizer;
pub mod progress;
pub mod registry;
