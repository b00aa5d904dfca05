//! # Force Field Module
//!
//! Parameters, potentials and per-interaction calculations of the molecular mechanics
//! force fields.
//!
//! ## Overview
//!
//! A force field evaluates a molecule's energy as a sum of independent calculations,
//! one per physical interaction instance:
//!
//! - **Bond stretch** and **angle bend**, harmonic (AMBER, OPLS) or UFF's cosine form
//! - **Torsion**, a Fourier series (AMBER, OPLS) or UFF's single hybridization-driven term
//! - **Out-of-plane inversion** over the Wilson angle of trigonal centers (UFF)
//! - **Van der Waals** 12-6 Lennard-Jones with family-specific combining rules
//! - **Electrostatics** with Coulomb's law, scaled for 1-4 pairs
//!
//! ## Key Components
//!
//! - [`params`] - Line-oriented parameter tables with order-independent lookups
//! - [`calculation`] - Calculation records and their analytic energy and gradient
//! - [`parameterization`] - Per-family resolution of calculation parameters
//! - [`potentials`] - Energy functions of a single internal coordinate
//! - [`term`] - Energy breakdown by interaction kind

pub mod calculation;
pub mod parameterization;
pub mod params;
pub mod potentials;
pub mod term;
pub mod uff_params;
