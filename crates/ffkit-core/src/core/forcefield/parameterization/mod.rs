//! Resolution of per-calculation parameters for each force-field family.
//!
//! A [`Parameterizer`] sees the typed atoms of one molecule and turns a bare
//! [`Calculation`] into [`CalculationParams`], or explains why it cannot.

pub mod amber;
pub mod opls;
pub mod uff;

use super::calculation::{Calculation, CalculationKind, CalculationParams};
use super::params::{ParameterTable, TorsionParams};
use super::potentials::FourierTerm;
use crate::core::typing::AtomType;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterizationError {
    #[error("Atom {atom} has no force-field type")]
    UntypedAtom { atom: usize },
    #[error("Missing {kind} parameters for types ({})", .types.join(", "))]
    MissingParameters {
        kind: CalculationKind,
        types: Vec<String>,
    },
    #[error("Missing atom parameters for type '{atom_type}'")]
    MissingAtomParameters { atom_type: String },
    #[error("No torsion rule applies to central types ({})", .types.join(", "))]
    UnsupportedTorsion { types: Vec<String> },
    #[error("{0} calculations are not part of this force field")]
    UnsupportedKind(CalculationKind),
    #[error("Partial charges are not assigned by this force field")]
    ChargesUnavailable,
}

pub trait Parameterizer: Sync {
    fn parameterize(&self, calculation: &Calculation) -> Result<CalculationParams, ParameterizationError>;
}

/// Dielectric and 1-4 scaling shared by the nonbonded terms of a force field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonbondedSettings {
    pub dielectric: f64,
    pub one_four_scale: f64,
}

impl NonbondedSettings {
    pub fn scale_for(&self, calculation: &Calculation) -> f64 {
        if calculation.is_one_four() {
            self.one_four_scale
        } else {
            1.0
        }
    }
}

/// The type labels of a calculation's atoms, failing on the first untyped atom.
pub(crate) fn atom_types<'t>(
    types: &'t [Option<AtomType>],
    atoms: &[usize],
) -> Result<Vec<&'t str>, ParameterizationError> {
    atoms
        .iter()
        .map(|&atom| {
            types
                .get(atom)
                .and_then(Option::as_ref)
                .map(AtomType::as_str)
                .ok_or(ParameterizationError::UntypedAtom { atom })
        })
        .collect()
}

fn missing(kind: CalculationKind, types: &[&str]) -> ParameterizationError {
    ParameterizationError::MissingParameters {
        kind,
        types: types.iter().map(|t| t.to_string()).collect(),
    }
}

/// Harmonic bonds and angles and Fourier torsions straight from a parameter table.
///
/// `torsion_prefactor` multiplies every stored torsion amplitude.
pub(crate) fn bonded_from_table(
    table: &ParameterTable,
    kind: CalculationKind,
    types: &[&str],
    torsion_prefactor: f64,
) -> Result<CalculationParams, ParameterizationError> {
    match (kind, types) {
        (CalculationKind::Bond, &[a, b]) => table
            .bond_parameters(a, b)
            .map(|p| CalculationParams::HarmonicBond {
                force_constant: p.force_constant,
                length: p.length,
            })
            .ok_or_else(|| missing(kind, types)),
        (CalculationKind::Angle, &[a, b, c]) => table
            .angle_parameters(a, b, c)
            .map(|p| CalculationParams::HarmonicAngle {
                force_constant: p.force_constant,
                angle: p.angle.to_radians(),
            })
            .ok_or_else(|| missing(kind, types)),
        (CalculationKind::Torsion, &[a, b, c, d]) => table
            .torsion_parameters(a, b, c, d)
            .map(|p| CalculationParams::FourierTorsion {
                terms: fourier_terms(p, torsion_prefactor),
            })
            .ok_or_else(|| missing(kind, types)),
        _ => Err(ParameterizationError::UnsupportedKind(kind)),
    }
}

fn fourier_terms(params: &TorsionParams, prefactor: f64) -> Vec<FourierTerm> {
    params
        .terms
        .iter()
        .map(|term| FourierTerm {
            amplitude: prefactor * term.amplitude,
            phase: term.phase.to_radians(),
            periodicity: f64::from(term.periodicity),
        })
        .collect()
}
