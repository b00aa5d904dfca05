use super::{NonbondedSettings, ParameterizationError, Parameterizer, atom_types, bonded_from_table};
use crate::core::forcefield::calculation::{Calculation, CalculationKind, CalculationParams};
use crate::core::forcefield::params::{ParameterTable, VdwParams};
use crate::core::typing::AtomType;

/// OPLS torsions are written as `½[V1(1 + cos φ) + V2(1 − cos 2φ) + V3(1 + cos 3φ)]`.
const TORSION_PREFACTOR: f64 = 0.5;

/// OPLS-AA parameters. Bonded records are keyed by atom class, van der Waals (σ, ε)
/// and charges by atom type; both nonbonded combining rules are geometric.
pub struct OplsParameterizer<'a> {
    table: &'a ParameterTable,
    types: &'a [Option<AtomType>],
    settings: NonbondedSettings,
}

impl<'a> OplsParameterizer<'a> {
    pub fn new(table: &'a ParameterTable, types: &'a [Option<AtomType>], settings: NonbondedSettings) -> Self {
        Self { table, types, settings }
    }

    fn missing_atom(atom_type: &str) -> ParameterizationError {
        ParameterizationError::MissingAtomParameters {
            atom_type: atom_type.to_string(),
        }
    }

    fn vdw(&self, atom_type: &str) -> Result<&VdwParams, ParameterizationError> {
        self.table
            .vdw_parameters(atom_type)
            .ok_or_else(|| Self::missing_atom(atom_type))
    }

    fn charge(&self, atom_type: &str) -> Result<f64, ParameterizationError> {
        self.table
            .charge(atom_type)
            .ok_or_else(|| Self::missing_atom(atom_type))
    }
}

impl Parameterizer for OplsParameterizer<'_> {
    fn parameterize(&self, calculation: &Calculation) -> Result<CalculationParams, ParameterizationError> {
        let types = atom_types(self.types, calculation.atoms())?;
        let scale = self.settings.scale_for(calculation);

        match calculation.kind() {
            CalculationKind::VanDerWaals => {
                let (a, b) = (self.vdw(types[0])?, self.vdw(types[1])?);
                let sigma = (a.radius * b.radius).sqrt();
                Ok(CalculationParams::LennardJones {
                    r_min: 2f64.powf(1.0 / 6.0) * sigma,
                    well_depth: (a.well_depth * b.well_depth).sqrt(),
                    scale,
                })
            }
            CalculationKind::Electrostatic => Ok(CalculationParams::Coulomb {
                charge_product: self.charge(types[0])? * self.charge(types[1])?,
                dielectric: self.settings.dielectric,
                scale,
            }),
            kind => bonded_from_table(self.table, kind, &types, TORSION_PREFACTOR),
        }
    }
}
