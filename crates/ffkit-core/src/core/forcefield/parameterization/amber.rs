use super::{NonbondedSettings, ParameterizationError, Parameterizer, atom_types, bonded_from_table};
use crate::core::forcefield::calculation::{Calculation, CalculationKind, CalculationParams};
use crate::core::forcefield::params::{ParameterTable, VdwParams};
use crate::core::models::molecule::Molecule;
use crate::core::typing::AtomType;

/// AMBER parameters: harmonic bonds and angles, Fourier torsions, 12-6 van der Waals
/// with additive radii and Coulomb electrostatics over per-atom charges.
pub struct AmberParameterizer<'a> {
    table: &'a ParameterTable,
    types: &'a [Option<AtomType>],
    charges: Vec<f64>,
    settings: NonbondedSettings,
}

impl<'a> AmberParameterizer<'a> {
    pub fn new(
        table: &'a ParameterTable,
        types: &'a [Option<AtomType>],
        molecule: &Molecule,
        settings: NonbondedSettings,
    ) -> Self {
        let charges = molecule.atoms().iter().map(|atom| atom.effective_charge()).collect();
        Self {
            table,
            types,
            charges,
            settings,
        }
    }

    fn vdw(&self, atom_type: &str) -> Result<&VdwParams, ParameterizationError> {
        self.table
            .vdw_parameters(atom_type)
            .ok_or_else(|| ParameterizationError::MissingAtomParameters {
                atom_type: atom_type.to_string(),
            })
    }
}

impl Parameterizer for AmberParameterizer<'_> {
    fn parameterize(&self, calculation: &Calculation) -> Result<CalculationParams, ParameterizationError> {
        let types = atom_types(self.types, calculation.atoms())?;
        let scale = self.settings.scale_for(calculation);

        match calculation.kind() {
            CalculationKind::VanDerWaals => {
                let (a, b) = (self.vdw(types[0])?, self.vdw(types[1])?);
                Ok(CalculationParams::LennardJones {
                    r_min: a.radius + b.radius,
                    well_depth: (a.well_depth * b.well_depth).sqrt(),
                    scale,
                })
            }
            CalculationKind::Electrostatic => {
                let atoms = calculation.atoms();
                Ok(CalculationParams::Coulomb {
                    charge_product: self.charges[atoms[0]] * self.charges[atoms[1]],
                    dielectric: self.settings.dielectric,
                    scale,
                })
            }
            kind => bonded_from_table(self.table, kind, &types, 1.0),
        }
    }
}
