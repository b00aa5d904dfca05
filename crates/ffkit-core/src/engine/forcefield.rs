use super::config::ForceFieldConfig;
use super::error::SetupError;
use super::registry::ForceFieldKind;
use crate::core::forcefield::calculation::{Calculation, CalculationId, CalculationKind};
use crate::core::forcefield::parameterization::amber::AmberParameterizer;
use crate::core::forcefield::parameterization::opls::OplsParameterizer;
use crate::core::forcefield::parameterization::uff::UffParameterizer;
use crate::core::forcefield::parameterization::{NonbondedSettings, Parameterizer};
use crate::core::forcefield::params::ParameterTable;
use crate::core::forcefield::term::EnergyTerm;
use crate::core::models::molecule::Molecule;
use crate::core::topology::Topology;
use crate::core::topology::interactions::Interactions;
use crate::core::typing::AtomType;
use crate::core::utils::geometry::Coordinates;
use nalgebra::Vector3;
use slotmap::SlotMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Displacement (Å) of the central differences in [`ForceField::numerical_gradient`].
pub const NUMERICAL_STEP: f64 = 1e-6;

/// The complete set of calculations of one molecule under one force-field family.
///
/// A force field is created empty, filled by [`setup`](Self::setup) and then evaluated
/// any number of times against coordinates of the same molecule. Re-running setup
/// discards every calculation and builds the set again from scratch.
///
/// Evaluation methods index coordinates by atom and panic if `coordinates` holds fewer
/// positions than the molecule the force field was set up for.
#[derive(Debug, Clone)]
pub struct ForceField {
    kind: ForceFieldKind,
    parameters: Arc<ParameterTable>,
    settings: NonbondedSettings,
    electrostatics: bool,
    atom_types: Vec<Option<AtomType>>,
    calculations: SlotMap<CalculationId, Calculation>,
    setup_succeeded: bool,
}

impl ForceField {
    pub fn new(kind: ForceFieldKind, parameters: Arc<ParameterTable>, config: &ForceFieldConfig) -> Self {
        Self {
            kind,
            parameters,
            settings: NonbondedSettings {
                dielectric: config.dielectric,
                one_four_scale: config.one_four_scale.unwrap_or(kind.default_one_four_scale()),
            },
            electrostatics: config.electrostatics && kind.assigns_charges(),
            atom_types: Vec::new(),
            calculations: SlotMap::with_key(),
            setup_succeeded: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> ForceFieldKind {
        self.kind
    }

    pub fn parameters(&self) -> &ParameterTable {
        &self.parameters
    }

    pub fn settings(&self) -> NonbondedSettings {
        self.settings
    }

    /// Types every atom, enumerates the interactions of `molecule` and parameterizes one
    /// calculation per interaction.
    ///
    /// Calculations that cannot be parameterized are kept, marked as failed, and
    /// contribute nothing to energies and gradients.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyTopology`] for a molecule without atoms and
    /// [`SetupError::Incomplete`] when at least one calculation failed.
    #[instrument(skip_all, name = "force_field_setup", fields(force_field = %self.kind, atoms = molecule.atom_count()))]
    pub fn setup(&mut self, molecule: &Molecule) -> Result<(), SetupError> {
        self.calculations.clear();
        self.atom_types.clear();
        self.setup_succeeded = false;

        if molecule.is_empty() {
            warn!("Refusing to set up a force field for an empty molecule.");
            return Err(SetupError::EmptyTopology);
        }

        let topology = Topology::new(molecule);
        let types = self.kind.typer().assign_types(&topology);
        for (atom, atom_type) in types.iter().enumerate() {
            if atom_type.is_none() {
                warn!(
                    atom,
                    element = %topology.element(atom),
                    "No {} atom type matches this atom's environment.",
                    self.kind
                );
            }
        }

        let mut calculations = self.enumerate(molecule);
        match self.kind {
            ForceFieldKind::Amber => {
                let parameterizer = AmberParameterizer::new(&self.parameters, &types, molecule, self.settings);
                parameterize_all(&mut calculations, &parameterizer);
            }
            ForceFieldKind::Opls => {
                let parameterizer = OplsParameterizer::new(&self.parameters, &types, self.settings);
                parameterize_all(&mut calculations, &parameterizer);
            }
            ForceFieldKind::Uff => {
                let parameterizer = UffParameterizer::new(&topology, &types, self.settings.one_four_scale);
                parameterize_all(&mut calculations, &parameterizer);
            }
        }

        let total = calculations.len();
        let mut failed = 0;
        for calculation in calculations {
            if let Some(error) = calculation.error() {
                failed += 1;
                warn!(
                    kind = %calculation.kind(),
                    atoms = ?calculation.atoms(),
                    "Calculation setup failed: {}",
                    error
                );
            }
            self.calculations.insert(calculation);
        }
        self.atom_types = types;

        info!(total, failed, "Force field setup finished.");

        if failed > 0 {
            return Err(SetupError::Incomplete { failed, total });
        }
        self.setup_succeeded = true;
        Ok(())
    }

    fn enumerate(&self, molecule: &Molecule) -> Vec<Calculation> {
        let interactions = Interactions::enumerate(molecule);
        let mut calculations = Vec::new();

        calculations.extend(
            interactions
                .bonds
                .iter()
                .map(|atoms| Calculation::new(CalculationKind::Bond, atoms.to_vec())),
        );
        calculations.extend(
            interactions
                .angles
                .iter()
                .map(|atoms| Calculation::new(CalculationKind::Angle, atoms.to_vec())),
        );
        calculations.extend(
            interactions
                .torsions
                .iter()
                .map(|atoms| Calculation::new(CalculationKind::Torsion, atoms.to_vec())),
        );
        if self.kind.has_inversions() {
            calculations.extend(
                interactions
                    .inversions
                    .iter()
                    .map(|atoms| Calculation::new(CalculationKind::Inversion, atoms.to_vec())),
            );
        }
        for pair in &interactions.nonbonded {
            calculations.push(Calculation::nonbonded(
                CalculationKind::VanDerWaals,
                pair.atoms,
                pair.one_four,
            ));
            if self.electrostatics {
                calculations.push(Calculation::nonbonded(
                    CalculationKind::Electrostatic,
                    pair.atoms,
                    pair.one_four,
                ));
            }
        }
        calculations
    }

    /// Whether the last setup parameterized every calculation of a non-empty molecule.
    #[inline]
    pub fn is_setup(&self) -> bool {
        self.setup_succeeded
    }

    pub fn atom_count(&self) -> usize {
        self.atom_types.len()
    }

    pub fn atom_types(&self) -> &[Option<AtomType>] {
        &self.atom_types
    }

    pub fn calculation_count(&self) -> usize {
        self.calculations.len()
    }

    pub fn calculations(&self) -> impl Iterator<Item = (CalculationId, &Calculation)> {
        self.calculations.iter()
    }

    pub fn calculation(&self, id: CalculationId) -> Option<&Calculation> {
        self.calculations.get(id)
    }

    pub fn failed_calculations(&self) -> impl Iterator<Item = (CalculationId, &Calculation)> {
        self.calculations.iter().filter(|(_, calculation)| !calculation.is_setup())
    }

    fn active_calculations(&self) -> impl Iterator<Item = &Calculation> {
        self.calculations.values().filter(|calculation| calculation.is_setup())
    }

    /// Total energy in kcal/mol.
    pub fn energy(&self, coordinates: &Coordinates) -> f64 {
        self.active_calculations()
            .map(|calculation| calculation.energy(coordinates))
            .sum()
    }

    pub fn energy_terms(&self, coordinates: &Coordinates) -> EnergyTerm {
        let mut terms = EnergyTerm::default();
        for calculation in self.active_calculations() {
            *terms.component_mut(calculation.kind()) += calculation.energy(coordinates);
        }
        terms
    }

    /// Energy of every calculation that involves `atom`.
    pub fn atom_energy(&self, atom: usize, coordinates: &Coordinates) -> f64 {
        self.active_calculations()
            .filter(|calculation| calculation.contains(atom))
            .map(|calculation| calculation.energy(coordinates))
            .sum()
    }

    /// Analytic energy gradient in kcal/(mol·Å), one vector per atom.
    pub fn gradient(&self, coordinates: &Coordinates) -> Vec<Vector3<f64>> {
        let mut gradient = vec![Vector3::zeros(); self.atom_count()];
        for calculation in self.active_calculations() {
            calculation.accumulate_gradient(coordinates, &mut gradient);
        }
        gradient
    }

    /// Central-difference gradient of [`energy`](Self::energy).
    pub fn numerical_gradient(&self, coordinates: &Coordinates) -> Vec<Vector3<f64>> {
        let atom_gradient = |atom: usize| -> Vector3<f64> {
            let mut displaced = coordinates.clone();
            let original = coordinates.position(atom);
            let mut gradient = Vector3::zeros();
            for axis in 0..3 {
                let mut step = Vector3::zeros();
                step[axis] = NUMERICAL_STEP;

                displaced.set_position(atom, original + step);
                let forward = self.energy(&displaced);
                displaced.set_position(atom, original - step);
                let backward = self.energy(&displaced);

                gradient[axis] = (forward - backward) / (2.0 * NUMERICAL_STEP);
            }
            gradient
        };

        #[cfg(feature = "parallel")]
        let gradient = (0..self.atom_count()).into_par_iter().map(atom_gradient).collect();

        #[cfg(not(feature = "parallel"))]
        let gradient = (0..self.atom_count()).map(atom_gradient).collect();

        gradient
    }

    /// Largest per-atom gradient norm.
    pub fn largest_gradient(&self, coordinates: &Coordinates) -> f64 {
        self.gradient(coordinates)
            .iter()
            .map(|vector| vector.norm())
            .fold(0.0, f64::max)
    }

    /// `√(Σ|g|² / 3N)`, or zero for a force field without atoms.
    pub fn rms_gradient(&self, coordinates: &Coordinates) -> f64 {
        let gradient = self.gradient(coordinates);
        if gradient.is_empty() {
            return 0.0;
        }
        let sum_of_squares: f64 = gradient.iter().map(|vector| vector.norm_squared()).sum();
        (sum_of_squares / (3 * gradient.len()) as f64).sqrt()
    }

    pub fn is_converged(&self, coordinates: &Coordinates, threshold: f64) -> bool {
        self.rms_gradient(coordinates) <= threshold
    }
}

fn parameterize_all<P: Parameterizer>(calculations: &mut [Calculation], parameterizer: &P) {
    #[cfg(feature = "parallel")]
    calculations.par_iter_mut().for_each(|calculation| {
        calculation.setup(parameterizer);
    });

    #[cfg(not(feature = "parallel"))]
    calculations.iter_mut().for_each(|calculation| {
        calculation.setup(parameterizer);
    });
}
