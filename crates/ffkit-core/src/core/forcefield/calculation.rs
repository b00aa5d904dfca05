use super::parameterization::{ParameterizationError, Parameterizer};
use super::potentials::{self, FourierTerm};
use crate::core::utils::geometry::Coordinates;
use nalgebra::Vector3;
use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    /// Stable handle of a calculation inside a force field's arena.
    pub struct CalculationId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalculationKind {
    Bond,
    Angle,
    Torsion,
    Inversion,
    VanDerWaals,
    Electrostatic,
}

impl CalculationKind {
    pub const ALL: [CalculationKind; 6] = [
        CalculationKind::Bond,
        CalculationKind::Angle,
        CalculationKind::Torsion,
        CalculationKind::Inversion,
        CalculationKind::VanDerWaals,
        CalculationKind::Electrostatic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CalculationKind::Bond => "bond",
            CalculationKind::Angle => "angle",
            CalculationKind::Torsion => "torsion",
            CalculationKind::Inversion => "inversion",
            CalculationKind::VanDerWaals => "van der waals",
            CalculationKind::Electrostatic => "electrostatic",
        }
    }

    /// Number of atoms a calculation of this kind spans.
    pub fn atom_count(self) -> usize {
        match self {
            CalculationKind::Bond | CalculationKind::VanDerWaals | CalculationKind::Electrostatic => 2,
            CalculationKind::Angle => 3,
            CalculationKind::Torsion | CalculationKind::Inversion => 4,
        }
    }

    pub fn is_nonbonded(self) -> bool {
        matches!(self, CalculationKind::VanDerWaals | CalculationKind::Electrostatic)
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved constants of one calculation. Angles are in radians.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationParams {
    /// `k·(r − r0)²`
    HarmonicBond { force_constant: f64, length: f64 },
    /// `k·(θ − θ0)²`
    HarmonicAngle { force_constant: f64, angle: f64 },
    /// `k·(c0 + c1·cos θ + c2·cos 2θ)`
    CosineAngle { force_constant: f64, c0: f64, c1: f64, c2: f64 },
    FourierTorsion { terms: Vec<FourierTerm> },
    UffTorsion { barrier: f64, periodicity: f64, cos_n_phi0: f64 },
    /// `k·(c0 + c1·cos w + c2·cos 2w)` over the Wilson angle.
    Inversion { force_constant: f64, c0: f64, c1: f64, c2: f64 },
    LennardJones { r_min: f64, well_depth: f64, scale: f64 },
    Coulomb { charge_product: f64, dielectric: f64, scale: f64 },
}

impl CalculationParams {
    /// Energy and its derivative with respect to the internal coordinate.
    pub fn evaluate(&self, value: f64) -> (f64, f64) {
        match *self {
            CalculationParams::HarmonicBond { force_constant, length } => {
                potentials::harmonic(value, length, force_constant)
            }
            CalculationParams::HarmonicAngle { force_constant, angle } => {
                potentials::harmonic(value, angle, force_constant)
            }
            CalculationParams::CosineAngle { force_constant, c0, c1, c2 }
            | CalculationParams::Inversion { force_constant, c0, c1, c2 } => {
                potentials::cosine_expansion(value, force_constant, c0, c1, c2)
            }
            CalculationParams::FourierTorsion { ref terms } => potentials::fourier_series(value, terms),
            CalculationParams::UffTorsion {
                barrier,
                periodicity,
                cos_n_phi0,
            } => potentials::uff_torsion(value, barrier, periodicity, cos_n_phi0),
            CalculationParams::LennardJones { r_min, well_depth, scale } => {
                let (energy, derivative) = potentials::lennard_jones_12_6(value, r_min, well_depth);
                (scale * energy, scale * derivative)
            }
            CalculationParams::Coulomb {
                charge_product,
                dielectric,
                scale,
            } => {
                let (energy, derivative) = potentials::coulomb(value, charge_product, dielectric);
                (scale * energy, scale * derivative)
            }
        }
    }
}

/// One physical interaction: its kind, the atoms it spans and, once set up, the
/// parameters it evaluates with.
///
/// Atom order follows the interaction tuple: `(a, b)` for bonds and nonbonded pairs,
/// `(a, center, c)` for angles, `(a, b, c, d)` for torsions and `(a, center, c, d)`
/// for inversions, with `d` the out-of-plane atom.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    kind: CalculationKind,
    atoms: Vec<usize>,
    one_four: bool,
    outcome: Option<Result<CalculationParams, ParameterizationError>>,
}

impl Calculation {
    pub fn new(kind: CalculationKind, atoms: Vec<usize>) -> Self {
        debug_assert_eq!(atoms.len(), kind.atom_count());
        Self {
            kind,
            atoms,
            one_four: false,
            outcome: None,
        }
    }

    /// A nonbonded calculation, flagged when its atoms are 1-4 related.
    pub fn nonbonded(kind: CalculationKind, atoms: [usize; 2], one_four: bool) -> Self {
        Self {
            one_four,
            ..Self::new(kind, atoms.to_vec())
        }
    }

    #[inline]
    pub fn kind(&self) -> CalculationKind {
        self.kind
    }

    #[inline]
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    #[inline]
    pub fn is_one_four(&self) -> bool {
        self.one_four
    }

    pub fn contains(&self, atom: usize) -> bool {
        self.atoms.contains(&atom)
    }

    /// Resolves parameters, replacing any earlier outcome. Returns whether setup succeeded.
    pub fn setup<P>(&mut self, parameterizer: &P) -> bool
    where
        P: Parameterizer + ?Sized,
    {
        let outcome = parameterizer.parameterize(self);
        let success = outcome.is_ok();
        self.outcome = Some(outcome);
        success
    }

    #[inline]
    pub fn is_setup(&self) -> bool {
        matches!(self.outcome, Some(Ok(_)))
    }

    pub fn params(&self) -> Option<&CalculationParams> {
        self.outcome.as_ref()?.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ParameterizationError> {
        self.outcome.as_ref()?.as_ref().err()
    }

    /// The internal coordinate this calculation depends on (Å or radians).
    pub fn coordinate(&self, coordinates: &Coordinates) -> f64 {
        let a = &self.atoms;
        match self.kind {
            CalculationKind::Bond | CalculationKind::VanDerWaals | CalculationKind::Electrostatic => {
                coordinates.distance(a[0], a[1])
            }
            CalculationKind::Angle => coordinates.angle(a[0], a[1], a[2]),
            CalculationKind::Torsion => coordinates.torsion_angle(a[0], a[1], a[2], a[3]),
            CalculationKind::Inversion => coordinates.wilson_angle(a[0], a[1], a[2], a[3]),
        }
    }

    fn coordinate_gradient(&self, coordinates: &Coordinates) -> Vec<Vector3<f64>> {
        let a = &self.atoms;
        match self.kind {
            CalculationKind::Bond | CalculationKind::VanDerWaals | CalculationKind::Electrostatic => {
                coordinates.distance_gradient(a[0], a[1]).to_vec()
            }
            CalculationKind::Angle => coordinates.angle_gradient(a[0], a[1], a[2]).to_vec(),
            CalculationKind::Torsion => coordinates.torsion_angle_gradient(a[0], a[1], a[2], a[3]).to_vec(),
            CalculationKind::Inversion => coordinates.wilson_angle_gradient(a[0], a[1], a[2], a[3]).to_vec(),
        }
    }

    /// Energy in kcal/mol; zero when setup has not succeeded.
    pub fn energy(&self, coordinates: &Coordinates) -> f64 {
        self.params()
            .map_or(0.0, |params| params.evaluate(self.coordinate(coordinates)).0)
    }

    /// Energy gradient with respect to each participating atom, in atom order.
    pub fn gradient(&self, coordinates: &Coordinates) -> Vec<Vector3<f64>> {
        let Some(params) = self.params() else {
            return vec![Vector3::zeros(); self.atoms.len()];
        };
        let (_, derivative) = params.evaluate(self.coordinate(coordinates));
        let mut gradient = self.coordinate_gradient(coordinates);
        for vector in &mut gradient {
            *vector *= derivative;
        }
        gradient
    }

    /// Adds this calculation's contribution into a per-atom gradient array.
    pub fn accumulate_gradient(&self, coordinates: &Coordinates, gradient: &mut [Vector3<f64>]) {
        if !self.is_setup() {
            return;
        }
        for (&atom, vector) in self.atoms.iter().zip(self.gradient(coordinates)) {
            gradient[atom] += vector;
        }
    }
}
