use super::calculation::CalculationKind;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Energy broken down by interaction kind, in kcal/mol.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyTerm {
    pub bond: f64,
    pub angle: f64,
    pub torsion: f64,
    pub inversion: f64,
    pub vdw: f64,
    pub electrostatic: f64,
}

impl EnergyTerm {
    /// A term holding `energy` under the component for `kind`.
    pub fn of_kind(kind: CalculationKind, energy: f64) -> Self {
        let mut term = Self::default();
        *term.component_mut(kind) = energy;
        term
    }

    pub fn component(&self, kind: CalculationKind) -> f64 {
        match kind {
            CalculationKind::Bond => self.bond,
            CalculationKind::Angle => self.angle,
            CalculationKind::Torsion => self.torsion,
            CalculationKind::Inversion => self.inversion,
            CalculationKind::VanDerWaals => self.vdw,
            CalculationKind::Electrostatic => self.electrostatic,
        }
    }

    pub fn component_mut(&mut self, kind: CalculationKind) -> &mut f64 {
        match kind {
            CalculationKind::Bond => &mut self.bond,
            CalculationKind::Angle => &mut self.angle,
            CalculationKind::Torsion => &mut self.torsion,
            CalculationKind::Inversion => &mut self.inversion,
            CalculationKind::VanDerWaals => &mut self.vdw,
            CalculationKind::Electrostatic => &mut self.electrostatic,
        }
    }

    #[inline]
    pub fn bonded(&self) -> f64 {
        self.bond + self.angle + self.torsion + self.inversion
    }

    #[inline]
    pub fn nonbonded(&self) -> f64 {
        self.vdw + self.electrostatic
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.bonded() + self.nonbonded()
    }
}

impl Add for EnergyTerm {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            bond: self.bond + rhs.bond,
            angle: self.angle + rhs.angle,
            torsion: self.torsion + rhs.torsion,
            inversion: self.inversion + rhs.inversion,
            vdw: self.vdw + rhs.vdw,
            electrostatic: self.electrostatic + rhs.electrostatic,
        }
    }
}

impl AddAssign for EnergyTerm {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for EnergyTerm {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
