use super::{ParameterizationError, Parameterizer, atom_types};
use crate::core::forcefield::calculation::{Calculation, CalculationKind, CalculationParams};
use crate::core::forcefield::uff_params::{UffAtomParams, uff_atom_params};
use crate::core::models::element::Element;
use crate::core::topology::Topology;
use crate::core::typing::AtomType;
use std::f64::consts::PI;

/// Bond and angle force-constant prefactor (kcal·Å/mol).
const FORCE_CONSTANT_PREFACTOR: f64 = 664.12;
const BOND_ORDER_CORRECTION: f64 = 0.1332;
/// sp3 torsional barrier of group 16 atoms other than oxygen.
const CHALCOGEN_BARRIER: f64 = 6.8;
const OXYGEN_BARRIER: f64 = 2.0;
const MIN_SIN_THETA0: f64 = 1e-3;

/// UFF parameters derived from per-atom constants and the bonding topology.
pub struct UffParameterizer<'a> {
    topology: &'a Topology<'a>,
    types: &'a [Option<AtomType>],
    one_four_scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hybridization {
    Sp3,
    Sp2,
    Other,
}

impl<'a> UffParameterizer<'a> {
    pub fn new(topology: &'a Topology<'a>, types: &'a [Option<AtomType>], one_four_scale: f64) -> Self {
        Self {
            topology,
            types,
            one_four_scale,
        }
    }

    fn atom_params(atom_type: &str) -> Result<&'static UffAtomParams, ParameterizationError> {
        uff_atom_params(atom_type).ok_or_else(|| ParameterizationError::MissingAtomParameters {
            atom_type: atom_type.to_string(),
        })
    }

    fn bond_order(&self, a: usize, b: usize) -> f64 {
        self.topology.effective_bond_order(a, b).unwrap_or(1.0)
    }

    fn bond(&self, atoms: &[usize], types: &[&str]) -> Result<CalculationParams, ParameterizationError> {
        let (pa, pb) = (Self::atom_params(types[0])?, Self::atom_params(types[1])?);
        let length = natural_bond_length(pa, pb, self.bond_order(atoms[0], atoms[1]));
        let force_constant = FORCE_CONSTANT_PREFACTOR * pa.z1 * pb.z1 / length.powi(3);
        Ok(CalculationParams::HarmonicBond {
            force_constant: 0.5 * force_constant,
            length,
        })
    }

    fn angle(&self, atoms: &[usize], types: &[&str]) -> Result<CalculationParams, ParameterizationError> {
        let pa = Self::atom_params(types[0])?;
        let pb = Self::atom_params(types[1])?;
        let pc = Self::atom_params(types[2])?;

        let theta0 = pb.theta0.to_radians();
        let cos_theta0 = theta0.cos();
        let r_ab = natural_bond_length(pa, pb, self.bond_order(atoms[0], atoms[1]));
        let r_bc = natural_bond_length(pb, pc, self.bond_order(atoms[1], atoms[2]));
        let r_ac = (r_ab * r_ab + r_bc * r_bc - 2.0 * r_ab * r_bc * cos_theta0).sqrt();

        let beta = FORCE_CONSTANT_PREFACTOR / (r_ab * r_bc);
        let force_constant = beta * (pa.z1 * pc.z1 / r_ac.powi(5))
            * r_ab
            * r_bc
            * (3.0 * r_ab * r_bc * (1.0 - cos_theta0 * cos_theta0) - r_ac * r_ac * cos_theta0);

        let sin_theta0 = match theta0.sin() {
            s if s.abs() < MIN_SIN_THETA0 => MIN_SIN_THETA0,
            s => s,
        };
        let c2 = 1.0 / (4.0 * sin_theta0 * sin_theta0);
        let c1 = -4.0 * c2 * cos_theta0;
        let c0 = c2 * (2.0 * cos_theta0 * cos_theta0 + 1.0);

        Ok(CalculationParams::CosineAngle {
            force_constant,
            c0,
            c1,
            c2,
        })
    }

    fn torsion(&self, atoms: &[usize], types: &[&str]) -> Result<CalculationParams, ParameterizationError> {
        let (b, c) = (atoms[1], atoms[2]);
        let (type_b, type_c) = (types[1], types[2]);
        let unsupported = || ParameterizationError::UnsupportedTorsion {
            types: vec![type_b.to_string(), type_c.to_string()],
        };

        let (Some(hybrid_b), Some(hybrid_c)) = (hybridization(type_b), hybridization(type_c)) else {
            return Err(unsupported());
        };
        let pb = Self::atom_params(type_b)?;
        let pc = Self::atom_params(type_c)?;
        let chalcogen_b = self.topology.element(b).is_chalcogen();
        let chalcogen_c = self.topology.element(c).is_chalcogen();
        let sp2_barrier = || 5.0 * (pb.u1 * pc.u1).sqrt() * (1.0 + 4.18 * self.bond_order(b, c).ln());

        use Hybridization::{Sp2, Sp3};
        let (barrier, periodicity, phi0) = match (hybrid_b, hybrid_c) {
            (Sp3, Sp3) if chalcogen_b && chalcogen_c => {
                let oxygen_b = self.topology.element(b) == Element::OXYGEN;
                let oxygen_c = self.topology.element(c) == Element::OXYGEN;
                let barrier = match (oxygen_b, oxygen_c) {
                    (true, true) => OXYGEN_BARRIER,
                    (true, false) | (false, true) => (OXYGEN_BARRIER * CHALCOGEN_BARRIER).sqrt(),
                    (false, false) => CHALCOGEN_BARRIER,
                };
                (barrier, 2.0, PI / 2.0)
            }
            (Sp3, Sp3) => ((pb.v1 * pc.v1).sqrt(), 3.0, PI),
            (Sp2, Sp2) => (sp2_barrier(), 2.0, PI),
            (_, Sp2) if chalcogen_b => (sp2_barrier(), 2.0, PI / 2.0),
            (Sp2, _) if chalcogen_c => (sp2_barrier(), 2.0, PI / 2.0),
            (Sp3, Sp2) | (Sp2, Sp3) => (1.0, 6.0, 0.0),
            _ => return Err(unsupported()),
        };

        Ok(CalculationParams::UffTorsion {
            barrier,
            periodicity,
            cos_n_phi0: (periodicity * phi0).cos(),
        })
    }

    /// Out-of-plane term of the center `atoms[1]`; the other three atoms are its neighbors.
    fn inversion(&self, atoms: &[usize], types: &[&str]) -> CalculationParams {
        let center = atoms[1];
        let neighbor_types = [types[0], types[2], types[3]];

        let (force_constant, c0, c1, c2) = match (self.topology.element(center), types[1]) {
            (Element::CARBON, "C_2" | "C_R") => {
                let k = if neighbor_types.contains(&"O_2") { 50.0 } else { 6.0 };
                (k, 1.0, -1.0, 0.0)
            }
            (Element::NITROGEN, "N_2" | "N_R") => (6.0, 1.0, -1.0, 0.0),
            (element, _) => match group_15_equilibrium(element) {
                Some(w0) => {
                    let w0 = w0.to_radians();
                    let c2 = 1.0;
                    let c1 = -4.0 * w0.cos();
                    let c0 = -c1 * w0.cos() - c2 * (2.0 * w0).cos();
                    (22.0 / (c0 + c1 + c2), c0, c1, c2)
                }
                None => (0.0, 0.0, 0.0, 0.0),
            },
        };

        // Each center carries three inversion terms.
        CalculationParams::Inversion {
            force_constant: force_constant / 3.0,
            c0,
            c1,
            c2,
        }
    }

    fn vdw(&self, calculation: &Calculation, types: &[&str]) -> Result<CalculationParams, ParameterizationError> {
        let (pa, pb) = (Self::atom_params(types[0])?, Self::atom_params(types[1])?);
        Ok(CalculationParams::LennardJones {
            r_min: (pa.x1 * pb.x1).sqrt(),
            well_depth: (pa.d1 * pb.d1).sqrt(),
            scale: if calculation.is_one_four() { self.one_four_scale } else { 1.0 },
        })
    }
}

impl Parameterizer for UffParameterizer<'_> {
    fn parameterize(&self, calculation: &Calculation) -> Result<CalculationParams, ParameterizationError> {
        let atoms = calculation.atoms();
        let types = atom_types(self.types, atoms)?;

        match calculation.kind() {
            CalculationKind::Bond => self.bond(atoms, &types),
            CalculationKind::Angle => self.angle(atoms, &types),
            CalculationKind::Torsion => self.torsion(atoms, &types),
            CalculationKind::Inversion => Ok(self.inversion(atoms, &types)),
            CalculationKind::VanDerWaals => self.vdw(calculation, &types),
            CalculationKind::Electrostatic => Err(ParameterizationError::ChargesUnavailable),
        }
    }
}

/// `r_ij = r_i + r_j + r_BO − r_EN`
fn natural_bond_length(a: &UffAtomParams, b: &UffAtomParams, bond_order: f64) -> f64 {
    let r_bo = -BOND_ORDER_CORRECTION * (a.r1 + b.r1) * bond_order.ln();
    let r_en = a.r1 * b.r1 * (a.chi.sqrt() - b.chi.sqrt()).powi(2) / (a.chi * a.r1 + b.chi * b.r1);
    a.r1 + b.r1 + r_bo - r_en
}

/// The hybridization character of a label, or `None` for labels too short to carry one.
fn hybridization(label: &str) -> Option<Hybridization> {
    match label.as_bytes().get(2)? {
        b'3' => Some(Hybridization::Sp3),
        b'2' | b'R' => Some(Hybridization::Sp2),
        _ => Some(Hybridization::Other),
    }
}

/// Equilibrium Wilson angle (degrees) of pyramidal group 15 centers.
fn group_15_equilibrium(element: Element) -> Option<f64> {
    match element {
        Element::PHOSPHORUS => Some(84.4339),
        Element::ARSENIC => Some(86.9735),
        Element::ANTIMONY => Some(87.7047),
        Element::BISMUTH => Some(90.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::BondOrder;
    use crate::core::models::molecule::Molecule;
    use crate::core::topology::interactions::Interactions;
    use crate::core::topology::test_molecules::{benzene, ethane};
    use crate::core::typing::{AtomTyper, uff::UffTyper};
    use nalgebra::Point3;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn parameterize(molecule: &Molecule, calculation: &Calculation) -> Result<CalculationParams, ParameterizationError> {
        let topology = Topology::new(molecule);
        let types = UffTyper.assign_types(&topology);
        UffParameterizer::new(&topology, &types, 1.0).parameterize(calculation)
    }

    #[test]
    fn carbon_carbon_single_bond_length_is_the_sum_of_radii() {
        let molecule = ethane(60.0);
        let bond = Calculation::new(CalculationKind::Bond, vec![0, 1]);
        let Ok(CalculationParams::HarmonicBond { force_constant, length }) = parameterize(&molecule, &bond) else {
            panic!("C-C bond should resolve");
        };
        assert!(f64_approx_equal(length, 2.0 * 0.757));
        assert!(f64_approx_equal(force_constant, 0.5 * 664.12 * 1.912 * 1.912 / length.powi(3)));
    }

    #[test]
    fn aromatic_bond_is_shortened_by_the_bond_order_correction() {
        let molecule = benzene();
        let bond = Calculation::new(CalculationKind::Bond, vec![0, 1]);
        let Ok(CalculationParams::HarmonicBond { length, .. }) = parameterize(&molecule, &bond) else {
            panic!("C-C bond should resolve");
        };
        let expected = 2.0 * 0.729 - 0.1332 * 2.0 * 0.729 * 1.5f64.ln();
        assert!(f64_approx_equal(length, expected));
    }

    #[test]
    fn angle_terms_vanish_at_the_natural_angle() {
        let molecule = ethane(60.0);
        let angle = Calculation::new(CalculationKind::Angle, vec![2, 0, 3]);
        let params = parameterize(&molecule, &angle).unwrap();
        let (energy, derivative) = params.evaluate(109.47f64.to_radians());
        assert!(energy.abs() < 1e-9);
        assert!(derivative.abs() < 1e-9);
        assert!(params.evaluate(1.5).0 > 0.0);
    }

    #[test]
    fn ethane_torsion_is_threefold_with_staggered_minimum() {
        let molecule = ethane(60.0);
        let torsion = Calculation::new(CalculationKind::Torsion, vec![2, 0, 1, 5]);
        let params = parameterize(&molecule, &torsion).unwrap();
        let CalculationParams::UffTorsion { barrier, periodicity, cos_n_phi0 } = params else {
            panic!("expected a UFF torsion, got {params:?}");
        };
        assert_eq!(periodicity, 3.0);
        // φ0 = 180°
        assert!(f64_approx_equal(cos_n_phi0, (3.0 * PI).cos()));
        assert!(f64_approx_equal(barrier, 2.119));

        let staggered = params.evaluate(PI / 3.0).0;
        let eclipsed = params.evaluate(0.0).0;
        assert!(staggered < eclipsed);
    }

    #[test]
    fn torsions_around_chalcogen_pairs_use_the_group_16_barrier() {
        // H-O-O-H
        let mut molecule = Molecule::new();
        let atoms: Vec<usize> = [Element::HYDROGEN, Element::OXYGEN, Element::OXYGEN, Element::HYDROGEN]
            .into_iter()
            .map(|element| molecule.add_atom(Atom::new(element, Point3::origin())))
            .collect();
        for pair in atoms.windows(2) {
            molecule.add_bond(pair[0], pair[1], BondOrder::Single).unwrap();
        }
        let torsion = Calculation::new(CalculationKind::Torsion, atoms);
        assert_eq!(
            parameterize(&molecule, &torsion),
            Ok(CalculationParams::UffTorsion {
                barrier: 2.0,
                periodicity: 2.0,
                cos_n_phi0: (2.0 * PI / 2.0).cos(),
            })
        );
    }

    #[test]
    fn torsion_through_short_labels_is_unsupported() {
        let molecule = ethane(60.0);
        let topology = Topology::new(&molecule);
        let mut types = UffTyper.assign_types(&topology);
        types[0] = Some(AtomType::from("Cl"));
        let parameterizer = UffParameterizer::new(&topology, &types, 1.0);

        let torsion = Calculation::new(CalculationKind::Torsion, vec![2, 0, 1, 5]);
        assert_eq!(
            parameterizer.parameterize(&torsion),
            Err(ParameterizationError::UnsupportedTorsion {
                types: vec!["Cl".to_string(), "C_3".to_string()]
            })
        );
    }

    #[test]
    fn aromatic_carbon_inversion_is_planar_with_a_third_of_the_force_constant() {
        let molecule = benzene();
        let interactions = Interactions::enumerate(&molecule);
        let inversion = Calculation::new(CalculationKind::Inversion, interactions.inversions[0].to_vec());
        let params = parameterize(&molecule, &inversion).unwrap();
        assert_eq!(
            params,
            CalculationParams::Inversion {
                force_constant: 2.0,
                c0: 1.0,
                c1: -1.0,
                c2: 0.0
            }
        );
        assert_eq!(params.evaluate(0.0).0, 0.0);
    }

    #[test]
    fn carbonyl_oxygen_stiffens_the_inversion() {
        // Formaldehyde H2C=O
        let mut molecule = Molecule::new();
        let c = molecule.add_atom(Atom::new(Element::CARBON, Point3::origin()));
        let o = molecule.add_atom(Atom::new(Element::OXYGEN, Point3::new(1.2, 0.0, 0.0)));
        let h1 = molecule.add_atom(Atom::new(Element::HYDROGEN, Point3::new(-0.5, 0.9, 0.0)));
        let h2 = molecule.add_atom(Atom::new(Element::HYDROGEN, Point3::new(-0.5, -0.9, 0.0)));
        molecule.add_bond(c, o, BondOrder::Double).unwrap();
        molecule.add_bond(c, h1, BondOrder::Single).unwrap();
        molecule.add_bond(c, h2, BondOrder::Single).unwrap();

        let inversion = Calculation::new(CalculationKind::Inversion, vec![o, c, h1, h2]);
        let Ok(CalculationParams::Inversion { force_constant, .. }) = parameterize(&molecule, &inversion) else {
            panic!("inversion should resolve");
        };
        assert!(f64_approx_equal(force_constant, 50.0 / 3.0));
    }

    #[test]
    fn phosphine_inversion_has_its_minimum_at_the_pyramidal_angle() {
        let mut molecule = Molecule::new();
        let p = molecule.add_atom(Atom::new(Element::PHOSPHORUS, Point3::origin()));
        for _ in 0..3 {
            let h = molecule.add_atom(Atom::new(Element::HYDROGEN, Point3::origin()));
            molecule.add_bond(p, h, BondOrder::Single).unwrap();
        }
        let topology = Topology::new(&molecule);
        // P with three neighbors has no UFF label of its own; the inversion only needs the element.
        let types = vec![
            Some(AtomType::from("P_3+3")),
            Some(AtomType::from("H_")),
            Some(AtomType::from("H_")),
            Some(AtomType::from("H_")),
        ];
        let parameterizer = UffParameterizer::new(&topology, &types, 1.0);

        let inversion = Calculation::new(CalculationKind::Inversion, vec![1, 0, 2, 3]);
        let params = parameterizer.parameterize(&inversion).unwrap();
        let w0 = 84.4339f64.to_radians();
        let (energy_at_w0, derivative_at_w0) = params.evaluate(w0);
        assert!(derivative_at_w0.abs() < 1e-9);
        assert!(params.evaluate(w0 - 0.2).0 > energy_at_w0);
        assert!(params.evaluate(w0 + 0.2).0 > energy_at_w0);
    }

    #[test]
    fn vdw_uses_geometric_means() {
        let molecule = ethane(60.0);
        let pair = Calculation::nonbonded(CalculationKind::VanDerWaals, [2, 5], true);
        assert_eq!(
            parameterize(&molecule, &pair),
            Ok(CalculationParams::LennardJones {
                r_min: (2.886f64 * 2.886).sqrt(),
                well_depth: (0.044f64 * 0.044).sqrt(),
                scale: 1.0,
            })
        );
    }

    #[test]
    fn electrostatics_always_fail_setup() {
        let molecule = ethane(60.0);
        let pair = Calculation::nonbonded(CalculationKind::Electrostatic, [2, 5], false);
        assert_eq!(
            parameterize(&molecule, &pair),
            Err(ParameterizationError::ChargesUnavailable)
        );
    }
}
