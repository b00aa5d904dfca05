//! Energy functions of a single internal coordinate.
//!
//! Every function returns `(energy, derivative)` where the derivative is taken with
//! respect to the coordinate argument. Calculations chain the derivative through the
//! geometric Jacobian of that coordinate.

const COULOMB_CONSTANT: f64 = 332.0637; // In kcal·Å/(mol·e²)

/// Distances below this are treated as overlapping atoms.
const MIN_DISTANCE: f64 = 1e-6;
const OVERLAP_ENERGY: f64 = 1e10;

/// One term `V·(1 + cos(n·φ − γ))` of a torsion Fourier series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierTerm {
    pub amplitude: f64,
    /// Phase γ in radians.
    pub phase: f64,
    pub periodicity: f64,
}

/// `k·(x − x0)²`
#[inline]
pub fn harmonic(value: f64, reference: f64, force_constant: f64) -> (f64, f64) {
    let delta = value - reference;
    (force_constant * delta * delta, 2.0 * force_constant * delta)
}

/// `k·(c0 + c1·cos x + c2·cos 2x)`, the UFF angle and inversion form.
#[inline]
pub fn cosine_expansion(value: f64, force_constant: f64, c0: f64, c1: f64, c2: f64) -> (f64, f64) {
    let energy = force_constant * (c0 + c1 * value.cos() + c2 * (2.0 * value).cos());
    let derivative = -force_constant * (c1 * value.sin() + 2.0 * c2 * (2.0 * value).sin());
    (energy, derivative)
}

/// `Σ Vₙ·(1 + cos(n·φ − γₙ))`
#[inline]
pub fn fourier_series(phi: f64, terms: &[FourierTerm]) -> (f64, f64) {
    terms.iter().fold((0.0, 0.0), |(energy, derivative), term| {
        let argument = term.periodicity * phi - term.phase;
        (
            energy + term.amplitude * (1.0 + argument.cos()),
            derivative - term.amplitude * term.periodicity * argument.sin(),
        )
    })
}

/// `½V·(1 − cos(n·φ0)·cos(n·φ))`, the single-term UFF torsion.
#[inline]
pub fn uff_torsion(phi: f64, barrier: f64, periodicity: f64, cos_n_phi0: f64) -> (f64, f64) {
    let n_phi = periodicity * phi;
    let energy = 0.5 * barrier * (1.0 - cos_n_phi0 * n_phi.cos());
    let derivative = 0.5 * barrier * periodicity * cos_n_phi0 * n_phi.sin();
    (energy, derivative)
}

#[inline]
pub fn lennard_jones_12_6(dist: f64, r_min: f64, well_depth: f64) -> (f64, f64) {
    if dist < MIN_DISTANCE {
        return (OVERLAP_ENERGY, 0.0);
    }
    let rho = r_min / dist;
    let rho6 = rho.powi(6);
    let rho12 = rho6 * rho6;
    let energy = well_depth * (rho12 - 2.0 * rho6);
    let derivative = -12.0 * well_depth * (rho12 - rho6) / dist;
    (energy, derivative)
}

#[inline]
pub fn coulomb(dist: f64, charge_product: f64, dielectric: f64) -> (f64, f64) {
    if dist < MIN_DISTANCE {
        return (charge_product.signum() * OVERLAP_ENERGY, 0.0);
    }
    let energy = COULOMB_CONSTANT * charge_product / (dielectric * dist);
    (energy, -energy / dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-9;
    const STEP: f64 = 1e-6;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn assert_derivative_matches<F>(f: F, x: f64)
    where
        F: Fn(f64) -> (f64, f64),
    {
        let numeric = (f(x + STEP).0 - f(x - STEP).0) / (2.0 * STEP);
        let analytic = f(x).1;
        assert!(
            (numeric - analytic).abs() < 1e-5 * analytic.abs().max(1.0),
            "analytic {analytic} vs numeric {numeric}"
        );
    }

    #[test]
    fn harmonic_is_zero_at_reference_and_positive_elsewhere() {
        assert_eq!(harmonic(1.09, 1.09, 340.0), (0.0, 0.0));
        assert!(harmonic(1.2, 1.09, 340.0).0 > 0.0);
        assert!(harmonic(0.9, 1.09, 340.0).0 > 0.0);
        assert_derivative_matches(|x| harmonic(x, 1.09, 340.0), 1.3);
    }

    #[test]
    fn cosine_expansion_has_its_minimum_at_the_reference_angle() {
        let theta0 = 109.47f64.to_radians();
        let c2 = 1.0 / (4.0 * theta0.sin().powi(2));
        let c1 = -4.0 * c2 * theta0.cos();
        let c0 = c2 * (2.0 * theta0.cos().powi(2) + 1.0);

        let (energy, derivative) = cosine_expansion(theta0, 100.0, c0, c1, c2);
        assert!(f64_approx_equal(energy, 0.0));
        assert!(derivative.abs() < 1e-9);
        assert!(cosine_expansion(theta0 + 0.1, 100.0, c0, c1, c2).0 > 0.0);
        assert_derivative_matches(|x| cosine_expansion(x, 100.0, c0, c1, c2), 1.7);
    }

    #[test]
    fn fourier_series_sums_all_terms() {
        let terms = [
            FourierTerm { amplitude: 1.0, phase: 0.0, periodicity: 1.0 },
            FourierTerm { amplitude: 0.5, phase: PI, periodicity: 2.0 },
        ];
        // φ = 0: 1·(1 + 1) + 0.5·(1 + cos(−π)) = 2
        assert!(f64_approx_equal(fourier_series(0.0, &terms).0, 2.0));
        assert_derivative_matches(|x| fourier_series(x, &terms), 0.7);
        assert_eq!(fourier_series(1.0, &[]), (0.0, 0.0));
    }

    #[test]
    fn uff_torsion_threefold_prefers_staggered() {
        let cos_n_phi0 = (3.0 * PI).cos();
        let staggered = uff_torsion(PI / 3.0, 2.119, 3.0, cos_n_phi0).0;
        let eclipsed = uff_torsion(0.0, 2.119, 3.0, cos_n_phi0).0;
        assert!(f64_approx_equal(staggered, 0.0));
        assert!(f64_approx_equal(eclipsed, 2.119));
        assert_derivative_matches(|x| uff_torsion(x, 2.119, 3.0, cos_n_phi0), 0.4);
    }

    #[test]
    fn lennard_jones_at_minimum_distance_returns_negative_well_depth() {
        let (energy, derivative) = lennard_jones_12_6(2.0, 2.0, 10.0);
        assert!(f64_approx_equal(energy, -10.0));
        assert!(f64_approx_equal(derivative, 0.0));
        assert_derivative_matches(|x| lennard_jones_12_6(x, 2.0, 10.0), 2.4);
    }

    #[test]
    fn lennard_jones_at_very_small_distance_returns_large_positive_energy() {
        let (energy, _) = lennard_jones_12_6(1e-7, 2.0, 10.0);
        assert!(f64_approx_equal(energy, 1e10));
    }

    #[test]
    fn coulomb_follows_inverse_distance() {
        let (energy, _) = coulomb(2.0, -1.0, 4.0);
        assert!(f64_approx_equal(energy, -332.0637 / 8.0));
        assert_derivative_matches(|x| coulomb(x, 0.4 * -0.8, 1.0), 3.1);
    }

    #[test]
    fn coulomb_at_very_small_distance_is_signed_by_the_charges() {
        assert!(f64_approx_equal(coulomb(1e-7, 1.0, 1.0).0, 1e10));
        assert!(f64_approx_equal(coulomb(1e-7, -1.0, 1.0).0, -1e10));
    }
}
