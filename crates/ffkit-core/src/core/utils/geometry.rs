use nalgebra::{Point3, Vector3};

const DEGENERATE_EPSILON: f64 = 1e-8;

/// Cartesian coordinates for every atom of a molecule, indexed like the molecule's atoms.
///
/// Besides storage this type provides the internal coordinates the force-field terms are
/// written in (distance, bond angle, dihedral angle, Wilson out-of-plane angle) together
/// with their analytic gradients. Each gradient helper returns one vector per participating
/// atom, in the same order as the atom arguments. Degenerate geometries (coincident atoms,
/// collinear dihedral arms) yield zero vectors instead of NaN.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Coordinates {
    positions: Vec<Point3<f64>>,
}

impl Coordinates {
    pub fn new(positions: Vec<Point3<f64>>) -> Self {
        Self { positions }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    #[inline]
    pub fn position(&self, index: usize) -> Point3<f64> {
        self.positions[index]
    }

    pub fn set_position(&mut self, index: usize, position: Point3<f64>) {
        self.positions[index] = position;
    }

    pub fn move_by(&mut self, index: usize, delta: Vector3<f64>) {
        self.positions[index] += delta;
    }

    pub fn distance(&self, a: usize, b: usize) -> f64 {
        (self.positions[a] - self.positions[b]).norm()
    }

    /// Bond angle at `b` in radians.
    pub fn angle(&self, a: usize, b: usize, c: usize) -> f64 {
        let ba = self.positions[a] - self.positions[b];
        let bc = self.positions[c] - self.positions[b];
        let denominator = ba.norm() * bc.norm();
        if denominator < DEGENERATE_EPSILON {
            return 0.0;
        }
        (ba.dot(&bc) / denominator).clamp(-1.0, 1.0).acos()
    }

    /// Signed dihedral angle a-b-c-d around the b-c bond, in radians within (-pi, pi].
    pub fn torsion_angle(&self, a: usize, b: usize, c: usize, d: usize) -> f64 {
        let Some(arms) = TorsionArms::new(self, a, b, c, d) else {
            return 0.0;
        };
        let sin_term = arms.b.cross(&arms.a).dot(&arms.g) / arms.g_norm;
        let cos_term = arms.a.dot(&arms.b);
        sin_term.atan2(cos_term)
    }

    /// Wilson out-of-plane angle of the bond `b`-`d` relative to the plane `a`-`b`-`c`, in radians.
    ///
    /// `b` is the central atom bonded to the other three.
    pub fn wilson_angle(&self, a: usize, b: usize, c: usize, d: usize) -> f64 {
        let Some(frame) = WilsonFrame::new(self, a, b, c, d) else {
            return 0.0;
        };
        frame.sin_w().clamp(-1.0, 1.0).asin()
    }

    pub fn distance_gradient(&self, a: usize, b: usize) -> [Vector3<f64>; 2] {
        let ab = self.positions[a] - self.positions[b];
        let r = ab.norm();
        if r < DEGENERATE_EPSILON {
            return [Vector3::zeros(); 2];
        }
        let unit = ab / r;
        [unit, -unit]
    }

    pub fn angle_gradient(&self, a: usize, b: usize, c: usize) -> [Vector3<f64>; 3] {
        let ba = self.positions[a] - self.positions[b];
        let bc = self.positions[c] - self.positions[b];
        let (r_ba, r_bc) = (ba.norm(), bc.norm());
        if r_ba < DEGENERATE_EPSILON || r_bc < DEGENERATE_EPSILON {
            return [Vector3::zeros(); 3];
        }
        let u = ba / r_ba;
        let v = bc / r_bc;
        let cos_theta = u.dot(&v).clamp(-1.0, 1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        if sin_theta < DEGENERATE_EPSILON {
            return [Vector3::zeros(); 3];
        }

        let grad_a = -(v - u * cos_theta) / (r_ba * sin_theta);
        let grad_c = -(u - v * cos_theta) / (r_bc * sin_theta);
        [grad_a, -(grad_a + grad_c), grad_c]
    }

    pub fn torsion_angle_gradient(&self, a: usize, b: usize, c: usize, d: usize) -> [Vector3<f64>; 4] {
        let Some(arms) = TorsionArms::new(self, a, b, c, d) else {
            return [Vector3::zeros(); 4];
        };
        let a_sq = arms.a.norm_squared();
        let b_sq = arms.b.norm_squared();
        let g = arms.g_norm;
        let fg = arms.f.dot(&arms.g);
        let hg = arms.h.dot(&arms.g);

        let grad_a = -arms.a * (g / a_sq);
        let grad_d = arms.b * (g / b_sq);
        let shared_a = arms.a * (fg / (a_sq * g));
        let shared_b = arms.b * (hg / (b_sq * g));
        let grad_b = arms.a * (g / a_sq) + shared_a - shared_b;
        let grad_c = -arms.b * (g / b_sq) - shared_a + shared_b;
        [grad_a, grad_b, grad_c, grad_d]
    }

    pub fn wilson_angle_gradient(&self, a: usize, b: usize, c: usize, d: usize) -> [Vector3<f64>; 4] {
        let Some(frame) = WilsonFrame::new(self, a, b, c, d) else {
            return [Vector3::zeros(); 4];
        };
        let w = frame.sin_w().clamp(-1.0, 1.0).asin();
        let cos_w = w.cos();
        if cos_w < DEGENERATE_EPSILON {
            return [Vector3::zeros(); 4];
        }
        let tan_w = w.tan();
        let (e1, e3, e4) = (frame.e1, frame.e3, frame.e4);
        let (cos_theta, sin_theta) = (frame.cos_theta, frame.sin_theta);
        let sin_theta_sq = sin_theta * sin_theta;
        let scale = 1.0 / (cos_w * sin_theta);

        let grad_a =
            (e3.cross(&e4) * scale - (e1 - e3 * cos_theta) * (tan_w / sin_theta_sq)) / frame.r1;
        let grad_c =
            (e4.cross(&e1) * scale - (e3 - e1 * cos_theta) * (tan_w / sin_theta_sq)) / frame.r3;
        let grad_d = (e1.cross(&e3) * scale - e4 * tan_w) / frame.r4;
        [grad_a, -(grad_a + grad_c + grad_d), grad_c, grad_d]
    }
}

struct TorsionArms {
    f: Vector3<f64>,
    g: Vector3<f64>,
    h: Vector3<f64>,
    a: Vector3<f64>,
    b: Vector3<f64>,
    g_norm: f64,
}

impl TorsionArms {
    fn new(coords: &Coordinates, a: usize, b: usize, c: usize, d: usize) -> Option<Self> {
        let p = &coords.positions;
        let f = p[a] - p[b];
        let g = p[b] - p[c];
        let h = p[d] - p[c];
        let normal_a = f.cross(&g);
        let normal_b = h.cross(&g);
        let g_norm = g.norm();
        if g_norm < DEGENERATE_EPSILON
            || normal_a.norm_squared() < DEGENERATE_EPSILON
            || normal_b.norm_squared() < DEGENERATE_EPSILON
        {
            return None;
        }
        Some(Self {
            f,
            g,
            h,
            a: normal_a,
            b: normal_b,
            g_norm,
        })
    }
}

struct WilsonFrame {
    e1: Vector3<f64>,
    e3: Vector3<f64>,
    e4: Vector3<f64>,
    r1: f64,
    r3: f64,
    r4: f64,
    cos_theta: f64,
    sin_theta: f64,
}

impl WilsonFrame {
    fn new(coords: &Coordinates, a: usize, b: usize, c: usize, d: usize) -> Option<Self> {
        let p = &coords.positions;
        let ba = p[a] - p[b];
        let bc = p[c] - p[b];
        let bd = p[d] - p[b];
        let (r1, r3, r4) = (ba.norm(), bc.norm(), bd.norm());
        if r1 < DEGENERATE_EPSILON || r3 < DEGENERATE_EPSILON || r4 < DEGENERATE_EPSILON {
            return None;
        }
        let (e1, e3, e4) = (ba / r1, bc / r3, bd / r4);
        let cos_theta = e1.dot(&e3).clamp(-1.0, 1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        if sin_theta < DEGENERATE_EPSILON {
            return None;
        }
        Some(Self {
            e1,
            e3,
            e4,
            r1,
            r3,
            r4,
            cos_theta,
            sin_theta,
        })
    }

    fn sin_w(&self) -> f64 {
        self.e1.cross(&self.e3).dot(&self.e4) / self.sin_theta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-6;
    const STEP: f64 = 1e-6;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn skewed_quad() -> Coordinates {
        Coordinates::new(vec![
            Point3::new(0.3, 1.2, -0.4),
            Point3::new(0.0, 0.1, 0.0),
            Point3::new(1.4, -0.2, 0.3),
            Point3::new(1.9, 0.4, 1.3),
        ])
    }

    fn pyramid() -> Coordinates {
        Coordinates::new(vec![
            Point3::new(1.0, 0.1, -0.2),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(-0.4, 0.9, 0.1),
            Point3::new(-0.5, -0.8, 0.45),
        ])
    }

    fn assert_matches_finite_difference<F>(coords: &Coordinates, analytic: &[Vector3<f64>], atoms: &[usize], f: F)
    where
        F: Fn(&Coordinates) -> f64,
    {
        for (slot, &atom) in atoms.iter().enumerate() {
            for axis in 0..3 {
                let mut plus = coords.clone();
                let mut minus = coords.clone();
                let mut delta = Vector3::zeros();
                delta[axis] = STEP;
                plus.move_by(atom, delta);
                minus.move_by(atom, -delta);
                let numeric = (f(&plus) - f(&minus)) / (2.0 * STEP);
                assert!(
                    (numeric - analytic[slot][axis]).abs() < 1e-5,
                    "atom {atom} axis {axis}: numeric {numeric} vs analytic {}",
                    analytic[slot][axis]
                );
            }
        }
    }

    #[test]
    fn distance_and_gradient_point_along_the_bond() {
        let coords = Coordinates::new(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)]);
        assert!(f64_approx_equal(coords.distance(0, 1), 5.0));
        let [ga, gb] = coords.distance_gradient(0, 1);
        assert!(f64_approx_equal(ga.x, -0.6));
        assert!(f64_approx_equal(ga.y, -0.8));
        assert_eq!(ga, -gb);
    }

    #[test]
    fn angle_of_right_angle_is_half_pi() {
        let coords = Coordinates::new(vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ]);
        assert!(f64_approx_equal(coords.angle(0, 1, 2), FRAC_PI_2));
    }

    #[test]
    fn torsion_angle_has_expected_sign_and_magnitude() {
        let coords = Coordinates::new(vec![
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
        ]);
        assert!(f64_approx_equal(coords.torsion_angle(0, 1, 2, 3).abs(), FRAC_PI_2));

        let trans = Coordinates::new(vec![
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, -1.0, 1.0),
        ]);
        assert!(f64_approx_equal(trans.torsion_angle(0, 1, 2, 3).abs(), PI));
    }

    #[test]
    fn wilson_angle_is_zero_for_planar_center() {
        let coords = Coordinates::new(vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(-0.5, 0.8, 0.0),
            Point3::new(-0.5, -0.8, 0.0),
        ]);
        assert!(f64_approx_equal(coords.wilson_angle(0, 1, 2, 3), 0.0));
    }

    #[test]
    fn wilson_angle_of_perpendicular_bond_is_half_pi() {
        let coords = Coordinates::new(vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]);
        assert!(f64_approx_equal(coords.wilson_angle(0, 1, 2, 3).abs(), FRAC_PI_2));
    }

    #[test]
    fn angle_gradient_matches_finite_difference() {
        let coords = skewed_quad();
        let analytic = coords.angle_gradient(0, 1, 2);
        assert_matches_finite_difference(&coords, &analytic, &[0, 1, 2], |c| c.angle(0, 1, 2));
    }

    #[test]
    fn torsion_gradient_matches_finite_difference() {
        let coords = skewed_quad();
        let analytic = coords.torsion_angle_gradient(0, 1, 2, 3);
        assert_matches_finite_difference(&coords, &analytic, &[0, 1, 2, 3], |c| {
            c.torsion_angle(0, 1, 2, 3)
        });
    }

    #[test]
    fn wilson_gradient_matches_finite_difference() {
        let coords = pyramid();
        let analytic = coords.wilson_angle_gradient(0, 1, 2, 3);
        assert_matches_finite_difference(&coords, &analytic, &[0, 1, 2, 3], |c| {
            c.wilson_angle(0, 1, 2, 3)
        });
    }

    #[test]
    fn gradients_are_translationally_invariant() {
        let coords = skewed_quad();
        let angle_sum: Vector3<f64> = coords.angle_gradient(0, 1, 2).iter().sum();
        let torsion_sum: Vector3<f64> = coords.torsion_angle_gradient(0, 1, 2, 3).iter().sum();
        let wilson_sum: Vector3<f64> = pyramid().wilson_angle_gradient(0, 1, 2, 3).iter().sum();
        assert!(angle_sum.norm() < TOLERANCE);
        assert!(torsion_sum.norm() < TOLERANCE);
        assert!(wilson_sum.norm() < TOLERANCE);
    }

    #[test]
    fn degenerate_geometries_yield_zero_gradients() {
        let collinear = Coordinates::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        ]);
        assert!(collinear.torsion_angle_gradient(0, 1, 2, 3).iter().all(|g| g.norm() == 0.0));
        assert!(collinear.angle_gradient(0, 1, 2).iter().all(|g| g.norm() == 0.0));
        assert_eq!(collinear.torsion_angle(0, 1, 2, 3), 0.0);

        let coincident = Coordinates::new(vec![Point3::origin(), Point3::origin()]);
        assert!(coincident.distance_gradient(0, 1).iter().all(|g| g.norm() == 0.0));
    }

    #[test]
    fn move_by_and_set_position_update_positions() {
        let mut coords = Coordinates::new(vec![Point3::origin()]);
        coords.move_by(0, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(coords.position(0), Point3::new(1.0, 0.0, 0.0));
        coords.set_position(0, Point3::new(0.0, 2.0, 0.0));
        assert_eq!(coords.positions(), &[Point3::new(0.0, 2.0, 0.0)]);
    }
}
