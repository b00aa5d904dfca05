use phf::{Map, phf_map};

/// Per-label UFF atom parameters (Rappé et al., J. Am. Chem. Soc. 1992, 114, 10024).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UffAtomParams {
    /// Valence bond radius (Å).
    pub r1: f64,
    /// Natural valence angle (degrees).
    pub theta0: f64,
    /// Van der Waals distance (Å).
    pub x1: f64,
    /// Van der Waals well depth (kcal/mol).
    pub d1: f64,
    pub zeta: f64,
    /// Effective charge.
    pub z1: f64,
    /// sp3 torsional barrier (kcal/mol).
    pub v1: f64,
    /// sp2 torsional barrier (kcal/mol).
    pub u1: f64,
    /// GMP electronegativity.
    pub chi: f64,
}

impl UffAtomParams {
    #[allow(clippy::too_many_arguments)]
    const fn new(r1: f64, theta0: f64, x1: f64, d1: f64, zeta: f64, z1: f64, v1: f64, u1: f64, chi: f64) -> Self {
        Self {
            r1,
            theta0,
            x1,
            d1,
            zeta,
            z1,
            v1,
            u1,
            chi,
        }
    }
}

pub fn uff_atom_params(label: &str) -> Option<&'static UffAtomParams> {
    UFF_ATOM_PARAMS.get(label)
}

#[allow(clippy::approx_constant)]
static UFF_ATOM_PARAMS: Map<&'static str, UffAtomParams> = phf_map! {
    "H_" => UffAtomParams::new(0.354, 180.0, 2.886, 0.044, 12.0, 0.712, 0.0, 0.0, 4.528),
    "H_b" => UffAtomParams::new(0.46, 83.5, 2.886, 0.044, 12.0, 0.712, 0.0, 0.0, 4.528),
    "He4+4" => UffAtomParams::new(0.849, 90.0, 2.362, 0.056, 15.24, 0.098, 0.0, 0.0, 9.66),
    "Li" => UffAtomParams::new(1.336, 180.0, 2.451, 0.025, 12.0, 1.026, 0.0, 2.0, 3.006),
    "Be3+2" => UffAtomParams::new(1.074, 109.47, 2.745, 0.085, 12.0, 1.565, 0.0, 2.0, 4.877),
    "B_3" => UffAtomParams::new(0.838, 109.47, 4.083, 0.18, 12.052, 1.755, 0.0, 2.0, 5.11),
    "B_2" => UffAtomParams::new(0.828, 120.0, 4.083, 0.18, 12.052, 1.755, 0.0, 2.0, 5.11),
    "C_3" => UffAtomParams::new(0.757, 109.47, 3.851, 0.105, 12.73, 1.912, 2.119, 2.0, 5.343),
    "C_R" => UffAtomParams::new(0.729, 120.0, 3.851, 0.105, 12.73, 1.912, 0.0, 2.0, 5.343),
    "C_2" => UffAtomParams::new(0.732, 120.0, 3.851, 0.105, 12.73, 1.912, 0.0, 2.0, 5.343),
    "C_1" => UffAtomParams::new(0.706, 180.0, 3.851, 0.105, 12.73, 1.912, 0.0, 2.0, 5.343),
    "N_3" => UffAtomParams::new(0.7, 106.7, 3.66, 0.069, 13.407, 2.544, 0.45, 2.0, 6.899),
    "N_R" => UffAtomParams::new(0.699, 120.0, 3.66, 0.069, 13.407, 2.544, 0.0, 2.0, 6.899),
    "N_2" => UffAtomParams::new(0.685, 111.2, 3.66, 0.069, 13.407, 2.544, 0.0, 2.0, 6.899),
    "N_1" => UffAtomParams::new(0.656, 180.0, 3.66, 0.069, 13.407, 2.544, 0.0, 2.0, 6.899),
    "O_3" => UffAtomParams::new(0.658, 104.51, 3.5, 0.06, 14.085, 2.3, 0.018, 2.0, 8.741),
    "O_3_z" => UffAtomParams::new(0.528, 146.0, 3.5, 0.06, 14.085, 2.3, 0.018, 2.0, 8.741),
    "O_R" => UffAtomParams::new(0.68, 110.0, 3.5, 0.06, 14.085, 2.3, 0.0, 2.0, 8.741),
    "O_2" => UffAtomParams::new(0.634, 120.0, 3.5, 0.06, 14.085, 2.3, 0.0, 2.0, 8.741),
    "O_1" => UffAtomParams::new(0.639, 180.0, 3.5, 0.06, 14.085, 2.3, 0.0, 2.0, 8.741),
    "F_" => UffAtomParams::new(0.668, 180.0, 3.364, 0.05, 14.762, 1.735, 0.0, 2.0, 10.874),
    "Ne4+4" => UffAtomParams::new(0.92, 90.0, 3.243, 0.042, 15.44, 0.194, 0.0, 2.0, 11.04),
    "Na" => UffAtomParams::new(1.539, 180.0, 2.983, 0.03, 12.0, 1.081, 0.0, 1.25, 2.843),
    "Mg3+2" => UffAtomParams::new(1.421, 109.47, 3.021, 0.111, 12.0, 1.787, 0.0, 1.25, 3.951),
    "Al3" => UffAtomParams::new(1.244, 109.47, 4.499, 0.505, 11.278, 1.792, 0.0, 1.25, 4.06),
    "Si3" => UffAtomParams::new(1.117, 109.47, 4.295, 0.402, 12.175, 2.323, 1.225, 1.25, 4.168),
    "P_3+3" => UffAtomParams::new(1.101, 93.8, 4.147, 0.305, 13.072, 2.863, 2.4, 1.25, 5.463),
    "P_3+5" => UffAtomParams::new(1.056, 109.47, 4.147, 0.305, 13.072, 2.863, 2.4, 1.25, 5.463),
    "P_3+q" => UffAtomParams::new(1.056, 109.47, 4.147, 0.305, 13.072, 2.863, 2.4, 1.25, 5.463),
    "S_3+2" => UffAtomParams::new(1.064, 92.1, 4.035, 0.274, 13.969, 2.703, 0.484, 1.25, 6.928),
    "S_3+4" => UffAtomParams::new(1.049, 103.2, 4.035, 0.274, 13.969, 2.703, 0.484, 1.25, 6.928),
    "S_3+6" => UffAtomParams::new(1.027, 109.47, 4.035, 0.274, 13.969, 2.703, 0.484, 1.25, 6.928),
    "S_R" => UffAtomParams::new(1.077, 92.2, 4.035, 0.274, 13.969, 2.703, 0.0, 1.25, 6.928),
    "S_2" => UffAtomParams::new(0.854, 120.0, 4.035, 0.274, 13.969, 2.703, 0.0, 1.25, 6.928),
    "Cl" => UffAtomParams::new(1.044, 180.0, 3.947, 0.227, 14.866, 2.348, 0.0, 1.25, 8.564),
    "Ar4+4" => UffAtomParams::new(1.032, 90.0, 3.868, 0.185, 15.763, 0.3, 0.0, 1.25, 9.465),
    "K_" => UffAtomParams::new(1.953, 180.0, 3.812, 0.035, 12.0, 1.165, 0.0, 0.7, 2.421),
    "Ca6+2" => UffAtomParams::new(1.761, 90.0, 3.399, 0.238, 12.0, 2.141, 0.0, 0.7, 3.231),
    "Sc3+3" => UffAtomParams::new(1.513, 109.47, 3.295, 0.019, 12.0, 2.592, 0.0, 0.7, 3.395),
    "Ti3+4" => UffAtomParams::new(1.412, 109.47, 3.175, 0.017, 12.0, 2.659, 0.0, 0.7, 3.47),
    "Ti6+4" => UffAtomParams::new(1.412, 90.0, 3.175, 0.017, 12.0, 2.659, 0.0, 0.7, 3.47),
    "V_3+5" => UffAtomParams::new(1.402, 109.47, 3.144, 0.016, 12.0, 2.679, 0.0, 0.7, 3.65),
    "Cr6+3" => UffAtomParams::new(1.345, 90.0, 3.023, 0.015, 12.0, 2.463, 0.0, 0.7, 3.415),
    "Mn6+2" => UffAtomParams::new(1.382, 90.0, 2.961, 0.013, 12.0, 2.43, 0.0, 0.7, 3.325),
    "Fe3+2" => UffAtomParams::new(1.27, 109.47, 2.912, 0.013, 12.0, 2.43, 0.0, 0.7, 3.76),
    "Fe6+2" => UffAtomParams::new(1.335, 90.0, 2.912, 0.013, 12.0, 2.43, 0.0, 0.7, 3.76),
    "Co6+3" => UffAtomParams::new(1.241, 90.0, 2.872, 0.014, 12.0, 2.43, 0.0, 0.7, 4.105),
    "Ni4+2" => UffAtomParams::new(1.164, 90.0, 2.834, 0.015, 12.0, 2.43, 0.0, 0.7, 4.465),
    "Cu3+1" => UffAtomParams::new(1.302, 109.47, 3.495, 0.005, 12.0, 1.756, 0.0, 0.7, 4.2),
    "Zn3+2" => UffAtomParams::new(1.193, 109.47, 2.763, 0.124, 12.0, 1.308, 0.0, 0.7, 5.106),
    "Ga3+3" => UffAtomParams::new(1.26, 109.47, 4.383, 0.415, 11.0, 1.821, 0.0, 0.7, 3.641),
    "Ge3" => UffAtomParams::new(1.197, 109.47, 4.28, 0.379, 12.0, 2.789, 0.701, 0.7, 4.051),
    "As3+3" => UffAtomParams::new(1.211, 92.1, 4.23, 0.309, 13.0, 2.864, 1.5, 0.7, 5.188),
    "Se3+2" => UffAtomParams::new(1.19, 90.6, 4.205, 0.291, 14.0, 2.764, 0.335, 0.7, 6.428),
    "Br" => UffAtomParams::new(1.192, 180.0, 4.189, 0.251, 15.0, 2.519, 0.0, 0.7, 7.79),
    "Kr4+4" => UffAtomParams::new(1.147, 90.0, 4.141, 0.22, 16.0, 0.452, 0.0, 0.7, 8.505),
    "Rb" => UffAtomParams::new(2.26, 180.0, 4.114, 0.04, 12.0, 1.592, 0.0, 0.2, 2.331),
    "Sr6+2" => UffAtomParams::new(2.052, 90.0, 3.641, 0.235, 12.0, 2.449, 0.0, 0.2, 3.024),
    "Y_3+3" => UffAtomParams::new(1.698, 109.47, 3.345, 0.072, 12.0, 3.257, 0.0, 0.2, 3.83),
    "Zr3+4" => UffAtomParams::new(1.564, 109.47, 3.124, 0.069, 12.0, 3.667, 0.0, 0.2, 3.4),
    "Nb3+5" => UffAtomParams::new(1.473, 109.47, 3.165, 0.059, 12.0, 3.618, 0.0, 0.2, 3.55),
    "Mo6+6" => UffAtomParams::new(1.467, 90.0, 3.052, 0.056, 12.0, 3.4, 0.0, 0.2, 3.465),
    "Mo3+6" => UffAtomParams::new(1.484, 109.47, 3.052, 0.056, 12.0, 3.4, 0.0, 0.2, 3.465),
    "Tc6+5" => UffAtomParams::new(1.322, 90.0, 2.998, 0.048, 12.0, 3.4, 0.0, 0.2, 3.29),
    "Ru6+2" => UffAtomParams::new(1.478, 90.0, 2.963, 0.056, 12.0, 3.4, 0.0, 0.2, 3.575),
    "Rh6+3" => UffAtomParams::new(1.332, 90.0, 2.929, 0.053, 12.0, 3.5, 0.0, 0.2, 3.975),
    "Pd4+2" => UffAtomParams::new(1.338, 90.0, 2.899, 0.048, 12.0, 3.21, 0.0, 0.2, 4.32),
    "Ag1+1" => UffAtomParams::new(1.386, 180.0, 3.148, 0.036, 12.0, 1.956, 0.0, 0.2, 4.436),
    "Cd3+2" => UffAtomParams::new(1.403, 109.47, 2.848, 0.228, 12.0, 1.65, 0.0, 0.2, 5.034),
    "In3+3" => UffAtomParams::new(1.459, 109.47, 4.463, 0.599, 11.0, 2.07, 0.0, 0.2, 3.506),
    "Sn3" => UffAtomParams::new(1.398, 109.47, 4.392, 0.567, 12.0, 2.961, 0.199, 0.2, 3.987),
    "Sb3+3" => UffAtomParams::new(1.407, 91.6, 4.42, 0.449, 13.0, 2.704, 1.1, 0.2, 4.899),
    "Te3+2" => UffAtomParams::new(1.386, 90.25, 4.47, 0.398, 14.0, 2.882, 0.3, 0.2, 5.816),
    "I_" => UffAtomParams::new(1.382, 180.0, 4.5, 0.339, 15.0, 2.65, 0.0, 0.2, 6.822),
    "Xe4+4" => UffAtomParams::new(1.267, 90.0, 4.404, 0.332, 12.0, 0.556, 0.0, 0.2, 7.595),
    "Cs" => UffAtomParams::new(2.57, 180.0, 4.517, 0.045, 12.0, 1.573, 0.0, 0.1, 2.183),
    "Ba6+2" => UffAtomParams::new(2.277, 90.0, 3.703, 0.364, 12.0, 2.727, 0.0, 0.1, 2.814),
    "La3+3" => UffAtomParams::new(1.943, 109.47, 3.522, 0.017, 12.0, 3.3, 0.0, 0.1, 2.8355),
    "Ce6+3" => UffAtomParams::new(1.841, 90.0, 3.556, 0.013, 12.0, 3.3, 0.0, 0.1, 2.774),
    "Pr6+3" => UffAtomParams::new(1.823, 90.0, 3.606, 0.01, 12.0, 3.3, 0.0, 0.1, 2.858),
    "Nd6+3" => UffAtomParams::new(1.816, 90.0, 3.575, 0.01, 12.0, 3.3, 0.0, 0.1, 2.8685),
    "Pm6+3" => UffAtomParams::new(1.801, 90.0, 3.547, 0.009, 12.0, 3.3, 0.0, 0.1, 2.881),
    "Sm6+3" => UffAtomParams::new(1.78, 90.0, 3.52, 0.008, 12.0, 3.3, 0.0, 0.1, 2.9115),
    "Eu6+3" => UffAtomParams::new(1.771, 90.0, 3.493, 0.008, 12.0, 3.3, 0.0, 0.1, 2.8785),
    "Gd6+3" => UffAtomParams::new(1.735, 90.0, 3.368, 0.009, 12.0, 3.3, 0.0, 0.1, 3.1665),
    "Tb6+3" => UffAtomParams::new(1.732, 90.0, 3.451, 0.007, 12.0, 3.3, 0.0, 0.1, 3.018),
    "Dy6+3" => UffAtomParams::new(1.71, 90.0, 3.428, 0.007, 12.0, 3.3, 0.0, 0.1, 3.0555),
    "Ho6+3" => UffAtomParams::new(1.696, 90.0, 3.409, 0.007, 12.0, 3.416, 0.0, 0.1, 3.127),
    "Er6+3" => UffAtomParams::new(1.673, 90.0, 3.391, 0.007, 12.0, 3.3, 0.0, 0.1, 3.1865),
    "Tm6+3" => UffAtomParams::new(1.66, 90.0, 3.374, 0.006, 12.0, 3.3, 0.0, 0.1, 3.2514),
    "Yb6+3" => UffAtomParams::new(1.637, 90.0, 3.355, 0.228, 12.0, 2.618, 0.0, 0.1, 3.2889),
    "Lu6+3" => UffAtomParams::new(1.671, 90.0, 3.64, 0.041, 12.0, 3.271, 0.0, 0.1, 2.9629),
    "Hf3+4" => UffAtomParams::new(1.611, 109.47, 3.141, 0.072, 12.0, 3.921, 0.0, 0.1, 3.7),
    "Ta3+5" => UffAtomParams::new(1.511, 109.47, 3.17, 0.081, 12.0, 4.075, 0.0, 0.1, 5.1),
    "W_6+6" => UffAtomParams::new(1.392, 90.0, 3.069, 0.067, 12.0, 3.7, 0.0, 0.1, 4.63),
    "W_3+4" => UffAtomParams::new(1.526, 109.47, 3.069, 0.067, 12.0, 3.7, 0.0, 0.1, 4.63),
    "W_3+6" => UffAtomParams::new(1.38, 109.47, 3.069, 0.067, 12.0, 3.7, 0.0, 0.1, 4.63),
    "Re6+5" => UffAtomParams::new(1.372, 90.0, 2.954, 0.066, 12.0, 3.7, 0.0, 0.1, 3.96),
    "Re3+7" => UffAtomParams::new(1.314, 109.47, 2.954, 0.066, 12.0, 3.7, 0.0, 0.1, 3.96),
    "Os6+6" => UffAtomParams::new(1.372, 90.0, 3.12, 0.037, 12.0, 3.7, 0.0, 0.1, 5.14),
    "Ir6+3" => UffAtomParams::new(1.371, 90.0, 2.84, 0.073, 12.0, 3.731, 0.0, 0.1, 5.0),
    "Pt4+2" => UffAtomParams::new(1.364, 90.0, 2.754, 0.08, 12.0, 3.382, 0.0, 0.1, 4.79),
    "Au4+3" => UffAtomParams::new(1.262, 90.0, 3.293, 0.039, 12.0, 2.625, 0.0, 0.1, 4.894),
    "Hg1+2" => UffAtomParams::new(1.34, 180.0, 2.705, 0.385, 12.0, 1.75, 0.0, 0.1, 6.27),
    "Tl3+3" => UffAtomParams::new(1.518, 120.0, 4.347, 0.68, 11.0, 2.068, 0.0, 0.1, 3.2),
    "Pb3" => UffAtomParams::new(1.459, 109.47, 4.297, 0.663, 12.0, 2.846, 0.1, 0.1, 3.9),
    "Bi3+3" => UffAtomParams::new(1.512, 90.0, 4.37, 0.518, 13.0, 2.47, 1.0, 0.1, 4.69),
    "Po3+2" => UffAtomParams::new(1.5, 90.0, 4.709, 0.325, 14.0, 2.33, 0.3, 0.1, 4.21),
    "At" => UffAtomParams::new(1.545, 180.0, 4.75, 0.284, 15.0, 2.24, 0.0, 0.1, 4.75),
    "Rn4+4" => UffAtomParams::new(1.42, 90.0, 4.765, 0.248, 16.0, 0.583, 0.0, 0.1, 5.37),
    "Fr" => UffAtomParams::new(2.88, 180.0, 4.9, 0.05, 12.0, 1.847, 0.0, 0.0, 2.0),
    "Ra6+2" => UffAtomParams::new(2.512, 90.0, 3.677, 0.404, 12.0, 2.92, 0.0, 0.0, 2.843),
    "Ac6+3" => UffAtomParams::new(1.983, 90.0, 3.478, 0.033, 12.0, 3.9, 0.0, 0.0, 2.835),
    "Th6+4" => UffAtomParams::new(1.721, 90.0, 3.396, 0.026, 12.0, 4.202, 0.0, 0.0, 3.175),
    "Pa6+4" => UffAtomParams::new(1.711, 90.0, 3.424, 0.022, 12.0, 3.9, 0.0, 0.0, 2.985),
    "U_6+4" => UffAtomParams::new(1.684, 90.0, 3.395, 0.022, 12.0, 3.9, 0.0, 0.0, 3.341),
    "Np6+4" => UffAtomParams::new(1.666, 90.0, 3.424, 0.019, 12.0, 3.9, 0.0, 0.0, 3.549),
    "Pu6+4" => UffAtomParams::new(1.657, 90.0, 3.424, 0.016, 12.0, 3.9, 0.0, 0.0, 3.243),
    "Am6+4" => UffAtomParams::new(1.66, 90.0, 3.381, 0.014, 12.0, 3.9, 0.0, 0.0, 2.9895),
    "Cm6+3" => UffAtomParams::new(1.801, 90.0, 3.326, 0.013, 12.0, 3.9, 0.0, 0.0, 2.8315),
    "Bk6+3" => UffAtomParams::new(1.761, 90.0, 3.339, 0.013, 12.0, 3.9, 0.0, 0.0, 3.1935),
    "Cf6+3" => UffAtomParams::new(1.75, 90.0, 3.313, 0.013, 12.0, 3.9, 0.0, 0.0, 3.197),
    "Es6+3" => UffAtomParams::new(1.724, 90.0, 3.299, 0.012, 12.0, 3.9, 0.0, 0.0, 3.333),
    "Fm6+3" => UffAtomParams::new(1.712, 90.0, 3.286, 0.012, 12.0, 3.9, 0.0, 0.0, 3.4),
    "Md6+3" => UffAtomParams::new(1.689, 90.0, 3.274, 0.011, 12.0, 3.9, 0.0, 0.0, 3.47),
    "No6+3" => UffAtomParams::new(1.679, 90.0, 3.248, 0.011, 12.0, 3.9, 0.0, 0.0, 3.475),
    "Lw6+3" => UffAtomParams::new(1.698, 90.0, 3.236, 0.011, 12.0, 3.9, 0.0, 0.0, 3.5),
};
