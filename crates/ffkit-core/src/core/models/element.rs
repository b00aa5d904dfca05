use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[rustfmt::skip]
static SYMBOL_TO_NUMBER: Map<&'static str, u8> = phf_map! {
    "H" => 1, "He" => 2, "Li" => 3, "Be" => 4, "B" => 5, "C" => 6, "N" => 7, "O" => 8, "F" => 9,
    "Ne" => 10, "Na" => 11, "Mg" => 12, "Al" => 13, "Si" => 14, "P" => 15, "S" => 16, "Cl" => 17, "Ar" => 18,
    "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22, "V" => 23, "Cr" => 24, "Mn" => 25, "Fe" => 26, "Co" => 27,
    "Ni" => 28, "Cu" => 29, "Zn" => 30, "Ga" => 31, "Ge" => 32, "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36,
    "Rb" => 37, "Sr" => 38, "Y" => 39, "Zr" => 40, "Nb" => 41, "Mo" => 42, "Tc" => 43, "Ru" => 44, "Rh" => 45,
    "Pd" => 46, "Ag" => 47, "Cd" => 48, "In" => 49, "Sn" => 50, "Sb" => 51, "Te" => 52, "I" => 53, "Xe" => 54,
    "Cs" => 55, "Ba" => 56, "La" => 57, "Ce" => 58, "Pr" => 59, "Nd" => 60, "Pm" => 61, "Sm" => 62, "Eu" => 63,
    "Gd" => 64, "Tb" => 65, "Dy" => 66, "Ho" => 67, "Er" => 68, "Tm" => 69, "Yb" => 70, "Lu" => 71, "Hf" => 72,
    "Ta" => 73, "W" => 74, "Re" => 75, "Os" => 76, "Ir" => 77, "Pt" => 78, "Au" => 79, "Hg" => 80, "Tl" => 81,
    "Pb" => 82, "Bi" => 83, "Po" => 84, "At" => 85, "Rn" => 86, "Fr" => 87, "Ra" => 88, "Ac" => 89, "Th" => 90,
    "Pa" => 91, "U" => 92, "Np" => 93, "Pu" => 94, "Am" => 95, "Cm" => 96, "Bk" => 97, "Cf" => 98, "Es" => 99,
    "Fm" => 100, "Md" => 101, "No" => 102, "Lr" => 103, "Rf" => 104, "Db" => 105, "Sg" => 106, "Bh" => 107, "Hs" => 108,
    "Mt" => 109, "Ds" => 110, "Rg" => 111, "Cn" => 112, "Nh" => 113, "Fl" => 114, "Mc" => 115, "Lv" => 116, "Ts" => 117,
    "Og" => 118,
};

#[rustfmt::skip]
static SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg",
    "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr",
    "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr",
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd",
    "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf",
    "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po",
    "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs",
    "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// A chemical element identified by its atomic number.
///
/// Elements are the coarsest classification an atom typer works with; every
/// typing rule starts by branching on the element before it looks at the
/// bonding environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(u8);

impl Element {
    pub const HYDROGEN: Element = Element(1);
    pub const HELIUM: Element = Element(2);
    pub const LITHIUM: Element = Element(3);
    pub const BERYLLIUM: Element = Element(4);
    pub const BORON: Element = Element(5);
    pub const CARBON: Element = Element(6);
    pub const NITROGEN: Element = Element(7);
    pub const OXYGEN: Element = Element(8);
    pub const FLUORINE: Element = Element(9);
    pub const NEON: Element = Element(10);
    pub const SODIUM: Element = Element(11);
    pub const MAGNESIUM: Element = Element(12);
    pub const ALUMINUM: Element = Element(13);
    pub const SILICON: Element = Element(14);
    pub const PHOSPHORUS: Element = Element(15);
    pub const SULFUR: Element = Element(16);
    pub const CHLORINE: Element = Element(17);
    pub const ARGON: Element = Element(18);
    pub const POTASSIUM: Element = Element(19);
    pub const CALCIUM: Element = Element(20);
    pub const SCANDIUM: Element = Element(21);
    pub const TITANIUM: Element = Element(22);
    pub const VANADIUM: Element = Element(23);
    pub const CHROMIUM: Element = Element(24);
    pub const MANGANESE: Element = Element(25);
    pub const IRON: Element = Element(26);
    pub const COBALT: Element = Element(27);
    pub const NICKEL: Element = Element(28);
    pub const COPPER: Element = Element(29);
    pub const ZINC: Element = Element(30);
    pub const GALLIUM: Element = Element(31);
    pub const GERMANIUM: Element = Element(32);
    pub const ARSENIC: Element = Element(33);
    pub const SELENIUM: Element = Element(34);
    pub const BROMINE: Element = Element(35);
    pub const KRYPTON: Element = Element(36);
    pub const RUBIDIUM: Element = Element(37);
    pub const ANTIMONY: Element = Element(51);
    pub const TELLURIUM: Element = Element(52);
    pub const IODINE: Element = Element(53);
    pub const XENON: Element = Element(54);
    pub const CESIUM: Element = Element(55);
    pub const BISMUTH: Element = Element(83);
    pub const POLONIUM: Element = Element(84);

    /// Creates an element from its atomic number.
    ///
    /// # Return
    ///
    /// Returns `None` if `number` is zero or beyond the last known element.
    pub fn from_atomic_number(number: u8) -> Option<Self> {
        (1..=SYMBOLS.len() as u8)
            .contains(&number)
            .then_some(Self(number))
    }

    /// Looks up an element by its symbol, ignoring case (`"cl"`, `"CL"` and `"Cl"` all match).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.trim().chars();
        let first = chars.next()?.to_ascii_uppercase();
        let canonical: String = std::iter::once(first)
            .chain(chars.map(|c| c.to_ascii_lowercase()))
            .collect();
        SYMBOL_TO_NUMBER.get(canonical.as_str()).copied().map(Self)
    }

    #[inline]
    pub fn atomic_number(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn symbol(self) -> &'static str {
        SYMBOLS[(self.0 - 1) as usize]
    }

    #[inline]
    pub fn is_hydrogen(self) -> bool {
        self == Self::HYDROGEN
    }

    /// Returns `true` for the group 16 elements (O, S, Se, Te, Po).
    pub fn is_chalcogen(self) -> bool {
        matches!(self.0, 8 | 16 | 34 | 52 | 84)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown element symbol: '{0}'")]
pub struct ParseElementError(pub String);

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| ParseElementError(s.to_string()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
