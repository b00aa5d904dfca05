use super::element::Element;
use nalgebra::Point3;

/// Represents an atom in a molecule with the properties atom typers consume.
///
/// An atom carries its chemical identity and the charge information the
/// electrostatic terms need. Its bonding environment (neighbors, rings,
/// aromaticity through bonds) lives in the owning [`Molecule`](super::molecule::Molecule).
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The chemical element of the atom.
    pub element: Element,
    /// The formal charge in elementary charge units.
    pub formal_charge: i8,
    /// An externally assigned partial charge, if any.
    pub partial_charge: Option<f64>,
    /// Explicit aromaticity flag; atoms touching an aromatic bond are aromatic regardless.
    pub aromatic: bool,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a neutral, non-aromatic atom of the given element at `position`.
    ///
    /// # Arguments
    ///
    /// * `element` - The chemical element.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(element: Element, position: Point3<f64>) -> Self {
        Self {
            element,
            formal_charge: 0,
            partial_charge: None,
            aromatic: false,
            position,
        }
    }

    pub fn with_formal_charge(mut self, charge: i8) -> Self {
        self.formal_charge = charge;
        self
    }

    pub fn with_partial_charge(mut self, charge: f64) -> Self {
        self.partial_charge = Some(charge);
        self
    }

    pub fn with_aromatic(mut self, aromatic: bool) -> Self {
        self.aromatic = aromatic;
        self
    }

    /// Returns the charge used by point-charge electrostatics.
    ///
    /// The partial charge wins when one has been assigned; otherwise the formal
    /// charge is used.
    #[inline]
    pub fn effective_charge(&self) -> f64 {
        self.partial_charge.unwrap_or(self.formal_charge as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let atom = Atom::new(Element::CARBON, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.element, Element::CARBON);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.formal_charge, 0);
        assert_eq!(atom.partial_charge, None);
        assert!(!atom.aromatic);
    }

    #[test]
    fn builder_methods_set_charges_and_aromaticity() {
        let atom = Atom::new(Element::NITROGEN, Point3::origin())
            .with_formal_charge(1)
            .with_partial_charge(-0.3)
            .with_aromatic(true);

        assert_eq!(atom.formal_charge, 1);
        assert_eq!(atom.partial_charge, Some(-0.3));
        assert!(atom.aromatic);
    }

    #[test]
    fn effective_charge_prefers_partial_charge() {
        let formal = Atom::new(Element::OXYGEN, Point3::origin()).with_formal_charge(-1);
        assert_eq!(formal.effective_charge(), -1.0);

        let partial = formal.clone().with_partial_charge(-0.8);
        assert_eq!(partial.effective_charge(), -0.8);
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new(Element::SULFUR, Point3::new(0.0, 1.0, 0.0)).with_formal_charge(-2);
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
