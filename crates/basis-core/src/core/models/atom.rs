use super::element::Element;
use super::ids::BasisSetId;
use nalgebra::Point3;

/// An atom read from the basis-set region of a CRYSTAL output.
///
/// Atoms are created in document order. While a parse is running the basis-set
/// reference is attached by the builder; once the graph is finalized every atom
/// is guaranteed to hold one.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Positive label printed by CRYSTAL, unique within one output.
    pub label: u32,
    /// The resolved element. For ghost atoms this is the declared element, never the vacancy placeholder.
    pub element: Element,
    /// The basis set shared by every atom of the same element.
    pub basis_set: Option<BasisSetId>,
    /// Cartesian coordinates as printed in the basis-set table (atomic units).
    pub position: Point3<f64>,
    /// Whether the atom was declared as a ghost.
    pub is_ghost: bool,
}

impl Atom {
    /// Creates a non-ghost atom without a basis set.
    pub fn new(label: u32, element: Element, position: Point3<f64>) -> Self {
        Self {
            label,
            element,
            basis_set: None,
            position,
            is_ghost: false,
        }
    }

    /// The element symbol as shown in reports, with a ghost marker when applicable.
    pub fn display_symbol(&self) -> String {
        if self.is_ghost {
            format!("{} (ghost)", self.element.symbol)
        } else {
            self.element.symbol.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_no_basis_set_and_is_not_ghost() {
        let atom = Atom::new(1, Element::new("O", 8), Point3::new(0.0, 1.0, 2.0));

        assert_eq!(atom.label, 1);
        assert_eq!(atom.basis_set, None);
        assert!(!atom.is_ghost);
        assert_eq!(atom.position.y, 1.0);
    }

    #[test]
    fn display_symbol_marks_ghost_atoms() {
        let mut atom = Atom::new(3, Element::new("Mg", 12), Point3::origin());
        assert_eq!(atom.display_symbol(), "Mg");

        atom.is_ghost = true;
        assert_eq!(atom.display_symbol(), "Mg (ghost)");
    }
}
