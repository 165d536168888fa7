use super::atom::Atom;
use super::basis::BasisSet;
use super::ids::BasisSetId;

/// Contiguous block of global atomic-orbital indices owned by one atom.
///
/// Indices are 1-based, as CRYSTAL numbers its atomic orbitals. An atom whose
/// basis set has no functions owns an empty span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitalSpan {
    /// Number of orbitals owned by the atoms preceding this one.
    pub offset: usize,
    /// Number of orbitals owned by this atom.
    pub count: usize,
}

impl OrbitalSpan {
    pub fn first(&self) -> usize {
        self.offset + 1
    }

    pub fn last(&self) -> usize {
        self.offset + self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// The validated atom and basis-set graph of one CRYSTAL output.
///
/// Produced only by [`OutputParser::finalize`](crate::engine::parser::OutputParser::finalize),
/// which checks that every atom references a basis set and that ghost counts
/// agree. The value exposes read-only accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct CrystalOutput {
    atoms: Vec<Atom>,
    basis_sets: Vec<BasisSet>,
}

impl CrystalOutput {
    pub(crate) fn new(atoms: Vec<Atom>, basis_sets: Vec<BasisSet>) -> Self {
        Self { atoms, basis_sets }
    }

    /// Atoms in parse order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Deduplicated basis sets in creation order.
    pub fn basis_sets(&self) -> &[BasisSet] {
        &self.basis_sets
    }

    pub fn atom(&self, label: u32) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.label == label)
    }

    pub fn basis_set(&self, id: BasisSetId) -> Option<&BasisSet> {
        self.basis_sets.get(id.index())
    }

    pub fn basis_set_of(&self, atom: &Atom) -> Option<&BasisSet> {
        atom.basis_set.and_then(|id| self.basis_set(id))
    }

    pub fn ghost_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter().filter(|atom| atom.is_ghost)
    }

    /// Number of atoms referencing the basis set `id`.
    pub fn atoms_using(&self, id: BasisSetId) -> usize {
        self.atoms
            .iter()
            .filter(|atom| atom.basis_set == Some(id))
            .count()
    }

    fn orbital_count_of(&self, atom: &Atom) -> usize {
        self.basis_set_of(atom).map_or(0, BasisSet::orbital_count)
    }

    /// Orbital spans of every atom, in parse order.
    pub fn orbital_spans(&self) -> Vec<OrbitalSpan> {
        let mut offset = 0;
        self.atoms
            .iter()
            .map(|atom| {
                let count = self.orbital_count_of(atom);
                let span = OrbitalSpan { offset, count };
                offset += count;
                span
            })
            .collect()
    }

    /// The global orbital span of the atom labelled `label`.
    pub fn orbital_span(&self, label: u32) -> Option<OrbitalSpan> {
        let position = self.atoms.iter().position(|atom| atom.label == label)?;
        self.orbital_spans().get(position).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::basis::{BasisFunction, FunctionType};
    use crate::core::models::element::Element;
    use nalgebra::Point3;

    fn atom(label: u32, element: Element, basis_set: usize, is_ghost: bool) -> Atom {
        let mut atom = Atom::new(label, element, Point3::origin());
        atom.basis_set = Some(BasisSetId(basis_set));
        atom.is_ghost = is_ghost;
        atom
    }

    fn sample_output() -> CrystalOutput {
        let oxygen = Element::new("O", 8);
        let magnesium = Element::new("Mg", 12);

        let mut o_basis = BasisSet::new(oxygen.clone());
        o_basis.basis_functions.extend([
            BasisFunction::new(FunctionType::S),
            BasisFunction::new(FunctionType::SP),
        ]);
        let mut mg_basis = BasisSet::new(magnesium.clone());
        mg_basis
            .basis_functions
            .push(BasisFunction::new(FunctionType::D));

        CrystalOutput::new(
            vec![
                atom(1, oxygen.clone(), 0, false),
                atom(2, magnesium.clone(), 1, false),
                atom(3, oxygen, 0, true),
            ],
            vec![o_basis, mg_basis],
        )
    }

    #[test]
    fn atom_lookup_by_label() {
        let output = sample_output();
        assert_eq!(output.atom(2).map(|a| a.element.atomic_number), Some(12));
        assert!(output.atom(42).is_none());
    }

    #[test]
    fn atoms_using_counts_shared_references() {
        let output = sample_output();
        assert_eq!(output.atoms_using(BasisSetId(0)), 2);
        assert_eq!(output.atoms_using(BasisSetId(1)), 1);
    }

    #[test]
    fn ghost_atoms_filters_flagged_atoms() {
        let output = sample_output();
        let labels: Vec<u32> = output.ghost_atoms().map(|a| a.label).collect();
        assert_eq!(labels, vec![3]);
    }

    #[test]
    fn orbital_spans_are_running_sums_in_parse_order() {
        let output = sample_output();
        let spans = output.orbital_spans();

        assert_eq!(spans[0], OrbitalSpan { offset: 0, count: 5 });
        assert_eq!(spans[1], OrbitalSpan { offset: 5, count: 5 });
        assert_eq!(spans[2], OrbitalSpan { offset: 10, count: 5 });
        assert_eq!((spans[2].first(), spans[2].last()), (11, 15));
    }

    #[test]
    fn orbital_span_for_unknown_label_is_none() {
        assert!(sample_output().orbital_span(99).is_none());
        assert_eq!(
            sample_output().orbital_span(2),
            Some(OrbitalSpan { offset: 5, count: 5 })
        );
    }

    #[test]
    fn empty_span_reports_empty() {
        let span = OrbitalSpan { offset: 4, count: 0 };
        assert!(span.is_empty());
        assert_eq!(span.first(), 5);
        assert_eq!(span.last(), 4);
    }
}
