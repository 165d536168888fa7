use crate::core::models::atom::Atom;
use crate::core::models::basis::{BasisSet, FunctionType};
use crate::core::models::ids::BasisSetId;
use crate::core::models::output::{CrystalOutput, OrbitalSpan};
use nalgebra::Point3;
use std::fmt;

/// What a caller wants to see from a finalized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// Orbitals of the atom with this label.
    SingleAtom(u32),
    /// Orbitals of every atom from `from` to `to`, both inclusive, in the written direction.
    AtomRange { from: u32, to: u32 },
    AllAtoms,
    AllBasisSets,
    /// Orbitals of every ghost atom.
    AllGhosts,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::SingleAtom(label) => write!(f, "atom {label}"),
            Query::AtomRange { from, to } => write!(f, "atoms {from}-{to}"),
            Query::AllAtoms => f.write_str("all atoms"),
            Query::AllBasisSets => f.write_str("all basis sets"),
            Query::AllGhosts => f.write_str("all ghost atoms"),
        }
    }
}

/// One atom in the atom listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRow {
    pub label: u32,
    pub symbol: String,
    pub atomic_number: u8,
    pub is_ghost: bool,
    pub position: Point3<f64>,
    pub span: OrbitalSpan,
}

/// One basis set with the number of atoms sharing it.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisSetSummary<'a> {
    pub id: BasisSetId,
    pub basis_set: &'a BasisSet,
    pub atoms_using: usize,
}

/// A numbered atomic orbital: its global 1-based index and its sub-function label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberedOrbital {
    pub index: usize,
    pub label: &'static str,
}

/// The orbitals contributed by one basis function of an atom.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellOrbitals {
    pub function_type: FunctionType,
    pub primitive_count: usize,
    pub orbitals: Vec<NumberedOrbital>,
}

/// Orbital enumeration of one atom.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomOrbitals {
    pub label: u32,
    pub symbol: String,
    pub kind: &'static str,
    pub span: OrbitalSpan,
    pub shells: Vec<ShellOrbitals>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Report<'a> {
    Atoms(Vec<AtomRow>),
    BasisSets(Vec<BasisSetSummary<'a>>),
    Orbitals(Vec<AtomOrbitals>),
}

impl Report<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            Report::Atoms(rows) => rows.is_empty(),
            Report::BasisSets(rows) => rows.is_empty(),
            Report::Orbitals(rows) => rows.is_empty(),
        }
    }
}

/// Answers `query` against a finalized output.
///
/// Labels that do not exist are skipped, so a query naming only unknown
/// labels yields an empty report rather than an error.
pub fn resolve<'a>(output: &'a CrystalOutput, query: &Query) -> Report<'a> {
    match *query {
        Query::AllAtoms => Report::Atoms(atom_rows(output)),
        Query::AllBasisSets => Report::BasisSets(basis_set_summaries(output)),
        Query::SingleAtom(label) => Report::Orbitals(orbitals_for(output, [label])),
        Query::AtomRange { from, to } => {
            let bounds = from.min(to)..=from.max(to);
            let mut labels: Vec<u32> = output
                .atoms()
                .iter()
                .map(|atom| atom.label)
                .filter(|label| bounds.contains(label))
                .collect();
            labels.sort_unstable();
            if from > to {
                labels.reverse();
            }
            Report::Orbitals(orbitals_for(output, labels))
        }
        Query::AllGhosts => {
            let ghosts: Vec<u32> = output.ghost_atoms().map(|atom| atom.label).collect();
            Report::Orbitals(orbitals_for(output, ghosts))
        }
    }
}

fn atom_rows(output: &CrystalOutput) -> Vec<AtomRow> {
    output
        .atoms()
        .iter()
        .zip(output.orbital_spans())
        .map(|(atom, span)| AtomRow {
            label: atom.label,
            symbol: atom.display_symbol(),
            atomic_number: atom.element.atomic_number,
            is_ghost: atom.is_ghost,
            position: atom.position,
            span,
        })
        .collect()
}

fn basis_set_summaries(output: &CrystalOutput) -> Vec<BasisSetSummary<'_>> {
    output
        .basis_sets()
        .iter()
        .enumerate()
        .map(|(index, basis_set)| {
            let id = BasisSetId(index);
            BasisSetSummary {
                id,
                basis_set,
                atoms_using: output.atoms_using(id),
            }
        })
        .collect()
}

fn orbitals_for(output: &CrystalOutput, labels: impl IntoIterator<Item = u32>) -> Vec<AtomOrbitals> {
    let spans = output.orbital_spans();
    labels
        .into_iter()
        .filter_map(|label| {
            let position = output.atoms().iter().position(|atom| atom.label == label)?;
            let atom = &output.atoms()[position];
            Some(enumerate_orbitals(output, atom, spans[position]))
        })
        .collect()
}

fn enumerate_orbitals(output: &CrystalOutput, atom: &Atom, span: OrbitalSpan) -> AtomOrbitals {
    let basis_set = output.basis_set_of(atom);
    let mut index = span.offset;
    let shells = basis_set
        .map(|set| set.basis_functions.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|function| ShellOrbitals {
            function_type: function.function_type,
            primitive_count: function.primitives.len(),
            orbitals: function
                .function_type
                .shell()
                .labels
                .iter()
                .map(|&label| {
                    index += 1;
                    NumberedOrbital { index, label }
                })
                .collect(),
        })
        .collect();

    AtomOrbitals {
        label: atom.label,
        symbol: atom.display_symbol(),
        kind: basis_set.map_or("Unknown basis set", BasisSet::kind),
        span,
        shells,
    }
}
