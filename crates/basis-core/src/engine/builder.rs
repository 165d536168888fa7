use super::error::{LineErrorKind, ParseError};
use super::recognizer::GhostDeclaration;
use crate::core::models::atom::Atom;
use crate::core::models::basis::{BasisFunction, BasisSet, FunctionType, PrimitiveFunction};
use crate::core::models::ids::BasisSetId;
use crate::core::models::output::CrystalOutput;
use crate::core::periodic::table::ElementTable;
use nalgebra::Point3;
use tracing::warn;

/// Incrementally assembles the atom/basis-set graph in document order.
///
/// Atoms and basis sets live in append-only vectors. The "current" basis set
/// is always the last one created and the "current" basis function is always
/// the last one appended to it, so construction targets can never go stale.
#[derive(Debug)]
pub struct BasisGraphBuilder<'t> {
    table: &'t ElementTable,
    atoms: Vec<Atom>,
    basis_sets: Vec<BasisSet>,
    pending_ghosts: Vec<GhostDeclaration>,
}

impl<'t> BasisGraphBuilder<'t> {
    pub fn new(table: &'t ElementTable) -> Self {
        Self {
            table,
            atoms: Vec::new(),
            basis_sets: Vec::new(),
            pending_ghosts: Vec::new(),
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn basis_sets(&self) -> &[BasisSet] {
        &self.basis_sets
    }

    pub fn pending_ghosts(&self) -> &[GhostDeclaration] {
        &self.pending_ghosts
    }

    /// The basis set that basis functions are currently appended to.
    pub fn current_basis_set(&self) -> Option<BasisSetId> {
        self.basis_sets.len().checked_sub(1).map(BasisSetId)
    }

    pub fn declare_ghosts(&mut self, declarations: impl IntoIterator<Item = GhostDeclaration>) {
        self.pending_ghosts.extend(declarations);
    }

    /// Adds an atom, resolving ghosts and sharing basis sets per element.
    ///
    /// Labels must be positive and unique. A token resolving to the vacancy
    /// placeholder marks a ghost. When ghost
    /// declarations were collected, one must carry the same label and its
    /// element replaces the placeholder. When none were collected at all, the
    /// ghost stays unresolved and [`build`](Self::build) fails on the ghost count.
    pub fn add_atom(
        &mut self,
        label: u32,
        element_token: &str,
        coordinates: [f64; 3],
    ) -> Result<&Atom, LineErrorKind> {
        if label == 0 {
            return Err(LineErrorKind::InvalidLabel { label });
        }
        if self.atoms.iter().any(|atom| atom.label == label) {
            return Err(LineErrorKind::DuplicateLabel { label });
        }
        let [x, y, z] = coordinates;
        let mut atom = Atom::new(
            label,
            self.table.resolve_token(element_token)?,
            Point3::new(x, y, z),
        );

        if atom.element.is_vacancy() {
            atom.is_ghost = true;
            match self.pending_ghosts.iter().find(|ghost| ghost.label == label) {
                Some(declaration) => {
                    atom.element = self.table.lookup_number(declaration.atomic_number)?;
                    if atom.element.is_vacancy() {
                        return Err(LineErrorKind::UnresolvedGhost { label });
                    }
                }
                // No ghost table at all: `build` reports the count mismatch.
                None if self.pending_ghosts.is_empty() => {
                    warn!(label, "Ghost atom found but no ghost atoms were declared.");
                }
                None => return Err(LineErrorKind::UnresolvedGhost { label }),
            }
        }

        let basis_set_id = match self
            .basis_sets
            .iter()
            .position(|basis_set| basis_set.element == atom.element)
        {
            Some(index) => BasisSetId(index),
            None => {
                self.basis_sets.push(BasisSet::new(atom.element.clone()));
                BasisSetId(self.basis_sets.len() - 1)
            }
        };
        atom.basis_set = Some(basis_set_id);

        self.atoms.push(atom);
        Ok(&self.atoms[self.atoms.len() - 1])
    }

    /// Appends a new, empty basis function to the most recent basis set.
    pub fn add_basis_function(&mut self, function_type: FunctionType) -> Result<(), LineErrorKind> {
        let basis_set = self
            .basis_sets
            .last_mut()
            .ok_or(LineErrorKind::BasisFunctionWithoutBasisSet)?;
        basis_set
            .basis_functions
            .push(BasisFunction::new(function_type));
        Ok(())
    }

    /// Appends a primitive to the most recent basis function of the most recent basis set.
    pub fn add_primitive(&mut self, primitive: PrimitiveFunction) -> Result<(), LineErrorKind> {
        let basis_set = self
            .basis_sets
            .last_mut()
            .ok_or(LineErrorKind::PrimitiveWithoutBasisSet)?;
        let function = basis_set
            .basis_functions
            .last_mut()
            .ok_or(LineErrorKind::PrimitiveWithoutBasisFunction)?;
        function.primitives.push(primitive);
        Ok(())
    }

    /// Validates the graph and freezes it.
    ///
    /// Checks, in order: atoms and basis sets exist, every atom has a basis
    /// set, and the ghost count equals the number of ghost declarations.
    pub fn build(self) -> Result<CrystalOutput, ParseError> {
        if self.atoms.is_empty() || self.basis_sets.is_empty() {
            return Err(ParseError::NoBasisSetInformation);
        }

        let mut found = 0;
        for atom in &self.atoms {
            if atom.basis_set.is_none() {
                return Err(ParseError::UnassignedBasisSet { label: atom.label });
            }
            if atom.is_ghost {
                found += 1;
            }
        }

        let expected = self.pending_ghosts.len();
        if found != expected {
            return Err(ParseError::GhostCountMismatch { expected, found });
        }

        Ok(CrystalOutput::new(self.atoms, self.basis_sets))
    }
}
