/// Position of a basis set in the append-only basis-set sequence of a parse.
///
/// Atoms sharing a basis set hold the same id, so identity comparisons are
/// plain equality on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BasisSetId(pub(crate) usize);

impl BasisSetId {
    pub fn index(self) -> usize {
        self.0
    }
}
