/// Opens the table of atoms converted into ghosts.
pub const GHOST_SENTINEL: &str = "ATOMS TRANSFORMED INTO GHOSTS";
/// Opens the basis-set table. Always wins, even while ghosts are being declared.
pub const BASIS_SET_SENTINEL: &str = "LOCAL ATOMIC FUNCTIONS BASIS SET";
/// Closes the basis-set table; only honoured inside it.
pub const STOP_SENTINEL: &str = "INFORMATION";

/// The document region the parser is currently scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputRegion {
    /// Before any region of interest; lines are inert.
    #[default]
    Initial,
    /// Ghost declarations: `label( atomic_number)` pairs.
    GhostDeclaration,
    /// Atom, basis-function and primitive lines.
    BasisSet,
    /// End of relevant input. Terminal.
    Stop,
}

impl OutputRegion {
    /// Returns the region that applies to `line`, given the current region.
    ///
    /// Sentinels are exact, case-sensitive substrings checked in priority
    /// order: ghost, basis set, stop. `Stop` is never left.
    pub fn next(self, line: &str) -> OutputRegion {
        if self == OutputRegion::Stop {
            return OutputRegion::Stop;
        }
        if line.contains(GHOST_SENTINEL) {
            OutputRegion::GhostDeclaration
        } else if line.contains(BASIS_SET_SENTINEL) {
            OutputRegion::BasisSet
        } else if self == OutputRegion::BasisSet && line.contains(STOP_SENTINEL) {
            OutputRegion::Stop
        } else {
            self
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            OutputRegion::Initial => "preamble",
            OutputRegion::GhostDeclaration => "declaration of ghost atoms",
            OutputRegion::BasisSet => "definition of basis sets",
            OutputRegion::Stop => "end of the basis set region",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIS_HEADER: &str = " LOCAL ATOMIC FUNCTIONS BASIS SET";
    const GHOST_HEADER: &str = " ATOMS TRANSFORMED INTO GHOSTS";

    #[test]
    fn default_region_is_initial() {
        assert_eq!(OutputRegion::default(), OutputRegion::Initial);
    }

    #[test]
    fn plain_lines_keep_the_current_region() {
        for region in [
            OutputRegion::Initial,
            OutputRegion::GhostDeclaration,
            OutputRegion::BasisSet,
        ] {
            assert_eq!(region.next("   1 O   0.000  0.000  0.000"), region);
        }
    }

    #[test]
    fn ghost_sentinel_enters_ghost_region_from_any_open_region() {
        assert_eq!(
            OutputRegion::Initial.next(GHOST_HEADER),
            OutputRegion::GhostDeclaration
        );
        assert_eq!(
            OutputRegion::BasisSet.next(GHOST_HEADER),
            OutputRegion::GhostDeclaration
        );
    }

    #[test]
    fn basis_set_sentinel_overrides_ghost_region() {
        assert_eq!(
            OutputRegion::GhostDeclaration.next(BASIS_HEADER),
            OutputRegion::BasisSet
        );
    }

    #[test]
    fn basis_set_sentinel_is_idempotent() {
        assert_eq!(OutputRegion::BasisSet.next(BASIS_HEADER), OutputRegion::BasisSet);
    }

    #[test]
    fn stop_sentinel_only_applies_inside_basis_set_region() {
        let line = " INFORMATION **** READM2 **** FULL DIRECT SCF";
        assert_eq!(OutputRegion::Initial.next(line), OutputRegion::Initial);
        assert_eq!(
            OutputRegion::GhostDeclaration.next(line),
            OutputRegion::GhostDeclaration
        );
        assert_eq!(OutputRegion::BasisSet.next(line), OutputRegion::Stop);
    }

    #[test]
    fn sentinels_are_case_sensitive() {
        assert_eq!(
            OutputRegion::Initial.next(" local atomic functions basis set"),
            OutputRegion::Initial
        );
        assert_eq!(OutputRegion::BasisSet.next(" information"), OutputRegion::BasisSet);
    }

    #[test]
    fn stop_is_terminal() {
        assert_eq!(OutputRegion::Stop.next(BASIS_HEADER), OutputRegion::Stop);
        assert_eq!(OutputRegion::Stop.next(GHOST_HEADER), OutputRegion::Stop);
    }
}
