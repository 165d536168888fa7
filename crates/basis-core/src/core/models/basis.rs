use super::element::Element;
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown basis function type: '{0}'")]
pub struct ParseFunctionTypeError(pub String);

/// Angular-momentum shell of a contracted basis function as printed by CRYSTAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionType {
    S,
    SP,
    P,
    D,
    F,
    G,
}

/// Magnetic sub-functions spanned by one shell.
///
/// `count` is always equal to `labels.len()`; it is kept as its own field so
/// callers never have to derive a quantity from an enum discriminant.
#[derive(Debug, PartialEq, Eq)]
pub struct Shell {
    pub count: usize,
    pub labels: &'static [&'static str],
}

static S_SHELL: Shell = Shell {
    count: 1,
    labels: &["s"],
};
static SP_SHELL: Shell = Shell {
    count: 4,
    labels: &["s", "p [x]", "p [y]", "p [z]"],
};
static P_SHELL: Shell = Shell {
    count: 3,
    labels: &["p [x]", "p [y]", "p [z]"],
};
static D_SHELL: Shell = Shell {
    count: 5,
    labels: &["d [z2]", "d [xz]", "d [yz]", "d [x2y2]", "d [xy]"],
};
static F_SHELL: Shell = Shell {
    count: 7,
    labels: &[
        "f [z2z]", "f [z2x]", "f [z2y]", "f [x2z]", "f [xyz]", "f [x2x]", "f [x2y]",
    ],
};
static G_SHELL: Shell = Shell {
    count: 9,
    labels: &[
        "g [x4z2]", "g [z2xz]", "g [z2yz]", "g [x2z2]", "g [z2xy]", "g [x2xz]", "g [x2yz]",
        "g [x4y4]", "g [x2xy]",
    ],
};

static FUNCTION_TYPE_CODES: Map<&'static str, FunctionType> = phf_map! {
    "S" => FunctionType::S,
    "SP" => FunctionType::SP,
    "P" => FunctionType::P,
    "D" => FunctionType::D,
    "F" => FunctionType::F,
    "G" => FunctionType::G,
};

impl FunctionType {
    /// The code CRYSTAL prints in the TYPE column.
    pub fn code(self) -> &'static str {
        match self {
            FunctionType::S => "S",
            FunctionType::SP => "SP",
            FunctionType::P => "P",
            FunctionType::D => "D",
            FunctionType::F => "F",
            FunctionType::G => "G",
        }
    }

    pub fn shell(self) -> &'static Shell {
        match self {
            FunctionType::S => &S_SHELL,
            FunctionType::SP => &SP_SHELL,
            FunctionType::P => &P_SHELL,
            FunctionType::D => &D_SHELL,
            FunctionType::F => &F_SHELL,
            FunctionType::G => &G_SHELL,
        }
    }
}

impl FromStr for FunctionType {
    type Err = ParseFunctionTypeError;

    /// Parses the exact, upper-case code printed by CRYSTAL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FUNCTION_TYPE_CODES
            .get(s)
            .copied()
            .ok_or_else(|| ParseFunctionTypeError(s.to_string()))
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single Gaussian-type primitive with its contraction coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveFunction {
    pub exponent: f64,
    pub s_coeff: f64,
    pub p_coeff: f64,
    pub dfg_coeff: f64,
}

/// A contracted basis function: one shell and its ordered primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisFunction {
    pub function_type: FunctionType,
    pub primitives: Vec<PrimitiveFunction>,
}

impl BasisFunction {
    pub fn new(function_type: FunctionType) -> Self {
        Self {
            function_type,
            primitives: Vec::new(),
        }
    }

    /// Number of atomic orbitals this function contributes.
    pub fn orbital_count(&self) -> usize {
        self.function_type.shell().count
    }
}

/// The basis set used by every atom of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisSet {
    pub element: Element,
    pub basis_functions: Vec<BasisFunction>,
    /// Effective Core Potential basis set. Never set by the output parser.
    pub pseudo: bool,
}

impl BasisSet {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            basis_functions: Vec::new(),
            pseudo: false,
        }
    }

    pub fn orbital_count(&self) -> usize {
        self.basis_functions
            .iter()
            .map(BasisFunction::orbital_count)
            .sum()
    }

    pub fn primitive_count(&self) -> usize {
        self.basis_functions.iter().map(|f| f.primitives.len()).sum()
    }

    pub fn kind(&self) -> &'static str {
        if self.pseudo {
            "Effective Core Potential basis set"
        } else {
            "All-electron basis set"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [FunctionType; 6] = [
        FunctionType::S,
        FunctionType::SP,
        FunctionType::P,
        FunctionType::D,
        FunctionType::F,
        FunctionType::G,
    ];

    #[test]
    fn shell_counts_match_magnetic_sub_functions() {
        let counts: Vec<usize> = ALL_TYPES.iter().map(|t| t.shell().count).collect();
        assert_eq!(counts, vec![1, 4, 3, 5, 7, 9]);
    }

    #[test]
    fn shell_count_agrees_with_label_list() {
        for function_type in ALL_TYPES {
            let shell = function_type.shell();
            assert_eq!(shell.count, shell.labels.len(), "{function_type}");
        }
    }

    #[test]
    fn from_str_parses_every_code() {
        for function_type in ALL_TYPES {
            assert_eq!(function_type.code().parse(), Ok(function_type));
        }
    }

    #[test]
    fn from_str_rejects_unknown_and_lowercase_codes() {
        assert_eq!(
            "H".parse::<FunctionType>(),
            Err(ParseFunctionTypeError("H".into()))
        );
        assert!("sp".parse::<FunctionType>().is_err());
        assert!("".parse::<FunctionType>().is_err());
    }

    #[test]
    fn basis_set_counts_orbitals_and_primitives() {
        let primitive = PrimitiveFunction {
            exponent: 1.0,
            s_coeff: 0.5,
            p_coeff: 0.0,
            dfg_coeff: 0.0,
        };
        let mut basis_set = BasisSet::new(Element::new("O", 8));
        let mut s = BasisFunction::new(FunctionType::S);
        s.primitives.extend([primitive, primitive]);
        let mut sp = BasisFunction::new(FunctionType::SP);
        sp.primitives.push(primitive);
        basis_set.basis_functions.extend([s, sp, BasisFunction::new(FunctionType::D)]);

        assert_eq!(basis_set.orbital_count(), 1 + 4 + 5);
        assert_eq!(basis_set.primitive_count(), 3);
    }

    #[test]
    fn basis_set_kind_reflects_pseudo_flag() {
        let mut basis_set = BasisSet::new(Element::new("Ag", 47));
        assert_eq!(basis_set.kind(), "All-electron basis set");
        basis_set.pseudo = true;
        assert_eq!(basis_set.kind(), "Effective Core Potential basis set");
    }
}
