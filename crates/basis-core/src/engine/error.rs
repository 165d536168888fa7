use crate::core::periodic::table::ElementLookupError;
use std::io;
use thiserror::Error;

/// Fatal failures of a parse. None of them leave a usable partial result.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Couldn't find basis-set information in the given output. Please double check the file.")]
    NoBasisSetInformation,

    #[error("No basis set attributed to atom {label}")]
    UnassignedBasisSet { label: u32 },

    #[error("Expected {expected} ghost atoms: found {found}")]
    GhostCountMismatch { expected: usize, found: usize },

    #[error("Parse error on line {line}: {kind}")]
    Line { line: usize, kind: LineErrorKind },
}

/// Failures tied to one recognized line of the output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineErrorKind {
    #[error("Unexpected ghost atom found: atom {label} was not declared as a ghost")]
    UnresolvedGhost { label: u32 },

    #[error("Invalid atom label {label}: labels start at 1")]
    InvalidLabel { label: u32 },

    #[error("Atom label {label} appears more than once")]
    DuplicateLabel { label: u32 },

    #[error("Found a basis function, but there's no basis set for it")]
    BasisFunctionWithoutBasisSet,

    #[error("Found a primitive function, but there's no basis set for it")]
    PrimitiveWithoutBasisSet,

    #[error("Found a primitive function, but there's no basis function for it")]
    PrimitiveWithoutBasisFunction,

    #[error(transparent)]
    Element(#[from] ElementLookupError),

    #[error("Unknown basis function type '{0}'")]
    UnknownFunctionType(String),

    #[error("Primitive line must hold 4 numbers, found {found}")]
    MalformedPrimitive { found: usize },

    #[error("Invalid number '{value}'")]
    InvalidNumber { value: String },
}

impl ParseError {
    pub(crate) fn at_line(line: usize, kind: LineErrorKind) -> Self {
        ParseError::Line { line, kind }
    }

    /// The line-level cause, if the error is tied to a line.
    pub fn line_kind(&self) -> Option<&LineErrorKind> {
        match self {
            ParseError::Line { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
