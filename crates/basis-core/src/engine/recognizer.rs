use super::error::LineErrorKind;
use super::region::OutputRegion;
use crate::core::models::basis::{FunctionType, PrimitiveFunction};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::str::FromStr;

static GHOST_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\(\s+(\d+)\)").unwrap());
static ATOM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+(\d+)\s+(\w+)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)\s+(-?\d+\.\d+)").unwrap()
});
static FUNCTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+(\d+)?-?\s+(\d+)\s(\w+)\s+$").unwrap());
static PRIMITIVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s?(-?\d\.\d+E[+-]\d\d)").unwrap());

const PRIMITIVE_FIELDS: usize = 4;

/// A ghost declaration: atom `label` is a ghost standing in for element `atomic_number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostDeclaration {
    pub label: u32,
    pub atomic_number: u32,
}

/// Classification of one line. At most one shape matches per line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineMatch {
    GhostDeclarations(Vec<GhostDeclaration>),
    Atom {
        label: u32,
        element_token: String,
        coordinates: [f64; 3],
    },
    BasisFunction(FunctionType),
    Primitive(PrimitiveFunction),
    Nothing,
}

/// Classifies `line` with the recognizers active in `region`.
///
/// Inside the basis-set region the atom shape is tried first, then the
/// basis-function shape, then the primitive shape. Lines matching nothing are
/// [`LineMatch::Nothing`], never an error.
pub fn recognize(region: OutputRegion, line: &str) -> Result<LineMatch, LineErrorKind> {
    let line = terminated(line);
    match region {
        OutputRegion::GhostDeclaration => recognize_ghosts(&line),
        OutputRegion::BasisSet => {
            if let Some(atom) = recognize_atom(&line)? {
                Ok(atom)
            } else if let Some(function) = recognize_basis_function(&line)? {
                Ok(function)
            } else {
                recognize_primitive(&line)
            }
        }
        OutputRegion::Initial | OutputRegion::Stop => Ok(LineMatch::Nothing),
    }
}

/// The line patterns expect the `\n` terminator that file iteration keeps.
fn terminated(line: &str) -> Cow<'_, str> {
    let body = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    if body.len() + 1 == line.len() && line.ends_with('\n') {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(format!("{body}\n"))
    }
}

fn parse_number<T: FromStr>(value: &str) -> Result<T, LineErrorKind> {
    value.parse().map_err(|_| LineErrorKind::InvalidNumber {
        value: value.to_string(),
    })
}

fn recognize_ghosts(line: &str) -> Result<LineMatch, LineErrorKind> {
    let declarations = GHOST_REGEX
        .captures_iter(line)
        .map(|caps| {
            Ok(GhostDeclaration {
                label: parse_number(&caps[1])?,
                atomic_number: parse_number(&caps[2])?,
            })
        })
        .collect::<Result<Vec<_>, LineErrorKind>>()?;

    if declarations.is_empty() {
        Ok(LineMatch::Nothing)
    } else {
        Ok(LineMatch::GhostDeclarations(declarations))
    }
}

fn recognize_atom(line: &str) -> Result<Option<LineMatch>, LineErrorKind> {
    let Some(caps) = ATOM_REGEX.captures(line) else {
        return Ok(None);
    };
    Ok(Some(LineMatch::Atom {
        label: parse_number(&caps[1])?,
        element_token: caps[2].to_string(),
        coordinates: [
            parse_number(&caps[3])?,
            parse_number(&caps[4])?,
            parse_number(&caps[5])?,
        ],
    }))
}

fn recognize_basis_function(line: &str) -> Result<Option<LineMatch>, LineErrorKind> {
    let Some(caps) = FUNCTION_REGEX.captures(line) else {
        return Ok(None);
    };
    let code = &caps[3];
    let function_type = code
        .parse()
        .map_err(|_| LineErrorKind::UnknownFunctionType(code.to_string()))?;
    Ok(Some(LineMatch::BasisFunction(function_type)))
}

fn recognize_primitive(line: &str) -> Result<LineMatch, LineErrorKind> {
    let values: Vec<&str> = PRIMITIVE_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    match values.len() {
        0 => Ok(LineMatch::Nothing),
        PRIMITIVE_FIELDS => Ok(LineMatch::Primitive(PrimitiveFunction {
            exponent: parse_number(values[0])?,
            s_coeff: parse_number(values[1])?,
            p_coeff: parse_number(values[2])?,
            dfg_coeff: parse_number(values[3])?,
        })),
        found => Err(LineErrorKind::MalformedPrimitive { found }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basis(line: &str) -> LineMatch {
        recognize(OutputRegion::BasisSet, line).unwrap()
    }

    #[test]
    fn ghost_line_yields_every_declared_pair() {
        let result = recognize(
            OutputRegion::GhostDeclaration,
            "    3(  12)    4(  12)   10(   8)\n",
        )
        .unwrap();

        assert_eq!(
            result,
            LineMatch::GhostDeclarations(vec![
                GhostDeclaration { label: 3, atomic_number: 12 },
                GhostDeclaration { label: 4, atomic_number: 12 },
                GhostDeclaration { label: 10, atomic_number: 8 },
            ])
        );
    }

    #[test]
    fn ghost_recognizer_requires_whitespace_inside_parentheses() {
        assert_eq!(
            recognize(OutputRegion::GhostDeclaration, "3(12)").unwrap(),
            LineMatch::Nothing
        );
    }

    #[test]
    fn atom_line_captures_label_symbol_and_coordinates() {
        assert_eq!(
            basis("   3 XX    1.500  -0.250   0.000"),
            LineMatch::Atom {
                label: 3,
                element_token: "XX".into(),
                coordinates: [1.5, -0.25, 0.0],
            }
        );
    }

    #[test]
    fn basis_function_line_with_single_index() {
        assert_eq!(
            basis("                                   1 S  "),
            LineMatch::BasisFunction(FunctionType::S)
        );
    }

    #[test]
    fn basis_function_line_with_index_range() {
        assert_eq!(
            basis("                                 2-   5 SP \n"),
            LineMatch::BasisFunction(FunctionType::SP)
        );
        assert_eq!(
            basis("                                10-  14 D  \r\n"),
            LineMatch::BasisFunction(FunctionType::D)
        );
    }

    #[test]
    fn unknown_function_code_is_an_error() {
        assert_eq!(
            recognize(OutputRegion::BasisSet, "          1 H  "),
            Err(LineErrorKind::UnknownFunctionType("H".into()))
        );
    }

    #[test]
    fn primitive_line_captures_four_numbers() {
        assert_eq!(
            basis("                                         8.588E+03 1.895E-03 0.000E+00-1.000E+00"),
            LineMatch::Primitive(PrimitiveFunction {
                exponent: 8588.0,
                s_coeff: 1.895e-3,
                p_coeff: 0.0,
                dfg_coeff: -1.0,
            })
        );
    }

    #[test]
    fn primitive_line_with_wrong_field_count_is_malformed() {
        assert_eq!(
            recognize(OutputRegion::BasisSet, "   1.000E+00 2.000E+00 3.000E+00"),
            Err(LineErrorKind::MalformedPrimitive { found: 3 })
        );
    }

    #[test]
    fn unmatched_lines_are_nothing() {
        assert_eq!(basis(" *******************************************"), LineMatch::Nothing);
        assert_eq!(
            basis("   ATOM   X(AU)   Y(AU)   Z(AU)  N. TYPE  EXPONENT  S COEF"),
            LineMatch::Nothing
        );
        assert_eq!(basis(""), LineMatch::Nothing);
    }

    #[test]
    fn initial_and_stop_regions_never_recognize() {
        let atom_line = "   1 O     0.000   0.000   0.000";
        assert_eq!(recognize(OutputRegion::Initial, atom_line).unwrap(), LineMatch::Nothing);
        assert_eq!(recognize(OutputRegion::Stop, atom_line).unwrap(), LineMatch::Nothing);
    }

    #[test]
    fn atom_label_overflow_is_invalid_number() {
        assert_eq!(
            recognize(OutputRegion::BasisSet, "   99999999999 O  0.000 0.000 0.000"),
            Err(LineErrorKind::InvalidNumber {
                value: "99999999999".into()
            })
        );
    }

    #[test]
    fn terminated_normalizes_line_endings() {
        assert_eq!(terminated("abc"), "abc\n");
        assert_eq!(terminated("abc\n"), "abc\n");
        assert_eq!(terminated("abc\r\n"), "abc\n");
        assert!(matches!(terminated("abc\n"), Cow::Borrowed(_)));
    }
}
