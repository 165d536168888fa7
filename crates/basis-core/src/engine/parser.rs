use super::builder::BasisGraphBuilder;
use super::error::{LineErrorKind, ParseError};
use super::recognizer::{LineMatch, recognize};
use super::region::OutputRegion;
use crate::core::models::output::CrystalOutput;
use crate::core::periodic::table::ElementTable;
use tracing::{debug, info, trace};

/// Outcome of feeding one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// Keep supplying lines.
    Continue,
    /// The basis-set region is over; stop supplying lines and call [`OutputParser::finalize`].
    Stop,
}

/// Line-oriented state machine over a CRYSTAL output.
///
/// The caller owns the input and feeds it one line at a time, in order. The
/// parser never reads from a file itself. Each parse needs its own instance;
/// the element table may be shared.
///
/// ```ignore
/// let table = ElementTable::standard();
/// let mut parser = OutputParser::new(&table);
/// for line in reader.lines() {
///     if parser.feed(&line?)? == Feed::Stop {
///         break;
///     }
/// }
/// let output = parser.finalize()?;
/// ```
#[derive(Debug)]
pub struct OutputParser<'t> {
    region: OutputRegion,
    builder: BasisGraphBuilder<'t>,
    line_number: usize,
}

impl<'t> OutputParser<'t> {
    pub fn new(table: &'t ElementTable) -> Self {
        Self {
            region: OutputRegion::Initial,
            builder: BasisGraphBuilder::new(table),
            line_number: 0,
        }
    }

    pub fn region(&self) -> OutputRegion {
        self.region
    }

    /// Number of lines fed so far, including the current one.
    pub fn lines_fed(&self) -> usize {
        self.line_number
    }

    pub fn builder(&self) -> &BasisGraphBuilder<'t> {
        &self.builder
    }

    /// Consumes one line: updates the region, then recognizes the line in it.
    pub fn feed(&mut self, line: &str) -> Result<Feed, ParseError> {
        if self.region == OutputRegion::Stop {
            return Ok(Feed::Stop);
        }
        self.line_number += 1;

        let next = self.region.next(line);
        if next != self.region {
            if next == OutputRegion::Stop {
                debug!(
                    line = self.line_number,
                    "Stopping output parsing: {}.",
                    next.describe()
                );
            } else {
                debug!(
                    line = self.line_number,
                    "Entering output region: {}.",
                    next.describe()
                );
            }
            self.region = next;
        }
        if self.region == OutputRegion::Stop {
            return Ok(Feed::Stop);
        }

        let line_match = recognize(self.region, line)
            .map_err(|kind| ParseError::at_line(self.line_number, kind))?;
        self.apply(line_match)
            .map_err(|kind| ParseError::at_line(self.line_number, kind))?;
        Ok(Feed::Continue)
    }

    fn apply(&mut self, line_match: LineMatch) -> Result<(), LineErrorKind> {
        match line_match {
            LineMatch::GhostDeclarations(declarations) => {
                trace!(count = declarations.len(), "Ghost declarations recognized.");
                self.builder.declare_ghosts(declarations);
            }
            LineMatch::Atom {
                label,
                element_token,
                coordinates,
            } => {
                let atom = self.builder.add_atom(label, &element_token, coordinates)?;
                trace!(
                    label = atom.label,
                    element = %atom.element.symbol,
                    ghost = atom.is_ghost,
                    "Atom recognized."
                );
            }
            LineMatch::BasisFunction(function_type) => {
                self.builder.add_basis_function(function_type)?;
            }
            LineMatch::Primitive(primitive) => {
                self.builder.add_primitive(primitive)?;
            }
            LineMatch::Nothing => {}
        }
        Ok(())
    }

    /// Validates the graph built so far and returns it frozen.
    pub fn finalize(self) -> Result<CrystalOutput, ParseError> {
        debug!("Validating the output parsing...");
        let output = self.builder.build()?;

        info!("Number of atoms: {}", output.atoms().len());
        info!("Number of ghost atoms: {}", output.ghost_atoms().count());
        info!("Number of unique basis sets: {}", output.basis_sets().len());
        Ok(output)
    }
}
