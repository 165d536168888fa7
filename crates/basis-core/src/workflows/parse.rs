use crate::core::models::output::CrystalOutput;
use crate::core::periodic::table::ElementTable;
use crate::engine::error::ParseError;
use crate::engine::parser::{Feed, OutputParser};
use crate::engine::progress::{Progress, ProgressReporter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Parses a CRYSTAL output from any buffered reader.
///
/// Reading stops as soon as the basis-set region is closed, so the remainder
/// of a large output is never read.
#[instrument(skip_all, name = "parse_workflow")]
pub fn parse_reader<R: BufRead>(
    mut reader: R,
    table: &ElementTable,
    reporter: &ProgressReporter,
) -> Result<CrystalOutput, ParseError> {
    let started = Instant::now();
    reporter.report(Progress::PhaseStart {
        name: "Reading output",
    });

    let mut parser = OutputParser::new(table);
    let mut line = String::new();
    let mut stopped = false;
    while reader.read_line(&mut line)? != 0 {
        if parser.feed(&line)? == Feed::Stop {
            stopped = true;
            break;
        }
        line.clear();
    }
    if !stopped {
        debug!(
            lines = parser.lines_fed(),
            "End of input reached before the end of the basis set region."
        );
    }
    reporter.report(Progress::Message(format!(
        "{} lines read",
        parser.lines_fed()
    )));
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Validating basis sets",
    });
    let output = parser.finalize()?;
    reporter.report(Progress::PhaseFinish);

    info!(
        "Output parsed in {:.3} s.",
        started.elapsed().as_secs_f64()
    );
    Ok(output)
}

/// Opens `path` and parses it with [`parse_reader`].
pub fn parse_file(
    path: impl AsRef<Path>,
    table: &ElementTable,
    reporter: &ProgressReporter,
) -> Result<CrystalOutput, ParseError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Parsing CRYSTAL output.");
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), table, reporter)
}
