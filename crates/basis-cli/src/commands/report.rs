use crate::cli::ReportArgs;
use crate::config::{PartialReportConfig, ReportConfig};
use crate::display::tables;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crystal_basis::{
    core::periodic::table::ElementTable,
    engine::{progress::ProgressReporter, query::resolve},
    workflows,
};
use std::io::{self, Write};
use tracing::{info, warn};

pub fn run(args: &ReportArgs) -> Result<()> {
    let partial_config = PartialReportConfig::load(args)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(args)?;

    let stdout = io::stdout();
    execute(&config, &mut stdout.lock())
}

/// Parses the configured output and writes one report per query to `out`.
pub fn execute(config: &ReportConfig, out: &mut impl Write) -> Result<()> {
    let table = match &config.element_table {
        Some(path) => {
            info!("Loading element table from {:?}", path);
            ElementTable::load(path)?
        }
        None => ElementTable::standard(),
    };

    if config.queries.is_empty() {
        warn!("No query given: the output will only be validated.");
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Reading CRYSTAL output from {:?}", &config.input);
    let output = workflows::parse::parse_file(&config.input, &table, &reporter).map_err(|e| {
        CliError::Output {
            path: config.input.clone(),
            source: e,
        }
    })?;

    for query in &config.queries {
        info!("Resolving query: {}", query);
        let report = resolve(&output, query);
        tables::print_report(
            out,
            query,
            &report,
            config.coordinate_precision,
            config.coefficient_precision,
        )?;
    }
    Ok(())
}
