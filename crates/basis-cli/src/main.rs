mod cli;
mod commands;
mod config;
mod display;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone()) {
        display::print_error(&e);
        return ExitCode::FAILURE;
    }

    display::print_banner();
    info!("cbasis v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = commands::report::run(&cli.report);
    let code = match &result {
        Ok(()) => {
            info!("Command completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Command failed: {}", e);
            display::print_error(e);
            ExitCode::FAILURE
        }
    };
    display::print_footer();
    code
}
