use clap::{Args, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const AFTER_HELP: &str = "\
Queries:
  N      enumerate the atomic orbitals of atom N
  N-M    enumerate the atomic orbitals of atoms N to M (inclusive, M may be below N)

Reports are printed in this order: -a, -b, -x, then the queries as given.";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "CRYSTAL basis set counter - lists the atoms, basis sets and atomic orbitals found in a CRYSTAL output file.",
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP,
)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// What to read and what to report.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the CRYSTAL output file.
    #[arg(required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Atom labels (N) or label ranges (N-M) whose atomic orbitals are enumerated.
    #[arg(value_name = "QUERY")]
    pub queries: Vec<String>,

    /// List every atom with its coordinates and atomic orbital range.
    #[arg(short, long)]
    pub atoms: bool,

    /// List every basis set with its primitives.
    #[arg(short, long)]
    pub basis_sets: bool,

    /// Enumerate the atomic orbitals of every ghost atom.
    #[arg(short = 'x', long)]
    pub ghosts: bool,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to a custom element table in TOML format, overriding the config file.
    #[arg(long, value_name = "PATH")]
    pub elements: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S display.coefficient-precision=5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}
