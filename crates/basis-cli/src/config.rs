use crate::cli::ReportArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use crystal_basis::engine::query::Query;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_PRECISION: usize = 3;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDisplayConfig {
    #[serde(rename = "coordinate-precision")]
    coordinate_precision: Option<usize>,
    #[serde(rename = "coefficient-precision")]
    coefficient_precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialElementsConfig {
    table: Option<PathBuf>,
}

/// Settings read from a TOML file, every field optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialReportConfig {
    display: Option<PartialDisplayConfig>,
    elements: Option<PartialElementsConfig>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub element_table: Option<PathBuf>,
    pub coordinate_precision: usize,
    pub coefficient_precision: usize,
    pub queries: Vec<Query>,
}

impl PartialReportConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts empty.
    pub fn load(args: &ReportArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &ReportArgs) -> Result<ReportConfig> {
        self.apply_set_values(&args.set_values)?;

        let display = self.display.take().unwrap_or_default();
        let elements = self.elements.take().unwrap_or_default();

        let element_table = args.elements.clone().or(elements.table);
        if let Some(path) = &element_table {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Element table does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(ReportConfig {
            input: args.input.clone(),
            element_table,
            coordinate_precision: display.coordinate_precision.unwrap_or(DEFAULT_PRECISION),
            coefficient_precision: display.coefficient_precision.unwrap_or(DEFAULT_PRECISION),
            queries: parser::collect_queries(
                args.atoms,
                args.basis_sets,
                args.ghosts,
                &args.queries,
            ),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let parse_precision = || -> Result<usize> {
                value_str.parse().map_err(|_| {
                    CliError::Config(format!(
                        "Invalid integer value for {}: {}",
                        key, value_str
                    ))
                })
            };

            match key {
                "display.coordinate-precision" => {
                    self.display
                        .get_or_insert_with(Default::default)
                        .coordinate_precision = Some(parse_precision()?);
                }
                "display.coefficient-precision" => {
                    self.display
                        .get_or_insert_with(Default::default)
                        .coefficient_precision = Some(parse_precision()?);
                }
                "elements.table" => {
                    self.elements.get_or_insert_with(Default::default).table =
                        Some(PathBuf::from(value_str));
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
