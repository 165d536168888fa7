use crystal_basis::core::periodic::table::ElementTableError;
use crystal_basis::engine::error::ParseError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read CRYSTAL output '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    ElementTable(#[from] ElementTableError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
