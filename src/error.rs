use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum EnaError {
    #[error("invalid taxonomic ID: {0}")]
    #[diagnostic(help("a taxonomic ID is a non-empty string of digits, e.g. 9606"))]
    InvalidTaxonId(String),

    #[error("unknown read_run field: {0}")]
    UnknownField(String),

    #[error("duplicate field in field list: {0}")]
    DuplicateField(String),

    #[error("failed to read config file at {0}")]
    ConfigRead(PathBuf),

    #[error("failed to parse JSON config: {0}")]
    ConfigParse(String),

    #[error("ENA request failed: {0}")]
    EnaHttp(String),

    #[error("ENA returned status {status}: {message}")]
    EnaStatus { status: u16, message: String },

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
