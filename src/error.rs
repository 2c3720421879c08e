// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("CHIRP header is missing column \"{0}\"")]
    MissingColumn(&'static str),

    #[error("row {row}: {field} is not a number: \"{value}\"")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
