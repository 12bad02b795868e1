//! Error types for sheetsum core.

use thiserror::Error;

/// Errors that can occur while parsing or checksumming a spreadsheet
#[derive(Error, Debug)]
pub enum SheetsumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed token {token:?} at line {line}, column {column}")]
    MalformedToken {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("Checksum overflow at line {line}")]
    Overflow { line: usize },

    #[error("Invalid spiral address: {0} (addresses start at 1)")]
    InvalidSpiralAddress(u64),

    #[error("Unknown checksum policy: {0}")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, SheetsumError>;
