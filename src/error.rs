use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board must have at least one row")]
    ZeroRows,
    #[error("board must have at least one column")]
    ZeroCols,
    #[error("board of {rows}x{cols} exceeds the maximum of {max} rows or columns")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("lit probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown option {0}")]
    UnknownOption(String),
    #[error("could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateParseError {
    #[error("coordinate {0:?} is not of the form row-col")]
    MissingSeparator(String),
    #[error("{0:?} is not a valid coordinate component")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("grid of {rows}x{cols} exceeds the maximum of {max} rows or columns")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("invalid JSON board: {0}")]
    Json(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("unknown cell symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}
