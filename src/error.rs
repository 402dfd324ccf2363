//! Errors raised while reading samples, growing a tree,
//! or writing predictions.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The source file is missing or unreadable.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    /// The destination file cannot be created or written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },

    /// The file does not even contain a header row.
    #[error("{path} has no header row")]
    MissingHeader {
        path: PathBuf,
    },

    /// A data row whose field count differs from the header.
    #[error(
        "{origin}, line {line}: expected {expected} fields, found {found}"
    )]
    RaggedRow {
        origin: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Gini impurity is undefined on an empty row set.
    #[error("Gini impurity is undefined for an empty row set")]
    EmptyRows,

    /// A row is too short for the attribute a condition tests.
    #[error(
        "Row has {len} fields, but the condition tests attribute #{index}"
    )]
    RowTooShort {
        index: usize,
        len: usize,
    },

    /// Predictions to write do not line up with the rows of a sample.
    #[error("{rows} rows, but {predictions} predictions")]
    PredictionCount {
        rows: usize,
        predictions: usize,
    },

    /// A row of a file that could not be classified.
    #[error("{origin}, row {row}: {source}")]
    Row {
        origin: String,
        row: usize,
        source: Box<Error>,
    },

    #[error("Failed to (de)serialize the tree: {0}")]
    Json(#[from] serde_json::Error),
}
