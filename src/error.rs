//! Error types for the feature-arff crate

use thiserror::Error;

/// Main error type for the feature-arff crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("label count {labels} does not match instance count {rows}")]
    ShapeMismatch { rows: usize, labels: usize },

    #[error("labels are required for export but none were given ({rows} instances)")]
    MissingLabels { rows: usize },

    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("buffer of length {len} cannot be viewed as {rows}x{cols} matrix")]
    InvalidBuffer { len: usize, rows: usize, cols: usize },

    #[error("cannot parse {location}: {message}")]
    InvalidInput { location: String, message: String },

    #[error("malformed ARFF document: {message}")]
    Serialization { message: String },

    #[error("invalid label policy '{input}'. Expected one of: {expected}")]
    ParseLabelPolicy { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl Error {
    /// Wrap an IO error with the operation that caused it.
    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    pub(crate) fn serialization(message: impl Into<String>) -> Self {
        Error::Serialization {
            message: message.into(),
        }
    }
}
