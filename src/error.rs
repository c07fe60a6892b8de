//! Error types for the rsalp library.
//!
//! The parsers themselves never fail: they return `None` for a line they cannot
//! match. These errors cover everything around them, such as by-name field
//! access, numeric conversion and reading lines from an input source.

use thiserror::Error;

/// Result type alias for rsalp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while accessing records or reading log input.
#[derive(Error, Debug)]
pub enum Error {
    /// Error when a field name is not part of the record.
    #[error("field '{field}' not found")]
    FieldNotFound { field: String },

    /// Error when a field value cannot be parsed as the requested type.
    #[error("field '{field}' with value '{value}' cannot be parsed as {target_type}: {source}")]
    FieldParseError {
        field: String,
        value: String,
        target_type: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error when a line read from the input is not a combined log line.
    #[error("line {line_number} is not a combined log line: '{line}'")]
    UnparseableLine { line_number: usize, line: String },

    /// Error when a strategy name is not recognised.
    #[error("unknown parser strategy '{name}' (expected 'pattern' or 'token')")]
    UnknownStrategy { name: String },

    /// IO error when reading log input.
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new field not found error.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }

    /// Create a new field parse error.
    pub fn field_parse_error(
        field: impl Into<String>,
        value: impl Into<String>,
        target_type: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::FieldParseError {
            field: field.into(),
            value: value.into(),
            target_type: target_type.into(),
            source: Box::new(source),
        }
    }

    /// Create a new unparseable line error.
    pub fn unparseable_line(line_number: usize, line: impl Into<String>) -> Self {
        Self::UnparseableLine {
            line_number,
            line: line.into(),
        }
    }

    /// Create a new unknown strategy error.
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::UnknownStrategy { name: name.into() }
    }
}
