use thiserror::Error;

/// Errors that can occur while building or persisting shapes
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("Unsupported shape kind: {0}")]
    UnsupportedKind(String),

    #[error("Unknown attribute '{attribute}' for {kind}")]
    UnknownAttribute {
        kind: &'static str,
        attribute: String,
    },

    #[error("Invalid value {value} for '{attribute}': {reason}")]
    InvalidDimension {
        attribute: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("{kind} takes at most {max} values, got {found}")]
    TooManyValues {
        kind: &'static str,
        max: usize,
        found: usize,
    },

    #[error("Cannot store a {found} in the {expected} collection")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("Malformed CSV at line {line}: {message}")]
    MalformedCsv { line: u64, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;
