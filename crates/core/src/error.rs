use std::io;

/// Errors that can occur while building or emitting wiquery statements
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: unsupported value for option '{key}': {found}")]
    UnsupportedOptionValue { key: String, found: String },

    #[error("Option '{key}' holds {found}, expected {expected}")]
    OptionTypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid markup id: {0:?}")]
    InvalidMarkupId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Resource error: {0}")]
    ResourceError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for wiquery operations
pub type Result<T> = std::result::Result<T, Error>;
