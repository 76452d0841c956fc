//! Error types for sva-format.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid length for {field}: expected {expected}, found {found}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Non-finite value in field: {0}")]
    NonFinite(&'static str),

    #[error("Unknown or mismatched kind: {0}")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
