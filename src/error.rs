//! Error types for decoding containers and moving them through files.

use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The container is malformed or truncated.
    #[error("invalid compressed format: {message} at offset {offset}")]
    Format { message: String, offset: usize },

    /// I/O error while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Format error without a meaningful position.
    pub fn format(message: impl Into<String>) -> Self {
        Error::Format { message: message.into(), offset: 0 }
    }

    /// Format error at a byte offset of the container.
    pub fn format_at(message: impl Into<String>, offset: usize) -> Self {
        Error::Format { message: message.into(), offset }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}
