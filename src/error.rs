//! Error types for env file operations

use thiserror::Error;

/// Main error type for env file operations
#[derive(Debug, Error)]
pub enum Error {
    /// A non-comment, non-blank line without a `=` separator
    #[error("malformed line {line}: '{content}' (expected NAME=VALUE)")]
    MalformedLine { line: usize, content: String },

    /// Operation referenced a key that is not in the file
    #[error("key '{0}' not found")]
    NotFound(String),

    /// Add referenced a key that already exists
    #[error("key '{0}' already exists")]
    Duplicate(String),

    /// Key is empty, contains `=`, or carries surrounding whitespace
    #[error("invalid key '{0}': keys must be non-empty and contain no '='")]
    InvalidName(String),

    /// File unreadable or unwritable
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
