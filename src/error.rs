//! Error types for the jwwrust library

use std::io;
use thiserror::Error;

/// Main error type for jwwrust operations
#[derive(Debug, Error)]
pub enum JwwError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The buffer does not start with a supported JWW magic
    #[error("Invalid signature: {0}")]
    Signature(String),

    /// A read would exceed the buffer bounds
    #[error("Truncated data: {requested} byte(s) requested at offset {offset} in a {length}-byte buffer")]
    Truncated {
        /// Byte offset the read started at
        offset: usize,
        /// Number of bytes requested
        requested: usize,
        /// Total buffer length
        length: usize,
    },

    /// The fixed-layout file header could not be decoded
    #[error("Invalid file header: {0}")]
    InvalidHeader(String),

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error parsing record data
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for jwwrust operations
pub type Result<T> = std::result::Result<T, JwwError>;

impl From<String> for JwwError {
    fn from(s: String) -> Self {
        JwwError::Custom(s)
    }
}

impl From<&str> for JwwError {
    fn from(s: &str) -> Self {
        JwwError::Custom(s.to_string())
    }
}
