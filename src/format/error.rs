//! Error types for overlay document operations.

use thiserror::Error;

/// Errors that can occur while reading or writing the overlay document.
///
/// Note that a malformed persisted document is deliberately NOT represented
/// here: the load path degrades to an empty overlay set instead of failing
/// (see [`crate::format::parse_or_empty`]). These errors cover the cases the
/// embedding application may want to report, such as a failed export write.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid document structure or content
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// Description of the problem
        message: String,
    },
}

impl FormatError {
    /// Create an invalid document error with a message.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}
