//! Error types for linaria.

use thiserror::Error;

/// Result type alias using [`LinariaError`].
pub type Result<T> = std::result::Result<T, LinariaError>;

/// The error type for all fallible linaria operations.
///
/// Looking up a word that is absent from the index is not an error; it
/// yields an empty line set. The variants below cover the only operations
/// that can actually fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinariaError {
    /// A line number outside the document was requested.
    #[error("line {line} is out of range for a document of {line_count} line(s)")]
    OutOfRange {
        /// The requested line number (0-based).
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },

    /// A word query was built from an empty string.
    #[error("word query must not be empty")]
    EmptyWord,
}

impl LinariaError {
    /// Create an out-of-range error for the given line and document length.
    pub fn out_of_range(line: usize, line_count: usize) -> Self {
        LinariaError::OutOfRange { line, line_count }
    }
}
