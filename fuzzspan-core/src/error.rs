//! Core error types (deterministic only)

use thiserror::Error;

/// Core errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Similarity algorithm name not in the registry
    #[error("no fuzzy matching algorithm called '{name}', algorithm must be one of: {valid}")]
    UnknownAlgorithm {
        /// The requested name
        name: String,
        /// Comma separated list of accepted names
        valid: String,
    },

    /// Ignore rule name not in the closed set
    #[error("unknown ignore rule '{name}', expected one of: space, punct, stop")]
    UnknownIgnoreRule {
        /// The requested name
        name: String,
    },

    /// Span outside of the document or empty
    #[error("invalid span {start}..{end} for document of length {len}")]
    InvalidSpan {
        /// Inclusive start token index
        start: usize,
        /// Exclusive end token index
        end: usize,
        /// Document length in tokens
        len: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
