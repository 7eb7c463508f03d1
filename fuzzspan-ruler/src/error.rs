//! Ruler error types

use fuzzspan_core::CoreError;
use fuzzspan_engine::EngineError;
use thiserror::Error;

/// Ruler-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulerError {
    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Domain layer error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Labels can neither be paired with nor broadcast over the terms
    #[error(
        "terms and labels must have equal lengths or one label that applies to all terms \
         (got {terms} terms and {labels} labels)"
    )]
    LabelMismatch {
        /// Number of search terms
        terms: usize,
        /// Number of labels
        labels: usize,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for ruler operations
pub type Result<T> = std::result::Result<T, RulerError>;
