//! Windowed fuzzy search over annotated token sequences
//!
//! This crate scans a document with a query-sized window, refines the
//! strongest windows into tight spans and selects either the single best
//! span or several non-overlapping ones.
//!
//! # Example
//!
//! ```rust
//! use fuzzspan_engine::{FuzzySearcher, SearchOptions};
//! use fuzzspan_core::Annotator;
//!
//! let searcher = FuzzySearcher::default();
//! let doc = searcher.annotator().annotate("Patient was prescribed Zithromax tablets.");
//!
//! let found = searcher
//!     .best_match(&doc, "zithromax tablet", &SearchOptions::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(doc.span_text(found.start(), found.end()), "Zithromax tablets");
//! assert_eq!(found.score(), 97);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod refiner;
pub mod scanner;
pub mod searcher;
pub mod window;

// Re-export key types
pub use config::{SearchOptions, SearchOptionsBuilder, DEFAULT_MAX_RESULTS, DEFAULT_MIN_RATIO};
pub use error::{EngineError, Result};
pub use scanner::{calc_flex, scan, ScoreTable};
pub use searcher::{filter_overlapping, FuzzySearcher};
pub use window::WindowScorer;

// Re-export from core for convenience
pub use fuzzspan_core::{Doc, FuzzyAlgorithm, IgnoreConfig, Match};
