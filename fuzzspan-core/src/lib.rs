//! Domain layer for fuzzy span search
//!
//! This crate holds everything the search engine reads but never owns:
//! annotated token sequences, the closed set of boundary ignore rules and
//! the family of string similarity functions.
//!
//! # Example
//!
//! ```rust
//! use fuzzspan_core::doc::{Annotator, SimpleAnnotator};
//! use fuzzspan_core::similarity::FuzzyAlgorithm;
//!
//! let doc = SimpleAnnotator::new().annotate("The quikc brown fox");
//! assert_eq!(doc.len(), 4);
//!
//! let score = FuzzyAlgorithm::Simple.compare("quick", doc[1].text(), false);
//! assert_eq!(score, 80);
//! ```

pub mod doc;
pub mod error;
pub mod ignore;
pub mod similarity;
pub mod types;

pub use doc::{Annotator, Doc, SimpleAnnotator, Token};
pub use error::{CoreError, Result};
pub use ignore::{IgnoreConfig, IgnoreRule, IgnoreSet};
pub use similarity::{resolve, CaseOverride, FuzzyAlgorithm, Resolution};
pub use types::Match;
