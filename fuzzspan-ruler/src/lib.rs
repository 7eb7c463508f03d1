//! Fuzzy entity labeling for annotated documents
//!
//! This crate is the labeling surface on top of `fuzzspan-engine`: a
//! [`FuzzyRuler`] searches a fixed list of terms in a document and records
//! the hits as non-overlapping labeled spans in an [`EntityIndex`].
//!
//! # Example
//!
//! ```rust
//! use fuzzspan_core::{Annotator, SimpleAnnotator};
//! use fuzzspan_ruler::{FuzzyRuler, RulerConfig};
//!
//! let config = RulerConfig::builder()
//!     .term("Kareem Abdul-Jabbar", "PERSON")
//!     .build()
//!     .unwrap();
//! let ruler = FuzzyRuler::new(config).unwrap();
//!
//! let doc = SimpleAnnotator::new()
//!     .annotate("There was a great basketball player named: Karem Abdul Jabar");
//! let entities = ruler.apply(&doc).unwrap();
//!
//! assert_eq!(entities.label_at(8), Some("PERSON"));
//! assert_eq!(entities.label_at(7), None);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod entity;
pub mod error;
pub mod ruler;

// Re-export key types
pub use config::{RulerConfig, RulerConfigBuilder};
pub use entity::{Conflict, EntityIndex, EntitySpan};
pub use error::{Result, RulerError};
pub use ruler::{FuzzyRuler, RulerStats};
