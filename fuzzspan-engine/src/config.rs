//! Search configuration
//!
//! [`SearchOptions`] carries the per-call knobs of a search. Build it
//! through [`SearchOptionsBuilder`] to get validation up front; options
//! constructed by hand are validated again when a search starts.

use crate::error::{EngineError, Result};
use fuzzspan_core::FuzzyAlgorithm;
use serde::{Deserialize, Serialize};

/// Default number of candidates kept by multi-match
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Default minimum similarity score
pub const DEFAULT_MIN_RATIO: u8 = 70;

/// Per-search options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Similarity strategy
    pub algorithm: FuzzyAlgorithm,
    /// Minimum score a window or refined match must reach
    ///
    /// Values above 100 are accepted and simply never match.
    pub min_ratio: u8,
    /// Compare without lower-casing
    pub case_sensitive: bool,
    /// Tokens the scan window advances per step
    pub step: usize,
    /// Maximum per-edge boundary perturbation during refinement
    pub flex: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            algorithm: FuzzyAlgorithm::Simple,
            min_ratio: DEFAULT_MIN_RATIO,
            case_sensitive: false,
            step: 1,
            flex: 1,
        }
    }
}

impl SearchOptions {
    /// Create a builder
    pub fn builder() -> SearchOptionsBuilder {
        SearchOptionsBuilder::new()
    }

    /// Check option invariants
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(EngineError::ConfigError(
                "step must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for SearchOptions
#[derive(Debug, Default)]
pub struct SearchOptionsBuilder {
    options: SearchOptions,
}

impl SearchOptionsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity strategy
    pub fn algorithm(mut self, algorithm: FuzzyAlgorithm) -> Self {
        self.options.algorithm = algorithm;
        self
    }

    /// Set the similarity strategy by registry name
    pub fn algorithm_name(mut self, name: &str) -> Result<Self> {
        self.options.algorithm = name.parse()?;
        Ok(self)
    }

    /// Set the minimum score
    pub fn min_ratio(mut self, min_ratio: u8) -> Self {
        self.options.min_ratio = min_ratio;
        self
    }

    /// Set case sensitivity
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.options.case_sensitive = case_sensitive;
        self
    }

    /// Set the scan step
    pub fn step(mut self, step: usize) -> Self {
        self.options.step = step;
        self
    }

    /// Set the refinement radius
    pub fn flex(mut self, flex: usize) -> Self {
        self.options.flex = flex;
        self
    }

    /// Build the options
    pub fn build(self) -> Result<SearchOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
