//! Ruler configuration
//!
//! A [`RulerConfig`] can be assembled with [`RulerConfigBuilder`] or parsed
//! from TOML:
//!
//! ```toml
//! terms = ["Kareem Abdul-Jabbar", "Magic Johnson"]
//! labels = ["PERSON"]
//! ignores = ["space", "punct", "stop"]
//! overlap_adjust = 1
//! max_results = 3
//!
//! [search]
//! algorithm = "simple"
//! min_ratio = 75
//! flex = 1
//! ```
//!
//! Unknown keys, algorithm names and ignore rule names are rejected while
//! parsing.

use crate::error::{Result, RulerError};
use fuzzspan_core::{FuzzyAlgorithm, IgnoreConfig, IgnoreSet};
use fuzzspan_engine::{SearchOptions, DEFAULT_MAX_RESULTS};
use serde::{Deserialize, Serialize};

/// Everything a [`FuzzyRuler`](crate::FuzzyRuler) is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulerConfig {
    /// Search terms
    pub terms: Vec<String>,
    /// One label per term, or a single label for all terms
    pub labels: Vec<String>,
    /// Boundary rules for both edges
    #[serde(default = "IgnoreSet::all")]
    pub ignores: IgnoreSet,
    /// Extra rules for the left edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_ignores: Option<IgnoreSet>,
    /// Extra rules for the right edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_ignores: Option<IgnoreSet>,
    /// Shrink attempts per side when a span collides with an entity
    #[serde(default)]
    pub overlap_adjust: usize,
    /// Matches kept per term
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Per-search options
    #[serde(default)]
    pub search: SearchOptions,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl RulerConfig {
    /// Create a builder
    pub fn builder() -> RulerConfigBuilder {
        RulerConfigBuilder::default()
    }

    /// Parse a configuration from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: RulerConfig = toml::from_str(toml_str)
            .map_err(|e| RulerError::Config(format!("Failed to parse ruler config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RulerError::Config(format!("Failed to serialize ruler config: {e}")))
    }

    /// Boundary rules as an [`IgnoreConfig`]
    pub fn ignore_config(&self) -> IgnoreConfig {
        IgnoreConfig {
            ignores: self.ignores.clone(),
            left_ignores: self.left_ignores.clone(),
            right_ignores: self.right_ignores.clone(),
        }
    }

    /// Labels paired with terms, broadcasting a single label
    pub fn resolved_labels(&self) -> Result<Vec<String>> {
        let terms = self.terms.len();
        let labels = self.labels.len();

        if labels == terms {
            Ok(self.labels.clone())
        } else if labels == 1 && terms > 1 {
            Ok(vec![self.labels[0].clone(); terms])
        } else {
            Err(RulerError::LabelMismatch { terms, labels })
        }
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        self.resolved_labels()?;
        self.search.validate()?;
        Ok(())
    }
}

/// Builder for RulerConfig
#[derive(Debug, Clone)]
pub struct RulerConfigBuilder {
    config: RulerConfig,
}

impl Default for RulerConfigBuilder {
    fn default() -> Self {
        Self {
            config: RulerConfig {
                terms: Vec::new(),
                labels: Vec::new(),
                ignores: IgnoreSet::all(),
                left_ignores: None,
                right_ignores: None,
                overlap_adjust: 0,
                max_results: DEFAULT_MAX_RESULTS,
                search: SearchOptions::default(),
            },
        }
    }
}

impl RulerConfigBuilder {
    /// Add a term with its label
    pub fn term(mut self, term: impl Into<String>, label: impl Into<String>) -> Self {
        self.config.terms.push(term.into());
        self.config.labels.push(label.into());
        self
    }

    /// Set the terms
    pub fn terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.terms = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the labels
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the boundary rules for both edges
    pub fn ignores(mut self, ignores: IgnoreSet) -> Self {
        self.config.ignores = ignores;
        self
    }

    /// Set extra left-edge rules
    pub fn left_ignores(mut self, left: IgnoreSet) -> Self {
        self.config.left_ignores = Some(left);
        self
    }

    /// Set extra right-edge rules
    pub fn right_ignores(mut self, right: IgnoreSet) -> Self {
        self.config.right_ignores = Some(right);
        self
    }

    /// Set the overlap adjustment budget
    pub fn overlap_adjust(mut self, overlap_adjust: usize) -> Self {
        self.config.overlap_adjust = overlap_adjust;
        self
    }

    /// Set the matches kept per term
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }

    /// Set the search options
    pub fn search(mut self, search: SearchOptions) -> Self {
        self.config.search = search;
        self
    }

    /// Set the similarity strategy
    pub fn algorithm(mut self, algorithm: FuzzyAlgorithm) -> Self {
        self.config.search.algorithm = algorithm;
        self
    }

    /// Set the minimum score
    pub fn min_ratio(mut self, min_ratio: u8) -> Self {
        self.config.search.min_ratio = min_ratio;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<RulerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzspan_core::{CoreError, IgnoreRule};

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            terms = ["Kareem Abdul-Jabbar", "Magic Johnson"]
            labels = ["PERSON"]
            ignores = ["punct"]
            left_ignores = ["stop"]
            overlap_adjust = 2

            [search]
            algorithm = "token_sort"
            min_ratio = 80
        "#;

        let config = RulerConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.terms.len(), 2);
        assert_eq!(config.overlap_adjust, 2);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.search.algorithm, FuzzyAlgorithm::TokenSort);
        assert_eq!(config.search.min_ratio, 80);
        assert_eq!(config.search.step, 1);
        assert_eq!(config.resolved_labels().unwrap(), vec!["PERSON", "PERSON"]);

        let ignores = config.ignore_config();
        assert!(ignores.left_rules().contains(IgnoreRule::Stop));
        assert!(!ignores.right_rules().contains(IgnoreRule::Stop));
    }

    #[test]
    fn test_defaults_when_omitted() {
        let config = RulerConfig::from_toml_str(r#"terms = ["a"]
labels = ["X"]"#)
        .unwrap();
        assert_eq!(config.ignores, IgnoreSet::all());
        assert_eq!(config.overlap_adjust, 0);
        assert_eq!(config.search, SearchOptions::default());
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let bad_rule = r#"
            terms = ["a"]
            labels = ["X"]
            ignores = ["digits"]
        "#;
        assert!(matches!(
            RulerConfig::from_toml_str(bad_rule),
            Err(RulerError::Config(_))
        ));

        let bad_algorithm = r#"
            terms = ["a"]
            labels = ["X"]

            [search]
            algorithm = "levenshtein"
        "#;
        match RulerConfig::from_toml_str(bad_algorithm) {
            Err(RulerError::Config(msg)) => assert!(msg.contains("token_sort")),
            other => panic!("Expected config error, got {other:?}"),
        }

        let bad_key = r#"
            terms = ["a"]
            labels = ["X"]
            verbose = true
        "#;
        assert!(RulerConfig::from_toml_str(bad_key).is_err());
    }

    #[test]
    fn test_label_mismatch() {
        let result = RulerConfig::builder()
            .terms(["a", "b", "c"])
            .labels(["X", "Y"])
            .build();
        assert_eq!(
            result.unwrap_err(),
            RulerError::LabelMismatch {
                terms: 3,
                labels: 2
            }
        );

        // A single label for a single term is a plain pairing
        assert!(RulerConfig::builder().term("a", "X").build().is_ok());
        // No terms and no labels is allowed
        assert!(RulerConfig::builder().build().is_ok());
        // One label for no terms is not
        assert!(RulerConfig::builder().labels(["X"]).build().is_err());
    }

    #[test]
    fn test_invalid_search_options() {
        let result = RulerConfig::builder()
            .term("a", "X")
            .search(SearchOptions {
                step: 0,
                ..SearchOptions::default()
            })
            .build();
        assert!(matches!(result, Err(RulerError::Engine(_))));
    }

    #[test]
    fn test_toml_round_trip_of_builder_output() {
        let config = RulerConfig::builder()
            .term("zithromax", "DRUG")
            .term("ibuprofen", "DRUG")
            .overlap_adjust(1)
            .min_ratio(85)
            .build()
            .unwrap();

        let toml_str = config.to_toml_string().unwrap();
        assert_eq!(RulerConfig::from_toml_str(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_core_error_converts() {
        let err: RulerError = CoreError::UnknownIgnoreRule {
            name: "digits".to_string(),
        }
        .into();
        assert!(err.to_string().contains("digits"));
    }
}
