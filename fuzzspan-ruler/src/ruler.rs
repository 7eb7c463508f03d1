//! Fuzzy entity labeling
//!
//! Every term is searched with multi-match, each hit is tagged with the
//! term's label and the hits are registered in an [`EntityIndex`], highest
//! score first. A hit that collides with a registered entity is dropped,
//! or, with an overlap budget, shrunk away from the labeled edge until it
//! fits.

use crate::config::RulerConfig;
use crate::entity::{EntityIndex, EntitySpan};
use crate::error::{Result, RulerError};
use fuzzspan_core::{Annotator, Doc, Match, SimpleAnnotator};
use fuzzspan_engine::{FuzzySearcher, SearchOptions};
use log::debug;
use std::sync::Arc;

/// Outcome counts of one labeling pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulerStats {
    /// Hits registered as found
    pub registered: usize,
    /// Hits registered after shrinking
    pub adjusted: usize,
    /// Hits that could not be registered
    pub dropped: usize,
}

impl RulerStats {
    /// Number of hits considered
    pub fn total(&self) -> usize {
        self.registered + self.adjusted + self.dropped
    }
}

/// Labels fuzzy matches of a fixed set of terms
#[derive(Debug, Clone)]
pub struct FuzzyRuler {
    terms: Vec<String>,
    labels: Vec<String>,
    searcher: FuzzySearcher,
    options: SearchOptions,
    max_results: usize,
    overlap_adjust: usize,
}

impl FuzzyRuler {
    /// Build a ruler that tokenizes terms with [`SimpleAnnotator`]
    pub fn new(config: RulerConfig) -> Result<Self> {
        Self::with_annotator(config, Arc::new(SimpleAnnotator::new()))
    }

    /// Build a ruler that tokenizes terms with `annotator`
    ///
    /// Fails when the labels cannot be paired with the terms.
    pub fn with_annotator(config: RulerConfig, annotator: Arc<dyn Annotator>) -> Result<Self> {
        config.validate()?;
        let labels = config.resolved_labels()?;
        let searcher = FuzzySearcher::new(annotator).with_ignores(config.ignore_config());

        Ok(Self {
            terms: config.terms,
            labels,
            searcher,
            options: config.search,
            max_results: config.max_results,
            overlap_adjust: config.overlap_adjust,
        })
    }

    /// Parse a TOML configuration and build a ruler from it
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::new(RulerConfig::from_toml_str(toml_str)?)
    }

    /// Search terms
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Label of each term, after broadcasting
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Shrink attempts per side
    pub fn overlap_adjust(&self) -> usize {
        self.overlap_adjust
    }

    /// Labeled hits of every term in registration order
    ///
    /// Sorted by descending score; equal scores keep term order.
    pub fn matches(&self, doc: &Doc) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        for (term, label) in self.terms.iter().zip(&self.labels) {
            let found = self
                .searcher
                .multi_match(doc, term, self.max_results, &self.options)?;
            debug!("term '{}' [{}]: {} hits", term, label, found.len());
            matches.extend(found.iter().map(|m| m.with_label(label.as_str())));
        }

        matches.sort_by(|a, b| b.score().cmp(&a.score()));
        Ok(matches)
    }

    /// Label `doc` into a fresh index
    pub fn apply(&self, doc: &Doc) -> Result<EntityIndex> {
        let mut index = EntityIndex::new(doc.len());
        self.apply_to(doc, &mut index)?;
        Ok(index)
    }

    /// Label `doc` into an existing index
    ///
    /// Entities already in `index` take precedence over new hits.
    pub fn apply_to(&self, doc: &Doc, index: &mut EntityIndex) -> Result<RulerStats> {
        if index.doc_len() != doc.len() {
            return Err(RulerError::Config(format!(
                "entity index covers {} tokens but the document has {}",
                index.doc_len(),
                doc.len()
            )));
        }

        let mut stats = RulerStats::default();
        for m in self.matches(doc)? {
            match index.register(EntitySpan::from(&m)) {
                Ok(()) => stats.registered += 1,
                Err(conflict) => {
                    if self.adjust(index, &m) {
                        stats.adjusted += 1;
                    } else {
                        debug!("dropped {m}: {conflict}");
                        stats.dropped += 1;
                    }
                }
            }
        }

        debug!(
            "labeled {} tokens: {} registered, {} adjusted, {} dropped",
            doc.len(),
            stats.registered,
            stats.adjusted,
            stats.dropped
        );
        Ok(stats)
    }

    /// Retry a conflicting hit with one edge moved inward
    ///
    /// Attempt `i` moves the start right by `i` when the hit's first token
    /// is already labeled, then moves the end left by `i` when its last
    /// token is. Each attempt starts from the unshrunk hit.
    fn adjust(&self, index: &mut EntityIndex, m: &Match) -> bool {
        let (start, end) = (m.start(), m.end());
        let width = end - start;
        let label = m.label().unwrap_or_default();
        let start_labeled = index.is_labeled(start);
        let end_labeled = index.is_labeled(end - 1);

        for i in 1..=self.overlap_adjust {
            if start_labeled && i < width {
                let span = EntitySpan::new(start + i, end, label);
                if index.register(span).is_ok() {
                    debug!("adjusted {m} to {}..{}", start + i, end);
                    return true;
                }
            }

            if end_labeled && i < width {
                let span = EntitySpan::new(start, end - i, label);
                if index.register(span).is_ok() {
                    debug!("adjusted {m} to {}..{}", start, end - i);
                    return true;
                }
            }
        }

        false
    }
}
