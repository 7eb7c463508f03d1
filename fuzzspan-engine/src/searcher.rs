//! Best and multi match selection
//!
//! [`FuzzySearcher`] ties the pipeline together: resolve case handling,
//! scan, refine the strongest hits and filter the refined spans.

use crate::config::SearchOptions;
use crate::error::Result;
use crate::refiner::refine;
use crate::scanner::{calc_flex, scan_with};
use crate::window::WindowScorer;
use fuzzspan_core::{resolve, Annotator, Doc, FuzzyAlgorithm, IgnoreConfig, Match, SimpleAnnotator};
use log::{debug, warn};
use std::sync::Arc;

/// Fuzzy span searcher
///
/// Holds the annotator used for string queries and the boundary ignore
/// rules; everything else is passed per call through [`SearchOptions`].
#[derive(Clone)]
pub struct FuzzySearcher {
    annotator: Arc<dyn Annotator>,
    ignores: IgnoreConfig,
}

impl std::fmt::Debug for FuzzySearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuzzySearcher")
            .field("ignores", &self.ignores)
            .finish_non_exhaustive()
    }
}

impl Default for FuzzySearcher {
    fn default() -> Self {
        Self::new(Arc::new(SimpleAnnotator::new()))
    }
}

impl FuzzySearcher {
    /// Create a searcher that annotates queries with `annotator`
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self {
            annotator,
            ignores: IgnoreConfig::default(),
        }
    }

    /// Replace the boundary ignore rules
    pub fn with_ignores(mut self, ignores: IgnoreConfig) -> Self {
        self.ignores = ignores;
        self
    }

    /// Boundary ignore rules in use
    pub fn ignores(&self) -> &IgnoreConfig {
        &self.ignores
    }

    /// Annotator used for string queries
    pub fn annotator(&self) -> &dyn Annotator {
        self.annotator.as_ref()
    }

    /// Score the full text of two docs
    pub fn compare(&self, a: &Doc, b: &Doc, algorithm: FuzzyAlgorithm, case_sensitive: bool) -> u8 {
        let resolution = resolve(algorithm, case_sensitive);
        if let Some(warning) = &resolution.warning {
            warn!("{warning}");
        }
        algorithm.compare(&a.text(), &b.text(), resolution.case_sensitive)
    }

    /// Single best span of `doc` similar to `query`
    pub fn best_match(
        &self,
        doc: &Doc,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Option<Match>> {
        let query = self.annotator.annotate(query);
        self.best_match_doc(doc, &query, options)
    }

    /// [`best_match`](Self::best_match) with a pre-annotated query
    pub fn best_match_doc(
        &self,
        doc: &Doc,
        query: &Doc,
        options: &SearchOptions,
    ) -> Result<Option<Match>> {
        options.validate()?;
        let scorer = self.scorer(doc, query, options);
        let table = scan_with(&scorer, options.min_ratio, options.step);

        let Some((index, score)) = table.best() else {
            debug!("best_match: no window reached {}", options.min_ratio);
            return Ok(None);
        };

        let flex = self.flex(options.flex, query.len());
        let found = refine(
            &scorer,
            &table,
            index * options.step,
            options.step,
            flex,
            &self.ignores,
        )
        .filter(|m| m.score() >= options.min_ratio);

        debug!(
            "best_match: window {} scored {}, refined to {:?}",
            index, score, found
        );
        Ok(found)
    }

    /// Up to `max_results` non-overlapping spans of `doc` similar to `query`
    ///
    /// Results are sorted by descending score; equal scores keep the order
    /// in which their windows ranked.
    pub fn multi_match(
        &self,
        doc: &Doc,
        query: &str,
        max_results: usize,
        options: &SearchOptions,
    ) -> Result<Vec<Match>> {
        let query = self.annotator.annotate(query);
        self.multi_match_doc(doc, &query, max_results, options)
    }

    /// [`multi_match`](Self::multi_match) with a pre-annotated query
    pub fn multi_match_doc(
        &self,
        doc: &Doc,
        query: &Doc,
        max_results: usize,
        options: &SearchOptions,
    ) -> Result<Vec<Match>> {
        options.validate()?;
        let scorer = self.scorer(doc, query, options);
        let table = scan_with(&scorer, options.min_ratio, options.step);
        if table.is_empty() {
            debug!("multi_match: no window reached {}", options.min_ratio);
            return Ok(Vec::new());
        }

        let flex = self.flex(options.flex, query.len());
        let mut found: Vec<Match> = table
            .top(max_results)
            .into_iter()
            .filter_map(|index| {
                refine(
                    &scorer,
                    &table,
                    index * options.step,
                    options.step,
                    flex,
                    &self.ignores,
                )
            })
            .filter(|m| m.score() >= options.min_ratio)
            .collect();
        found.sort_by(|a, b| b.score().cmp(&a.score()));

        let found = filter_overlapping(found);
        debug!(
            "multi_match: {} windows over threshold, {} matches kept",
            table.len(),
            found.len()
        );
        Ok(found)
    }

    fn scorer<'a>(&self, doc: &'a Doc, query: &Doc, options: &SearchOptions) -> WindowScorer<'a> {
        let resolution = resolve(options.algorithm, options.case_sensitive);
        if let Some(warning) = &resolution.warning {
            warn!("{warning}");
        }
        WindowScorer::new(doc, query, resolution.algorithm, resolution.case_sensitive)
    }

    fn flex(&self, flex: usize, query_len: usize) -> usize {
        let clamped = calc_flex(flex, query_len);
        if clamped != flex {
            debug!(
                "flex {} is at least half of query length {}, using {}",
                flex, query_len, clamped
            );
        }
        clamped
    }
}

/// Keep matches that share no token with an earlier kept match
///
/// Input order decides priority, so sort by score first.
pub fn filter_overlapping(matches: Vec<Match>) -> Vec<Match> {
    let mut kept: Vec<Match> = Vec::with_capacity(matches.len());
    for candidate in matches {
        if kept.iter().all(|m| !m.overlaps(&candidate)) {
            kept.push(candidate);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(matches: &[Match]) -> Vec<(usize, usize, u8)> {
        matches.iter().map(|m| (m.start(), m.end(), m.score())).collect()
    }

    #[test]
    fn test_best_match_finds_typo() {
        let searcher = FuzzySearcher::default();
        let doc = searcher.annotator().annotate("Patient was prescribed Zithromax tablets.");
        let found = searcher
            .best_match(&doc, "zithromax tablet", &SearchOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!((found.start(), found.end(), found.score()), (3, 5, 97));
        assert_eq!(doc.span_text(found.start(), found.end()), "Zithromax tablets");
    }

    #[test]
    fn test_best_match_none_below_threshold() {
        let searcher = FuzzySearcher::default();
        let doc = searcher.annotator().annotate("Patient was prescribed Zithromax tablets.");
        let found = searcher
            .best_match(&doc, "ibuprofen", &SearchOptions::default())
            .unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_multi_match_case_sensitive() {
        let searcher = FuzzySearcher::default();
        let doc = searcher
            .annotator()
            .annotate("chiken from Popeyes is better than chken from Chick-fil-A");
        let options = SearchOptions::builder().case_sensitive(true).build().unwrap();
        let found = searcher.multi_match(&doc, "chicken", 3, &options).unwrap();
        assert_eq!(spans(&found), vec![(0, 1, 92), (6, 7, 83)]);
    }

    #[test]
    fn test_multi_match_case_insensitive() {
        let searcher = FuzzySearcher::default();
        let doc = searcher
            .annotator()
            .annotate("chiken from Popeyes is better than chken from Chick-fil-A");
        let found = searcher
            .multi_match(&doc, "chicken", 3, &SearchOptions::default())
            .unwrap();
        assert_eq!(spans(&found), vec![(0, 1, 92), (6, 7, 83), (8, 9, 83)]);
    }

    #[test]
    fn test_multi_match_zero_results() {
        let searcher = FuzzySearcher::default();
        let doc = searcher.annotator().annotate("chiken from Popeyes");
        let found = searcher
            .multi_match(&doc, "chicken", 0, &SearchOptions::default())
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_invalid_step_is_an_error() {
        let searcher = FuzzySearcher::default();
        let doc = searcher.annotator().annotate("chiken from Popeyes");
        let options = SearchOptions {
            step: 0,
            ..SearchOptions::default()
        };
        assert!(searcher.best_match(&doc, "chicken", &options).is_err());
        assert!(searcher.multi_match(&doc, "chicken", 3, &options).is_err());
    }

    #[test]
    fn test_compare_docs() {
        let searcher = FuzzySearcher::default();
        let a = searcher.annotator().annotate("Apple");
        let b = searcher.annotator().annotate("apple");
        assert_eq!(searcher.compare(&a, &b, FuzzyAlgorithm::Simple, false), 100);
        assert_eq!(searcher.compare(&a, &b, FuzzyAlgorithm::Simple, true), 80);
        // Token sort always lower-cases
        assert_eq!(searcher.compare(&a, &b, FuzzyAlgorithm::TokenSort, true), 100);
    }

    #[test]
    fn test_filter_overlapping() {
        let matches = vec![
            Match::new(2, 5, 95, 10).unwrap(),
            Match::new(4, 6, 90, 10).unwrap(),
            Match::new(5, 7, 85, 10).unwrap(),
            Match::new(0, 2, 80, 10).unwrap(),
        ];
        assert_eq!(
            spans(&filter_overlapping(matches)),
            vec![(2, 5, 95), (5, 7, 85), (0, 2, 80)]
        );
    }
}
