//! Scoring of document windows against a query

use fuzzspan_core::{Doc, FuzzyAlgorithm};

/// Scores arbitrary `start..end` windows of a document against one query
///
/// Holds the query text once so every window comparison reuses it.
#[derive(Debug, Clone)]
pub struct WindowScorer<'a> {
    doc: &'a Doc,
    query_text: String,
    query_len: usize,
    algorithm: FuzzyAlgorithm,
    case_sensitive: bool,
}

impl<'a> WindowScorer<'a> {
    /// Create a scorer; `case_sensitive` is used as given
    pub fn new(doc: &'a Doc, query: &Doc, algorithm: FuzzyAlgorithm, case_sensitive: bool) -> Self {
        Self {
            doc,
            query_text: query.text(),
            query_len: query.len(),
            algorithm,
            case_sensitive,
        }
    }

    /// Score the surface text of `start..end`
    pub fn score(&self, start: usize, end: usize) -> u8 {
        let window = self.doc.span_text(start, end);
        self.algorithm.compare(&self.query_text, &window, self.case_sensitive)
    }

    /// Searched document
    pub fn doc(&self) -> &'a Doc {
        self.doc
    }

    /// Query length in tokens
    pub fn query_len(&self) -> usize {
        self.query_len
    }

    /// Query surface text
    pub fn query_text(&self) -> &str {
        &self.query_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzspan_core::{Annotator, SimpleAnnotator};

    #[test]
    fn test_score_windows() {
        let annotator = SimpleAnnotator::new();
        let doc = annotator.annotate("The quikc brown fox");
        let query = annotator.annotate("quick");
        let scorer = WindowScorer::new(&doc, &query, FuzzyAlgorithm::Simple, false);

        assert_eq!(scorer.query_len(), 1);
        assert_eq!(scorer.score(1, 2), 80);
        assert_eq!(scorer.score(0, 1), 0);
        // Empty windows score zero
        assert_eq!(scorer.score(4, 5), 0);
    }
}
