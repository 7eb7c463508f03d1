//! Boundary refinement of scan hits
//!
//! A scan hit is a fixed-length window. Refinement nudges each edge by up
//! to `flex` tokens in either direction, keeping a move only when it
//! strictly improves the score, then trims ignorable tokens off both edges
//! and rescores the final span.
//!
//! Both edges are searched independently against the initial window, so
//! the result is not guaranteed to be the best span reachable by moving
//! both edges together.

use crate::scanner::ScoreTable;
use crate::window::WindowScorer;
use fuzzspan_core::{Doc, IgnoreConfig, IgnoreSet, Match};
use log::trace;

/// Refine the window scanned at token offset `pos`
///
/// `flex` is used as given; clamp it with
/// [`calc_flex`](crate::scanner::calc_flex) first. When the independently
/// refined edges cross, the scanned window is kept unchanged. Returns `None`
/// when the window is empty or trimming leaves nothing to score.
pub fn refine(
    scorer: &WindowScorer<'_>,
    table: &ScoreTable,
    pos: usize,
    step: usize,
    flex: usize,
    ignores: &IgnoreConfig,
) -> Option<Match> {
    let doc = scorer.doc();
    let left = pos;
    let right = (pos + scorer.query_len()).min(doc.len());
    if left >= right {
        return None;
    }

    let baseline = table
        .get(pos / step.max(1))
        .unwrap_or_else(|| scorer.score(left, right));

    let (mut best_left, _) = refine_left(scorer, left, right, baseline, flex);
    let (mut best_right, _) = refine_right(scorer, left, right, baseline, flex);
    // Edges that crossed fall back to the scanned window
    if best_left >= best_right {
        best_left = left;
        best_right = right;
    }

    let (start, end) = trim(doc, best_left, best_right, ignores);
    if start >= end {
        return None;
    }

    let score = scorer.score(start, end);
    trace!(
        "refined {}..{} -> {}..{} ({} -> {})",
        left,
        right,
        start,
        end,
        baseline,
        score
    );
    Match::new(start, end, score, doc.len()).ok()
}

/// Best left edge for `left..right` within `flex` tokens
///
/// A candidate replaces the current best only on a strictly higher score,
/// so earlier candidates win ties. Candidates that fall outside the
/// document or cross the right edge are skipped.
pub fn refine_left(
    scorer: &WindowScorer<'_>,
    left: usize,
    right: usize,
    baseline: u8,
    flex: usize,
) -> (usize, u8) {
    let mut best = (left, baseline);

    for f in 0..flex {
        if let Some(candidate) = left.checked_sub(f) {
            let score = scorer.score(candidate, right);
            trace!("ll {}..{} = {}", candidate, right, score);
            if score > best.1 {
                best = (candidate, score);
            }
        }

        let candidate = left + f;
        if candidate < right {
            let score = scorer.score(candidate, right);
            trace!("lr {}..{} = {}", candidate, right, score);
            if score > best.1 {
                best = (candidate, score);
            }
        }
    }

    best
}

/// Best right edge for `left..right` within `flex` tokens
///
/// Same tie and bounds rules as [`refine_left`].
pub fn refine_right(
    scorer: &WindowScorer<'_>,
    left: usize,
    right: usize,
    baseline: u8,
    flex: usize,
) -> (usize, u8) {
    let doc_len = scorer.doc().len();
    let mut best = (right, baseline);

    for f in 0..flex {
        if let Some(candidate) = right.checked_sub(f) {
            if candidate > left {
                let score = scorer.score(left, candidate);
                trace!("rl {}..{} = {}", left, candidate, score);
                if score > best.1 {
                    best = (candidate, score);
                }
            }
        }

        let candidate = right + f;
        if candidate <= doc_len {
            let score = scorer.score(left, candidate);
            trace!("rr {}..{} = {}", left, candidate, score);
            if score > best.1 {
                best = (candidate, score);
            }
        }
    }

    best
}

/// Strip ignorable tokens from both edges of `left..right`
///
/// At least one token always remains when the input span is non-empty.
pub fn trim(doc: &Doc, left: usize, right: usize, ignores: &IgnoreConfig) -> (usize, usize) {
    let left = trim_left(doc, left, right, &ignores.left_rules());
    let right = trim_right(doc, left, right, &ignores.right_rules());
    (left, right)
}

/// Advance `left` past ignorable tokens, stopping on the last token
pub fn trim_left(doc: &Doc, mut left: usize, right: usize, rules: &IgnoreSet) -> usize {
    if rules.is_empty() {
        return left;
    }

    while left < right {
        match doc.get(left) {
            Some(token) if rules.matches(token) => {
                if left + 1 == right {
                    break;
                }
                left += 1;
            }
            _ => break,
        }
    }
    left
}

/// Pull `right` back past ignorable tokens, stopping on `left`
pub fn trim_right(doc: &Doc, left: usize, right: usize, rules: &IgnoreSet) -> usize {
    if rules.is_empty() || right <= left {
        return right;
    }

    let mut last = right - 1;
    while let Some(token) = doc.get(last) {
        if !rules.matches(token) || last == left {
            break;
        }
        last -= 1;
    }
    last + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;
    use fuzzspan_core::{Annotator, FuzzyAlgorithm, IgnoreRule, SimpleAnnotator};

    fn words(words: &[&str]) -> Doc {
        SimpleAnnotator::new().annotate_words(words)
    }

    #[test]
    fn test_refine_moves_both_edges() {
        let doc = words(&["xx", "alpha", "beta", "gamma", "delta", "epsilon", "zz"]);
        let query = SimpleAnnotator::new().annotate("alpha beta gamma delta epsilon");
        let table = scan(&doc, &query, FuzzyAlgorithm::Simple, 0, false, 1);
        assert_eq!(table.get(0), Some(80));

        let scorer = WindowScorer::new(&doc, &query, FuzzyAlgorithm::Simple, false);
        assert_eq!(refine_left(&scorer, 0, 5, 80, 2), (1, 85));
        assert_eq!(refine_right(&scorer, 0, 5, 80, 2), (6, 95));

        let refined = refine(&scorer, &table, 0, 1, 2, &IgnoreConfig::default()).unwrap();
        assert_eq!((refined.start(), refined.end(), refined.score()), (1, 6, 100));
    }

    #[test]
    fn test_refine_trims_punctuation() {
        let annotator = SimpleAnnotator::new();
        let doc =
            annotator.annotate("There was a great basketball player named: Karem Abdul Jabar");
        let query = annotator.annotate("Kareem Abdul-Jabbar");
        assert_eq!(doc.len(), 11);
        assert_eq!(query.len(), 4);

        let scorer = WindowScorer::new(&doc, &query, FuzzyAlgorithm::Simple, false);
        let table: ScoreTable = vec![(7, 84)].into_iter().collect();
        let refined = refine(&scorer, &table, 7, 1, 1, &IgnoreConfig::default()).unwrap();
        assert_eq!((refined.start(), refined.end(), refined.score()), (8, 11, 89));
    }

    #[test]
    fn test_refine_computes_missing_baseline() {
        let annotator = SimpleAnnotator::new();
        let doc = annotator.annotate("The quikc brown fox");
        let query = annotator.annotate("quick");
        let scorer = WindowScorer::new(&doc, &query, FuzzyAlgorithm::Simple, false);

        let refined =
            refine(&scorer, &ScoreTable::new(), 1, 1, 1, &IgnoreConfig::default()).unwrap();
        assert_eq!((refined.start(), refined.end(), refined.score()), (1, 2, 80));
    }

    #[test]
    fn test_refine_crossed_edges_keep_scanned_window() {
        let junk = "q".repeat(30);
        let doc = words(&["alpha", junk.as_str(), "omega"]);
        let query = words(&["alpha", "x", "omega", "y"]);

        // The only step-2 window runs one token past the end
        let table = scan(&doc, &query, FuzzyAlgorithm::Simple, 0, false, 2);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(0, 42)]);

        let scorer = WindowScorer::new(&doc, &query, FuzzyAlgorithm::Simple, false);
        assert_eq!(refine_left(&scorer, 0, 3, 42, 3), (2, 50));
        assert_eq!(refine_right(&scorer, 0, 3, 42, 3), (1, 50));

        let refined = refine(&scorer, &table, 0, 2, 3, &IgnoreConfig::default()).unwrap();
        assert_eq!((refined.start(), refined.end(), refined.score()), (0, 3, 42));
    }

    #[test]
    fn test_refine_past_end_is_none() {
        let annotator = SimpleAnnotator::new();
        let doc = annotator.annotate("short");
        let query = annotator.annotate("short");
        let scorer = WindowScorer::new(&doc, &query, FuzzyAlgorithm::Simple, false);

        assert!(refine(&scorer, &ScoreTable::new(), 1, 1, 1, &IgnoreConfig::default()).is_none());
    }

    #[test]
    fn test_refine_left_keeps_first_on_ties() {
        let doc = words(&["a", "b", "c", "d"]);
        let query = words(&["q"]);
        let scorer = WindowScorer::new(&doc, &query, FuzzyAlgorithm::Simple, false);
        // Every candidate scores 0, nothing beats the baseline
        assert_eq!(refine_left(&scorer, 1, 3, 0, 2), (1, 0));
        assert_eq!(refine_right(&scorer, 1, 3, 0, 2), (3, 0));
    }

    #[test]
    fn test_trim_edges() {
        let doc = words(&["the", "fox", "jumped", ","]);
        assert_eq!(trim(&doc, 0, 4, &IgnoreConfig::default()), (1, 3));

        let doc = words(&["the", "of", ","]);
        assert_eq!(trim(&doc, 0, 3, &IgnoreConfig::default()), (2, 3));
    }

    #[test]
    fn test_trim_disabled() {
        let doc = words(&["the", "fox", "jumped", ","]);
        assert_eq!(trim(&doc, 0, 4, &IgnoreConfig::none()), (0, 4));
    }

    #[test]
    fn test_trim_per_edge_rules() {
        let doc = words(&["the", "fox", "jumped", ","]);
        let ignores = IgnoreConfig::none()
            .with_left_ignores([IgnoreRule::Stop].into_iter().collect())
            .with_right_ignores([IgnoreRule::Space].into_iter().collect());
        assert_eq!(trim(&doc, 0, 4, &ignores), (1, 4));
    }

    #[test]
    fn test_trim_keeps_single_token() {
        let doc = words(&[",", ",", ","]);
        assert_eq!(trim(&doc, 0, 3, &IgnoreConfig::default()), (2, 3));
        assert_eq!(trim_right(&doc, 0, 3, &IgnoreSet::all()), 1);
    }
}
