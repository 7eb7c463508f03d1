//! Sliding window scan
//!
//! A window as long as the query slides over the document `step` tokens at
//! a time. Every window whose score reaches `min_ratio` is recorded under
//! its step index; the rest are left out of the table.
//!
//! The loop runs while `offset + query_len - step <= doc_len - 1`. With
//! `step > 1` the final window may run past the end of the document (it is
//! scored on the clamped text) or stop short of the final token.

use crate::window::WindowScorer;
use fuzzspan_core::{Doc, FuzzyAlgorithm};
use log::trace;

/// Scores of the windows that cleared the threshold, keyed by step index
///
/// Entries are kept in scan order, which is also ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: Vec<(usize, u8)>,
}

impl ScoreTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, index: usize, score: u8) {
        debug_assert!(self.entries.last().map_or(true, |&(last, _)| last < index));
        self.entries.push((index, score));
    }

    /// Score recorded for a step index
    pub fn get(&self, index: usize) -> Option<u8> {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .ok()
            .map(|pos| self.entries[pos].1)
    }

    /// Number of recorded windows
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no window cleared the threshold
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(step index, score)` in scan order
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.entries.iter().copied()
    }

    /// Highest scoring entry, the earliest one on ties
    pub fn best(&self) -> Option<(usize, u8)> {
        let mut best: Option<(usize, u8)> = None;
        for &(index, score) in &self.entries {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
            }
        }
        best
    }

    /// Step indices of the `k` highest scores, best first
    ///
    /// Equal scores keep scan order, so the result is stable for identical
    /// inputs.
    pub fn top(&self, k: usize) -> Vec<usize> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(k).map(|(index, _)| index).collect()
    }
}

impl FromIterator<(usize, u8)> for ScoreTable {
    fn from_iter<T: IntoIterator<Item = (usize, u8)>>(iter: T) -> Self {
        let mut entries: Vec<(usize, u8)> = iter.into_iter().collect();
        entries.sort_by_key(|&(index, _)| index);
        entries.dedup_by_key(|entry| entry.0);
        Self { entries }
    }
}

/// Clamp the refinement radius
///
/// A radius of at least half the query length collapses to 1.
pub fn calc_flex(flex: usize, query_len: usize) -> usize {
    if 2 * flex >= query_len {
        1
    } else {
        flex
    }
}

/// Scan `doc` for windows similar to `query`
///
/// `case_sensitive` is used as given; resolve it against the algorithm
/// first. A `step` of 0 is treated as 1.
pub fn scan(
    doc: &Doc,
    query: &Doc,
    algorithm: FuzzyAlgorithm,
    min_ratio: u8,
    case_sensitive: bool,
    step: usize,
) -> ScoreTable {
    let scorer = WindowScorer::new(doc, query, algorithm, case_sensitive);
    scan_with(&scorer, min_ratio, step)
}

pub(crate) fn scan_with(scorer: &WindowScorer<'_>, min_ratio: u8, step: usize) -> ScoreTable {
    let step = step.max(1);
    let query_len = scorer.query_len();
    let doc_len = scorer.doc().len();
    let mut table = ScoreTable::new();

    if query_len == 0 {
        return table;
    }

    let mut index = 0;
    let mut offset = 0;
    while offset + query_len < doc_len + step {
        let score = scorer.score(offset, offset + query_len);
        trace!(
            "scan {}: '{}' - '{}' = {}",
            index,
            scorer.query_text(),
            scorer.doc().span_text(offset, offset + query_len),
            score
        );

        if score >= min_ratio {
            table.push(index, score);
        }
        index += 1;
        offset += step;
    }

    table
}
