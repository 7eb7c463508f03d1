//! Core types for fuzzy span search

use crate::error::{CoreError, Result};
use core::fmt;
use core::ops::Range;
use serde::{Deserialize, Serialize};

/// A located span of the document together with its similarity score
///
/// `start` is inclusive and `end` exclusive, both in token indices.
/// A `Match` is never mutated after creation; labelling produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    start: usize,
    end: usize,
    score: u8,
    label: Option<String>,
}

impl Match {
    /// Create an unlabelled match over `start..end` of a document with `doc_len` tokens
    pub fn new(start: usize, end: usize, score: u8, doc_len: usize) -> Result<Self> {
        if start >= end || end > doc_len {
            return Err(CoreError::InvalidSpan {
                start,
                end,
                len: doc_len,
            });
        }

        Ok(Self {
            start,
            end,
            score,
            label: None,
        })
    }

    /// Copy of this match carrying `label`
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self.clone()
        }
    }

    /// Inclusive start token index
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end token index
    pub fn end(&self) -> usize {
        self.end
    }

    /// Similarity score in `0..=100`
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Category label, if attached
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Token index range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false, a match covers at least one token
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when both matches cover at least one common token
    pub fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}..{} ({}) [{}]", self.start, self.end, self.score, label),
            None => write!(f, "{}..{} ({})", self.start, self.end, self.score),
        }
    }
}
