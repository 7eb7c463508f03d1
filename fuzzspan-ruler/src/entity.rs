//! Non-overlapping labeled spans of a document

use fuzzspan_core::Match;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// A labeled `start..end` token span
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Inclusive start token index
    pub start: usize,
    /// Exclusive end token index
    pub end: usize,
    /// Entity label
    pub label: String,
}

impl EntitySpan {
    /// Create a span
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Token range covered by the span
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// True when both spans share at least one token
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True if `token` lies inside the span
    pub fn contains(&self, token: usize) -> bool {
        self.start <= token && token < self.end
    }
}

impl fmt::Display for EntitySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} [{}]", self.start, self.end, self.label)
    }
}

/// Spans built from unlabeled matches get an empty label
impl From<&Match> for EntitySpan {
    fn from(m: &Match) -> Self {
        Self::new(m.start(), m.end(), m.label().unwrap_or_default())
    }
}

/// Why a span was not registered
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// The span shares tokens with an entity already in the index
    #[error("{candidate} overlaps {existing}")]
    Overlap {
        /// Span that was rejected
        candidate: EntitySpan,
        /// First registered span it collides with
        existing: EntitySpan,
    },

    /// The span is empty or reaches past the document
    #[error("{candidate} is not a valid span of a {len}-token document")]
    OutOfBounds {
        /// Span that was rejected
        candidate: EntitySpan,
        /// Document length in tokens
        len: usize,
    },
}

/// Entities of one document
///
/// Spans are kept sorted by start and never overlap. The index is an
/// ordinary value: a labeling pass borrows it mutably, so concurrent
/// writers have to be serialized by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityIndex {
    doc_len: usize,
    spans: Vec<EntitySpan>,
}

impl EntityIndex {
    /// Empty index for a document of `doc_len` tokens
    pub fn new(doc_len: usize) -> Self {
        Self {
            doc_len,
            spans: Vec::new(),
        }
    }

    /// Index seeded with pre-existing entities
    ///
    /// Seeds go through [`register`](Self::register) in order, so the first
    /// conflicting seed is reported.
    pub fn with_spans<I>(doc_len: usize, spans: I) -> Result<Self, Conflict>
    where
        I: IntoIterator<Item = EntitySpan>,
    {
        let mut index = Self::new(doc_len);
        for span in spans {
            index.register(span)?;
        }
        Ok(index)
    }

    /// Add `span` unless it is invalid or overlaps a registered entity
    pub fn register(&mut self, span: EntitySpan) -> Result<(), Conflict> {
        if span.start >= span.end || span.end > self.doc_len {
            return Err(Conflict::OutOfBounds {
                candidate: span,
                len: self.doc_len,
            });
        }

        // First span that ends after the candidate starts
        let pos = self.spans.partition_point(|s| s.end <= span.start);
        if let Some(existing) = self.spans.get(pos) {
            if existing.overlaps(&span) {
                return Err(Conflict::Overlap {
                    candidate: span,
                    existing: existing.clone(),
                });
            }
        }

        self.spans.insert(pos, span);
        Ok(())
    }

    /// Label of the entity covering `token`
    pub fn label_at(&self, token: usize) -> Option<&str> {
        let pos = self.spans.partition_point(|s| s.end <= token);
        self.spans
            .get(pos)
            .filter(|s| s.contains(token))
            .map(|s| s.label.as_str())
    }

    /// True if some entity covers `token`
    pub fn is_labeled(&self, token: usize) -> bool {
        self.label_at(token).is_some()
    }

    /// Registered spans sorted by start
    pub fn spans(&self) -> &[EntitySpan] {
        &self.spans
    }

    /// Take the registered spans
    pub fn into_spans(self) -> Vec<EntitySpan> {
        self.spans
    }

    /// Length of the indexed document
    pub fn doc_len(&self) -> usize {
        self.doc_len
    }

    /// Number of registered spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
