//! Annotated token

use serde::{Deserialize, Serialize};

/// A single annotated unit of a document
///
/// Produced by an [`Annotator`](super::Annotator); the search only reads
/// tokens by index and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    text: String,
    /// Whether a single space follows this token in the source text
    #[serde(default)]
    whitespace: bool,
    #[serde(default)]
    is_space: bool,
    #[serde(default)]
    is_punct: bool,
    #[serde(default)]
    is_stop: bool,
}

impl Token {
    /// Create a token with no trailing whitespace and no classification flags
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            whitespace: false,
            is_space: false,
            is_punct: false,
            is_stop: false,
        }
    }

    /// Set whether a space follows this token
    pub fn with_whitespace(mut self, whitespace: bool) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Set the whitespace-token flag
    pub fn with_space(mut self, is_space: bool) -> Self {
        self.is_space = is_space;
        self
    }

    /// Set the punctuation flag
    pub fn with_punct(mut self, is_punct: bool) -> Self {
        self.is_punct = is_punct;
        self
    }

    /// Set the stop-word flag
    pub fn with_stop(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    /// Verbatim token text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a space follows this token
    pub fn has_whitespace(&self) -> bool {
        self.whitespace
    }

    /// Token consists of whitespace only
    pub fn is_space(&self) -> bool {
        self.is_space
    }

    /// Token consists of punctuation only
    pub fn is_punct(&self) -> bool {
        self.is_punct
    }

    /// Token is a stop word
    pub fn is_stop(&self) -> bool {
        self.is_stop
    }

    pub(crate) fn push_text_with_ws(&self, out: &mut String) {
        out.push_str(&self.text);
        if self.whitespace {
            out.push(' ');
        }
    }
}
