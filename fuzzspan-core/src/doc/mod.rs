//! Token sequences
//!
//! A [`Doc`] is an immutable, indexable sequence of [`Token`]s. Both the
//! searched document and the query are represented as docs; indices stay
//! stable for as long as the doc is borrowed by a search.
//!
//! Tokenization itself lives behind the [`Annotator`] trait so callers can
//! plug in any tokenizer that can answer the space/punct/stop predicates.

pub mod annotator;
pub mod stop_words;
pub mod token;

pub use annotator::{Annotator, SimpleAnnotator};
pub use token::Token;

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered, immutable sequence of annotated tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    tokens: Vec<Token>,
}

impl Doc {
    /// Wrap already annotated tokens
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the doc holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// All tokens in order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over tokens
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Surface text of the whole doc
    pub fn text(&self) -> String {
        self.span_text(0, self.len())
    }

    /// Surface text of `start..end`
    ///
    /// Tokens are joined with their own trailing whitespace and the
    /// whitespace after the last token is dropped. Out-of-range bounds are
    /// clamped to the doc, so an empty or inverted range yields `""`.
    pub fn span_text(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        let start = start.min(end);
        let tokens = &self.tokens[start..end];

        let mut text = String::new();
        for token in tokens {
            token.push_text_with_ws(&mut text);
        }
        if tokens.last().is_some_and(Token::has_whitespace) {
            text.pop();
        }
        text
    }
}

impl Index<usize> for Doc {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
