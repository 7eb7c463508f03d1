//! Tokenizer seam and a rule-based default implementation

use super::stop_words::is_stop_word;
use super::{Doc, Token};

/// Turns raw text into an annotated [`Doc`]
///
/// Implementations must answer the space/punct/stop predicates for every
/// token and record trailing whitespace so span text can be rebuilt.
pub trait Annotator: Send + Sync {
    /// Tokenize and annotate `text`
    fn annotate(&self, text: &str) -> Doc;
}

/// Whitespace and punctuation tokenizer with an English stop-word list
///
/// Rules:
/// - a single space after a token is recorded as that token's trailing
///   whitespace, any other whitespace becomes a space token
/// - leading and trailing punctuation is split off one character at a time
/// - a hyphen between two alphanumerics is split out as its own token
/// - a chunk made only of punctuation stays a single token
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAnnotator;

impl SimpleAnnotator {
    /// Create a new annotator
    pub fn new() -> Self {
        Self
    }

    /// Build a single annotated token with no trailing whitespace
    pub fn classify(&self, text: &str) -> Token {
        let is_space = !text.is_empty() && text.chars().all(char::is_whitespace);
        let is_punct = !text.is_empty() && text.chars().all(is_punct_char);

        Token::new(text)
            .with_space(is_space)
            .with_punct(is_punct)
            .with_stop(is_stop_word(text))
    }

    /// Build a doc from pre-split words, each followed by a single space
    /// except the last
    pub fn annotate_words<S: AsRef<str>>(&self, words: &[S]) -> Doc {
        let last = words.len().saturating_sub(1);
        let tokens = words
            .iter()
            .enumerate()
            .map(|(i, word)| self.classify(word.as_ref()).with_whitespace(i < last))
            .collect();

        Doc::from_tokens(tokens)
    }
}

impl Annotator for SimpleAnnotator {
    fn annotate(&self, text: &str) -> Doc {
        let mut tokens: Vec<Token> = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            let ws_len = rest.len() - rest.trim_start().len();

            if ws_len > 0 {
                let mut run = &rest[..ws_len];
                if run.starts_with(' ') {
                    if let Some(last) = tokens.pop() {
                        tokens.push(last.with_whitespace(true));
                        run = &run[1..];
                    }
                }
                if !run.is_empty() {
                    tokens.push(self.classify(run));
                }
                rest = &rest[ws_len..];
                continue;
            }

            let word_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            for piece in split_word(&rest[..word_len]) {
                tokens.push(self.classify(piece));
            }
            rest = &rest[word_len..];
        }

        Doc::from_tokens(tokens)
    }
}

fn is_punct_char(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Split a whitespace-free chunk into prefix, core and suffix pieces
fn split_word(word: &str) -> Vec<&str> {
    if word.chars().all(is_punct_char) {
        return vec![word];
    }

    let core_start = word.find(|c: char| !is_punct_char(c)).unwrap_or(0);
    let core_end = word
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_punct_char(c))
        .map_or(word.len(), |(i, c)| i + c.len_utf8());

    let mut pieces = Vec::new();
    for (i, c) in word[..core_start].char_indices() {
        pieces.push(&word[i..i + c.len_utf8()]);
    }
    split_infixes(&word[core_start..core_end], &mut pieces);
    for (i, c) in word[core_end..].char_indices() {
        let at = core_end + i;
        pieces.push(&word[at..at + c.len_utf8()]);
    }
    pieces
}

fn split_infixes<'a>(core: &'a str, pieces: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = core.char_indices().collect();
    let mut seg_start = 0;

    for (n, &(i, c)) in chars.iter().enumerate() {
        let is_infix = c == '-'
            && n > 0
            && n + 1 < chars.len()
            && chars[n - 1].1.is_alphanumeric()
            && chars[n + 1].1.is_alphanumeric();

        if is_infix {
            pieces.push(&core[seg_start..i]);
            pieces.push(&core[i..i + 1]);
            seg_start = i + 1;
        }
    }
    pieces.push(&core[seg_start..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(doc: &Doc) -> Vec<&str> {
        doc.iter().map(Token::text).collect()
    }

    #[test]
    fn test_annotate_splits_punctuation() {
        let doc = SimpleAnnotator::new()
            .annotate("There was a great basketball player named: Karem Abdul Jabar");

        assert_eq!(doc.len(), 11);
        assert_eq!(doc[6].text(), "named");
        assert!(!doc[6].has_whitespace());
        assert_eq!(doc[7].text(), ":");
        assert!(doc[7].is_punct());
        assert!(doc[0].is_stop());
        assert!(!doc[8].is_stop());
    }

    #[test]
    fn test_annotate_splits_infix_hyphen() {
        let doc = SimpleAnnotator::new().annotate("Kareem Abdul-Jabbar");
        assert_eq!(texts(&doc), vec!["Kareem", "Abdul", "-", "Jabbar"]);
        assert_eq!(doc.text(), "Kareem Abdul-Jabbar");
    }

    #[test]
    fn test_annotate_keeps_surface_text() {
        let annotator = SimpleAnnotator::new();
        for text in [
            "Patient was prescribed Zithromax tablets.",
            "chiken from Popeyes is better than chken from Chick-fil-A",
            "two  spaces and\na newline",
            " leading space",
        ] {
            assert_eq!(annotator.annotate(text).text(), text);
        }
    }

    #[test]
    fn test_annotate_whitespace_tokens() {
        let doc = SimpleAnnotator::new().annotate("a  b\nc");
        assert_eq!(texts(&doc), vec!["a", " ", "b", "\n", "c"]);
        assert!(doc[0].has_whitespace());
        assert!(doc[1].is_space());
        assert!(doc[3].is_space());
        assert!(!doc[2].has_whitespace());
    }

    #[test]
    fn test_punctuation_only_chunk_stays_whole() {
        let doc = SimpleAnnotator::new().annotate("wait ... what?!");
        assert_eq!(texts(&doc), vec!["wait", "...", "what", "?", "!"]);
        assert!(doc[1].is_punct());
    }

    #[test]
    fn test_annotate_words() {
        let doc = SimpleAnnotator::new().annotate_words(&["The", "quikc", "brown", "fox"]);
        assert_eq!(doc.text(), "The quikc brown fox");
        assert!(doc[0].is_stop());
        assert!(!doc[3].has_whitespace());
    }
}
