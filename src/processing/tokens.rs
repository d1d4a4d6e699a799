//! Tokenization and whole-word phrase containment
//!
//! Single definition of "keyword present in text" used by the enhancer,
//! ranker, ATS scorer and missing-keyword identifier. Tokens keep `#`, `+`,
//! interior `.` and `-` so terms like `c#`, `c++`, `node.js` and
//! `active-directory` survive as units, while sentence punctuation does not.

use std::collections::HashSet;

/// Split text into matchable tokens.
///
/// Splits on any character outside `[a-z0-9#+.-]` (case folded), then trims
/// leading/trailing `.` and `-` so trailing sentence punctuation never sticks
/// to a token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '#' | '+' | '.' | '-')))
        .filter_map(|raw| {
            let token = raw.trim_matches(|c| matches!(c, '.' | '-'));
            if token.is_empty() {
                None
            } else {
                Some(token.to_lowercase())
            }
        })
        .collect()
}

/// A text pre-tokenized for repeated keyword scans.
pub struct TokenizedText {
    tokens: Vec<String>,
    words: HashSet<String>,
}

impl TokenizedText {
    pub fn new(text: &str) -> Self {
        let tokens = tokenize(text);
        let words = tokens.iter().cloned().collect();
        Self { tokens, words }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when all tokens of `phrase` appear contiguously as whole tokens.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        let needle = tokenize(phrase);
        if needle.is_empty() {
            return false;
        }
        if needle.len() == 1 {
            return self.words.contains(&needle[0]);
        }
        self.tokens
            .windows(needle.len())
            .any(|window| window == needle.as_slice())
    }

    /// True when every token of `phrase` appears somewhere as a whole token,
    /// not necessarily adjacent.
    pub fn contains_all_words(&self, phrase: &str) -> bool {
        let needle = tokenize(phrase);
        !needle.is_empty() && needle.iter().all(|word| self.words.contains(word))
    }

    /// True when any of the given phrases is contained contiguously.
    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|phrase| self.contains_phrase(phrase))
    }
}
