//! Keyword Extraction for display.
//!
//! Stress keywords found in the entry come first (table order), followed by
//! the longer words of the entry in order of appearance. The combined list is
//! deduplicated and capped.

use std::collections::HashSet;
use std::sync::Arc;

use super::tables::KeywordTables;
use super::thresholds::MAX_KEYWORDS;

/// Characters trimmed from both ends of a general word
const TRIM_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '"', '\''];

/// Tokens must be longer than this (in characters, before trimming)
pub const MIN_WORD_LENGTH: usize = 4;

/// Keyword extractor combining stress keywords and general words
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    tables: Arc<KeywordTables>,
    min_word_length: usize,
    max_keywords: usize,
}

impl KeywordExtractor {
    /// Create a keyword extractor with default settings
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self::with_config(tables, MIN_WORD_LENGTH, MAX_KEYWORDS)
    }

    /// Create a keyword extractor with custom configuration
    pub fn with_config(tables: Arc<KeywordTables>, min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            tables,
            min_word_length,
            max_keywords,
        }
    }

    /// Whitespace tokens longer than the minimum length, trimmed of punctuation.
    /// A token that is nothing but punctuation trims to an empty keyword.
    fn general_words<'a>(&self, text_lower: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let min_len = self.min_word_length;
        text_lower
            .split_whitespace()
            .filter(move |word| word.chars().count() > min_len)
            .map(|word| word.trim_matches(TRIM_CHARS))
    }

    /// Extract up to `max_keywords` distinct keywords from the text.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text_lower = text.to_lowercase();

        let stress_matches = self.tables.stress_matches(&text_lower).map(|(k, _)| k);
        let candidates = stress_matches.chain(self.general_words(&text_lower));

        // Exact-match dedup, first occurrence wins
        let mut seen = HashSet::new();
        candidates
            .filter(|word| seen.insert(*word))
            .take(self.max_keywords)
            .map(str::to_string)
            .collect()
    }
}
