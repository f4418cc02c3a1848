//! Text Normalizer — clean → tokenize → stopwords → lemmatize, plus
//! frequency-ranked keyword extraction and optional Porter stemming.
//!
//! Every operation is a pure function of its input and the shared `Lexicon`.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::text::lexicon::Lexicon;
use crate::text::stemmer::stem_word;

#[derive(Debug, Clone)]
pub struct TextNormalizer {
    lexicon: Arc<Lexicon>,
}

impl TextNormalizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Lowercases, replaces punctuation and control characters with spaces,
    /// and collapses runs of whitespace.
    pub fn clean(&self, text: &str) -> String {
        let spaced: String = text
            .chars()
            .flat_map(|c| {
                let keep = c.is_alphanumeric();
                c.to_lowercase()
                    .map(move |lower| if keep { lower } else { ' ' })
            })
            .collect();
        spaced.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Splits on non-alphanumeric boundaries. Tokens come out lowercased.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Drops stoplist words, bare numbers and single characters.
    pub fn remove_stopwords(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| t.chars().count() > 1)
            .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
            .filter(|t| !self.lexicon.is_stopword(t))
            .cloned()
            .collect()
    }

    pub fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| self.lexicon.lemma(t).into_owned())
            .collect()
    }

    /// Aggressive normalization; only for callers that ask for it.
    pub fn stem(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|t| stem_word(t)).collect()
    }

    /// The full normalized token stream.
    pub fn process(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean(text);
        let tokens = self.tokenize(&cleaned);
        let filtered = self.remove_stopwords(&tokens);
        self.lemmatize(&filtered)
    }

    /// Top `top_n` terms of `process(text)` by frequency.
    ///
    /// Ties keep first-appearance order: counts live in an insertion-ordered
    /// map and the sort below is stable.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        if top_n == 0 {
            return Vec::new();
        }

        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for token in self.process(text) {
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(top_n).map(|(term, _)| term).collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(Lexicon::english()))
    }
}
