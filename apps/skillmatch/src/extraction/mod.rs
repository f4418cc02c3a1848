//! Term Extractor — contact/experience regexes plus vocabulary and keyword
//! driven skill extraction. Never fails on plain text: a missing field is
//! `None` or `Experience::NotSpecified`.

pub mod contact;
pub mod experience;
pub mod vocabulary;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::config::DEFAULT_MAX_SKILL_TERMS;
use crate::models::profile::{Contact, Experience};
use crate::models::term_set::TermSet;
use crate::text::normalizer::TextNormalizer;

use self::vocabulary::{SkillVocabulary, VocabularyEntry};

/// How many ranked keywords are considered when topping up a skill set.
pub const SKILL_KEYWORD_POOL: usize = 20;

#[derive(Debug, Clone)]
pub struct TermExtractor {
    normalizer: Arc<TextNormalizer>,
    vocabulary: Arc<SkillVocabulary>,
    max_terms: usize,
}

impl TermExtractor {
    pub fn new(
        normalizer: Arc<TextNormalizer>,
        vocabulary: Arc<SkillVocabulary>,
        max_terms: usize,
    ) -> Self {
        Self {
            normalizer,
            vocabulary,
            max_terms,
        }
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn extract_contact(&self, text: &str) -> Contact {
        contact::extract_contact(text)
    }

    pub fn extract_experience(&self, text: &str) -> Experience {
        experience::extract_experience(text)
    }

    /// Vocabulary entries present in the text, in vocabulary order.
    ///
    /// Token entries must equal a whole token (raw or lemmatized), so "java"
    /// does not fire on "javascript". Phrase entries must appear on word
    /// boundaries of the cleaned text.
    pub fn match_vocabulary(&self, text: &str) -> Vec<String> {
        let cleaned = self.normalizer.clean(text);
        if cleaned.is_empty() {
            return Vec::new();
        }
        let tokens: HashSet<String> = self
            .normalizer
            .tokenize(&cleaned)
            .into_iter()
            .chain(self.normalizer.process(&cleaned))
            .collect();
        let padded = format!(" {cleaned} ");

        self.vocabulary
            .skills()
            .iter()
            .filter(|entry| match entry {
                VocabularyEntry::Token(term) => tokens.contains(term),
                VocabularyEntry::Phrase { pattern, .. } => {
                    padded.contains(&format!(" {pattern} "))
                }
            })
            .map(|entry| entry.term().to_string())
            .collect()
    }

    /// Ranked keywords with the generic exclude-list removed.
    pub fn filtered_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        self.normalizer
            .extract_keywords(text, top_n)
            .into_iter()
            .filter(|k| !self.vocabulary.is_excluded_keyword(k))
            .collect()
    }

    /// Vocabulary hits first, then filtered keywords, capped at `max_terms`.
    pub fn extract_skills(&self, text: &str) -> TermSet {
        let mut skills = TermSet::new();
        let vocabulary_hits = self.match_vocabulary(text);
        for hit in &vocabulary_hits {
            if skills.len() >= self.max_terms {
                break;
            }
            skills.insert_allowed(hit);
        }
        for keyword in self.filtered_keywords(text, SKILL_KEYWORD_POOL) {
            if skills.len() >= self.max_terms {
                break;
            }
            skills.insert(&keyword);
        }

        debug!(
            "Extracted {} skill terms ({} vocabulary hits, cap {})",
            skills.len(),
            vocabulary_hits.len(),
            self.max_terms
        );
        skills
    }

    /// Role words ("developer", "engineer", ...) present as whole words.
    pub fn extract_roles(&self, text: &str) -> Vec<String> {
        let tokens: HashSet<String> = self
            .normalizer
            .lemmatize(&self.normalizer.tokenize(text))
            .into_iter()
            .collect();
        self.vocabulary
            .roles()
            .iter()
            .filter(|role| tokens.contains(role.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for TermExtractor {
    fn default() -> Self {
        Self::new(
            Arc::new(TextNormalizer::default()),
            Arc::new(SkillVocabulary::default()),
            DEFAULT_MAX_SKILL_TERMS,
        )
    }
}
