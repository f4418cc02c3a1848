use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::models::term_set::normalize_term;
use crate::text::normalizer::TextNormalizer;

/// What a job requires, as two ordered lists of normalized terms.
/// Built once per job input and never modified afterwards.
///
/// `variants` maps a keyword to alternative spellings ("tester" → "test").
/// They widen what counts as a hit for that keyword but are never required
/// terms of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequiredSkillSet {
    skills: Vec<String>,
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    variants: IndexMap<String, Vec<String>>,
}

impl RequiredSkillSet {
    /// Normalizes case and whitespace and drops blanks and repeats within
    /// each list.
    pub fn new<S, K>(skills: S, keywords: K) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self {
            skills: unique_terms(skills).into_iter().collect(),
            keywords: unique_terms(keywords).into_iter().collect(),
            variants: IndexMap::new(),
        }
    }

    /// An explicit keyword list, used as-is apart from case normalization.
    pub fn from_keywords<K>(keywords: K) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self::new(Vec::<String>::new(), keywords)
    }

    /// Records lemmatized and stemmed forms of every keyword as alternatives
    /// for that keyword. The required terms themselves are unchanged.
    pub fn with_variants(mut self, normalizer: &TextNormalizer) -> Self {
        for keyword in &self.keywords {
            let words = normalizer.tokenize(keyword);
            if words.is_empty() {
                continue;
            }
            let mut alternatives: IndexSet<String> = IndexSet::new();
            for variant in [normalizer.lemmatize(&words), normalizer.stem(&words)] {
                let joined = variant.join(" ");
                if joined.chars().count() > 2 && joined != *keyword {
                    alternatives.insert(joined);
                }
            }
            if !alternatives.is_empty() {
                self.variants
                    .insert(keyword.clone(), alternatives.into_iter().collect());
            }
        }
        self
    }

    /// Alternative spellings accepted for `term`; empty when none were added.
    pub fn variants_of(&self, term: &str) -> &[String] {
        self.variants.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Skills then keywords, deduplicated across both lists.
    pub fn terms(&self) -> IndexSet<String> {
        self.skills
            .iter()
            .chain(&self.keywords)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.keywords.is_empty()
    }
}

fn unique_terms<I>(terms: I) -> IndexSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    terms
        .into_iter()
        .filter_map(|t| normalize_term(t.as_ref()))
        .collect()
}
