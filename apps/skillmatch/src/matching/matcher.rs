//! Skill matching — pluggable, trait-based scorer that measures a candidate
//! profile against a required-skill set.
//!
//! Default (and only) backend: `FuzzySkillMatcher`, normalized edit-distance
//! similarity against a single threshold. The engine holds an
//! `Arc<dyn SkillScorer>` so a different backend can be swapped in at startup.

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::similarity::levenshtein_similarity;
use crate::models::job::RequiredSkillSet;
use crate::models::match_result::{MatchDetail, MatchResult};
use crate::models::profile::Profile;

/// Process-wide default threshold.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Matcher settings. Validated at construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatcherConfig {
    similarity_threshold: f64,
}

impl MatcherConfig {
    /// Rejects NaN and anything outside (0, 1].
    pub fn new(similarity_threshold: f64) -> Result<Self, AppError> {
        if !(similarity_threshold > 0.0 && similarity_threshold <= 1.0) {
            return Err(AppError::InvalidThreshold(similarity_threshold));
        }
        Ok(Self {
            similarity_threshold,
        })
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap matching backends without touching the ranking
/// or entry-point code. Implementations must be pure: the same inputs
/// always give the same result.
pub trait SkillScorer: Send + Sync {
    fn score(&self, profile: &Profile, required: &RequiredSkillSet) -> MatchResult;

    /// Short backend label, reported alongside results.
    fn backend(&self) -> &'static str;

    fn threshold(&self) -> f64;
}

// ────────────────────────────────────────────────────────────────────────────
// FuzzySkillMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Best candidate for one target term.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub is_match: bool,
    pub best_match: Option<String>,
    pub best_score: f64,
}

impl SkillMatch {
    fn none() -> Self {
        Self {
            is_match: false,
            best_match: None,
            best_score: 0.0,
        }
    }
}

/// Edit-distance matcher.
///
/// Algorithm, per deduplicated required term `r`:
/// 1. Compare `r` with every candidate term (profile skills ∪ keywords).
/// 2. Best similarity ≥ threshold → matched, `found` = best candidate.
/// 3. Otherwise, if `r` has several words, match each word on its own; `r`
///    is matched only when every word clears the threshold, `found` is the
///    matched words joined by spaces and `similarity` is the weakest word.
/// 4. score = matched / required × 100, one decimal; 0.0 with no required terms.
#[derive(Debug, Clone, Default)]
pub struct FuzzySkillMatcher {
    config: MatcherConfig,
}

impl FuzzySkillMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Best-scoring candidate for `target`. Ties keep the earliest candidate.
    pub fn fuzzy_match_skill<'a, I>(&self, target: &str, candidates: I) -> SkillMatch
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<(&str, f64)> = None;
        for candidate in candidates {
            let score = levenshtein_similarity(target, candidate);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((candidate, score)) => SkillMatch {
                is_match: score >= self.config.similarity_threshold(),
                best_match: Some(candidate.to_string()),
                best_score: score,
            },
            None => SkillMatch::none(),
        }
    }

    /// Matches one required term, then each of its variants, keeping the
    /// first target that clears the threshold. Reported under `required`
    /// either way.
    fn match_term(
        &self,
        required: &str,
        variants: &[String],
        candidates: &IndexSet<&str>,
    ) -> MatchDetail {
        let mut best = 0.0_f64;
        let targets = std::iter::once(required).chain(variants.iter().map(String::as_str));
        for target in targets {
            let (found, similarity) = self.match_target(target, candidates);
            if found.is_some() {
                return MatchDetail::new(required, found, similarity);
            }
            best = best.max(similarity);
        }
        MatchDetail::new(required, None, best)
    }

    /// One target against the candidates, falling back to per-word matching
    /// for phrases. `None` when nothing clears the threshold.
    fn match_target(&self, target: &str, candidates: &IndexSet<&str>) -> (Option<String>, f64) {
        let whole = self.fuzzy_match_skill(target, candidates.iter().copied());
        if whole.is_match {
            return (whole.best_match, whole.best_score);
        }

        let words: Vec<&str> = target.split_whitespace().collect();
        if words.len() > 1 {
            let parts: Vec<SkillMatch> = words
                .iter()
                .map(|word| self.fuzzy_match_skill(word, candidates.iter().copied()))
                .collect();
            let weakest = parts
                .iter()
                .map(|p| p.best_score)
                .fold(f64::INFINITY, f64::min);
            if parts.iter().all(|p| p.is_match) {
                let found = parts
                    .iter()
                    .filter_map(|p| p.best_match.as_deref())
                    .collect::<Vec<_>>()
                    .join(" ");
                return (Some(found), weakest);
            }
            return (None, whole.best_score.max(weakest));
        }

        (None, whole.best_score)
    }

    pub fn match_profile(&self, profile: &Profile, required: &RequiredSkillSet) -> MatchResult {
        let candidates: IndexSet<&str> = profile
            .skills()
            .iter()
            .chain(profile.keywords().iter().map(String::as_str))
            .collect();

        let details: Vec<MatchDetail> = required
            .terms()
            .iter()
            .map(|term| {
                if profile.has_no_terms() {
                    MatchDetail::new(term.as_str(), None, 0.0)
                } else {
                    self.match_term(term, required.variants_of(term), &candidates)
                }
            })
            .collect();

        let result = MatchResult::from_details(details);
        debug!(
            "Matched {}/{} required terms (score {})",
            result.matched_skills.len(),
            result.match_details.len(),
            result.score
        );
        result
    }
}

impl SkillScorer for FuzzySkillMatcher {
    fn score(&self, profile: &Profile, required: &RequiredSkillSet) -> MatchResult {
        self.match_profile(profile, required)
    }

    fn backend(&self) -> &'static str {
        "levenshtein"
    }

    fn threshold(&self) -> f64 {
        self.config.similarity_threshold()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
