use indexmap::IndexSet;
use serde::Serialize;

/// How one required term was (or was not) satisfied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDetail {
    pub required: String,
    /// `None` when nothing cleared the threshold.
    pub found: Option<String>,
    /// Best similarity seen, even when below the threshold. Always in [0, 1].
    pub similarity: f64,
}

impl MatchDetail {
    pub fn new(required: impl Into<String>, found: Option<String>, similarity: f64) -> Self {
        debug_assert!(similarity.is_finite(), "similarity must be finite");
        Self {
            required: required.into(),
            found,
            similarity: similarity.clamp(0.0, 1.0),
        }
    }
}

/// Outcome of matching one profile against one required-skill set.
///
/// `matched_skills` and `missing_skills` partition the deduplicated required
/// terms; `match_details` has one entry per required term, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    pub score: f64,
    pub matched_skills: IndexSet<String>,
    pub missing_skills: IndexSet<String>,
    pub match_details: Vec<MatchDetail>,
}

impl MatchResult {
    /// Builds a result from per-term details, deriving the partition and the
    /// percentage score (one decimal) from them.
    pub fn from_details(match_details: Vec<MatchDetail>) -> Self {
        let mut matched_skills = IndexSet::new();
        let mut missing_skills = IndexSet::new();
        for detail in &match_details {
            if detail.found.is_some() {
                matched_skills.insert(detail.required.clone());
            } else {
                missing_skills.insert(detail.required.clone());
            }
        }

        let total = match_details.len();
        let score = if total == 0 {
            0.0
        } else {
            round_one_decimal(100.0 * matched_skills.len() as f64 / total as f64)
        };

        Self {
            score: score.clamp(0.0, 100.0),
            matched_skills,
            missing_skills,
            match_details,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_is_clamped() {
        assert_eq!(MatchDetail::new("rust", None, 1.2).similarity, 1.0);
        assert_eq!(MatchDetail::new("rust", None, -0.1).similarity, 0.0);
    }

    #[test]
    fn test_from_details_partitions_and_scores() {
        let result = MatchResult::from_details(vec![
            MatchDetail::new("python", Some("python".into()), 1.0),
            MatchDetail::new("aws", None, 0.3),
            MatchDetail::new("sql", Some("sql".into()), 1.0),
        ]);
        assert_eq!(result.score, 66.7);
        assert_eq!(result.matched_skills.len(), 2);
        assert!(result.missing_skills.contains("aws"));
        assert_eq!(result.match_details.len(), 3);
    }

    #[test]
    fn test_no_details_scores_zero() {
        let result = MatchResult::from_details(vec![]);
        assert_eq!(result.score, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }
}
