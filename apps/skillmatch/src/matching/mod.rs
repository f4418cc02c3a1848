// Matching pipeline:
//   similarity (edit distance) → matcher (per-term policy, SkillScorer seam)
//   → ranking (batch scoring on the blocking pool)

pub mod matcher;
pub mod ranking;
pub mod similarity;
