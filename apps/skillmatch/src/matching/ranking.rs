//! Candidate ranking — parses and scores a batch of documents on tokio's
//! blocking pool, then orders them by score.
//!
//! # spawn_blocking pattern
//! Parsing and matching are CPU-bound. Each document gets its own blocking
//! task inside a `JoinSet`; results carry their submission index so the
//! batch can be put back in order before the stable sort.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::task::JoinSet;
use tracing::{error, info};
use uuid::Uuid;

use crate::adapters::job::JobAnalysis;
use crate::adapters::resume::ResumeParser;
use crate::adapters::source::{DocumentBody, SourceDocument};
use crate::errors::AppError;
use crate::matching::matcher::SkillScorer;
use crate::models::job::RequiredSkillSet;
use crate::models::match_result::{MatchDetail, MatchResult};
use crate::models::profile::ParsedResume;

/// One scored document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub source: String,
    #[serde(flatten)]
    pub result: MatchResult,
    pub document: ParsedResume,
}

impl RankedCandidate {
    pub fn score(&self) -> f64 {
        self.result.score
    }
}

/// Output of one ranking run.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub backend: &'static str,
    pub similarity_threshold: f64,
    pub required_terms: Vec<String>,
    /// Roles, skills, experience and keywords found in a job description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<JobAnalysis>,
    pub candidates: Vec<RankedCandidate>,
}

impl RankingReport {
    pub fn new(
        scorer: &dyn SkillScorer,
        required: &RequiredSkillSet,
        job: Option<JobAnalysis>,
        candidates: Vec<RankedCandidate>,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            backend: scorer.backend(),
            similarity_threshold: scorer.threshold(),
            required_terms: required.terms().into_iter().collect(),
            job,
            candidates,
        }
    }
}

/// Stable sort by score, highest first. Equal scores keep their order.
pub fn sort_by_score(candidates: &mut [RankedCandidate]) {
    candidates.sort_by(|a, b| b.score().total_cmp(&a.score()));
}

/// Parses and scores every document, returning one candidate per document
/// sorted by score.
///
/// A document whose task panics is reported as a failed document with a
/// score of 0.0; the rest of the batch is unaffected.
pub async fn rank_candidates(
    parser: Arc<ResumeParser>,
    scorer: Arc<dyn SkillScorer>,
    required: Arc<RequiredSkillSet>,
    documents: Vec<SourceDocument>,
) -> Result<Vec<RankedCandidate>, AppError> {
    let total = documents.len();
    let mut tasks = JoinSet::new();

    for (index, document) in documents.into_iter().enumerate() {
        let parser = Arc::clone(&parser);
        let scorer = Arc::clone(&scorer);
        let required = Arc::clone(&required);
        tasks.spawn_blocking(move || {
            let SourceDocument { source, body } = document;
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                score_document(&parser, scorer.as_ref(), &required, &body)
            }));
            let candidate = match outcome {
                Ok((document, result)) => RankedCandidate {
                    source,
                    result,
                    document,
                },
                Err(payload) => {
                    let reason = panic_message(payload.as_ref());
                    error!(%source, "Matching task panicked: {reason}");
                    failed_candidate(source, format!("Matching failed: {reason}"), &required)
                }
            };
            (index, candidate)
        });
    }

    let mut indexed = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        let entry = joined.map_err(|e| {
            AppError::Internal(anyhow::anyhow!("ranking task failed to join: {e}"))
        })?;
        indexed.push(entry);
    }
    indexed.sort_by_key(|(index, _)| *index);

    let mut candidates: Vec<RankedCandidate> =
        indexed.into_iter().map(|(_, candidate)| candidate).collect();
    sort_by_score(&mut candidates);

    let failed = candidates
        .iter()
        .filter(|c| c.document.error().is_some())
        .count();
    info!(
        candidates = candidates.len(),
        failed,
        top_score = candidates.first().map(RankedCandidate::score),
        "Ranking complete"
    );
    Ok(candidates)
}

fn score_document(
    parser: &ResumeParser,
    scorer: &dyn SkillScorer,
    required: &RequiredSkillSet,
    body: &DocumentBody,
) -> (ParsedResume, MatchResult) {
    let document = match body {
        DocumentBody::Text(text) => parser.parse_text(text),
        DocumentBody::Unreadable(reason) => ParsedResume::failed(reason.as_str()),
    };
    let result = scorer.score(document.profile(), required);
    (document, result)
}

/// A failed entry that still lists every required term as missing.
fn failed_candidate(source: String, error: String, required: &RequiredSkillSet) -> RankedCandidate {
    let details = required
        .terms()
        .into_iter()
        .map(|term| MatchDetail::new(term, None, 0.0))
        .collect();
    RankedCandidate {
        source,
        result: MatchResult::from_details(details),
        document: ParsedResume::failed(error),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
