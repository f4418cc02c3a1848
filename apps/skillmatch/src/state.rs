use std::sync::Arc;

use tracing::info;

use crate::adapters::job::{JobAnalyzer, JobInput, JobRequirements};
use crate::adapters::resume::ResumeParser;
use crate::adapters::source::load_documents;
use crate::config::Config;
use crate::errors::AppError;
use crate::extraction::vocabulary::SkillVocabulary;
use crate::extraction::TermExtractor;
use crate::matching::matcher::{FuzzySkillMatcher, MatcherConfig, SkillScorer};
use crate::matching::ranking::{rank_candidates, RankingReport};
use crate::text::normalizer::TextNormalizer;

/// Shared, read-only matching components built once at startup.
#[derive(Clone)]
pub struct MatchEngine {
    pub config: Config,
    pub parser: Arc<ResumeParser>,
    pub analyzer: Arc<JobAnalyzer>,
    /// Pluggable scorer. Default: FuzzySkillMatcher.
    pub scorer: Arc<dyn SkillScorer>,
}

impl MatchEngine {
    /// Fails only on an invalid similarity threshold.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let matcher_config = MatcherConfig::new(config.similarity_threshold)?;
        let extractor = Arc::new(TermExtractor::new(
            Arc::new(TextNormalizer::default()),
            Arc::new(SkillVocabulary::default()),
            config.max_skill_terms,
        ));
        let scorer: Arc<dyn SkillScorer> = Arc::new(FuzzySkillMatcher::new(matcher_config));
        info!(
            "Match engine ready (backend: {}, threshold: {})",
            scorer.backend(),
            scorer.threshold()
        );

        Ok(Self {
            parser: Arc::new(ResumeParser::new(Arc::clone(&extractor))),
            analyzer: Arc::new(JobAnalyzer::new(extractor)),
            scorer,
            config,
        })
    }

    /// Reads the job description file when configured, otherwise falls back
    /// to the keyword list.
    pub async fn job_input(&self) -> Result<JobInput, AppError> {
        let description = match &self.config.job_description_path {
            Some(path) => Some(tokio::fs::read_to_string(path).await?),
            None => None,
        };
        JobInput::from_parts(description, self.config.job_keywords.clone())
    }

    pub fn requirements(&self, input: &JobInput) -> JobRequirements {
        self.analyzer
            .requirements(input, self.config.expand_keyword_variants)
    }

    /// Loads every document in the resume directory and ranks it.
    pub async fn run(&self) -> Result<RankingReport, AppError> {
        let input = self.job_input().await?;
        let JobRequirements { analysis, required } = self.requirements(&input);
        if required.is_empty() {
            return Err(AppError::Validation(
                "Job input produced no required terms".into(),
            ));
        }

        let documents = load_documents(&self.config.resume_dir).await?;
        let required = Arc::new(required);
        let candidates = rank_candidates(
            Arc::clone(&self.parser),
            Arc::clone(&self.scorer),
            Arc::clone(&required),
            documents,
        )
        .await?;

        Ok(RankingReport::new(
            self.scorer.as_ref(),
            &required,
            analysis,
            candidates,
        ))
    }

    pub fn render_report(report: &RankingReport) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
