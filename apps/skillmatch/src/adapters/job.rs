//! Job analyzer — extracts roles, skills, experience and keywords from a raw
//! job description, and resolves a job input into a `RequiredSkillSet`.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::TermExtractor;
use crate::models::job::RequiredSkillSet;
use crate::models::profile::Experience;

/// Ranked keywords considered before the exclude-list is applied.
pub const JOB_KEYWORD_POOL: usize = 20;

/// Keywords kept after filtering.
pub const JOB_KEYWORDS: usize = 10;

/// Structured view of a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobAnalysis {
    pub roles: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Experience,
    pub keywords: Vec<String>,
}

impl JobAnalysis {
    /// Vocabulary skills plus filtered keywords, normalized and deduplicated.
    pub fn required_skill_set(&self) -> RequiredSkillSet {
        RequiredSkillSet::new(&self.skills, &self.keywords)
    }
}

/// How the caller describes the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobInput {
    Description(String),
    Keywords(Vec<String>),
}

impl JobInput {
    /// A non-blank description wins over keywords; neither is a validation
    /// error.
    pub fn from_parts(
        description: Option<String>,
        keywords: Vec<String>,
    ) -> Result<Self, AppError> {
        match description {
            Some(text) if !text.trim().is_empty() => Ok(JobInput::Description(text)),
            _ if keywords.iter().any(|k| !k.trim().is_empty()) => Ok(JobInput::Keywords(keywords)),
            _ => Err(AppError::Validation(
                "Provide either a job description or keywords".into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobAnalyzer {
    extractor: Arc<TermExtractor>,
}

impl JobAnalyzer {
    pub fn new(extractor: Arc<TermExtractor>) -> Self {
        Self { extractor }
    }

    pub fn analyze(&self, description: &str) -> JobAnalysis {
        let analysis = JobAnalysis {
            roles: self.extractor.extract_roles(description),
            skills: self.extractor.match_vocabulary(description),
            experience: self.extractor.extract_experience(description),
            keywords: self
                .extractor
                .filtered_keywords(description, JOB_KEYWORD_POOL)
                .into_iter()
                .take(JOB_KEYWORDS)
                .collect(),
        };
        debug!(
            roles = analysis.roles.len(),
            skills = analysis.skills.len(),
            keywords = analysis.keywords.len(),
            "Analyzed job description"
        );
        analysis
    }

    /// Resolves a job input into the terms candidates are matched against,
    /// keeping the analysis when the input was a description. With
    /// `expand_variants`, lemmatized and stemmed keyword forms are accepted
    /// as alternatives for their keyword.
    pub fn requirements(&self, input: &JobInput, expand_variants: bool) -> JobRequirements {
        let (analysis, required) = match input {
            JobInput::Description(text) => {
                let analysis = self.analyze(text);
                let required = analysis.required_skill_set();
                (Some(analysis), required)
            }
            JobInput::Keywords(keywords) => (None, RequiredSkillSet::from_keywords(keywords)),
        };
        let required = if expand_variants {
            required.with_variants(self.extractor.normalizer())
        } else {
            required
        };

        info!(
            skills = required.skills().len(),
            keywords = required.keywords().len(),
            roles = analysis.as_ref().map(|a| a.roles.len()),
            "Required skill set ready"
        );
        JobRequirements { analysis, required }
    }
}

/// A resolved job input.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequirements {
    /// Present only for description input.
    pub analysis: Option<JobAnalysis>,
    pub required: RequiredSkillSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Senior Python Developer\n\
        We are looking for a developer with 3-5 years of experience. \
        Must know Python, Django, REST APIs and PostgreSQL. Docker is a plus. \
        Strong team player with machine learning exposure.";

    #[test]
    fn test_analyze_extracts_sections() {
        let analysis = JobAnalyzer::default().analyze(JOB);

        assert!(analysis.roles.contains(&"developer".to_string()));
        assert!(analysis.roles.contains(&"senior".to_string()));
        for skill in ["python", "django", "rest", "postgresql", "docker", "machine learning"] {
            assert!(analysis.skills.contains(&skill.to_string()), "missing {skill}");
        }
        assert_eq!(analysis.experience, Experience::Range(3, 5));
        assert!(analysis.keywords.len() <= JOB_KEYWORDS);
        for excluded in ["looking", "must", "strong", "team"] {
            assert!(!analysis.keywords.contains(&excluded.to_string()));
        }
    }

    #[test]
    fn test_requirements_from_description_keep_analysis() {
        let analyzer = JobAnalyzer::default();
        let resolved = analyzer.requirements(&JobInput::Description(JOB.into()), false);
        let required = &resolved.required;
        assert!(required.skills().contains(&"python".to_string()));
        assert!(!required.keywords().is_empty());
        assert_eq!(
            required.terms().iter().filter(|t| t.as_str() == "python").count(),
            1
        );

        let analysis = resolved.analysis.unwrap();
        assert!(analysis.roles.contains(&"developer".to_string()));
        assert_eq!(analysis.experience, Experience::Range(3, 5));
    }

    #[test]
    fn test_requirements_from_keywords_as_is() {
        let input = JobInput::Keywords(vec!["Tester".into(), "Selenium".into()]);
        let resolved = JobAnalyzer::default().requirements(&input, false);
        assert!(resolved.analysis.is_none());
        assert!(resolved.required.skills().is_empty());
        assert_eq!(resolved.required.keywords(), ["tester", "selenium"]);
    }

    #[test]
    fn test_requirements_with_variants() {
        let input = JobInput::Keywords(vec!["Tester".into()]);
        let required = JobAnalyzer::default().requirements(&input, true).required;
        assert_eq!(required.keywords(), ["tester"]);
        assert_eq!(required.variants_of("tester"), ["test"]);
    }

    #[test]
    fn test_job_input_from_parts() {
        assert_eq!(
            JobInput::from_parts(Some("Rust engineer".into()), vec!["go".into()]).unwrap(),
            JobInput::Description("Rust engineer".into())
        );
        assert_eq!(
            JobInput::from_parts(Some("  ".into()), vec!["go".into()]).unwrap(),
            JobInput::Keywords(vec!["go".into()])
        );
        assert!(matches!(
            JobInput::from_parts(None, vec![" ".into()]),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_description_analysis() {
        let analysis = JobAnalyzer::default().analyze("");
        assert_eq!(analysis, JobAnalysis::default());
    }
}
