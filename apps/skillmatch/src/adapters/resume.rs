//! Resume parser — turns extracted document text into a `Profile`.

use std::sync::Arc;

use tracing::debug;

use crate::extraction::TermExtractor;
use crate::models::profile::{ParsedResume, Profile, EMPTY_TEXT_ERROR};

/// Ranked keywords kept on each profile.
pub const RESUME_KEYWORDS: usize = 15;

#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    extractor: Arc<TermExtractor>,
}

impl ResumeParser {
    pub fn new(extractor: Arc<TermExtractor>) -> Self {
        Self { extractor }
    }

    /// Never errors: blank text becomes `ParsedResume::Failed`.
    pub fn parse_text(&self, text: &str) -> ParsedResume {
        if text.trim().is_empty() {
            return ParsedResume::failed(EMPTY_TEXT_ERROR);
        }

        let contact = self.extractor.extract_contact(text);
        let skills = self.extractor.extract_skills(text);
        let experience = self.extractor.extract_experience(text);
        let keywords = self
            .extractor
            .normalizer()
            .extract_keywords(text, RESUME_KEYWORDS);

        let profile = Profile::new(contact, skills, keywords, experience, text);
        debug!(
            skills = profile.skills().len(),
            keywords = profile.keywords().len(),
            has_email = profile.email().is_some(),
            has_phone = profile.phone().is_some(),
            experience = %profile.experience(),
            excerpt_chars = profile.raw_text_excerpt().chars().count(),
            "Parsed resume"
        );
        ParsedResume::Parsed(profile)
    }
}
