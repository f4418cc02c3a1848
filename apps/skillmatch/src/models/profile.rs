use std::fmt;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::models::term_set::TermSet;

/// Number of source characters kept on a profile for reference.
pub const EXCERPT_CHARS: usize = 500;

/// Message used when a document yields no text at all.
pub const EMPTY_TEXT_ERROR: &str = "Could not extract text from file";

/// Contact details pulled from a document. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Years of experience stated in a document.
///
/// Serialized as its display form: "5 years", "3-5 years", or "Not specified".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Experience {
    Years(u32),
    Range(u32, u32),
    #[default]
    NotSpecified,
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Years(n) => write!(f, "{n} years"),
            Experience::Range(low, high) => write!(f, "{low}-{high} years"),
            Experience::NotSpecified => f.write_str("Not specified"),
        }
    }
}

impl Serialize for Experience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Structured extraction result for one candidate document.
/// Immutable once built; fields are only reachable through accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Profile {
    email: Option<String>,
    phone: Option<String>,
    skills: TermSet,
    keywords: Vec<String>,
    experience: Experience,
    raw_text_excerpt: String,
}

impl Profile {
    pub fn new(
        contact: Contact,
        skills: TermSet,
        keywords: Vec<String>,
        experience: Experience,
        raw_text: &str,
    ) -> Self {
        Self {
            email: contact.email,
            phone: contact.phone,
            skills,
            keywords,
            experience,
            raw_text_excerpt: raw_text.chars().take(EXCERPT_CHARS).collect(),
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn skills(&self) -> &TermSet {
        &self.skills
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn experience(&self) -> Experience {
        self.experience
    }

    pub fn raw_text_excerpt(&self) -> &str {
        &self.raw_text_excerpt
    }

    /// True when there is nothing for the matcher to compare against.
    pub fn has_no_terms(&self) -> bool {
        self.skills.is_empty() && self.keywords.is_empty()
    }
}

static EMPTY_PROFILE: Lazy<Profile> = Lazy::new(Profile::default);

/// Outcome of turning one document into a `Profile`.
///
/// A failed document still reaches the matcher, as an empty profile, so a
/// batch always produces one well-defined result per submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedResume {
    Parsed(Profile),
    Failed { error: String },
}

impl ParsedResume {
    pub fn failed(error: impl Into<String>) -> Self {
        ParsedResume::Failed {
            error: error.into(),
        }
    }

    /// The profile to match against; empty for failed documents.
    pub fn profile(&self) -> &Profile {
        match self {
            ParsedResume::Parsed(profile) => profile,
            ParsedResume::Failed { .. } => &EMPTY_PROFILE,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ParsedResume::Parsed(_) => None,
            ParsedResume::Failed { error } => Some(error),
        }
    }
}

#[cfg(test)]
impl Profile {
    /// Test fixture: a profile holding only skills and keywords.
    pub fn from_terms(skills: &[&str], keywords: &[&str]) -> Self {
        let mut set = TermSet::new();
        for skill in skills {
            set.insert_allowed(skill);
        }
        Self {
            skills: set,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_display() {
        assert_eq!(Experience::Years(5).to_string(), "5 years");
        assert_eq!(Experience::Range(3, 5).to_string(), "3-5 years");
        assert_eq!(Experience::NotSpecified.to_string(), "Not specified");
    }

    #[test]
    fn test_experience_serializes_as_string() {
        let json = serde_json::to_string(&Experience::Years(7)).unwrap();
        assert_eq!(json, r#""7 years""#);
    }

    #[test]
    fn test_excerpt_is_truncated_by_chars() {
        let text = "é".repeat(EXCERPT_CHARS + 20);
        let profile = Profile::new(
            Contact::default(),
            TermSet::new(),
            vec![],
            Experience::NotSpecified,
            &text,
        );
        assert_eq!(profile.raw_text_excerpt().chars().count(), EXCERPT_CHARS);
    }

    #[test]
    fn test_failed_resume_exposes_empty_profile() {
        let failed = ParsedResume::failed("corrupt");
        assert_eq!(failed.error(), Some("corrupt"));
        assert!(failed.profile().has_no_terms());
    }

    #[test]
    fn test_failed_resume_serializes_error_only() {
        let json = serde_json::to_value(ParsedResume::failed("bad file")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "bad file" }));
    }

    #[test]
    fn test_parsed_resume_serializes_profile_fields() {
        let parsed = ParsedResume::Parsed(Profile::from_terms(&["rust"], &["tokio"]));
        let json = serde_json::to_value(parsed).unwrap();
        assert_eq!(json["skills"], serde_json::json!(["rust"]));
        assert_eq!(json["experience"], "Not specified");
        assert!(json.get("error").is_none());
    }
}
