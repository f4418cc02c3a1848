//! Curated skill vocabulary, job-role words, and the keyword exclude list.

/// Skills recognised in resumes and job descriptions. Entries containing a
/// space or punctuation are matched as phrases, the rest as whole tokens.
const DEFAULT_SKILLS: &[&str] = &[
    // Languages and frameworks
    "python", "java", "javascript", "typescript", "react", "node", "angular", "vue", "html",
    "css", "flask", "django", "fastapi", "spring", "hibernate", "golang", "rust", "kotlin",
    "scala", "ruby",
    // Data and ML
    "sql", "mongodb", "mysql", "postgresql", "redis", "kafka", "spark", "hadoop",
    "machine learning", "deep learning", "nlp", "data science", "tensorflow", "pytorch",
    "pandas", "numpy", "scikit",
    // Platform
    "aws", "azure", "docker", "kubernetes", "git", "api", "rest", "jenkins", "ci/cd",
    "terraform", "linux",
    // Process
    "agile", "scrum",
    // Testing
    "testing", "tester", "qa", "quality assurance", "automation", "selenium", "junit", "testng",
    "pytest", "jest", "mocha", "manual testing", "functional testing", "regression testing",
    "integration testing", "unit testing", "smoke testing",
];

/// Role words detected in job descriptions.
const DEFAULT_ROLES: &[&str] = &[
    "developer", "engineer", "architect", "manager", "analyst", "scientist", "designer",
    "consultant", "specialist", "lead", "senior", "junior", "intern", "director", "coordinator",
];

/// Frequent words that survive the stoplist but say nothing about skills.
const DEFAULT_KEYWORD_EXCLUDES: &[&str] = &[
    "looking", "must", "year", "years", "required", "need", "seeking", "candidate", "should",
    "strong", "excellent", "good", "work", "working", "team", "ability", "knowledge",
    "position", "job",
];

/// A vocabulary entry, pre-split by how it is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyEntry {
    /// Matched against whole tokens.
    Token(String),
    /// Matched as a word-bounded phrase. `pattern` is the entry after text
    /// cleaning ("ci/cd" → "ci cd").
    Phrase { term: String, pattern: String },
}

impl VocabularyEntry {
    pub fn term(&self) -> &str {
        match self {
            VocabularyEntry::Token(term) => term,
            VocabularyEntry::Phrase { term, .. } => term,
        }
    }
}

/// Immutable skill/role vocabulary shared by every extractor.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    skills: Vec<VocabularyEntry>,
    roles: Vec<String>,
    keyword_excludes: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS, DEFAULT_ROLES, DEFAULT_KEYWORD_EXCLUDES)
    }
}

impl SkillVocabulary {
    pub fn new(skills: &[&str], roles: &[&str], keyword_excludes: &[&str]) -> Self {
        Self {
            skills: skills.iter().filter_map(|s| classify(s)).collect(),
            roles: roles.iter().map(|r| r.trim().to_lowercase()).collect(),
            keyword_excludes: keyword_excludes
                .iter()
                .map(|w| w.trim().to_lowercase())
                .collect(),
        }
    }

    pub fn skills(&self) -> &[VocabularyEntry] {
        &self.skills
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn is_excluded_keyword(&self, word: &str) -> bool {
        self.keyword_excludes.iter().any(|w| w.eq_ignore_ascii_case(word))
    }
}

fn classify(entry: &str) -> Option<VocabularyEntry> {
    let term = entry.trim().to_lowercase();
    if term.is_empty() {
        return None;
    }
    if term.chars().all(char::is_alphanumeric) {
        return Some(VocabularyEntry::Token(term));
    }
    let pattern = term
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!pattern.is_empty()).then_some(VocabularyEntry::Phrase { term, pattern })
}
