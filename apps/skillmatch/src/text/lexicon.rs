//! Lexicon — the static word tables behind stopword removal and lemmatization.
//!
//! Built once at startup and shared read-only (`Arc<Lexicon>`) by every
//! normalizer; nothing here is mutated after construction.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Standard English function words.
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing", "don",
    "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has", "hasn",
    "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m", "ma",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "o", "of", "off", "on",
    "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "re", "s",
    "same", "she", "should", "shouldn", "so", "some", "such", "t", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "ve", "very", "was", "wasn", "we", "were",
    "weren", "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "won", "would", "wouldn", "y", "you", "your", "yours", "yourself", "yourselves",
];

/// Generic resume / job-posting filler that carries no skill signal.
const FILLER_STOPWORDS: &[&str] = &[
    "also", "candidate", "etc", "experience", "experienced", "ideal", "including", "junior",
    "looking", "must", "plus", "preferred", "responsibilities", "responsible", "seeking",
    "senior", "using", "within", "year", "years", "yrs",
];

/// Irregular forms that suffix rules would get wrong.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("are", "be"),
    ("been", "be"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("built", "build"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("did", "do"),
    ("done", "do"),
    ("gone", "go"),
    ("had", "have"),
    ("has", "have"),
    ("indices", "index"),
    ("is", "be"),
    ("led", "lead"),
    ("made", "make"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("people", "person"),
    ("ran", "run"),
    ("taught", "teach"),
    ("thought", "think"),
    ("was", "be"),
    ("went", "go"),
    ("were", "be"),
    ("women", "woman"),
    ("written", "write"),
    ("wrote", "write"),
];

/// Words ending in `s` that are not plurals. Mostly tool and field names.
const INVARIANT_WORDS: &[&str] = &[
    "always", "analytics", "aws", "devops", "dynamics", "economics", "electronics", "emacs",
    "ethics", "graphics", "jenkins", "keras", "kubernetes", "logistics", "mathematics",
    "mlops", "news", "pandas", "perhaps", "physics", "postgres", "rails", "redis", "robotics",
    "sales", "series", "species", "statistics", "this", "windows",
];

/// Immutable stopword and lemma tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<&'static str>,
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    /// English function words plus resume/job filler.
    pub fn english() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS
                .iter()
                .chain(FILLER_STOPWORDS)
                .copied()
                .collect(),
            irregular: IRREGULAR_LEMMAS.iter().copied().collect(),
            invariant: INVARIANT_WORDS.iter().copied().collect(),
        }
    }

    /// Expects an already-lowercased token.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Base form of a lowercased token.
    ///
    /// Lookup order: irregular table, invariant words, then plural rules.
    /// Anything the rules do not recognise is returned unchanged.
    pub fn lemma<'a>(&self, token: &'a str) -> Cow<'a, str> {
        if let Some(base) = self.irregular.get(token) {
            return Cow::Borrowed(*base);
        }
        if token.chars().count() <= 3 || self.invariant.contains(token) {
            return Cow::Borrowed(token);
        }
        // Non-plural endings: "class", "status", "analysis", "macos", "nodejs"
        if ["ss", "us", "sis", "os", "js"]
            .iter()
            .any(|end| token.ends_with(end))
        {
            return Cow::Borrowed(token);
        }
        if let Some(stem) = token.strip_suffix("ies") {
            if stem.len() > 1 {
                return Cow::Owned(format!("{stem}y"));
            }
        }
        for sibilant in ["sses", "shes", "ches", "xes", "zes"] {
            if token.ends_with(sibilant) {
                return Cow::Borrowed(&token[..token.len() - 2]);
            }
        }
        match token.strip_suffix('s') {
            Some(stem) => Cow::Borrowed(stem),
            None => Cow::Borrowed(token),
        }
    }
}
