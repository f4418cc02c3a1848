use indexmap::IndexSet;
use serde::Serialize;

/// Terms shorter than this are rejected unless inserted via `insert_allowed`.
pub const MIN_TERM_LEN: usize = 3;

/// Lowercases, trims and collapses inner whitespace. `None` for blank input.
pub fn normalize_term(term: &str) -> Option<String> {
    let normalized = term
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ");
    (!normalized.is_empty()).then_some(normalized)
}

/// Insertion-ordered set of normalized terms.
///
/// Invariants: no duplicates, no empty strings, every term lowercase and
/// trimmed, and at least `MIN_TERM_LEN` characters unless explicitly allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TermSet(IndexSet<String>);

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the term was new and long enough.
    pub fn insert(&mut self, term: &str) -> bool {
        match normalize_term(term) {
            Some(t) if t.chars().count() >= MIN_TERM_LEN => self.0.insert(t),
            _ => false,
        }
    }

    /// Inserts a term that is known to be meaningful despite being short
    /// (vocabulary hits such as "qa" or "go").
    pub fn insert_allowed(&mut self, term: &str) -> bool {
        match normalize_term(term) {
            Some(t) => self.0.insert(t),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
impl TermSet {
    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }
}
