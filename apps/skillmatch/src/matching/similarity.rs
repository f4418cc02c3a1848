//! Edit-distance similarity between skill terms.

use strsim::normalized_levenshtein;

/// Framework suffixes folded away before a second comparison.
const FRAMEWORK_SUFFIXES: &[&str] = &[".js", "js"];

/// Characters that must remain after folding a suffix.
const MIN_FOLDED_LEN: usize = 3;

/// Drops one trailing framework suffix ("reactjs" → "react", "node.js" →
/// "node") when enough of the term remains.
pub fn fold_framework_suffix(term: &str) -> &str {
    let term = term.trim();
    FRAMEWORK_SUFFIXES
        .iter()
        .find_map(|suffix| term.strip_suffix(suffix))
        .map(|rest| rest.trim_end_matches(['.', '-', ' ']))
        .filter(|rest| rest.chars().count() >= MIN_FOLDED_LEN)
        .unwrap_or(term)
}

/// Term similarity in [0, 1] used by the matcher.
///
/// The better of the raw normalized Levenshtein score and the score after
/// folding framework suffixes on both sides. Symmetric, and 1.0 for equal
/// inputs.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let raw = normalized_levenshtein(a, b);
    let folded = normalized_levenshtein(fold_framework_suffix(a), fold_framework_suffix(b));
    raw.max(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalized_empty_strings() {
        assert_eq!(normalized_levenshtein("", ""), 1.0);
        assert_eq!(normalized_levenshtein("", "abc"), 0.0);
    }

    #[test]
    fn test_normalized_raw_values() {
        // 2 edits over 7 characters
        let s = normalized_levenshtein("react", "reactjs");
        assert!((s - (1.0 - 2.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_fold_framework_suffix() {
        assert_eq!(fold_framework_suffix("reactjs"), "react");
        assert_eq!(fold_framework_suffix("node.js"), "node");
        assert_eq!(fold_framework_suffix("nodejs"), "node");
        assert_eq!(fold_framework_suffix("js"), "js");
        assert_eq!(fold_framework_suffix("vuejs"), "vue");
        assert_eq!(fold_framework_suffix("python"), "python");
    }

    #[test]
    fn test_reference_pairs_at_point_eight() {
        assert_eq!(levenshtein_similarity("python", "python"), 1.0);
        assert!(levenshtein_similarity("javascript", "java") < 0.8);
        assert!(levenshtein_similarity("react", "reactjs") >= 0.8);
        assert!(levenshtein_similarity("nodejs", "node") >= 0.8);
        assert!(levenshtein_similarity("node", "nodejs") >= 0.8);
        assert_eq!(levenshtein_similarity("machine learning", "machine learning"), 1.0);
    }

    #[test]
    fn test_similarity_of_empty_strings() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
    }

    proptest! {
        #[test]
        fn prop_identity(s in "\\PC{0,24}") {
            prop_assert_eq!(levenshtein_similarity(&s, &s), 1.0);
        }

        #[test]
        fn prop_symmetric(a in "[a-z. ]{0,16}", b in "[a-z. ]{0,16}") {
            prop_assert_eq!(levenshtein_similarity(&a, &b), levenshtein_similarity(&b, &a));
        }

        #[test]
        fn prop_bounded(a in "\\PC{0,16}", b in "\\PC{0,16}") {
            let s = levenshtein_similarity(&a, &b);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn prop_folding_never_lowers_raw_score(a in "[a-z.]{0,12}", b in "[a-z.]{0,12}") {
            prop_assert!(levenshtein_similarity(&a, &b) >= normalized_levenshtein(&a, &b));
        }
    }
}
