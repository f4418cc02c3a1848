//! Porter suffix-stripping stemmer (steps 1a–5b) over lowercase ASCII words.
//!
//! Non-ASCII tokens and words of two letters or fewer pass through unchanged.
//! A small agent-noun table runs first so "tester" lands on the same stem as
//! "testing"; plain Porter keeps the `-er` there.

/// Agent nouns whose verb stem is the useful search form.
const AGENT_NOUNS: &[(&str, &str)] = &[
    ("designer", "design"),
    ("designers", "design"),
    ("developer", "develop"),
    ("developers", "develop"),
    ("programmer", "program"),
    ("programmers", "program"),
    ("tester", "test"),
    ("testers", "test"),
];

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Stems a single lowercase token.
pub fn stem_word(word: &str) -> String {
    if let Some((_, stem)) = AGENT_NOUNS.iter().find(|(noun, _)| *noun == word) {
        return (*stem).to_string();
    }
    if word.len() <= 2 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }

    let mut w = word.as_bytes().to_vec();
    step1a(&mut w);
    step1b(&mut w);
    step1c(&mut w);
    apply_longest(&mut w, STEP2_RULES, |stem| measure(stem) > 0);
    apply_longest(&mut w, STEP3_RULES, |stem| measure(stem) > 0);
    step4(&mut w);
    step5(&mut w);

    // Only ASCII letters were ever pushed
    String::from_utf8(w).unwrap_or_else(|_| word.to_string())
}

fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// Porter's `m`: the number of VC sequences in `[C](VC){m}[V]`.
fn measure(w: &[u8]) -> usize {
    let n = w.len();
    let mut i = 0;
    while i < n && is_consonant(w, i) {
        i += 1;
    }
    let mut m = 0;
    loop {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i >= n {
            return m;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
        if i >= n {
            return m;
        }
    }
}

fn has_vowel(w: &[u8]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// consonant-vowel-consonant ending, where the last consonant is not w, x or y.
fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y')
}

fn replace_suffix(w: &mut Vec<u8>, suffix: &str, replacement: &str) {
    w.truncate(w.len() - suffix.len());
    w.extend_from_slice(replacement.as_bytes());
}

fn step1a(w: &mut Vec<u8>) {
    if w.ends_with(b"sses") || w.ends_with(b"ies") {
        w.truncate(w.len() - 2);
    } else if w.ends_with(b"s") && !w.ends_with(b"ss") {
        w.pop();
    }
}

fn step1b(w: &mut Vec<u8>) {
    if w.ends_with(b"eed") {
        if measure(&w[..w.len() - 3]) > 0 {
            w.pop();
        }
        return;
    }

    let stripped = if w.ends_with(b"ed") && has_vowel(&w[..w.len() - 2]) {
        w.truncate(w.len() - 2);
        true
    } else if w.ends_with(b"ing") && has_vowel(&w[..w.len() - 3]) {
        w.truncate(w.len() - 3);
        true
    } else {
        false
    };
    if !stripped {
        return;
    }

    if w.ends_with(b"at") || w.ends_with(b"bl") || w.ends_with(b"iz") {
        w.push(b'e');
    } else if ends_double_consonant(w) && !matches!(w[w.len() - 1], b'l' | b's' | b'z') {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push(b'e');
    }
}

fn step1c(w: &mut [u8]) {
    let n = w.len();
    if n > 1 && w[n - 1] == b'y' && has_vowel(&w[..n - 1]) {
        w[n - 1] = b'i';
    }
}

/// Finds the longest matching suffix and rewrites it when `condition` holds
/// for the remaining stem. Shorter suffixes are not retried.
fn apply_longest(w: &mut Vec<u8>, rules: &[(&str, &str)], condition: impl Fn(&[u8]) -> bool) {
    let matched = rules
        .iter()
        .filter(|(suffix, _)| w.ends_with(suffix.as_bytes()))
        .max_by_key(|(suffix, _)| suffix.len());
    if let Some((suffix, replacement)) = matched {
        if condition(&w[..w.len() - suffix.len()]) {
            replace_suffix(w, suffix, replacement);
        }
    }
}

fn step4(w: &mut Vec<u8>) {
    let matched = STEP4_SUFFIXES
        .iter()
        .filter(|suffix| w.ends_with(suffix.as_bytes()))
        .max_by_key(|suffix| suffix.len());
    let Some(suffix) = matched else {
        return;
    };
    let stem = &w[..w.len() - suffix.len()];
    if measure(stem) <= 1 {
        return;
    }
    if *suffix == "ion" && !matches!(stem.last(), Some(b's') | Some(b't')) {
        return;
    }
    replace_suffix(w, suffix, "");
}

fn step5(w: &mut Vec<u8>) {
    if w.ends_with(b"e") {
        let stem = &w[..w.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            w.pop();
        }
    }
    if measure(w) > 1 && ends_double_consonant(w) && w.ends_with(b"l") {
        w.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tester_and_testing_share_a_stem() {
        assert_eq!(stem_word("tester"), "test");
        assert_eq!(stem_word("testing"), "test");
        assert_eq!(stem_word("tests"), "test");
        assert_eq!(stem_word("tested"), "test");
    }

    #[test]
    fn test_classic_porter_examples() {
        assert_eq!(stem_word("caresses"), "caress");
        assert_eq!(stem_word("ponies"), "poni");
        assert_eq!(stem_word("agreed"), "agre");
        assert_eq!(stem_word("hopping"), "hop");
        assert_eq!(stem_word("filing"), "file");
        assert_eq!(stem_word("happy"), "happi");
        assert_eq!(stem_word("relational"), "relat");
        assert_eq!(stem_word("hopeful"), "hope");
        assert_eq!(stem_word("adjustment"), "adjust");
        assert_eq!(stem_word("controll"), "control");
    }

    #[test]
    fn test_agent_nouns() {
        assert_eq!(stem_word("developer"), "develop");
        assert_eq!(stem_word("programmers"), "program");
    }

    #[test]
    fn test_short_and_non_ascii_pass_through() {
        assert_eq!(stem_word("go"), "go");
        assert_eq!(stem_word("café"), "café");
        assert_eq!(stem_word(""), "");
    }
}
