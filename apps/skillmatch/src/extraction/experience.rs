use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::profile::Experience;

// Ranges go first so "3-5 years of experience" is not read as "5 years".
// The digits must touch the dash: "2018 - 3 years" is a date, not a range.
static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+)-(\d+)\s*(?:years?|yrs?)\b").expect("valid range regex")
});

static YEARS_RE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*(?:years?|yrs?)(?:\s+of)?\s+experience",
        r"experience\s*:?\s*(\d+)\+?\s*(?:years?|yrs?)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid experience regex"))
    .collect()
});

/// Stated years of experience, or `Experience::NotSpecified`.
pub fn extract_experience(text: &str) -> Experience {
    let lower = text.to_lowercase();

    let range = RANGE_RE.captures_iter(&lower).find_map(|caps| {
        match (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
            (Ok(low), Ok(high)) if low <= high => Some(Experience::Range(low, high)),
            _ => None,
        }
    });
    if let Some(range) = range {
        return range;
    }

    YEARS_RE
        .iter()
        .find_map(|re| re.captures(&lower))
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map(Experience::Years)
        .unwrap_or(Experience::NotSpecified)
}
