use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::profile::Contact;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

/// Phone patterns in priority order; the first pattern with any match wins.
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // International prefix: +1 (555) 123-4567, +44 555 123 4567
        r"\+\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b",
        // Parenthesized area code: (555) 123-4567
        r"\(\d{3}\)\s?\d{3}[-.\s]?\d{4}\b",
        // Dashed or dotted groups: 555-123-4567, 555.123.4567
        r"\b\d{3}[-.]\d{3}[-.]\d{4}\b",
        // Space separated groups: 555 123 4567
        r"\b\d{3}\s\d{3}\s\d{4}\b",
        // Bare ten digits
        r"\b\d{10}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid phone regex"))
    .collect()
});

/// First email address in the text, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone number in the text, trying each pattern in priority order.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}

pub fn extract_contact(text: &str) -> Contact {
    Contact {
        email: extract_email(text),
        phone: extract_phone(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email_first_match() {
        let text = "Contact: jane.doe+jobs@example.co.uk or backup@mail.com";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("jane.doe+jobs@example.co.uk")
        );
    }

    #[test]
    fn test_extract_email_none() {
        assert_eq!(extract_email("no address here @ all"), None);
    }

    #[test]
    fn test_phone_international_prefix_wins() {
        let text = "Call 555-000-1111 or +1 (555) 123-4567";
        assert_eq!(extract_phone(text).as_deref(), Some("+1 (555) 123-4567"));
    }

    #[test]
    fn test_phone_parenthesized() {
        assert_eq!(
            extract_phone("Phone: (555) 123-4567").as_deref(),
            Some("(555) 123-4567")
        );
    }

    #[test]
    fn test_phone_dashed_and_dotted() {
        assert_eq!(extract_phone("555-123-4567").as_deref(), Some("555-123-4567"));
        assert_eq!(extract_phone("555.123.4567").as_deref(), Some("555.123.4567"));
    }

    #[test]
    fn test_phone_bare_digits() {
        assert_eq!(
            extract_phone("Phone: 5551234567").as_deref(),
            Some("5551234567")
        );
    }

    #[test]
    fn test_phone_none() {
        assert_eq!(extract_phone("5 years in 2019"), None);
    }

    #[test]
    fn test_extract_contact() {
        let contact = extract_contact("Jane Doe | jane@example.com | 555.123.4567");
        assert_eq!(contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("555.123.4567"));
    }
}
