//! Stateless field extractors — each scans text (or the line sequence)
//! and returns an optional match. No extractor mutates shared state.

use std::sync::OnceLock;

use regex::Regex;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap())
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\+?\d{1,3}[-.\s]?)?(\d{3,5}[-.\s]?\d{3,5}[-.\s]?\d{3,5})").unwrap()
    })
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+|www\.\S+").unwrap())
}

/// First email-shaped substring, or empty. The TLD needs at least two
/// letters.
pub fn extract_email(text: &str) -> String {
    email_re()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone candidate whose digit-only length is in [10, 13].
/// The original separator-preserved form is returned, trimmed.
pub fn extract_phone(text: &str) -> String {
    for m in phone_re().find_iter(text) {
        let digits = m.as_str().chars().filter(char::is_ascii_digit).count();
        if (10..=13).contains(&digits) {
            return m.as_str().trim().to_string();
        }
    }
    String::new()
}

/// All hyperlink-shaped substrings in document order. No dedup.
pub fn extract_links(text: &str) -> Vec<String> {
    url_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Guesses the candidate name from the top of the resume.
///
/// Scans at most the first 8 lines, skipping anything that looks like a
/// contact line (email, URL, or phone-like match). Accepts the first
/// remaining line of 2–4 words where every word carries at least one
/// letter — resume headers conventionally place the name alone near the
/// top, and that shape distinguishes it from addresses and titles.
pub fn guess_name(lines: &[String]) -> String {
    for line in lines.iter().take(8) {
        if email_re().is_match(line) || url_re().is_match(line) || phone_re().is_match(line) {
            continue;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() > 1
            && words.len() <= 4
            && words.iter().all(|w| w.chars().any(char::is_alphabetic))
        {
            return line.clone();
        }
    }
    String::new()
}

/// Case-insensitive substring scan of each vocabulary entry against the
/// text. Result is deduplicated case-insensitively and sorted ascending
/// by lowercase form.
pub fn extract_skills(text: &str, vocabulary: &[String]) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = vocabulary
        .iter()
        .filter(|skill| lower.contains(&skill.to_lowercase()))
        .cloned()
        .collect();
    found.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    found.dedup_by(|a, b| a.to_lowercase() == b.to_lowercase());
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_extract_email_first_match() {
        assert_eq!(
            extract_email("Contact: john.doe@example.co.uk for info"),
            "john.doe@example.co.uk"
        );
    }

    #[test]
    fn test_extract_email_none() {
        assert_eq!(extract_email("no contact details here"), "");
    }

    #[test]
    fn test_extract_phone_accepts_eleven_digits() {
        let phone = extract_phone("Phone: +1 415-555-2671");
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        assert_eq!(digits, 11);
        assert_eq!(phone, "+1 415-555-2671");
    }

    #[test]
    fn test_extract_phone_rejects_short_digit_runs() {
        assert_eq!(extract_phone("Room 12-34"), "");
    }

    #[test]
    fn test_extract_phone_rejects_overlong_digit_runs() {
        // 15 digits — outside the [10, 13] window.
        assert_eq!(extract_phone("ref 12345-12345-12345"), "");
    }

    #[test]
    fn test_extract_links_in_document_order() {
        let links = extract_links("see https://a.dev/x then www.b.org end");
        assert_eq!(links, vec!["https://a.dev/x", "www.b.org"]);
    }

    #[test]
    fn test_guess_name_skips_contact_lines() {
        let lines = owned(&["John Smith", "john@x.com", "+1 415 555 0000"]);
        assert_eq!(guess_name(&lines), "John Smith");
    }

    #[test]
    fn test_guess_name_skips_leading_contact_lines() {
        let lines = owned(&["john@x.com", "www.johnsmith.dev", "John A Smith"]);
        assert_eq!(guess_name(&lines), "John A Smith");
    }

    #[test]
    fn test_guess_name_rejects_single_and_overlong_lines() {
        let lines = owned(&["Resume", "one two three four five", "Jane Doe"]);
        assert_eq!(guess_name(&lines), "Jane Doe");
    }

    #[test]
    fn test_guess_name_only_scans_first_eight_lines() {
        let mut lines = vec!["...".to_string(); 8];
        lines.push("Jane Doe".to_string());
        assert_eq!(guess_name(&lines), "");
    }

    #[test]
    fn test_extract_skills_sorted_and_deduped() {
        let vocab = owned(&["sql", "python"]);
        let skills = extract_skills("Skilled in Python and SQL queries", &vocab);
        assert_eq!(skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_extract_skills_no_matches() {
        let vocab = owned(&["rust", "go"]);
        assert!(extract_skills("plain prose only", &vocab).is_empty());
    }
}
