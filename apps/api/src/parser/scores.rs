//! Test-score sub-parser — scans the whole document for the six fixed
//! standardized test names followed by a numeric score.

use std::sync::OnceLock;

use regex::Regex;

use crate::parser::schema::{fill_if_empty, TestScores};

const SCORE_NAMES: [&str; 6] = ["sat", "act", "gre", "gmat", "toefl", "ielts"];

/// One compiled `name : digits` / `name - digits` pattern per score.
fn score_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SCORE_NAMES
            .iter()
            .map(|name| {
                let re = Regex::new(&format!(r"{name}\s*[:\-]\s*(\d+)")).unwrap();
                (*name, re)
            })
            .collect()
    })
}

/// Fills each score from the first `name: 123` style match in the
/// lowercased text. Only empty slots are written, so a second pass over
/// the same record is a no-op.
pub fn parse_test_scores(text: &str, scores: &mut TestScores) {
    let lower = text.to_lowercase();
    for (name, re) in score_patterns() {
        let slot = match *name {
            "sat" => &mut scores.sat,
            "act" => &mut scores.act,
            "gre" => &mut scores.gre,
            "gmat" => &mut scores.gmat,
            "toefl" => &mut scores.toefl,
            _ => &mut scores.ielts,
        };
        if let Some(caps) = re.captures(&lower) {
            fill_if_empty(slot, caps.get(1).map(|m| m.as_str()).unwrap_or_default());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_and_dash_separators() {
        let mut scores = TestScores::default();
        parse_test_scores("GRE: 320\nTOEFL - 110", &mut scores);
        assert_eq!(scores.gre, "320");
        assert_eq!(scores.toefl, "110");
        assert_eq!(scores.sat, "");
    }

    #[test]
    fn test_case_insensitive_names() {
        let mut scores = TestScores::default();
        parse_test_scores("ielts:7 and Gmat : 700", &mut scores);
        assert_eq!(scores.ielts, "7");
        assert_eq!(scores.gmat, "700");
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let mut scores = TestScores::default();
        parse_test_scores("SAT: 1450", &mut scores);
        parse_test_scores("SAT: 9999", &mut scores);
        assert_eq!(scores.sat, "1450");
    }

    #[test]
    fn test_name_without_separator_is_ignored() {
        let mut scores = TestScores::default();
        parse_test_scores("took the GRE in 2021", &mut scores);
        assert_eq!(scores.gre, "");
    }
}
