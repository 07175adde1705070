//! Text normalization — whitespace collapsing for full-text scans and
//! line splitting for position-sensitive heuristics.

/// Collapses every run of whitespace (including newlines) to a single
/// space and trims both ends. Only for full-text scans; line-oriented
/// extraction must keep the original line breaks.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits raw text into trimmed, non-empty lines. Order is preserved —
/// position drives section membership and the name-guess window.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace_flattens_newlines_and_tabs() {
        assert_eq!(
            collapse_whitespace("  John \t Smith\n\nEngineer  "),
            "John Smith Engineer"
        );
    }

    #[test]
    fn test_collapse_whitespace_empty_input() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("   \n\t "), "");
    }

    #[test]
    fn test_split_lines_trims_and_drops_blanks() {
        let lines = split_lines("  John Smith \n\n  Engineer\n   \nPune");
        assert_eq!(lines, vec!["John Smith", "Engineer", "Pune"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
    }
}
