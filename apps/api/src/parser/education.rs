//! Education sub-parser — classifies each education-section line into a
//! qualification tier and pulls year, grade, major, and institution out
//! of that single line.

use std::sync::OnceLock;

use regex::Regex;

use crate::parser::schema::{fill_if_empty, GradeScale, ResumeRecord};
use crate::parser::sections::find_section_block;

/// Heading synonyms that open the education section.
const EDUCATION_KEYWORDS: &[&str] = &["education", "academics", "academic details"];

/// Qualification tier of a single education line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Secondary,
    Undergraduate,
    Postgraduate,
}

/// Tier classification rules, evaluated in priority order with the
/// first match winning. Secondary outranks undergraduate outranks
/// postgraduate when a line matches several marker sets.
const TIER_RULES: &[(Tier, &[&str])] = &[
    (
        Tier::Secondary,
        &["10th", "x ", "ssc", "matric", "high school"],
    ),
    (
        Tier::Undergraduate,
        &["b.tech", "b.e", "bsc", "bca", "b.com", "bachelor"],
    ),
    (
        Tier::Postgraduate,
        &["m.tech", "m.e", "msc", "mca", "mba", "master"],
    ),
];

fn classify(line_lower: &str) -> Option<Tier> {
    TIER_RULES
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| line_lower.contains(m)))
        .map(|(tier, _)| *tier)
}

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{2,3}\.?\d*\s*%").unwrap())
}

fn cgpa_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d\.\d{1,2}\b").unwrap())
}

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap())
}

fn major_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)]+)\)").unwrap())
}

/// Grade and scale are set together, once. Percentage is checked before
/// GPA — a line carrying both is recorded as percentage.
fn fill_grade(grade: &mut String, scale: &mut GradeScale, line: &str) {
    if !grade.is_empty() {
        return;
    }
    if let Some(m) = percent_re().find(line) {
        *grade = m.as_str().to_string();
        *scale = GradeScale::Percentage;
    } else if let Some(m) = cgpa_re().find(line) {
        *grade = m.as_str().to_string();
        *scale = GradeScale::Cgpa;
    }
}

fn fill_year(slot: &mut String, line: &str) {
    if let Some(m) = year_re().find(line) {
        fill_if_empty(slot, m.as_str());
    }
}

fn fill_major(slot: &mut String, line: &str) {
    if let Some(caps) = major_re().captures(line) {
        fill_if_empty(slot, caps.get(1).map(|m| m.as_str()).unwrap_or_default());
    }
}

/// Parses the education section into the record's three tiers.
///
/// Per tier, every field is guarded first-non-empty-wins independently:
/// the first qualifying line usually populates everything, but a later
/// line in the same tier can still fill a field the first one left
/// empty.
pub fn parse_education(text: &str, record: &mut ResumeRecord) {
    let block = find_section_block(text, EDUCATION_KEYWORDS);
    if block.is_empty() {
        return;
    }

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();
        match classify(&lower) {
            Some(Tier::Secondary) => {
                fill_if_empty(&mut record.high_school_name, line);
                fill_grade(
                    &mut record.high_school_gpa_or_percentage,
                    &mut record.high_school_gpa_scale,
                    line,
                );
                fill_year(&mut record.high_school_graduation_year, line);
            }
            Some(Tier::Undergraduate) => {
                fill_if_empty(&mut record.ug_college_name, line);
                fill_if_empty(&mut record.ug_degree, "Bachelor");
                fill_major(&mut record.ug_major, line);
                fill_grade(
                    &mut record.ug_college_gpa_or_percentage,
                    &mut record.ug_college_gpa_scale,
                    line,
                );
                fill_year(&mut record.ug_graduation_year, line);
            }
            Some(Tier::Postgraduate) => {
                fill_if_empty(&mut record.pg_college_name, line);
                fill_if_empty(&mut record.pg_degree, "Master");
                fill_major(&mut record.pg_major, line);
                fill_grade(
                    &mut record.pg_college_gpa_or_percentage,
                    &mut record.pg_college_gpa_scale,
                    line,
                );
                fill_year(&mut record.pg_graduation_year, line);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ResumeRecord {
        let mut record = ResumeRecord::default();
        parse_education(text, &mut record);
        record
    }

    #[test]
    fn test_undergraduate_line_fills_all_tier_fields() {
        let record = parse("Education\nB.Tech Computer Science (AI) 2021 8.5");
        assert_eq!(record.ug_college_name, "B.Tech Computer Science (AI) 2021 8.5");
        assert_eq!(record.ug_degree, "Bachelor");
        assert_eq!(record.ug_major, "AI");
        assert_eq!(record.ug_graduation_year, "2021");
        assert_eq!(record.ug_college_gpa_or_percentage, "8.5");
        assert_eq!(record.ug_college_gpa_scale, GradeScale::Cgpa);
    }

    #[test]
    fn test_percentage_beats_gpa_on_same_line() {
        let record = parse("Education\n10th CBSE 92.4% 9.1 2016");
        assert_eq!(record.high_school_gpa_or_percentage, "92.4%");
        assert_eq!(record.high_school_gpa_scale, GradeScale::Percentage);
        assert_eq!(record.high_school_graduation_year, "2016");
    }

    #[test]
    fn test_tier_priority_secondary_over_undergraduate() {
        // Contains both "high school" and "bachelor" — secondary wins.
        let record = parse("Education\nhigh school diploma before bachelor studies 2014");
        assert_eq!(
            record.high_school_name,
            "high school diploma before bachelor studies 2014"
        );
        assert_eq!(record.ug_college_name, "");
    }

    #[test]
    fn test_first_line_per_tier_wins_but_gaps_still_fill() {
        let record = parse(
            "Education\nBachelor of Science 2019\nB.Tech (Electronics) 2022 7.8",
        );
        // Name and year come from the first UG line.
        assert_eq!(record.ug_college_name, "Bachelor of Science 2019");
        assert_eq!(record.ug_graduation_year, "2019");
        // Major and grade were empty after line one; the second UG line fills them.
        assert_eq!(record.ug_major, "Electronics");
        assert_eq!(record.ug_college_gpa_or_percentage, "7.8");
        assert_eq!(record.ug_college_gpa_scale, GradeScale::Cgpa);
    }

    #[test]
    fn test_postgraduate_line() {
        let record = parse("Academics\nM.Tech (Data Science) IIT Delhi 2023 8.9");
        assert_eq!(record.pg_degree, "Master");
        assert_eq!(record.pg_major, "Data Science");
        assert_eq!(record.pg_graduation_year, "2023");
        assert_eq!(record.pg_college_gpa_or_percentage, "8.9");
    }

    #[test]
    fn test_unclassified_lines_are_ignored() {
        let record = parse("Education\nsome coursework notes 2018");
        assert_eq!(record, ResumeRecord::default());
    }

    #[test]
    fn test_no_education_section_is_a_no_op() {
        let record = parse("Experience\nAcme Corp 2020");
        assert_eq!(record, ResumeRecord::default());
    }
}
