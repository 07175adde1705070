//! Core resume parsing pipeline.
//!
//! Strictly forward dataflow: normalizer → field extractors / section
//! segmenter → education and test-score sub-parsers → schema assembly.
//! Everything here is synchronous, deterministic, and free of shared
//! mutable state — invocations on separate threads need no
//! coordination.

pub mod education;
pub mod fields;
pub mod schema;
pub mod scores;
pub mod sections;
pub mod text;

pub use schema::ResumeRecord;

use crate::parser::sections::{section_to_list, segment, SectionCategory, SectionKeywordTable};

/// Known technology/skill terms matched against the document text.
/// Static configuration, not derived from input; swap the vocabulary at
/// construction for a different domain.
const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "c",
    "c++",
    "c#",
    "javascript",
    "typescript",
    "html",
    "css",
    "react",
    "node.js",
    "express",
    "django",
    "flask",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "nosql",
    "oracle",
    "git",
    "github",
    "docker",
    "kubernetes",
    "flutter",
    "dart",
    "aws",
    "azure",
    "gcp",
    "machine learning",
    "deep learning",
    "nlp",
    "data analysis",
    "excel",
    "ui/ux",
    "figma",
    "canva",
    "rpa",
    "uipath",
];

/// Heuristic resume parser. Holds only immutable configuration — the
/// skill vocabulary and the section keyword table — injected at
/// construction.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    vocabulary: Vec<String>,
    keyword_table: SectionKeywordTable,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_SKILL_VOCABULARY
                .iter()
                .map(|s| s.to_string())
                .collect(),
            keyword_table: SectionKeywordTable::default(),
        }
    }
}

impl ResumeParser {
    pub fn new(vocabulary: Vec<String>, keyword_table: SectionKeywordTable) -> Self {
        Self {
            vocabulary,
            keyword_table,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Single entry point of the core: raw document text in, fully
    /// populated `ResumeRecord` out. Never fails on well-formed text;
    /// fields the heuristics cannot find stay at their empty defaults.
    pub fn parse_text(&self, raw_text: &str) -> ResumeRecord {
        let lines = text::split_lines(raw_text);
        let clean = text::collapse_whitespace(raw_text);

        let mut record = ResumeRecord::default();

        record.name = fields::guess_name(&lines);
        record.email = fields::extract_email(&clean);
        record.phone_number = fields::extract_phone(&clean);
        record.skills = fields::extract_skills(&clean, &self.vocabulary);

        let body_sections = segment(raw_text, &self.keyword_table);
        let list_of = |category: SectionCategory| {
            body_sections
                .get(&category)
                .map(|body| section_to_list(body))
                .unwrap_or_default()
        };
        record.work_experience = list_of(SectionCategory::Experience);
        record.certifications = list_of(SectionCategory::Certifications);
        record.extra_curricular_activities = list_of(SectionCategory::Extracurricular);
        record.achievements = list_of(SectionCategory::Achievements);
        record.research_publications = list_of(SectionCategory::Publications);

        education::parse_education(raw_text, &mut record);
        scores::parse_test_scores(raw_text, &mut record.test_scores);

        record
    }
}
