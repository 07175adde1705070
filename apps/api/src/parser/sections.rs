//! Section segmentation — locates heading lines by keyword and slices
//! the body text between consecutive headings.
//!
//! Two variants exist on purpose. `segment` maps every configured
//! category at once and feeds the top-level schema lists.
//! `find_section_block` pulls a single section and additionally stops at
//! generic-looking headings; the education and test-score sub-parsers
//! use it.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Section categories recognized by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionCategory {
    Summary,
    Education,
    Experience,
    Projects,
    Skills,
    Certifications,
    Achievements,
    Extracurricular,
    Publications,
}

/// Default heading synonyms per category. Declaration order doubles as
/// the tie-break: a line matching two categories is assigned to the one
/// listed first here.
const DEFAULT_SECTION_KEYWORDS: &[(SectionCategory, &[&str])] = &[
    (SectionCategory::Summary, &["summary", "about me", "profile"]),
    (
        SectionCategory::Education,
        &["education", "academic", "academics", "qualification"],
    ),
    (
        SectionCategory::Experience,
        &[
            "experience",
            "work experience",
            "professional experience",
            "employment",
        ],
    ),
    (SectionCategory::Projects, &["project", "projects"]),
    (
        SectionCategory::Skills,
        &["skills", "technical skills", "skills & tools"],
    ),
    (
        SectionCategory::Certifications,
        &["certifications", "certification"],
    ),
    (
        SectionCategory::Achievements,
        &["achievements", "accomplishments"],
    ),
    (
        SectionCategory::Extracurricular,
        &["extra curricular", "extracurricular", "activities"],
    ),
    (
        SectionCategory::Publications,
        &["publications", "research", "research publications"],
    ),
];

/// Immutable mapping from section category to heading synonyms.
/// Injected into the parser at construction; entry order is the
/// documented tie-break for ambiguous headings.
#[derive(Debug, Clone)]
pub struct SectionKeywordTable {
    entries: Vec<(SectionCategory, Vec<String>)>,
}

impl Default for SectionKeywordTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SECTION_KEYWORDS
                .iter()
                .map(|(cat, kws)| (*cat, kws.iter().map(|k| k.to_string()).collect()))
                .collect(),
        }
    }
}

impl SectionKeywordTable {
    pub fn new(entries: Vec<(SectionCategory, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn categories(&self) -> impl Iterator<Item = SectionCategory> + '_ {
        self.entries.iter().map(|(cat, _)| *cat)
    }

    /// First category (in table order) whose synonyms match the line as
    /// a whole-line heading, tolerant of a trailing colon.
    fn match_heading(&self, line: &str) -> Option<SectionCategory> {
        let trimmed = line.trim().to_lowercase();
        let without_colon = trimmed.strip_suffix(':').unwrap_or(&trimmed);
        for (category, keywords) in &self.entries {
            if keywords.iter().any(|kw| kw == without_colon) {
                return Some(*category);
            }
        }
        None
    }
}

/// Segments the document into per-category bodies.
///
/// Every category in the table is present in the output (empty string
/// when not found). A heading's body spans the lines up to the next
/// recognized heading, exclusive; repeated headings of the same
/// category get their bodies concatenated with a newline. With zero
/// recognized headings the whole document lands under `Summary`.
pub fn segment(text: &str, table: &SectionKeywordTable) -> BTreeMap<SectionCategory, String> {
    let lines: Vec<&str> = text.lines().collect();

    let mut headings: Vec<(usize, SectionCategory)> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if let Some(category) = table.match_heading(line) {
            headings.push((i, category));
        }
    }

    let mut sections: BTreeMap<SectionCategory, String> =
        table.categories().map(|c| (c, String::new())).collect();

    if headings.is_empty() {
        sections.insert(SectionCategory::Summary, text.to_string());
        return sections;
    }

    for (k, &(start, category)) in headings.iter().enumerate() {
        let end = headings
            .get(k + 1)
            .map(|&(next, _)| next)
            .unwrap_or(lines.len());
        let body = lines[start + 1..end].join("\n").trim().to_string();
        let slot = sections.entry(category).or_default();
        if slot.is_empty() {
            *slot = body;
        } else {
            slot.push('\n');
            slot.push_str(&body);
        }
    }

    sections
}

fn trailing_colon_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z ]+:\s*$").unwrap())
}

/// True for lines that look like a generic heading: all-uppercase with
/// at most five words, or `Some Words:` with nothing after the colon.
fn looks_like_heading(line: &str) -> bool {
    let trimmed = line.trim();
    let is_upper = trimmed.chars().any(char::is_alphabetic)
        && !trimmed.chars().any(char::is_lowercase);
    (is_upper && trimmed.split_whitespace().count() <= 5)
        || trailing_colon_heading_re().is_match(trimmed)
}

/// Strict single-section variant: returns the body of the first section
/// whose heading matches one of `keywords`, terminated at the next
/// known-or-generic heading. Empty string when no heading matches.
pub fn find_section_block(text: &str, keywords: &[&str]) -> String {
    let lines: Vec<&str> = text.lines().collect();

    let start = lines.iter().position(|line| {
        let trimmed = line.trim().to_lowercase();
        let without_colon = trimmed.strip_suffix(':').unwrap_or(&trimmed);
        keywords.iter().any(|kw| *kw == without_colon)
    });
    let Some(start) = start else {
        return String::new();
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| looks_like_heading(line))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    lines[start + 1..end].join("\n").trim().to_string()
}

/// Converts a bullet/line separated section body into a list of
/// entries, stripping bullet glyphs and surrounding whitespace.
pub fn section_to_list(body: &str) -> Vec<String> {
    body.lines()
        .map(|line| line.trim_matches(|c: char| c == ' ' || c == '-' || c == '\u{2022}' || c == '\t'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
