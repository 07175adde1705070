//! The fixed resume schema. Every parse produces a fully populated
//! `ResumeRecord` — absent values are empty strings or empty lists,
//! never missing keys.

use serde::{Deserialize, Serialize};

/// Whether a reported grade is a percentage or a GPA-style scale value.
/// Serializes as `"percentage"`, `"cgpa"`, or `""` when unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeScale {
    #[serde(rename = "percentage")]
    Percentage,
    #[serde(rename = "cgpa")]
    Cgpa,
    #[default]
    #[serde(rename = "")]
    Unset,
}

/// Fixed set of standardized test scores. Each value is either empty
/// or a digit string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestScores {
    pub sat: String,
    pub act: String,
    pub gre: String,
    pub gmat: String,
    pub toefl: String,
    pub ielts: String,
}

/// The single output entity of the pipeline. Field order and JSON key
/// names are part of the API contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone_number: String,

    pub high_school_name: String,
    pub high_school_address: String,
    pub high_school_gpa_or_percentage: String,
    pub high_school_gpa_scale: GradeScale,
    pub high_school_board: String,
    pub high_school_graduation_year: String,

    pub ug_college_name: String,
    pub ug_college_address: String,
    pub ug_college_gpa_or_percentage: String,
    pub ug_college_gpa_scale: GradeScale,
    pub ug_university: String,
    pub ug_graduation_year: String,
    pub ug_degree: String,
    pub ug_major: String,

    pub pg_college_name: String,
    pub pg_college_address: String,
    pub pg_college_gpa_or_percentage: String,
    pub pg_college_gpa_scale: GradeScale,
    pub pg_university: String,
    pub pg_graduation_year: String,
    pub pg_degree: String,
    pub pg_major: String,

    pub certifications: Vec<String>,
    pub extra_curricular_activities: Vec<String>,
    pub work_experience: Vec<String>,
    pub research_publications: Vec<String>,

    pub test_scores: TestScores,

    pub achievements: Vec<String>,
    pub skills: Vec<String>,
}

/// The single merge policy for scalar fields: first non-empty value wins.
/// Every sub-parser goes through this — no call site overwrites a field
/// that is already set.
pub(crate) fn fill_if_empty(slot: &mut String, value: &str) {
    if slot.is_empty() && !value.is_empty() {
        *slot = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_serializes_every_schema_key() {
        let json = serde_json::to_value(ResumeRecord::default()).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "name",
            "email",
            "phoneNumber",
            "highSchoolName",
            "highSchoolAddress",
            "highSchoolGpaOrPercentage",
            "highSchoolGpaScale",
            "highSchoolBoard",
            "highSchoolGraduationYear",
            "ugCollegeName",
            "ugCollegeAddress",
            "ugCollegeGpaOrPercentage",
            "ugCollegeGpaScale",
            "ugUniversity",
            "ugGraduationYear",
            "ugDegree",
            "ugMajor",
            "pgCollegeName",
            "pgCollegeAddress",
            "pgCollegeGpaOrPercentage",
            "pgCollegeGpaScale",
            "pgUniversity",
            "pgGraduationYear",
            "pgDegree",
            "pgMajor",
            "certifications",
            "extraCurricularActivities",
            "workExperience",
            "researchPublications",
            "testScores",
            "achievements",
            "skills",
        ] {
            assert!(obj.contains_key(key), "missing schema key: {key}");
        }

        let scores = obj["testScores"].as_object().unwrap();
        for key in ["sat", "act", "gre", "gmat", "toefl", "ielts"] {
            assert_eq!(scores[key], "", "score '{key}' should default empty");
        }
    }

    #[test]
    fn test_grade_scale_serializes_as_plain_strings() {
        assert_eq!(
            serde_json::to_value(GradeScale::Percentage).unwrap(),
            "percentage"
        );
        assert_eq!(serde_json::to_value(GradeScale::Cgpa).unwrap(), "cgpa");
        assert_eq!(serde_json::to_value(GradeScale::Unset).unwrap(), "");
    }

    #[test]
    fn test_fill_if_empty_never_overwrites() {
        let mut slot = String::new();
        fill_if_empty(&mut slot, "first");
        fill_if_empty(&mut slot, "second");
        assert_eq!(slot, "first");

        let mut blank = String::new();
        fill_if_empty(&mut blank, "");
        assert_eq!(blank, "");
    }
}
