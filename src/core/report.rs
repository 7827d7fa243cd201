use serde::{Deserialize, Serialize};

use crate::core::record::{StudentRecord, SubjectScore};
use crate::scoring::PercentageSummary;

/// One subject line of a report, with the code re-attached from the map key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRow {
    pub sub_code: String,
    pub sub_name: String,
    pub theory: String,
    pub practical: String,
    pub marks: String,
    pub positional_grade: String,
}

impl SubjectRow {
    fn from_score(sub_code: &str, score: &SubjectScore) -> Self {
        Self {
            sub_code: sub_code.to_string(),
            sub_name: score.sub_name.clone(),
            theory: score.theory.clone(),
            practical: score.practical.clone(),
            marks: score.marks.clone(),
            positional_grade: score.positional_grade.clone(),
        }
    }
}

/// Display-ready result for one matched student.
///
/// Assembled by the engine from the stored record, the percentage summary
/// (after the precomputed-value precedence has been applied), and the match
/// score from ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    /// Roll number the record is keyed by
    pub roll_no: String,

    pub candidate_name: String,
    pub mother_name: Option<String>,
    pub father_name: Option<String>,
    pub school_name: Option<String>,

    /// Overall result status as a display string
    pub result_status: Option<String>,

    /// Subject lines in subject-code order
    pub subjects: Vec<SubjectRow>,

    /// Final percentages and scorable-subject counts
    pub percentages: PercentageSummary,

    /// Name similarity score from ranking (0-100)
    pub match_score: u8,
}

impl StudentReport {
    /// Build a report from a record and its computed percentages
    pub fn from_record(
        roll_no: impl Into<String>,
        record: &StudentRecord,
        percentages: PercentageSummary,
        match_score: u8,
    ) -> Self {
        let subjects = record
            .marks
            .iter()
            .map(|(sub_code, score)| SubjectRow::from_score(sub_code, score))
            .collect();

        Self {
            roll_no: roll_no.into(),
            candidate_name: record.candidate_name.clone(),
            mother_name: record.mother_name.clone(),
            father_name: record.father_name.clone(),
            school_name: record.school_name.clone(),
            result_status: record.result_status.as_ref().map(|s| s.to_string()),
            subjects,
            percentages,
            match_score,
        }
    }
}
