use crate::core::SubjectScore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Subject codes treated as physical-education / additional subjects
pub const DEFAULT_NON_CORE_CODES: &[&str] = &["048", "843"];
/// Subject-name fragments that mark a subject as physical-education / additional
pub const DEFAULT_NON_CORE_KEYWORDS: &[&str] = &[
    "PHYSICAL EDUCATION",
    "PHY.EDUCATION",
    "HEALTH & PHYSICAL EDUCATION",
    "ARTIFICIAL INTELLIGENCE",
];
/// Full marks assumed per subject when deriving percentages
pub const DEFAULT_MAX_MARKS_PER_SUBJECT: u32 = 100;

/// Tunables for percentage aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Exact subject codes classified as non-core
    pub non_core_codes: Vec<String>,
    /// Case-insensitive name fragments classified as non-core
    pub non_core_keywords: Vec<String>,
    /// Denominator per scorable subject
    pub max_marks_per_subject: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            non_core_codes: DEFAULT_NON_CORE_CODES.iter().map(|s| s.to_string()).collect(),
            non_core_keywords: DEFAULT_NON_CORE_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_marks_per_subject: DEFAULT_MAX_MARKS_PER_SUBJECT,
        }
    }
}

impl ScoringConfig {
    /// True when the subject counts as physical-education / additional.
    ///
    /// Codes are compared exactly; keywords match anywhere in the subject
    /// name, ignoring case.
    pub fn is_non_core(&self, sub_code: &str, sub_name: &str) -> bool {
        if self.non_core_codes.iter().any(|c| c == sub_code) {
            return true;
        }
        let name_lower = sub_name.to_lowercase();
        self.non_core_keywords
            .iter()
            .any(|k| name_lower.contains(&k.to_lowercase()))
    }
}

/// Aggregated percentages for one student.
///
/// `percentage_overall` covers every scorable subject; `percentage_excluding_pe`
/// drops the non-core ones. A percentage is `None` when no subject contributed
/// to it, which is distinct from a genuine 0.0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentageSummary {
    pub percentage_overall: Option<f64>,
    pub num_subjects_overall: usize,
    pub percentage_excluding_pe: Option<f64>,
    pub num_subjects_excluding_pe: usize,
    pub found_pe_subject: bool,
}

impl PercentageSummary {
    /// Derive percentages from raw subject marks.
    ///
    /// Subjects whose marks are the `---` placeholder, empty, or not an
    /// integer are skipped without contributing to any count. Each scorable
    /// subject adds `max_marks_per_subject` to the denominator; results are
    /// rounded to two decimals.
    pub fn compute(subjects: &BTreeMap<String, SubjectScore>, config: &ScoringConfig) -> Self {
        let mut total_all: i64 = 0;
        let mut count_all: usize = 0;
        let mut total_core: i64 = 0;
        let mut count_core: usize = 0;
        let mut found_pe_subject = false;

        for (sub_code, subject) in subjects {
            let Some(marks) = subject.numeric_marks() else {
                continue;
            };
            total_all += marks;
            count_all += 1;
            if config.is_non_core(sub_code, &subject.sub_name) {
                found_pe_subject = true;
            } else {
                total_core += marks;
                count_core += 1;
            }
        }

        let max = config.max_marks_per_subject as i64;
        let percentage_overall = if count_all > 0 && max > 0 {
            Some(round2(total_all as f64 / (count_all as i64 * max) as f64 * 100.0))
        } else {
            None
        };

        let mut num_subjects_excluding_pe = count_core;
        let percentage_excluding_pe = if count_core > 0 && max > 0 {
            Some(round2(total_core as f64 / (count_core as i64 * max) as f64 * 100.0))
        } else if !found_pe_subject && percentage_overall.is_some() {
            num_subjects_excluding_pe = count_all;
            percentage_overall
        } else {
            None
        };

        Self {
            percentage_overall,
            num_subjects_overall: count_all,
            percentage_excluding_pe,
            num_subjects_excluding_pe,
            found_pe_subject,
        }
    }

    /// Let numeric percentages stored on the record win over the derived ones.
    ///
    /// Subject counts and the non-core flag always come from the fresh
    /// computation; only the two percentage values are replaced.
    pub fn with_precomputed(mut self, overall: Option<f64>, excluding_pe: Option<f64>) -> Self {
        if let Some(value) = overall {
            self.percentage_overall = Some(value);
        }
        if let Some(value) = excluding_pe {
            self.percentage_excluding_pe = Some(value);
        }
        self
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
