use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

/// Sentinel composite mark meaning "not applicable" in the upstream data
pub const NOT_APPLICABLE_MARKS: &str = "---";

/// Deserialize a percentage that is only authoritative when numeric.
/// Upstream records sometimes carry strings or nulls in these fields;
/// anything that is not a JSON number becomes `None`.
fn deserialize_loose_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LooseNumber {
        Number(f64),
        Other(serde::de::IgnoredAny),
    }

    match Option::<LooseNumber>::deserialize(deserializer)? {
        Some(LooseNumber::Number(n)) => Ok(Some(n)),
        _ => Ok(None),
    }
}

/// Overall result status printed on the marksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultStatus {
    Pass,
    Fail,
    Absent,
    /// Any status string this crate does not recognize (e.g. "COMP")
    Other(String),
}

impl From<String> for ResultStatus {
    fn from(s: String) -> Self {
        match s.trim().to_uppercase().as_str() {
            "PASS" => ResultStatus::Pass,
            "FAIL" => ResultStatus::Fail,
            "ABSENT" | "ABST" => ResultStatus::Absent,
            _ => ResultStatus::Other(s),
        }
    }
}

impl From<ResultStatus> for String {
    fn from(status: ResultStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultStatus::Pass => write!(f, "PASS"),
            ResultStatus::Fail => write!(f, "FAIL"),
            ResultStatus::Absent => write!(f, "ABSENT"),
            ResultStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Per-subject score entry as stored on a record.
///
/// All marks are kept in string form because the upstream data uses the
/// `"---"` sentinel (and occasionally letter grades) where a number is not
/// applicable. The subject code is the key of [`StudentRecord::marks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectScore {
    /// Subject name as printed on the marksheet
    #[serde(default)]
    pub sub_name: String,

    /// Theory component mark
    #[serde(default)]
    pub theory: String,

    /// Practical/internal component mark
    #[serde(default)]
    pub practical: String,

    /// Composite mark out of the configured maximum, or a sentinel
    #[serde(default)]
    pub marks: String,

    /// Positional grade label (A1, B2, ...)
    #[serde(default)]
    pub positional_grade: String,
}

impl SubjectScore {
    /// Create a subject score with a name and composite mark
    pub fn new(sub_name: impl Into<String>, marks: impl Into<String>) -> Self {
        Self {
            sub_name: sub_name.into(),
            theory: String::new(),
            practical: String::new(),
            marks: marks.into(),
            positional_grade: String::new(),
        }
    }

    /// Composite mark as a number, or `None` when the subject is not
    /// scorable (sentinel, empty, or unparseable mark).
    pub fn numeric_marks(&self) -> Option<i64> {
        let marks = self.marks.trim();
        if marks.is_empty() || marks == NOT_APPLICABLE_MARKS {
            return None;
        }
        marks.parse().ok()
    }

    /// Whether this subject counts toward percentage aggregation
    pub fn is_scorable(&self) -> bool {
        self.numeric_marks().is_some()
    }
}

/// One student's exam-result record.
///
/// Field names follow the upstream JSON shape; the roll number is the key of
/// the enclosing record mapping, not a field. The two `marks_percentage_*`
/// fields are upstream-precomputed percentages that take precedence over
/// freshly computed ones when they are numeric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Candidate name as registered with the board
    #[serde(default)]
    pub candidate_name: String,

    #[serde(default)]
    pub mother_name: Option<String>,

    #[serde(default)]
    pub father_name: Option<String>,

    #[serde(default)]
    pub school_name: Option<String>,

    /// Overall result status (upstream JSON key is `Result`)
    #[serde(default, rename = "Result")]
    pub result_status: Option<ResultStatus>,

    /// Subject code → score entry
    #[serde(default)]
    pub marks: BTreeMap<String, SubjectScore>,

    /// Precomputed overall percentage (including additional subjects)
    #[serde(default, deserialize_with = "deserialize_loose_number")]
    pub marks_percentage_with_add: Option<f64>,

    /// Precomputed percentage excluding additional subjects
    #[serde(default, deserialize_with = "deserialize_loose_number")]
    pub marks_percentage_without_add: Option<f64>,
}

impl StudentRecord {
    /// Create a record with the required candidate name
    pub fn new(candidate_name: impl Into<String>) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            ..Self::default()
        }
    }
}

/// Immutable snapshot of all loaded records, keyed by roll number.
///
/// Iteration is in key order, which makes ranking ties deterministic when the
/// snapshot backs a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(BTreeMap<String, StudentRecord>);

impl RecordSet {
    /// Create an empty record set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `{ roll_no: record }` JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert or replace a record under a roll number
    pub fn insert(&mut self, roll_no: impl Into<String>, record: StudentRecord) {
        self.0.insert(roll_no.into(), record);
    }

    /// Look up a record by roll number
    pub fn get(&self, roll_no: &str) -> Option<&StudentRecord> {
        self.0.get(roll_no)
    }

    /// Iterate records in roll-number order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudentRecord)> + '_ {
        self.0.iter().map(|(roll_no, record)| (roll_no.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
