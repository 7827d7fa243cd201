pub mod token_set;

pub use token_set::token_set_ratio;

use crate::core::StudentRecord;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Minimum similarity score (0-100) a candidate must reach to be returned
pub const DEFAULT_SIMILARITY_THRESHOLD: u8 = 70;
/// Maximum number of candidates returned per query
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Tunables for name matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Candidates scoring below this are dropped
    pub threshold: u8,
    /// At most this many candidates survive ranking
    pub limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// A record that matched the query, with its similarity score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    pub roll_no: String,
    pub candidate_name: String,
    pub score: u8,
}

impl MatchCandidate {
    pub fn new(roll_no: impl Into<String>, candidate_name: impl Into<String>, score: u8) -> Self {
        Self {
            roll_no: roll_no.into(),
            candidate_name: candidate_name.into(),
            score,
        }
    }
}

/// Ranks student records against a free-form name query.
///
/// Scoring is [`token_set_ratio`], so the matcher tolerates word reordering,
/// repeated tokens, punctuation, and partial names. Results are sorted by
/// score descending; candidates with equal scores keep the order they were
/// seen in.
pub struct NameMatcher {
    config: MatchConfig,
}

impl NameMatcher {
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score every record against `query` and return the ranked survivors.
    ///
    /// Records below the threshold are dropped, the rest are sorted by score
    /// descending (stable), duplicate roll numbers keep only their first
    /// occurrence, and the list is cut to the configured limit. An empty
    /// result is a normal outcome, not an error.
    pub fn rank<'a, I>(&self, query: &str, records: I) -> Vec<MatchCandidate>
    where
        I: IntoIterator<Item = (&'a str, &'a StudentRecord)>,
    {
        let mut candidates: Vec<MatchCandidate> = records
            .into_iter()
            .filter_map(|(roll_no, record)| {
                let score = token_set_ratio(query, &record.candidate_name);
                if score >= self.config.threshold {
                    Some(MatchCandidate::new(
                        roll_no,
                        record.candidate_name.as_str(),
                        score,
                    ))
                } else {
                    None
                }
            })
            .collect();

        candidates.sort_by_key(|c| Reverse(c.score));

        let mut seen = HashSet::new();
        candidates.retain(|c| seen.insert(c.roll_no.clone()));
        candidates.truncate(self.config.limit);
        candidates
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[(&str, &str)]) -> Vec<(String, StudentRecord)> {
        names
            .iter()
            .map(|(roll, name)| (roll.to_string(), StudentRecord::new(*name)))
            .collect()
    }

    fn rank<'a>(
        matcher: &NameMatcher,
        query: &str,
        records: &'a [(String, StudentRecord)],
    ) -> Vec<MatchCandidate> {
        matcher.rank(query, records.iter().map(|(r, rec)| (r.as_str(), rec)))
    }

    #[test]
    fn test_threshold_filters_weak_matches() {
        let store = records(&[
            ("R001", "JOHN SMITH"),
            ("R002", "PRIYA PATEL"),
            ("R003", "JOHN SMYTHE"),
        ]);
        let matcher = NameMatcher::new();
        let out = rank(&matcher, "JOHN SMITH", &store);

        assert!(out.iter().any(|c| c.roll_no == "R001"));
        assert!(out.iter().all(|c| c.roll_no != "R002"));
        assert!(out.iter().all(|c| c.score >= DEFAULT_SIMILARITY_THRESHOLD));
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let store = records(&[
            ("R001", "JOHN SMYTHE"),
            ("R002", "JOHN SMITH"),
            ("R003", "JHON SMITH"),
        ]);
        let matcher = NameMatcher::new();
        let out = rank(&matcher, "JOHN SMITH", &store);

        assert_eq!(out[0].roll_no, "R002");
        assert_eq!(out[0].score, 100);
        for pair in out.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let store = records(&[
            ("R001", "ANJALI SHARMA"),
            ("R002", "ANJALI VERMA"),
            ("R003", "ANJALI GUPTA"),
        ]);
        let matcher = NameMatcher::new();
        let out = rank(&matcher, "ANJALI", &store);

        // All three contain the full query as a token, so all score 100
        let rolls: Vec<&str> = out.iter().map(|c| c.roll_no.as_str()).collect();
        assert_eq!(rolls, vec!["R001", "R002", "R003"]);
    }

    #[test]
    fn test_limit_truncates() {
        let store: Vec<(String, StudentRecord)> = (0..25)
            .map(|i| (format!("R{:03}", i), StudentRecord::new("JOHN SMITH")))
            .collect();
        let matcher = NameMatcher::new();
        let out = rank(&matcher, "JOHN SMITH", &store);
        assert_eq!(out.len(), DEFAULT_RESULT_LIMIT);

        let tight = NameMatcher::with_config(MatchConfig {
            threshold: 70,
            limit: 3,
        });
        assert_eq!(rank(&tight, "JOHN SMITH", &store).len(), 3);
    }

    #[test]
    fn test_duplicate_roll_numbers_deduplicated() {
        // A provider should never emit duplicates, but the matcher guards anyway
        let store = records(&[
            ("R001", "JOHN SMITH"),
            ("R001", "JOHN SMITH"),
            ("R002", "SMITH JOHN"),
        ]);
        let matcher = NameMatcher::new();
        let out = rank(&matcher, "JOHN SMITH", &store);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].roll_no, "R001");
        assert_eq!(out[1].roll_no, "R002");
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let store = records(&[("R001", "PRIYA PATEL")]);
        let matcher = NameMatcher::new();
        assert!(rank(&matcher, "ZZZZZZ", &store).is_empty());
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let store = records(&[
            ("R001", "JOHN SMITH"),
            ("R002", "JHON SMITH"),
            ("R003", "JOHN SMYTHE"),
            ("R004", "SMITH JOHN"),
        ]);
        let matcher = NameMatcher::new();
        let first = rank(&matcher, "JOHN SMITH", &store);
        let second = rank(&matcher, "JOHN SMITH", &store);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_threshold() {
        let store = records(&[("R001", "JOHN SMITH"), ("R002", "JOHNNY SMITHSON")]);
        let strict = NameMatcher::with_config(MatchConfig {
            threshold: 100,
            limit: 10,
        });
        let out = rank(&strict, "JOHN SMITH", &store);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].roll_no, "R001");
    }
}
