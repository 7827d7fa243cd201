use crate::core::StudentReport;
use crate::error::{Result, SearchError};
use crate::providers::{DataStatus, RecordProvider};
use crate::ranking::{MatchConfig, NameMatcher};
use crate::scoring::{PercentageSummary, ScoringConfig};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Queries shorter than this (after trimming) are rejected
pub const MIN_QUERY_LEN: usize = 2;
/// Queries longer than this (after trimming) are rejected
pub const MAX_QUERY_LEN: usize = 100;

/// Outcome of one search: ranked reports plus timing
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// The trimmed query that was actually matched
    pub query: String,
    /// Reports in descending match-score order; empty means nothing matched
    pub results: Vec<StudentReport>,
    pub latency_ms: f64,
}

/// Main result search orchestrator.
///
/// Validates the query, ranks every record from the provider against it, and
/// assembles a display-ready report per surviving candidate. All work is
/// synchronous; share the engine behind an `Arc` if multiple threads search
/// concurrently.
pub struct ResultEngine {
    provider: Arc<dyn RecordProvider>,
    matcher: NameMatcher,
    scoring: ScoringConfig,
}

impl ResultEngine {
    /// Create an engine with default matching and scoring tunables
    pub fn new(provider: Arc<dyn RecordProvider>) -> Self {
        Self {
            provider,
            matcher: NameMatcher::new(),
            scoring: ScoringConfig::default(),
        }
    }

    /// Override the match threshold and result limit
    pub fn with_match_config(mut self, config: MatchConfig) -> Self {
        self.matcher = NameMatcher::with_config(config);
        self
    }

    /// Override the non-core subject classification and max marks
    pub fn with_scoring_config(mut self, config: ScoringConfig) -> Self {
        self.scoring = config;
        self
    }

    /// Readiness of the underlying record provider
    pub fn data_status(&self) -> DataStatus {
        self.provider.status()
    }

    /// Search records by candidate name.
    ///
    /// The query is trimmed, then validated for length. No matches is a
    /// normal empty outcome; an unready provider is an error.
    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        let start = Instant::now();

        let trimmed = query.trim();
        let len = trimmed.chars().count();
        if len < MIN_QUERY_LEN {
            return Err(SearchError::QueryTooShort { min: MIN_QUERY_LEN });
        }
        if len > MAX_QUERY_LEN {
            return Err(SearchError::QueryTooLong { max: MAX_QUERY_LEN });
        }

        let records = self
            .provider
            .snapshot()
            .ok_or_else(|| SearchError::Unavailable(self.provider.status().source))?;

        let candidates = self.matcher.rank(trimmed, records.iter());
        tracing::debug!(
            "query {:?} kept {} of {} record(s)",
            trimmed,
            candidates.len(),
            records.len()
        );

        let mut results = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let Some(record) = records.get(&candidate.roll_no) else {
                tracing::debug!("ranked roll number {} not in snapshot", candidate.roll_no);
                continue;
            };
            let percentages = PercentageSummary::compute(&record.marks, &self.scoring)
                .with_precomputed(
                    record.marks_percentage_with_add,
                    record.marks_percentage_without_add,
                );
            results.push(StudentReport::from_record(
                candidate.roll_no,
                record,
                percentages,
                candidate.score,
            ));
        }

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        Ok(SearchOutcome {
            query: trimmed.to_string(),
            results,
            latency_ms,
        })
    }
}
