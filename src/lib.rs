//! # Result Search Engine
//!
//! Fuzzy candidate-name search over board exam results with:
//! - Token-set similarity matching (word order, duplicates, punctuation agnostic)
//! - Threshold filtering, stable score ranking, and per-query result limits
//! - Subject-wise percentage aggregation with physical-education exclusion
//! - Pluggable record providers with explicit ready/not-ready state
//!
//! ## Example Usage
//!
//! ```rust
//! use result_search_engine::{MemoryProvider, RecordSet, ResultEngine, StudentRecord};
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut records = RecordSet::new();
//!     records.insert("R001", StudentRecord::new("JOHN SMITH"));
//!
//!     let engine = ResultEngine::new(Arc::new(MemoryProvider::new(records)));
//!     let outcome = engine.search("smith john")?;
//!
//!     for report in &outcome.results {
//!         println!("{} - {}%", report.candidate_name, report.match_score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod providers;
pub mod ranking;
pub mod scoring;

// Re-export primary types
pub use crate::core::{
    RecordSet, ResultStatus, StudentRecord, StudentReport, SubjectRow, SubjectScore,
};
pub use engine::{ResultEngine, SearchOutcome, MAX_QUERY_LEN, MIN_QUERY_LEN};
pub use error::{Result, SearchError};
pub use providers::{DataStatus, MemoryProvider, RecordProvider};
pub use ranking::{token_set_ratio, MatchCandidate, MatchConfig, NameMatcher};
pub use scoring::{PercentageSummary, ScoringConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
