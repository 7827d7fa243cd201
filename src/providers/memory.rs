use super::{DataStatus, RecordProvider};
use crate::core::RecordSet;
use chrono::{DateTime, Utc};

/// Provider backed by a record set held entirely in memory.
///
/// Records are handed over once at construction; there is no reload. This is
/// the bundled embedded-snapshot setup, and it doubles as the test harness
/// provider.
pub struct MemoryProvider {
    records: RecordSet,
    source: String,
    loaded_at: DateTime<Utc>,
}

impl MemoryProvider {
    pub fn new(records: RecordSet) -> Self {
        Self::with_source(records, "memory")
    }

    /// Label the status with where the records actually came from
    pub fn with_source(records: RecordSet, source: impl Into<String>) -> Self {
        Self {
            records,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }
}

impl RecordProvider for MemoryProvider {
    fn snapshot(&self) -> Option<&RecordSet> {
        if self.records.is_empty() {
            None
        } else {
            Some(&self.records)
        }
    }

    fn status(&self) -> DataStatus {
        DataStatus {
            loaded: !self.records.is_empty(),
            source: self.source.clone(),
            record_count: self.records.len(),
            loaded_at: self.loaded_at,
        }
    }
}
