pub mod memory;

pub use memory::MemoryProvider;

use crate::core::RecordSet;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Snapshot of a provider's readiness, suitable for health endpoints and logs
#[derive(Debug, Clone, Serialize)]
pub struct DataStatus {
    /// Whether usable records are loaded
    pub loaded: bool,
    /// Human-readable description of where the records came from
    pub source: String,
    /// Number of records currently held
    pub record_count: usize,
    /// When the records were loaded
    pub loaded_at: DateTime<Utc>,
}

/// Source of student result records.
///
/// The engine only reads; providers own their data and decide when it counts
/// as ready. `snapshot` must return `None` until usable records exist — an
/// empty set is not usable, so searches against it fail with a clear error
/// instead of silently returning nothing.
pub trait RecordProvider: Send + Sync {
    /// The loaded records, or `None` when the provider is not ready
    fn snapshot(&self) -> Option<&RecordSet>;

    /// Readiness and provenance, even when not ready
    fn status(&self) -> DataStatus;
}
