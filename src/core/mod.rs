pub mod record;
pub mod report;

pub use record::{RecordSet, ResultStatus, StudentRecord, SubjectScore, NOT_APPLICABLE_MARKS};
pub use report::{StudentReport, SubjectRow};
