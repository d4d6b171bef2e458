//! Domain types and models

pub mod job;
pub mod rates;
pub mod summary;

pub use job::{Job, JobStatus, JobType};
pub use rates::{JobTypeRules, RateTable, TaskAlias, TaskKey, TaskRate};
pub use summary::{LabeledHours, SummaryFilter, UserSummary, UserTypeSummary};
