//! Dashboard summary types
//!
//! Produced by the aggregation service in the core crate and rendered by the
//! dashboard charts and tables.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::types::JobType;

/// A chart bar or pie slice: label plus rounded hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct LabeledHours {
    pub label: String,
    pub hours: f64,
}

/// Totals for one user (user names are compared case-insensitively)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct UserSummary {
    pub user_name: String,
    pub total_estimated_duration: f64,
    pub total_quantity: u64,
    pub total_jobs: u64,
}

/// Totals for one (user, job type) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct UserTypeSummary {
    pub user_name: String,
    pub job_type: JobType,
    pub total_jobs: u64,
    pub total_quantity: u64,
    pub total_estimated_duration: f64,
}

/// Optional filters for [`UserTypeSummary`] queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SummaryFilter {
    /// Exact job type match
    #[serde(default)]
    pub job_type: Option<JobType>,
    /// Case-insensitive user name match
    #[serde(default)]
    pub user_name: Option<String>,
}

impl SummaryFilter {
    /// Filter on a job type
    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    /// Filter on a user name
    pub fn with_user(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}
