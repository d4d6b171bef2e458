//! Job records and their enumerations
//!
//! `Job` is the record the backend stores and the dashboard lists. Field
//! names follow the backend's JSON payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_wire_string_conversions;

/// Top-level category of work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum JobType {
    /// Development work (BOM, EMI, project management, ...)
    #[serde(rename = "Dev")]
    Dev,
    /// Non-development work (education, accounting, ...)
    #[serde(rename = "Non Dev")]
    NonDev,
    /// Transformation-initiative work; task names are free text
    #[serde(rename = "DX")]
    Dx,
}

impl_wire_string_conversions!(JobType {
    Dev => "Dev",
    NonDev => "Non Dev",
    Dx => "DX",
});

impl JobType {
    /// Every job type, in form order
    pub const ALL: [Self; 3] = [Self::Dev, Self::NonDev, Self::Dx];

    /// Parse a possibly empty form value; blank or unknown strings are unset
    pub fn parse_optional(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// Whether tasks of this type come from a fixed list
    ///
    /// DX tasks are typed freely in the form.
    pub const fn has_fixed_tasks(&self) -> bool {
        !matches!(self, Self::Dx)
    }
}

/// Job completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum JobStatus {
    #[default]
    Open,
    Done,
}

impl_wire_string_conversions!(JobStatus {
    Open => "Open",
    Done => "Done",
});

/// A logged unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Job {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ts-gen", ts(optional))]
    pub id: Option<i64>,
    pub user_name: String,
    pub job_type: JobType,
    pub task_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ts-gen", ts(optional))]
    pub description: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Hours; the backend value is authoritative once the job is saved
    #[serde(default)]
    pub estimated_duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ts-gen", ts(optional))]
    pub unit: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: JobStatus,
}

const fn default_quantity() -> u32 {
    1
}
