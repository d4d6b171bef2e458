//! Configuration management
//!
//! Every section carries `#[serde(default)]`, so a configuration file only
//! needs to name what it overrides. The built-in rate table mirrors the
//! backend's duration rules.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_UNIT};
use crate::types::JobType;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub estimator: EstimatorConfig,
    pub logging: LoggingConfig,
}

/// Duration estimator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub matching: TaskMatching,
    pub job_types: Vec<JobTypeSettings>,
    pub rates: Vec<TaskRateEntry>,
    pub aliases: Vec<TaskAliasEntry>,
}

/// How free-form task names are matched against rate keys
///
/// The default is an exact, case-sensitive comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskMatching {
    /// Strip surrounding whitespace before matching
    pub trim: bool,
    /// Fall back to an ASCII case-insensitive comparison
    pub case_insensitive: bool,
}

/// Per job type settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTypeSettings {
    pub job_type: JobType,
    #[serde(default = "default_unit")]
    pub default_unit: String,
    /// Fixed hours for every task of this type; quantity does not scale it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_hours: Option<f64>,
}

impl JobTypeSettings {
    /// Settings with the default unit and no flat rate
    pub fn new(job_type: JobType) -> Self {
        Self { job_type, default_unit: default_unit(), flat_hours: None }
    }
}

/// One (job type, task) → base hours rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRateEntry {
    pub job_type: JobType,
    pub task: String,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl TaskRateEntry {
    /// Create a rate entry with a unit suggestion
    pub fn new(job_type: JobType, task: impl Into<String>, hours: f64, unit: &str) -> Self {
        Self { job_type, task: task.into(), hours, unit: Some(unit.to_string()) }
    }
}

/// Maps an alternative spelling onto a canonical task name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAliasEntry {
    pub alias: String,
    pub task: String,
    /// Restrict the alias to one job type; `None` applies it everywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        use JobType::{Dev, NonDev};

        let rates = vec![
            TaskRateEntry::new(Dev, "BOM", 2.0, "item"),
            TaskRateEntry::new(Dev, "Sending Sample", 3.0, "tv"),
            TaskRateEntry::new(Dev, "Assembly", 3.0, "time"),
            TaskRateEntry::new(Dev, "Power Consumption", 4.0, "time"),
            TaskRateEntry::new(Dev, "EMI", 4.0, "tv"),
            TaskRateEntry::new(Dev, "Audio", 4.0, "set"),
            TaskRateEntry::new(Dev, "D_VA Project Management", 5.0, "project"),
            // ~1 month (8h * 20d)
            TaskRateEntry::new(Dev, "High Grade Project Management", 160.0, "project"),
            TaskRateEntry::new(Dev, "CST", 40.0, "week"),
            TaskRateEntry::new(Dev, "ESD/EOS", 8.0, "day"),
            TaskRateEntry::new(Dev, "Backend", 40.0, "week"),
            TaskRateEntry::new(Dev, "HDMI", 40.0, "week"),
            TaskRateEntry::new(Dev, "USB", 40.0, "week"),
            TaskRateEntry::new(Dev, "Sub Assy", 40.0, "week"),
            TaskRateEntry::new(NonDev, "Innovation", 2.0, "time"),
            TaskRateEntry::new(NonDev, "SHEE 5S", 1.0, "time"),
            TaskRateEntry::new(NonDev, "Education", 3.0, "time"),
            TaskRateEntry::new(NonDev, "Budget/Accounting", 2.0, "time"),
            TaskRateEntry::new(NonDev, "VI", 3.0, "time"),
            TaskRateEntry::new(NonDev, "CA", 2.0, "time"),
            TaskRateEntry::new(NonDev, "IT", 1.0, "time"),
            TaskRateEntry::new(NonDev, "Reinvent", 2.0, "time"),
            TaskRateEntry::new(NonDev, "GA", 0.5, "time"),
            TaskRateEntry::new(NonDev, "Asset", 3.0, "time"),
        ];

        Self {
            matching: TaskMatching::default(),
            job_types: JobType::ALL.iter().copied().map(JobTypeSettings::new).collect(),
            rates,
            aliases: Vec::new(),
        }
    }
}
