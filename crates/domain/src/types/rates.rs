//! Rate table: (job type, task) → base hours per unit of quantity
//!
//! The table is built once from [`EstimatorConfig`] and has no mutation API.
//! Share it behind an `Arc` instead of copying it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{EstimatorConfig, JobTypeSettings, TaskAliasEntry, TaskMatching};
use crate::errors::{Result, WorkloadError};
use crate::types::JobType;

/// Composite rate key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskKey {
    pub job_type: JobType,
    pub task: String,
}

impl TaskKey {
    /// Create a key
    pub fn new(job_type: JobType, task: impl Into<String>) -> Self {
        Self { job_type, task: task.into() }
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.job_type, self.task)
    }
}

/// Base hours for one task, plus its unit suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRate {
    pub hours: f64,
    pub unit: Option<String>,
}

/// Resolved settings for one job type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobTypeRules {
    pub default_unit: String,
    pub flat_hours: Option<f64>,
}

/// Alias rule after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAlias {
    pub alias: String,
    pub task: String,
    pub job_type: Option<JobType>,
}

impl TaskAlias {
    /// Whether this alias may be applied for the given job type
    pub fn applies_to(&self, job_type: JobType) -> bool {
        self.job_type.map_or(true, |scope| scope == job_type)
    }
}

/// Immutable rate configuration consulted by the estimator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    rates: BTreeMap<JobType, BTreeMap<String, TaskRate>>,
    rules: BTreeMap<JobType, JobTypeRules>,
    aliases: Vec<TaskAlias>,
    matching: TaskMatching,
}

impl RateTable {
    /// Build and validate a table from configuration
    ///
    /// # Errors
    /// Returns `WorkloadError::Config` if:
    /// - a task name is blank
    /// - hours are negative or not finite
    /// - a (job type, task) key appears twice (ignoring case when matching is
    ///   case-insensitive)
    /// - a job type is configured twice, or its flat hours are invalid
    /// - an alias is blank or maps a name onto itself
    pub fn from_config(config: &EstimatorConfig) -> Result<Self> {
        let mut rules = BTreeMap::new();
        for settings in &config.job_types {
            let JobTypeSettings { job_type, default_unit, flat_hours } = settings;
            if let Some(flat) = flat_hours {
                check_hours(*flat, &format!("flat hours for {job_type}"))?;
            }
            let previous = rules.insert(
                *job_type,
                JobTypeRules { default_unit: default_unit.clone(), flat_hours: *flat_hours },
            );
            if previous.is_some() {
                return Err(WorkloadError::Config(format!(
                    "Job type {job_type} is configured more than once"
                )));
            }
        }
        for job_type in JobType::ALL {
            rules.entry(job_type).or_insert_with(|| {
                let defaults = JobTypeSettings::new(job_type);
                JobTypeRules { default_unit: defaults.default_unit, flat_hours: None }
            });
        }

        let mut rates: BTreeMap<JobType, BTreeMap<String, TaskRate>> = BTreeMap::new();
        for entry in &config.rates {
            let key = TaskKey::new(entry.job_type, entry.task.clone());
            if entry.task.trim().is_empty() {
                return Err(WorkloadError::Config(format!(
                    "Rate for {} has a blank task name",
                    entry.job_type
                )));
            }
            check_hours(entry.hours, &format!("rate {key}"))?;

            let tasks = rates.entry(entry.job_type).or_default();
            let duplicate = tasks.keys().any(|existing| {
                same_name(existing, &entry.task, config.matching.case_insensitive)
            });
            if duplicate {
                return Err(WorkloadError::Config(format!("Duplicate rate for {key}")));
            }
            tasks.insert(
                entry.task.clone(),
                TaskRate { hours: entry.hours, unit: entry.unit.clone() },
            );
        }

        let aliases = config
            .aliases
            .iter()
            .map(|entry| validate_alias(entry, config.matching.case_insensitive))
            .collect::<Result<Vec<_>>>()?;
        check_alias_chains(&aliases, config.matching.case_insensitive)?;

        Ok(Self { rates, rules, aliases, matching: config.matching })
    }

    /// Exact, case-sensitive lookup
    pub fn rate(&self, job_type: JobType, task: &str) -> Option<&TaskRate> {
        self.rates.get(&job_type).and_then(|tasks| tasks.get(task))
    }

    /// ASCII case-insensitive lookup, returning the canonical task name
    pub fn rate_ignore_case(&self, job_type: JobType, task: &str) -> Option<(&str, &TaskRate)> {
        self.rates.get(&job_type).and_then(|tasks| {
            tasks
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(task))
                .map(|(name, rate)| (name.as_str(), rate))
        })
    }

    /// Task names configured for a job type, sorted
    pub fn tasks(&self, job_type: JobType) -> Vec<&str> {
        self.rates
            .get(&job_type)
            .map(|tasks| tasks.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// All keys in the table, sorted by job type then task
    pub fn keys(&self) -> impl Iterator<Item = TaskKey> + '_ {
        self.rates.iter().flat_map(|(job_type, tasks)| {
            tasks.keys().map(move |task| TaskKey::new(*job_type, task.clone()))
        })
    }

    /// Settings for a job type
    pub fn rules(&self, job_type: JobType) -> Option<&JobTypeRules> {
        self.rules.get(&job_type)
    }

    /// Alias rules in configuration order
    pub fn aliases(&self) -> &[TaskAlias] {
        &self.aliases
    }

    /// Task matching options
    pub const fn matching(&self) -> TaskMatching {
        self.matching
    }

    /// Number of (job type, task) rates
    pub fn len(&self) -> usize {
        self.rates.values().map(BTreeMap::len).sum()
    }

    /// Whether the table holds no rates
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RateTable {
    /// The built-in table. Falls back to an empty table if the built-in
    /// configuration were ever invalid.
    fn default() -> Self {
        Self::from_config(&EstimatorConfig::default()).unwrap_or_else(|_| Self {
            rates: BTreeMap::new(),
            rules: BTreeMap::new(),
            aliases: Vec::new(),
            matching: TaskMatching::default(),
        })
    }
}

fn check_hours(hours: f64, what: &str) -> Result<()> {
    if hours.is_finite() && hours >= 0.0 {
        Ok(())
    } else {
        Err(WorkloadError::Config(format!(
            "Invalid hours for {what}: {hours} (must be a finite, non-negative number)"
        )))
    }
}

fn same_name(a: &str, b: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

fn validate_alias(entry: &TaskAliasEntry, case_insensitive: bool) -> Result<TaskAlias> {
    if entry.alias.trim().is_empty() || entry.task.trim().is_empty() {
        return Err(WorkloadError::Config(format!(
            "Alias '{}' -> '{}' has a blank side",
            entry.alias, entry.task
        )));
    }
    if same_name(&entry.alias, &entry.task, case_insensitive) {
        return Err(WorkloadError::Config(format!("Alias '{}' maps onto itself", entry.alias)));
    }
    Ok(TaskAlias { alias: entry.alias.clone(), task: entry.task.clone(), job_type: entry.job_type })
}

/// Only one alias is applied per lookup, so a target that is itself an alias
/// (including `A -> B`, `B -> A`) is rejected
fn check_alias_chains(aliases: &[TaskAlias], case_insensitive: bool) -> Result<()> {
    for alias in aliases {
        let next = aliases.iter().find(|other| {
            scopes_overlap(alias.job_type, other.job_type)
                && same_name(&alias.task, &other.alias, case_insensitive)
        });
        if let Some(next) = next {
            return Err(WorkloadError::Config(format!(
                "Alias '{}' -> '{}' targets another alias '{}' -> '{}'",
                alias.alias, alias.task, next.alias, next.task
            )));
        }
    }
    Ok(())
}

fn scopes_overlap(a: Option<JobType>, b: Option<JobType>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}
