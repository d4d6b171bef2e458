//! Task-name normalization
//!
//! Resolution order: optional trimming, then the first applicable alias, then
//! an exact lookup, then (only when configured) a case-insensitive lookup.

use workload_domain::{JobType, RateTable, TaskAlias, TaskMatching, TaskRate};

/// Outcome of resolving a free-form task name against the rate table
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTask<'t> {
    /// Task name after trimming, aliasing and case resolution
    pub task: String,
    /// Matching rate, if the table has one
    pub rate: Option<&'t TaskRate>,
}

/// Applies the table's matching options and aliases to task names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskNormalizer {
    matching: TaskMatching,
    aliases: Vec<TaskAlias>,
}

impl TaskNormalizer {
    /// Build a normalizer from the table's configuration
    pub fn from_table(table: &RateTable) -> Self {
        Self { matching: table.matching(), aliases: table.aliases().to_vec() }
    }

    /// Matching options in effect
    pub const fn matching(&self) -> TaskMatching {
        self.matching
    }

    /// Trim (if enabled) and apply the first alias that matches
    pub fn canonical_name(&self, job_type: JobType, task: &str) -> String {
        let candidate = if self.matching.trim { task.trim() } else { task };

        self.aliases
            .iter()
            .find(|alias| alias.applies_to(job_type) && self.same_name(&alias.alias, candidate))
            .map_or_else(|| candidate.to_string(), |alias| alias.task.clone())
    }

    /// Resolve a task name to its rate
    pub fn resolve<'t>(
        &self,
        table: &'t RateTable,
        job_type: JobType,
        task: &str,
    ) -> ResolvedTask<'t> {
        let name = self.canonical_name(job_type, task);

        if let Some(rate) = table.rate(job_type, &name) {
            return ResolvedTask { task: name, rate: Some(rate) };
        }

        if self.matching.case_insensitive {
            if let Some((canonical, rate)) = table.rate_ignore_case(job_type, &name) {
                return ResolvedTask { task: canonical.to_string(), rate: Some(rate) };
            }
        }

        ResolvedTask { task: name, rate: None }
    }

    fn same_name(&self, a: &str, b: &str) -> bool {
        if self.matching.case_insensitive {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    }
}
