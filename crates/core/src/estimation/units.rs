//! Unit-of-measure suggestions for the job form

use std::sync::Arc;

use workload_domain::constants::DEFAULT_UNIT;
use workload_domain::{JobType, RateTable};

use super::normalizer::TaskNormalizer;

/// Suggests the unit a quantity is counted in
#[derive(Debug, Clone)]
pub struct UnitSuggester {
    table: Arc<RateTable>,
    normalizer: TaskNormalizer,
}

impl UnitSuggester {
    /// Create a suggester over a shared rate table
    pub fn new(table: Arc<RateTable>) -> Self {
        let normalizer = TaskNormalizer::from_table(&table);
        Self { table, normalizer }
    }

    /// The task's own unit, else the job type's default, else empty when the
    /// job type is unset
    pub fn suggest(&self, job_type: Option<JobType>, task_name: &str) -> String {
        let Some(job_type) = job_type else {
            return String::new();
        };

        let resolved = self.normalizer.resolve(&self.table, job_type, task_name);
        if let Some(unit) = resolved.rate.and_then(|rate| rate.unit.as_ref()) {
            return unit.clone();
        }

        self.table
            .rules(job_type)
            .map_or_else(|| DEFAULT_UNIT.to_string(), |rules| rules.default_unit.clone())
    }
}
