//! Estimation service - wires the estimator and unit suggester to one table

use std::sync::Arc;

use tracing::info;
use workload_domain::{JobType, RateTable, Result};

use super::estimator::{DurationEstimator, EstimateBreakdown};
use super::ports::RateTableSource;
use super::units::UnitSuggester;

/// Estimator and unit suggester sharing one immutable rate table
///
/// Cloning is cheap; clones share the table.
#[derive(Debug, Clone)]
pub struct EstimationService {
    estimator: DurationEstimator,
    units: UnitSuggester,
}

impl EstimationService {
    /// Load the rate table from a source, once
    ///
    /// # Errors
    /// Propagates the source's error, typically `WorkloadError::Config`.
    pub fn from_source(source: &dyn RateTableSource) -> Result<Self> {
        let table = source.load_rate_table()?;
        info!(
            source = %source.describe(),
            rates = table.len(),
            aliases = table.aliases().len(),
            "rate table loaded"
        );
        Ok(Self::from_table(table))
    }

    /// Build from an already validated table
    pub fn from_table(table: RateTable) -> Self {
        let table = Arc::new(table);
        Self {
            estimator: DurationEstimator::new(Arc::clone(&table)),
            units: UnitSuggester::new(table),
        }
    }

    /// The duration estimator
    pub const fn estimator(&self) -> &DurationEstimator {
        &self.estimator
    }

    /// The unit suggester
    pub const fn units(&self) -> &UnitSuggester {
        &self.units
    }

    /// Shortcut for [`DurationEstimator::estimate`]
    pub fn estimate(
        &self,
        job_type: Option<JobType>,
        task_name: &str,
        quantity: Option<f64>,
    ) -> f64 {
        self.estimator.estimate(job_type, task_name, quantity)
    }

    /// Shortcut for [`DurationEstimator::breakdown`]
    pub fn breakdown(
        &self,
        job_type: Option<JobType>,
        task_name: &str,
        quantity: Option<f64>,
    ) -> EstimateBreakdown {
        self.estimator.breakdown(job_type, task_name, quantity)
    }

    /// Shortcut for [`UnitSuggester::suggest`]
    pub fn suggest_unit(&self, job_type: Option<JobType>, task_name: &str) -> String {
        self.units.suggest(job_type, task_name)
    }

    /// Task names offered in the form's select list for a job type
    ///
    /// Empty for job types whose tasks are typed freely.
    pub fn task_options(&self, job_type: JobType) -> Vec<String> {
        if !job_type.has_fixed_tasks() {
            return Vec::new();
        }
        self.estimator.table().tasks(job_type).into_iter().map(str::to_string).collect()
    }
}

impl Default for EstimationService {
    fn default() -> Self {
        Self::from_table(RateTable::default())
    }
}
