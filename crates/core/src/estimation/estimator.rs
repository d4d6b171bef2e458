//! Duration estimator
//!
//! `hours = round(base_hours(job_type, task) * max(1, quantity), 1)`, where a
//! missing rate contributes zero. The estimator only reads the shared table;
//! identical inputs always give identical outputs.

use std::sync::Arc;

use serde::Serialize;
use workload_domain::constants::MIN_QUANTITY;
use workload_domain::{round_hours, JobType, RateTable};

use super::normalizer::TaskNormalizer;

/// Explains how an estimate was produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateBreakdown {
    /// `None` when the job type was unset or unrecognized
    pub job_type: Option<JobType>,
    /// Task name after normalization
    pub task: String,
    /// Base hours used; `0.0` when nothing matched
    pub base_hours: f64,
    /// Quantity after normalization (always >= 1)
    pub quantity: f64,
    /// A rate or flat job-type rule was found
    pub matched: bool,
    /// The job type's flat hours applied and quantity was ignored
    pub flat: bool,
    /// Final estimate, one decimal place
    pub hours: f64,
}

/// Maps (job type, task name, quantity) to advisory hours
#[derive(Debug, Clone)]
pub struct DurationEstimator {
    table: Arc<RateTable>,
    normalizer: TaskNormalizer,
}

impl DurationEstimator {
    /// Create an estimator over a shared rate table
    pub fn new(table: Arc<RateTable>) -> Self {
        let normalizer = TaskNormalizer::from_table(&table);
        Self { table, normalizer }
    }

    /// Estimated hours, rounded to one decimal place
    ///
    /// Never fails: an unset job type or unknown task yields `0.0`.
    pub fn estimate(
        &self,
        job_type: Option<JobType>,
        task_name: &str,
        quantity: Option<f64>,
    ) -> f64 {
        self.breakdown(job_type, task_name, quantity).hours
    }

    /// Like [`estimate`](Self::estimate), parsing the job type from its form value
    pub fn estimate_str(&self, job_type: &str, task_name: &str, quantity: Option<f64>) -> f64 {
        self.estimate(JobType::parse_optional(job_type), task_name, quantity)
    }

    /// Full explanation of an estimate
    pub fn breakdown(
        &self,
        job_type: Option<JobType>,
        task_name: &str,
        quantity: Option<f64>,
    ) -> EstimateBreakdown {
        let quantity = normalize_quantity(quantity);

        let Some(job_type) = job_type else {
            return EstimateBreakdown {
                job_type: None,
                task: task_name.to_string(),
                base_hours: 0.0,
                quantity,
                matched: false,
                flat: false,
                hours: 0.0,
            };
        };

        if let Some(flat) = self.table.rules(job_type).and_then(|rules| rules.flat_hours) {
            return EstimateBreakdown {
                job_type: Some(job_type),
                task: self.normalizer.canonical_name(job_type, task_name),
                base_hours: flat,
                quantity,
                matched: true,
                flat: true,
                hours: round_hours(flat),
            };
        }

        let resolved = self.normalizer.resolve(&self.table, job_type, task_name);
        let base_hours = resolved.rate.map_or(0.0, |rate| rate.hours);

        EstimateBreakdown {
            job_type: Some(job_type),
            task: resolved.task,
            base_hours,
            quantity,
            matched: resolved.rate.is_some(),
            flat: false,
            // Saturate at f64::MAX rather than overflowing to infinity
            hours: round_hours((base_hours * quantity).min(f64::MAX)),
        }
    }

    /// The rate table this estimator reads
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Shared handle to the rate table
    pub fn shared_table(&self) -> Arc<RateTable> {
        Arc::clone(&self.table)
    }

    /// The task-name normalizer in use
    pub const fn normalizer(&self) -> &TaskNormalizer {
        &self.normalizer
    }
}

impl Default for DurationEstimator {
    /// Estimator over the built-in rate table
    fn default() -> Self {
        Self::new(Arc::new(RateTable::default()))
    }
}

/// `max(1, quantity)` for finite positive input, otherwise `1`
pub fn normalize_quantity(quantity: Option<f64>) -> f64 {
    match quantity {
        Some(q) if q.is_finite() && q > 0.0 => q.max(MIN_QUANTITY),
        _ => MIN_QUANTITY,
    }
}
