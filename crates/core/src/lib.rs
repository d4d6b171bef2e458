//! # Workload Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The duration estimator and its task-name normalizer
//! - Job form drafts that keep the estimate and unit in sync
//! - Dashboard aggregations over the job list
//!
//! ## Architecture Principles
//! - Only depends on `workload-domain`
//! - No file system, database, or HTTP code
//! - Rate tables arrive through the [`RateTableSource`] port

pub mod drafts;
pub mod estimation;
pub mod summary;

pub use drafts::{FieldChange, JobDraft};
pub use estimation::{
    normalize_quantity, DurationEstimator, EstimateBreakdown, EstimationService, RateTableSource,
    ResolvedTask, TaskNormalizer, UnitSuggester,
};
pub use summary::WorkloadSummary;
