//! Duration estimation domain
//!
//! Advisory, client-side hour estimates shown while the backend computes the
//! authoritative value. Estimation never fails: unknown job types or tasks
//! degrade to zero and invalid quantities are treated as one.

pub mod estimator;
pub mod normalizer;
pub mod ports;
pub mod service;
pub mod units;

pub use estimator::{normalize_quantity, DurationEstimator, EstimateBreakdown};
pub use normalizer::{ResolvedTask, TaskNormalizer};
pub use ports::RateTableSource;
pub use service::EstimationService;
pub use units::UnitSuggester;
