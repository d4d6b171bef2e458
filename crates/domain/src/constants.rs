//! Application constants
//!
//! Centralized location for domain-level constants shared by the estimator,
//! the job form and the dashboard aggregations.

// Units
pub const DEFAULT_UNIT: &str = "time";
/// Unit value the form treats as "not chosen yet" and may overwrite
pub const PLACEHOLDER_UNIT: &str = "time";

// Estimation
pub const MIN_QUANTITY: f64 = 1.0;
pub const HOURS_DECIMAL_PLACES: i32 = 1;

// Dashboard grouping
pub const UNKNOWN_USER_LABEL: &str = "unknown";

// Wire formats
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Configuration
pub const ENV_CONFIG_PATH: &str = "WORKLOAD_CONFIG";
pub const ENV_LOG_LEVEL: &str = "WORKLOAD_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "WORKLOAD_LOG_JSON";
pub const DEFAULT_LOG_LEVEL: &str = "info";
