//! Port interfaces for rate configuration
//!
//! The core never reads files or environment variables. Infrastructure
//! provides the rate table through this trait.

use workload_domain::{RateTable, Result};

/// Trait for loading the rate table at start-up
pub trait RateTableSource: Send + Sync {
    /// Load and validate the rate table
    fn load_rate_table(&self) -> Result<RateTable>;

    /// Human-readable origin for logs (file path, "built-in", ...)
    fn describe(&self) -> String;
}
