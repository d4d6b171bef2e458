//! # Workload Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (files, `.env`, environment overrides)
//! - Rate table sources backed by configuration
//! - Logging setup
//!
//! ## Architecture
//! - Implements traits defined in `workload-core`
//! - Depends on `workload-domain` and `workload-core`
//! - Contains all "impure" code (file system, environment, global subscriber)

pub mod bootstrap;
pub mod config;
pub mod observability;
pub mod rates;

// Re-export commonly used items
pub use bootstrap::{bootstrap, Runtime};
pub use observability::init_logging;
pub use rates::{ConfigRateSource, FileRateSource};
