//! # Workload Domain
//!
//! Business domain types for the workload tracker.
//!
//! This crate contains:
//! - Job records and the job type / status enumerations
//! - The immutable rate table consulted by the duration estimator
//! - Configuration structures with built-in defaults
//! - Error and validation types
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; pure data structures and rules

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::round_hours;
pub use validation::{FieldError, ValidationError, ValidationResult, Validator};
