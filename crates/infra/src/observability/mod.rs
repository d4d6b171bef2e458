//! Observability infrastructure
//!
//! Structured logging via `tracing`; the subscriber is installed once per
//! process from [`LoggingConfig`](workload_domain::LoggingConfig).

pub mod logging;

pub use logging::{build_filter, init_logging};
