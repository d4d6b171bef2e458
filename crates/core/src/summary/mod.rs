//! Dashboard aggregations over the job list

pub mod service;

pub use service::WorkloadSummary;
