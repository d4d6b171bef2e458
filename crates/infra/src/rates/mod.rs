//! Rate table sources
//!
//! Implementations of the core `RateTableSource` port.

pub mod source;

pub use source::{ConfigRateSource, FileRateSource};
