//! Small pure helpers shared across the domain

pub mod hours;

pub use hours::round_hours;
