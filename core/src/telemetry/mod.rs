//! telemetry/mod.rs
//! Per-stream counters.

pub mod counters;

pub use counters::*;
