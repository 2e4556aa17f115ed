//! src/metrics.rs
//!
//! Metric data model: groups, points, wire samples and the append-only log.

pub mod log;
pub mod point;
pub mod sample;

/// Re-exports
pub use log::MetricLog;
pub use point::{MetricGroup, MetricPoint, PointId};
pub use sample::MetricsSample;
