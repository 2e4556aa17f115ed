//! src/chart.rs
//!
//! Chart-facing state: options record, long-lived adapter, sliding zoom
//! window and per-series line styles.

pub mod adapter;
pub mod config;
pub mod dash;
pub mod window;

/// Re-exports
pub use adapter::ChartAdapter;
pub use config::{ChartConfig, ChartTheme};
pub use window::ZoomWindow;
