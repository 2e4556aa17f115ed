//! src/net.rs
//!
//! HTTP side of the dashboard: the metrics client and the poller driving it.

pub mod client;
pub mod poller;

pub use client::MetricsClient;
pub use poller::Poller;
