//! src/metrics/point.rs
//!
//! A single labeled measurement and the three groups the dashboard tracks.

use std::fmt;

use chrono::{DateTime, Utc};
use ratatui::style::Color;

/// Stable identifier assigned by the log when a point is appended.
///
/// Identity never depends on draw order, so a selection survives redraws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricGroup {
    Load,
    Success,
    Error,
}

impl MetricGroup {
    /// Display order used for legends and stats rows.
    pub const ALL: [MetricGroup; 3] = [MetricGroup::Load, MetricGroup::Success, MetricGroup::Error];

    pub fn label(self) -> &'static str {
        match self {
            MetricGroup::Load => "Load",
            MetricGroup::Success => "Success",
            MetricGroup::Error => "Error",
        }
    }

    /// Series color from the chart's color scale.
    pub fn color(self) -> Color {
        match self {
            MetricGroup::Load => Color::Blue,
            MetricGroup::Success => Color::Green,
            MetricGroup::Error => Color::Red,
        }
    }
}

impl fmt::Display for MetricGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One immutable measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricPoint {
    pub id: PointId,
    pub group: MetricGroup,
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl MetricPoint {
    /// x coordinate used by the chart (epoch milliseconds).
    pub fn x(&self) -> f64 {
        self.date.timestamp_millis() as f64
    }

    /// Human readable summary shown when a point is inspected.
    pub fn describe(&self) -> String {
        format!(
            "Group: {}, Date: {}, Value: {}",
            self.group,
            self.date.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
            self.value
        )
    }
}
