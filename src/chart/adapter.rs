//! src/chart/adapter.rs
//!
//! Long-lived chart state: created once, then only its data and options are
//! replaced. The chart panel reads it every frame.

use super::config::ChartConfig;
use crate::metrics::{MetricGroup, MetricPoint};

/// Chart-ready series per group plus the active options.
#[derive(Debug)]
pub struct ChartAdapter {
    /// `(x, y)` per group, sorted by x, kept owned so widgets can borrow slices.
    series: [(MetricGroup, Vec<(f64, f64)>); 3],
    options: ChartConfig,
    revision: u64,
}

impl ChartAdapter {
    pub fn new(options: ChartConfig) -> Self {
        Self {
            series: MetricGroup::ALL.map(|g| (g, Vec::new())),
            options,
            revision: 0,
        }
    }

    /// Replace the chart data with the full accumulated sequence.
    pub fn set_data(&mut self, points: &[MetricPoint]) {
        for (group, data) in self.series.iter_mut() {
            data.clear();
            data.extend(points.iter().filter(|p| p.group == *group).map(|p| (p.x(), p.value)));
            data.sort_by(|a, b| a.0.total_cmp(&b.0));
        }
        self.revision += 1;
    }

    /// Replace the chart options.
    pub fn set_options(&mut self, options: ChartConfig) {
        self.options = options;
        self.revision += 1;
    }

    pub fn options(&self) -> &ChartConfig {
        &self.options
    }

    pub fn series(&self, group: MetricGroup) -> &[(f64, f64)] {
        self.series
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, data)| data.as_slice())
            .unwrap_or(&[])
    }

    /// Bumped on every `set_data` / `set_options`.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartTheme, ZoomWindow};
    use crate::metrics::PointId;
    use chrono::{Duration, TimeZone, Utc};

    fn point(id: u64, group: MetricGroup, secs: i64, value: f64) -> MetricPoint {
        MetricPoint {
            id: PointId(id),
            group,
            date: Utc.timestamp_opt(secs, 0).unwrap(),
            value,
        }
    }

    fn adapter() -> ChartAdapter {
        let window = ZoomWindow::new(Duration::seconds(25));
        ChartAdapter::new(ChartConfig::new(ChartTheme::G10, &window))
    }

    #[test]
    fn set_data_splits_and_sorts_series() {
        let mut chart = adapter();
        chart.set_data(&[
            point(0, MetricGroup::Load, 20, 2.0),
            point(1, MetricGroup::Error, 20, 0.5),
            point(2, MetricGroup::Load, 10, 1.0),
        ]);
        assert_eq!(chart.series(MetricGroup::Load), &[(10_000.0, 1.0), (20_000.0, 2.0)]);
        assert_eq!(chart.series(MetricGroup::Error), &[(20_000.0, 0.5)]);
        assert!(chart.series(MetricGroup::Success).is_empty());
    }

    #[test]
    fn updates_bump_revision_without_rebuilding() {
        let mut chart = adapter();
        assert_eq!(chart.revision(), 0);
        chart.set_data(&[point(0, MetricGroup::Load, 1, 1.0)]);
        let window = ZoomWindow::new(Duration::seconds(25));
        chart.set_options(ChartConfig::new(ChartTheme::G100, &window));
        assert_eq!(chart.revision(), 2);
        assert_eq!(chart.options().theme, ChartTheme::G100);
        assert_eq!(chart.series(MetricGroup::Load).len(), 1);
    }
}
