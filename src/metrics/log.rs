//! src/metrics/log.rs
//!
//! Append-only accumulation of metric points.
//!
//! Points are kept in insertion order. Timestamps are not required to be
//! ordered since the server makes no promise about it. By default nothing is
//! ever evicted; an optional cap drops the oldest points first.

use chrono::{DateTime, Utc};

use super::point::{MetricGroup, MetricPoint, PointId};
use super::sample::MetricsSample;

#[derive(Debug, Default)]
pub struct MetricLog {
    points: Vec<MetricPoint>,
    next_id: u64,
    max_points: Option<usize>,
}

impl MetricLog {
    /// Create an empty log. `max_points = None` keeps everything.
    pub fn new(max_points: Option<usize>) -> Self {
        Self {
            points: Vec::new(),
            next_id: 0,
            max_points,
        }
    }

    /// Append the three readings of a sample (Load, Error, Success).
    ///
    /// Returns the ids assigned to the new points, in append order.
    pub fn append_sample(&mut self, sample: &MetricsSample) -> [PointId; 3] {
        let ids = sample.readings().map(|(group, reading)| {
            let id = PointId(self.next_id);
            self.next_id += 1;
            self.points.push(MetricPoint {
                id,
                group,
                date: reading.date,
                value: reading.value,
            });
            id
        });

        if let Some(cap) = self.max_points {
            let excess = self.points.len().saturating_sub(cap);
            if excess > 0 {
                self.points.drain(..excess);
            }
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in insertion order.
    pub fn points(&self) -> &[MetricPoint] {
        &self.points
    }

    /// Look a point up by id. Ids increase with insertion order.
    pub fn get(&self, id: PointId) -> Option<&MetricPoint> {
        self.points
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.points[i])
    }

    /// Most recently appended point of a group.
    pub fn last(&self, group: MetricGroup) -> Option<&MetricPoint> {
        self.points.iter().rev().find(|p| p.group == group)
    }

    /// Points whose date lies in `[start, end]`, ordered by (date, id).
    pub fn in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&MetricPoint> {
        let mut visible: Vec<&MetricPoint> = self
            .points
            .iter()
            .filter(|p| p.date >= start && p.date <= end)
            .collect();
        visible.sort_by_key(|p| (p.date, p.id));
        visible
    }

    /// Earliest and latest date over all points.
    pub fn extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points.iter().map(|p| p.date).min()?;
        let last = self.points.iter().map(|p| p.date).max()?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::sample::Reading;
    use chrono::{Duration, TimeZone};

    fn sample_at(date: DateTime<Utc>, load: f64, errors: f64, success: f64) -> MetricsSample {
        MetricsSample {
            load: Reading { date, value: load },
            errors: Reading { date, value: errors },
            success: Reading { date, value: success },
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn sample_appends_three_labeled_points() {
        let mut log = MetricLog::new(None);
        log.append_sample(&sample_at(t0(), 10.0, 1.0, 9.0));

        let got: Vec<_> = log
            .points()
            .iter()
            .map(|p| (p.group.label(), p.date, p.value))
            .collect();
        assert_eq!(
            got,
            vec![("Load", t0(), 10.0), ("Error", t0(), 1.0), ("Success", t0(), 9.0)]
        );
    }

    #[test]
    fn ids_are_stable_and_increasing() {
        let mut log = MetricLog::new(None);
        let a = log.append_sample(&sample_at(t0(), 1.0, 2.0, 3.0));
        let b = log.append_sample(&sample_at(t0(), 4.0, 5.0, 6.0));
        assert!(a[2] < b[0]);
        assert_eq!(log.get(b[1]).map(|p| p.value), Some(5.0));
        assert_eq!(log.len(), 6);
    }

    #[test]
    fn out_of_order_dates_keep_insertion_order() {
        let mut log = MetricLog::new(None);
        log.append_sample(&sample_at(t0() + Duration::seconds(10), 1.0, 1.0, 1.0));
        log.append_sample(&sample_at(t0(), 2.0, 2.0, 2.0));

        assert_eq!(log.points()[0].value, 1.0);
        let visible = log.in_range(t0(), t0() + Duration::seconds(10));
        assert_eq!(visible.first().map(|p| p.value), Some(2.0));
        assert_eq!(log.extent(), Some((t0(), t0() + Duration::seconds(10))));
    }

    #[test]
    fn cap_drops_oldest_first() {
        let mut log = MetricLog::new(Some(4));
        log.append_sample(&sample_at(t0(), 1.0, 1.0, 1.0));
        let second = log.append_sample(&sample_at(t0(), 2.0, 2.0, 2.0));
        assert_eq!(log.len(), 4);
        assert_eq!(log.points()[0].group, MetricGroup::Success);
        assert!(log.get(second[0]).is_some());
        assert!(log.get(PointId(0)).is_none());
    }

    #[test]
    fn last_follows_group() {
        let mut log = MetricLog::new(None);
        log.append_sample(&sample_at(t0(), 1.0, 2.0, 3.0));
        log.append_sample(&sample_at(t0(), 4.0, 5.0, 6.0));
        assert_eq!(log.last(MetricGroup::Error).map(|p| p.value), Some(5.0));
        assert_eq!(log.last(MetricGroup::Load).map(|p| p.value), Some(4.0));
    }
}
