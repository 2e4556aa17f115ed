//! src/metrics/sample.rs
//!
//! JSON body returned by the metrics endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::point::MetricGroup;

/// One `{date, value}` reading.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Reading {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// `{ load, errors, success }` as served by `GET /data`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MetricsSample {
    pub load: Reading,
    pub errors: Reading,
    pub success: Reading,
}

impl MetricsSample {
    /// Readings in append order: Load, Error, Success.
    pub fn readings(&self) -> [(MetricGroup, &Reading); 3] {
        [
            (MetricGroup::Load, &self.load),
            (MetricGroup::Error, &self.errors),
            (MetricGroup::Success, &self.success),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_iso_dates() {
        let body = serde_json::json!({
            "load": {"date": "2024-01-01T00:00:00Z", "value": 10},
            "errors": {"date": "2024-01-01T00:00:01.500Z", "value": 1},
            "success": {"date": "2024-01-01T02:00:00+02:00", "value": 9.5}
        });
        let s: MetricsSample = serde_json::from_value(body).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(s.load.date, midnight);
        assert_eq!(s.load.value, 10.0);
        assert_eq!(s.errors.date.timestamp_millis(), midnight.timestamp_millis() + 1_500);
        assert_eq!(s.success.date, midnight);
        assert_eq!(s.success.value, 9.5);
    }

    #[test]
    fn missing_group_is_rejected() {
        let body = serde_json::json!({
            "load": {"date": "2024-01-01T00:00:00Z", "value": 10},
            "success": {"date": "2024-01-01T00:00:00Z", "value": 9}
        });
        assert!(serde_json::from_value::<MetricsSample>(body).is_err());
    }

    #[test]
    fn bad_date_is_rejected() {
        let body = serde_json::json!({
            "load": {"date": "yesterday", "value": 10},
            "errors": {"date": "2024-01-01T00:00:00Z", "value": 1},
            "success": {"date": "2024-01-01T00:00:00Z", "value": 9}
        });
        assert!(serde_json::from_value::<MetricsSample>(body).is_err());
    }
}
