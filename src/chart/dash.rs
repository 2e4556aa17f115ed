//! src/chart/dash.rs
//!
//! Per-group line styles and dash rendering.
//!
//! The chart widget only draws solid polylines, so a dashed series is split
//! into short solid runs. Dash lengths are fractions of the visible x span so
//! the pattern looks the same at every zoom level.

use crate::metrics::MetricGroup;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    MediumDash,
    CoarseDash,
}

impl LineStyle {
    /// Load solid, Success medium dash, Error coarse dash.
    pub fn for_group(group: MetricGroup) -> Self {
        match group {
            MetricGroup::Load => LineStyle::Solid,
            MetricGroup::Success => LineStyle::MediumDash,
            MetricGroup::Error => LineStyle::CoarseDash,
        }
    }

    /// `(on, off)` lengths as fractions of the visible x span.
    pub fn pattern(self) -> Option<(f64, f64)> {
        match self {
            LineStyle::Solid => None,
            LineStyle::MediumDash => Some((0.02, 0.015)),
            LineStyle::CoarseDash => Some((0.05, 0.03)),
        }
    }
}

/// Split a polyline (sorted by x) into the visible runs of `style`.
///
/// Distance along the line is measured on the x axis only; x and y carry
/// different units.
pub fn dash_runs(points: &[(f64, f64)], style: LineStyle, x_span: f64) -> Vec<Vec<(f64, f64)>> {
    let Some((on_frac, off_frac)) = style.pattern() else {
        return vec![points.to_vec()];
    };
    if points.len() < 2 || !(x_span > 0.0) {
        return vec![points.to_vec()];
    }
    let on = on_frac * x_span;
    let off = off_frac * x_span;

    let mut runs = Vec::new();
    let mut current = vec![points[0]];
    let mut drawing = true;
    let mut remaining = on;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let len = b.0 - a.0;
        if len <= 0.0 {
            if drawing {
                current.push(b);
            }
            continue;
        }

        let mut pos = 0.0;
        while len - pos > remaining {
            pos += remaining;
            let t = pos / len;
            let p = (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t);
            if drawing {
                current.push(p);
                runs.push(std::mem::take(&mut current));
            } else {
                current = vec![p];
            }
            drawing = !drawing;
            remaining = if drawing { on } else { off };
        }
        remaining -= len - pos;
        if drawing {
            current.push(b);
        }
    }

    if drawing && current.len() >= 2 {
        runs.push(current);
    }
    runs
}
