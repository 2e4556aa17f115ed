//! src/chart/window.rs
//!
//! Sliding time window over the chart's x axis.
//!
//! While auto-sliding, every data refresh re-anchors the visible domain to
//! `[now - duration, now]`. A manual zoom or pan redefines `duration` from the
//! new domain width. With auto-sliding off the domain stays where it was.

use chrono::{DateTime, Duration, Utc};

/// Narrowest zoom the window accepts.
pub const MIN_ZOOM: Duration = Duration::seconds(1);
/// Widest zoom the window accepts.
pub const MAX_ZOOM: Duration = Duration::hours(24);

/// Visible time range `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Domain {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Domain {
    /// Domain of `width` ending at `end`.
    pub fn ending_at(end: DateTime<Utc>, width: Duration) -> Self {
        Self {
            start: end - width,
            end,
        }
    }

    pub fn width(&self) -> Duration {
        self.end - self.start
    }

    fn shifted(&self, by: Duration) -> Self {
        Self {
            start: self.start + by,
            end: self.end + by,
        }
    }
}

/// Direction of a pan step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pan {
    Earlier,
    Later,
}

#[derive(Debug)]
pub struct ZoomWindow {
    duration: Duration,
    auto_slide: bool,
    domain: Option<Domain>,
}

impl ZoomWindow {
    /// New window with the given zoom duration and auto-sliding enabled.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: clamp_width(duration),
            auto_slide: true,
            domain: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn auto_slide(&self) -> bool {
        self.auto_slide
    }

    /// Current zoom domain; `None` until the first anchor.
    pub fn domain(&self) -> Option<Domain> {
        self.domain
    }

    /// Called after every data refresh. Returns true when the domain moved.
    pub fn on_data_update(&mut self, now: DateTime<Utc>) -> bool {
        if self.auto_slide {
            self.anchor(now);
            true
        } else {
            false
        }
    }

    /// A zoom-change event carrying the user's new domain.
    pub fn on_zoom_change(&mut self, requested: Domain, now: DateTime<Utc>) {
        self.duration = clamp_width(requested.width());
        if self.auto_slide {
            self.anchor(now);
        } else {
            self.domain = Some(Domain::ending_at(requested.end, self.duration));
        }
    }

    /// Turning sliding off before the first anchor freezes a window ending
    /// at `now`, so later updates never fall back to the data extent.
    pub fn set_auto_slide(&mut self, enabled: bool, now: DateTime<Utc>) {
        self.auto_slide = enabled;
        if enabled || self.domain.is_none() {
            self.anchor(now);
        }
    }

    /// Flip auto-sliding; returns the new state.
    pub fn toggle_auto_slide(&mut self, now: DateTime<Utc>) -> bool {
        self.set_auto_slide(!self.auto_slide, now);
        self.auto_slide
    }

    /// Halve the visible width, keeping the right edge.
    pub fn zoom_in(&mut self, now: DateTime<Utc>) {
        let current = self.current_or_anchored(now);
        self.on_zoom_change(Domain::ending_at(current.end, current.width() / 2), now);
    }

    /// Double the visible width, keeping the right edge.
    pub fn zoom_out(&mut self, now: DateTime<Utc>) {
        let current = self.current_or_anchored(now);
        self.on_zoom_change(Domain::ending_at(current.end, current.width() * 2), now);
    }

    /// Shift the domain by a quarter of its width.
    pub fn pan(&mut self, direction: Pan, now: DateTime<Utc>) {
        let current = self.current_or_anchored(now);
        let step = current.width() / 4;
        let step = match direction {
            Pan::Earlier => -step,
            Pan::Later => step,
        };
        self.on_zoom_change(current.shifted(step), now);
    }

    fn current_or_anchored(&self, now: DateTime<Utc>) -> Domain {
        self.domain
            .unwrap_or_else(|| Domain::ending_at(now, self.duration))
    }

    fn anchor(&mut self, now: DateTime<Utc>) {
        self.domain = Some(Domain::ending_at(now, self.duration));
    }
}

fn clamp_width(width: Duration) -> Duration {
    width.clamp(MIN_ZOOM, MAX_ZOOM)
}
