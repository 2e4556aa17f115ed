//! src/interaction.rs
//!
//! Keyboard stand-ins for pointer interaction: panel focus, a point cursor
//! and "clicking" (inspecting) the point under it.
//!
//! The cursor holds a `PointId`, so it stays valid across redraws and data
//! updates as long as the point is still visible.

use crate::metrics::{MetricPoint, PointId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Chart,
    Table,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    /// A point was inspected; carries the datum.
    PointClicked(MetricPoint),
    FocusChanged { from: Focus, to: Focus },
}

#[derive(Debug)]
pub struct Interaction {
    focus: Focus,
    cursor: Option<PointId>,
    inspected: Option<MetricPoint>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            focus: Focus::Chart,
            cursor: None,
            inspected: None,
        }
    }
}

impl Interaction {
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> Option<PointId> {
        self.cursor
    }

    /// The last point surfaced by an inspect.
    pub fn inspected(&self) -> Option<&MetricPoint> {
        self.inspected.as_ref()
    }

    /// Drop the cursor if its point is no longer visible.
    pub fn revalidate(&mut self, visible: &[&MetricPoint]) {
        if let Some(id) = self.cursor {
            if !visible.iter().any(|p| p.id == id) {
                self.cursor = None;
            }
        }
    }

    /// Move the cursor `step` points through `visible` (ordered by date).
    ///
    /// Without a cursor, any move lands on the newest visible point.
    pub fn move_cursor(&mut self, visible: &[&MetricPoint], step: isize) {
        if visible.is_empty() {
            self.cursor = None;
            return;
        }
        let last = visible.len() - 1;
        let next = match self.cursor.and_then(|id| visible.iter().position(|p| p.id == id)) {
            Some(i) => i.saturating_add_signed(step).min(last),
            None => last,
        };
        self.cursor = Some(visible[next].id);
    }

    /// Surface the datum under the cursor.
    pub fn inspect(&mut self, visible: &[&MetricPoint]) -> Option<InteractionEvent> {
        let id = self.cursor?;
        let point = visible.iter().find(|p| p.id == id)?;
        self.inspected = Some((*point).clone());
        Some(InteractionEvent::PointClicked((*point).clone()))
    }

    /// Cycle focus between the chart and, when shown, the table.
    pub fn cycle_focus(&mut self, table_shown: bool) -> Option<InteractionEvent> {
        let to = match self.focus {
            Focus::Chart if table_shown => Focus::Table,
            _ => Focus::Chart,
        };
        self.set_focus(to)
    }

    /// Called when the table is hidden; a focused table blurs to the chart.
    pub fn table_hidden(&mut self) -> Option<InteractionEvent> {
        self.set_focus(Focus::Chart)
    }

    fn set_focus(&mut self, to: Focus) -> Option<InteractionEvent> {
        let from = self.focus;
        if from == to {
            return None;
        }
        self.focus = to;
        Some(InteractionEvent::FocusChanged { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricGroup;
    use chrono::{TimeZone, Utc};

    fn points() -> Vec<MetricPoint> {
        (0..3)
            .map(|i| MetricPoint {
                id: PointId(i),
                group: MetricGroup::Load,
                date: Utc.timestamp_opt(i as i64, 0).unwrap(),
                value: i as f64 * 10.0,
            })
            .collect()
    }

    #[test]
    fn cursor_starts_at_newest_and_clamps() {
        let pts = points();
        let visible: Vec<&MetricPoint> = pts.iter().collect();
        let mut ix = Interaction::default();

        ix.move_cursor(&visible, -1);
        assert_eq!(ix.cursor(), Some(PointId(2)));
        ix.move_cursor(&visible, -5);
        assert_eq!(ix.cursor(), Some(PointId(0)));
        ix.move_cursor(&visible, 1);
        assert_eq!(ix.cursor(), Some(PointId(1)));
        ix.move_cursor(&visible, 10);
        assert_eq!(ix.cursor(), Some(PointId(2)));
    }

    #[test]
    fn inspect_surfaces_datum() {
        let pts = points();
        let visible: Vec<&MetricPoint> = pts.iter().collect();
        let mut ix = Interaction::default();
        assert_eq!(ix.inspect(&visible), None);

        ix.move_cursor(&visible, 0);
        let event = ix.inspect(&visible);
        assert_eq!(event, Some(InteractionEvent::PointClicked(pts[2].clone())));
        assert_eq!(ix.inspected().map(|p| p.value), Some(20.0));
    }

    #[test]
    fn revalidate_drops_invisible_cursor_only() {
        let pts = points();
        let all: Vec<&MetricPoint> = pts.iter().collect();
        let mut ix = Interaction::default();
        ix.move_cursor(&all, 0);

        ix.revalidate(&all);
        assert_eq!(ix.cursor(), Some(PointId(2)));

        ix.revalidate(&all[..2]);
        assert_eq!(ix.cursor(), None);
    }

    #[test]
    fn focus_cycles_only_through_shown_panels() {
        let mut ix = Interaction::default();
        assert_eq!(ix.cycle_focus(false), None);
        assert_eq!(
            ix.cycle_focus(true),
            Some(InteractionEvent::FocusChanged {
                from: Focus::Chart,
                to: Focus::Table
            })
        );
        assert!(ix.table_hidden().is_some());
        assert_eq!(ix.focus(), Focus::Chart);
    }
}
