//! src/panels/table.rs
//!
//! Table panel: the accumulated points as rows, newest at the bottom.
//!
//! The newest rows are shown until the cursor moves above them; the view
//! then scrolls so the cursor row stays on screen.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::dashboard::Dashboard;
use crate::interaction::Focus;
use crate::ui::{Panel, ThemeContext};

/// First row index to show so that `height` rows end at the newest point,
/// scrolled up when `cursor` would fall above them.
fn first_row(len: usize, height: usize, cursor: Option<usize>) -> usize {
    let tail = len.saturating_sub(height);
    match cursor {
        Some(i) if i < tail => i,
        _ => tail,
    }
}

/// Shows the tail of the point sequence that fits the panel.
pub struct TablePanel<'a> {
    pub dash: &'a Dashboard,
}

impl<'a> TablePanel<'a> {
    pub fn new(dash: &'a Dashboard) -> Self {
        Self { dash }
    }
}

impl Panel for TablePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: &ThemeContext) {
        let palette = theme.palette();
        let points = self.dash.log().points();
        // borders + header
        let height = area.height.saturating_sub(3) as usize;
        let last_index = points.len().saturating_sub(1);
        let cursor = self.dash.interaction().cursor();
        let cursor_index = cursor.and_then(|id| points.iter().position(|p| p.id == id));
        let start = first_row(points.len(), height, cursor_index);

        let rows: Vec<Row> = points
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(i, p)| {
                let mut style = Style::default().fg(palette.foreground);
                if i == last_index {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if cursor == Some(p.id) {
                    style = style.fg(palette.cursor).add_modifier(Modifier::REVERSED);
                }
                Row::new(vec![
                    Cell::from(p.group.label()).style(Style::default().fg(p.group.color())),
                    Cell::from(p.date.format("%H:%M:%S").to_string()),
                    Cell::from(format!("{:.3}", p.value)),
                ])
                .style(style)
            })
            .collect();

        let options = self.dash.chart().options();
        let header = Row::new(vec![
            "group",
            options.bottom_axis.maps_to,
            options.left_axis.maps_to,
        ])
            .style(Style::default().fg(palette.axis).add_modifier(Modifier::BOLD));

        let focused = self.dash.interaction().focus() == Focus::Table;
        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Min(8),
            ],
        )
        .header(header)
        .style(theme.base())
        .block(
            Block::default()
                .title(format!("Data ({} points)", points.len()))
                .borders(Borders::ALL)
                .border_style(theme.border(focused)),
        );
        f.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dashboard::Command;
    use crate::metrics::MetricsSample;
    use crate::metrics::sample::Reading;
    use chrono::{Duration, TimeZone, Utc};
    use ratatui::{Terminal, backend::TestBackend};

    fn dashboard_with_ten_samples() -> Dashboard {
        let mut dash = Dashboard::new(&Config::default());
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for i in 0..10 {
            let date = t0 + Duration::seconds(5 * i);
            let r = |value| Reading { date, value };
            dash.ingest(
                &MetricsSample {
                    load: r(i as f64),
                    errors: r(0.0),
                    success: r(1.0),
                },
                date,
            );
        }
        dash
    }

    fn render(dash: &Dashboard) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|f| TablePanel::new(dash).draw(f, f.area(), dash.theme()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn first_row_follows_cursor_upwards_only() {
        assert_eq!(first_row(30, 5, None), 25);
        assert_eq!(first_row(30, 5, Some(27)), 25);
        assert_eq!(first_row(30, 5, Some(10)), 10);
        assert_eq!(first_row(3, 5, Some(0)), 0);
    }

    #[test]
    fn shows_newest_rows_that_fit() {
        let dash = dashboard_with_ten_samples();
        let text = render(&dash);
        assert!(text.contains("Data (30 points)"));
        assert!(text.contains("00:00:45"));
        assert!(!text.contains("00:00:00"));
    }

    #[test]
    fn scrolls_to_keep_cursor_row_visible() {
        let mut dash = dashboard_with_ten_samples();
        let now = dash.last_update().unwrap();
        // visible window is 00:00:20..00:00:45; walk to its oldest point
        for _ in 0..20 {
            dash.apply(Command::CursorPrev, now);
        }
        let text = render(&dash);
        assert!(text.contains("00:00:20"));
        assert!(!text.contains("00:00:45"));
    }
}
