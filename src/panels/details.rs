//! src/panels/details.rs
//!
//! Details panel: the inspected point plus window and theme state.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::dashboard::Dashboard;
use crate::ui::{Panel, ThemeContext};

pub struct DetailsPanel<'a> {
    pub dash: &'a Dashboard,
}

impl<'a> DetailsPanel<'a> {
    pub fn new(dash: &'a Dashboard) -> Self {
        Self { dash }
    }
}

impl Panel for DetailsPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: &ThemeContext) {
        let palette = theme.palette();
        let options = self.dash.chart().options();

        let inspected = match self.dash.interaction().inspected() {
            Some(p) => Span::styled(p.describe(), Style::default().fg(p.group.color())),
            None => Span::styled(
                "select a point with ←/→ and press Enter",
                Style::default().fg(palette.muted),
            ),
        };
        let last_update = self
            .dash
            .last_update()
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "waiting for data".to_string());

        let mut status = Vec::new();
        if options.zoom_bar.enabled {
            status.push(format!(
                "zoom={:.1}s",
                self.dash.window().duration().num_milliseconds() as f64 / 1000.0
            ));
            let slide = if options.zoom_bar.auto_slide { "on" } else { "off" };
            status.push(format!("auto-slide={slide}"));
        }
        status.push(format!("theme={}", options.theme.name()));
        status.push(format!("last update={last_update}"));

        let lines = vec![
            Line::from(vec![
                Span::styled("Point ", Style::default().add_modifier(Modifier::BOLD)),
                inspected,
            ]),
            Line::from(status.join("  ")),
        ];

        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(theme.border(false));
        f.render_widget(Paragraph::new(lines).style(theme.base()).block(block), area);
    }
}
