//! src/panels/title.rs
//!
//! Simple title/header panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{Panel, ThemeContext};

pub struct TitlePanel {
    pub title: String,
}

impl TitlePanel {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Panel for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: &ThemeContext) {
        let mode = theme.surface_class().unwrap_or("light");
        let p = Paragraph::new(self.title.clone())
            .style(theme.base().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(format!("livechart ({mode})"))
                    .borders(Borders::ALL)
                    .border_style(theme.border(false)),
            );
        f.render_widget(p, area);
    }
}
