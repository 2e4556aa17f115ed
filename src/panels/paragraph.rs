//! src/panels/paragraph.rs
//!
//! Simple paragraph panel used for static help/text blocks.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::{Panel, ThemeContext};

/// Small reusable paragraph panel.
pub struct ParagraphPanel {
    pub text: String,
    pub title: String,
}

impl ParagraphPanel {
    pub fn new(text: &str, title: &str) -> Self {
        Self {
            text: text.to_string(),
            title: title.to_string(),
        }
    }
}

impl Panel for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: &ThemeContext) {
        let p = Paragraph::new(self.text.clone())
            .style(theme.base())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.title.clone())
                    .borders(Borders::ALL)
                    .border_style(theme.border(false)),
            );
        f.render_widget(p, area);
    }
}
