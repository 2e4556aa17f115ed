//! src/ui/theme.rs
//!
//! Light/dark theme state passed explicitly to every panel.

use ratatui::style::Style;

use crate::chart::ChartTheme;
use crate::chart::config::Palette;

/// Surface class applied to the whole screen in dark mode.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeContext {
    dark: bool,
}

impl ThemeContext {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    /// Flip light/dark; returns whether dark mode is now on.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    pub fn chart_theme(&self) -> ChartTheme {
        if self.dark {
            ChartTheme::G100
        } else {
            ChartTheme::G10
        }
    }

    /// `Some("dark")` while dark mode is on.
    pub fn surface_class(&self) -> Option<&'static str> {
        self.dark.then_some(DARK_CLASS)
    }

    pub fn palette(&self) -> Palette {
        self.chart_theme().palette()
    }

    /// Base style for panel backgrounds and text.
    pub fn base(&self) -> Style {
        let p = self.palette();
        Style::default().fg(p.foreground).bg(p.background)
    }

    /// Border style for a panel, highlighted when focused.
    pub fn border(&self, focused: bool) -> Style {
        let p = self.palette();
        if focused {
            Style::default().fg(p.highlight)
        } else {
            Style::default().fg(p.muted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_theme_and_class() {
        let mut theme = ThemeContext::new(false);
        let original = (theme.chart_theme(), theme.surface_class());

        assert!(theme.toggle());
        assert_eq!(theme.chart_theme().name(), "g100");
        assert_eq!(theme.surface_class(), Some("dark"));

        assert!(!theme.toggle());
        assert_eq!((theme.chart_theme(), theme.surface_class()), original);
    }

    #[test]
    fn focus_changes_border() {
        let theme = ThemeContext::new(true);
        assert_ne!(theme.border(true), theme.border(false));
    }
}
