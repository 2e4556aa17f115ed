//! src/chart/config.rs
//!
//! Options record handed to the chart adapter.
//!
//! `ChartConfig` is never edited in place: it is rebuilt from the dashboard's
//! theme flag and zoom window whenever either changes.

use ratatui::style::Color;

use super::dash::LineStyle;
use super::window::{Domain, ZoomWindow};
use crate::metrics::MetricGroup;

/// Role and label describing the chart to assistive tooling.
pub const CHART_ROLE: &str = "img";
pub const CHART_LABEL: &str = "Live line chart displaying load, success, and error data over time";

/// The two chart themes: `g10` (light) and `g100` (dark).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartTheme {
    G10,
    G100,
}

/// Colors used by every panel for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub axis: Color,
    pub highlight: Color,
    pub cursor: Color,
}

impl ChartTheme {
    pub fn name(self) -> &'static str {
        match self {
            ChartTheme::G10 => "g10",
            ChartTheme::G100 => "g100",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ChartTheme::G10 => Palette {
                background: Color::Rgb(244, 244, 244),
                foreground: Color::Rgb(22, 22, 22),
                muted: Color::Rgb(111, 111, 111),
                axis: Color::Rgb(82, 82, 82),
                highlight: Color::Rgb(15, 98, 254),
                cursor: Color::Rgb(138, 63, 252),
            },
            ChartTheme::G100 => Palette {
                background: Color::Rgb(22, 22, 22),
                foreground: Color::Rgb(244, 244, 244),
                muted: Color::Rgb(141, 141, 141),
                axis: Color::Rgb(198, 198, 198),
                highlight: Color::Rgb(120, 169, 255),
                cursor: Color::Rgb(190, 149, 255),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleType {
    Time,
    Linear,
}

/// One axis: its title, the point field it maps and its scale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisConfig {
    pub title: &'static str,
    pub maps_to: &'static str,
    pub scale: ScaleType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipConfig {
    pub show_total: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoomBarConfig {
    pub enabled: bool,
    /// Domain the chart opens with; follows the sliding window.
    pub initial_zoom_domain: Option<Domain>,
    pub auto_slide: bool,
}

/// Controls advertised in the toolbar, with the key that triggers each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarControl {
    ZoomIn,
    ZoomOut,
    Pan,
    AutoSlide,
    Theme,
    Table,
    Inspect,
    Focus,
    Quit,
}

impl ToolbarControl {
    pub fn hint(self) -> &'static str {
        match self {
            ToolbarControl::ZoomIn => "+=Zoom in",
            ToolbarControl::ZoomOut => "-=Zoom out",
            ToolbarControl::Pan => "[ ]=Pan",
            ToolbarControl::AutoSlide => "S=Auto-slide",
            ToolbarControl::Theme => "T=Theme",
            ToolbarControl::Table => "D=Table",
            ToolbarControl::Inspect => "←/→ Enter=Inspect",
            ToolbarControl::Focus => "TAB=Focus",
            ToolbarControl::Quit => "Q=Quit",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarConfig {
    pub enabled: bool,
    pub controls: Vec<ToolbarControl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accessibility {
    pub role: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub title: &'static str,
    pub bottom_axis: AxisConfig,
    pub left_axis: AxisConfig,
    pub color_scale: [(MetricGroup, Color); 3],
    pub line_styles: [(MetricGroup, LineStyle); 3],
    pub tooltip: TooltipConfig,
    pub theme: ChartTheme,
    pub zoom_bar: ZoomBarConfig,
    pub toolbar: ToolbarConfig,
    pub accessibility: Accessibility,
}

impl ChartConfig {
    /// Build the options for the current theme and zoom window.
    pub fn new(theme: ChartTheme, window: &ZoomWindow) -> Self {
        Self {
            title: "Performance Testing Chart",
            bottom_axis: AxisConfig {
                title: "Time Elapsed",
                maps_to: "date",
                scale: ScaleType::Time,
            },
            left_axis: AxisConfig {
                title: "Value",
                maps_to: "value",
                scale: ScaleType::Linear,
            },
            color_scale: MetricGroup::ALL.map(|g| (g, g.color())),
            line_styles: MetricGroup::ALL.map(|g| (g, LineStyle::for_group(g))),
            tooltip: TooltipConfig { show_total: true },
            theme,
            zoom_bar: ZoomBarConfig {
                enabled: true,
                initial_zoom_domain: window.domain(),
                auto_slide: window.auto_slide(),
            },
            toolbar: ToolbarConfig {
                enabled: true,
                controls: vec![
                    ToolbarControl::Focus,
                    ToolbarControl::Inspect,
                    ToolbarControl::ZoomIn,
                    ToolbarControl::ZoomOut,
                    ToolbarControl::Pan,
                    ToolbarControl::AutoSlide,
                    ToolbarControl::Theme,
                    ToolbarControl::Table,
                    ToolbarControl::Quit,
                ],
            },
            accessibility: Accessibility {
                role: CHART_ROLE,
                label: CHART_LABEL,
            },
        }
    }

    /// Series color for a group, from the color scale.
    pub fn color_of(&self, group: MetricGroup) -> Color {
        self.color_scale
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, c)| *c)
            .unwrap_or(Color::Reset)
    }

    /// Line style for a group, keyed by label rather than draw order.
    pub fn line_style_of(&self, group: MetricGroup) -> LineStyle {
        self.line_styles
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, s)| *s)
            .unwrap_or(LineStyle::Solid)
    }

    /// Toolbar hints joined for a footer line.
    pub fn toolbar_hints(&self) -> String {
        if !self.toolbar.enabled {
            return String::new();
        }
        self.toolbar
            .controls
            .iter()
            .map(|c| c.hint())
            .collect::<Vec<_>>()
            .join("  ")
    }
}
