//! src/panels/chart.rs
//!
//! Chart panel: renders the live time chart and a per-group stats row.
//!
//! Rendering-only logic lives here: x bounds from the zoom domain, padded y
//! bounds from the visible points, and dash runs turned into datasets.

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::chart::config::ScaleType;
use crate::chart::dash::dash_runs;
use crate::dashboard::Dashboard;
use crate::interaction::Focus;
use crate::metrics::{MetricGroup, MetricPoint};
use crate::ui::{Panel, ThemeContext};

/// Fallback y range when nothing is visible.
const EMPTY_Y: (f64, f64) = (0.0, 1.0);

pub struct ChartPanel<'a> {
    pub dash: &'a Dashboard,
    pub now: DateTime<Utc>,
}

impl<'a> ChartPanel<'a> {
    pub fn new(dash: &'a Dashboard, now: DateTime<Utc>) -> Self {
        Self { dash, now }
    }

    /// x bounds in epoch ms: the configured zoom domain, else data extent,
    /// else a window ending now.
    fn x_bounds(&self) -> (f64, f64) {
        let zoom = &self.dash.chart().options().zoom_bar;
        let domain = if zoom.enabled { zoom.initial_zoom_domain } else { None };
        let (start, end) = match domain {
            Some(d) => (d.start, d.end),
            None => match self.dash.log().extent() {
                Some((a, b)) if a < b => (a, b),
                _ => (self.now - self.dash.window().duration(), self.now),
            },
        };
        (start.timestamp_millis() as f64, end.timestamp_millis() as f64)
    }

    /// Target (ymin, ymax) for the visible points, with padding.
    ///
    /// Flat data gets absolute padding so the line stays visible; otherwise
    /// 10% of the range is added on both sides.
    fn compute_target_bounds(visible: &[&MetricPoint]) -> (f64, f64) {
        let mut mn = f64::INFINITY;
        let mut mx = f64::NEG_INFINITY;
        for p in visible {
            mn = mn.min(p.value);
            mx = mx.max(p.value);
        }
        if !mn.is_finite() || !mx.is_finite() {
            return EMPTY_Y;
        }
        if (mx - mn).abs() < f64::EPSILON {
            let pad = mn.abs().max(1.0) * 0.1;
            (mn - pad, mx + pad)
        } else {
            let pad = (mx - mn) * 0.1;
            (mn - pad, mx + pad)
        }
    }

    /// Latest value per group, plus their total when the tooltip asks for it.
    fn stats_line(&self) -> Line<'static> {
        if self.dash.log().is_empty() {
            return Line::from("Waiting for the first sample...");
        }
        let options = self.dash.chart().options();
        let mut spans = vec![Span::raw(format!("Points: {}  ", self.dash.log().len()))];
        let mut total = 0.0;
        for group in MetricGroup::ALL {
            let last = self.dash.log().last(group).map(|p| p.value);
            total += last.unwrap_or(0.0);
            spans.push(Span::styled(
                format!("{}: ", group.label()),
                Style::default()
                    .fg(options.color_of(group))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(match last {
                Some(v) => format!("{v}  "),
                None => "-  ".to_string(),
            }));
        }
        if options.tooltip.show_total {
            spans.push(Span::raw(format!("Total: {total}")));
        }
        Line::from(spans)
    }
}

fn axis_label(scale: ScaleType, v: f64) -> String {
    match scale {
        ScaleType::Time => DateTime::<Utc>::from_timestamp_millis(v as i64)
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default(),
        ScaleType::Linear => format!("{v:.2}"),
    }
}

impl Panel for ChartPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect, theme: &ThemeContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let options = self.dash.chart().options();
        let palette = theme.palette();
        let focused = self.dash.interaction().focus() == Focus::Chart;

        let stats = Paragraph::new(self.stats_line()).style(theme.base()).block(
            Block::default()
                .title("Stats")
                .borders(Borders::ALL)
                .border_style(theme.border(false)),
        );
        f.render_widget(stats, chunks[0]);

        let (xmin, xmax) = self.x_bounds();
        let visible = self.dash.visible_points();
        let (ymin, ymax) = Self::compute_target_bounds(&visible);
        let x_span = xmax - xmin;

        // Keep every owned vector alive until the chart is rendered.
        let mut per_group: Vec<(MetricGroup, Vec<(f64, f64)>, Vec<Vec<(f64, f64)>>)> = Vec::new();
        for group in MetricGroup::ALL {
            let in_view: Vec<(f64, f64)> = self
                .dash
                .chart()
                .series(group)
                .iter()
                .copied()
                .filter(|(x, _)| *x >= xmin && *x <= xmax)
                .collect();
            let runs = dash_runs(&in_view, options.line_style_of(group), x_span);
            per_group.push((group, in_view, runs));
        }

        let cursor: Vec<(f64, f64)> = self
            .dash
            .interaction()
            .cursor()
            .and_then(|id| self.dash.log().get(id))
            .map(|p| vec![(p.x(), p.value)])
            .unwrap_or_default();

        let mut datasets: Vec<Dataset> = Vec::new();
        for (group, dots, runs) in &per_group {
            let style = Style::default().fg(options.color_of(*group));
            for (i, run) in runs.iter().enumerate() {
                let mut ds = Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(style)
                    .data(run.as_slice());
                if i == 0 {
                    ds = ds.name(group.label());
                }
                datasets.push(ds);
            }
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(style)
                    .data(dots.as_slice()),
            );
        }
        if !cursor.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Block)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(palette.cursor).add_modifier(Modifier::BOLD))
                    .data(cursor.as_slice()),
            );
        }

        let x_scale = options.bottom_axis.scale;
        let x_labels: Vec<String> = [xmin, xmin + x_span / 2.0, xmax]
            .into_iter()
            .map(|v| axis_label(x_scale, v))
            .collect();
        let span = (ymax - ymin).max(1e-9);
        let y_labels: Vec<String> = (0..5)
            .map(|i| axis_label(options.left_axis.scale, ymin + span * (i as f64) / 4.0))
            .collect();

        let mut block = Block::default()
            .title(options.title)
            .borders(Borders::ALL)
            .border_style(theme.border(focused));
        if focused {
            let a11y = &options.accessibility;
            let caption = Line::from(format!("[{}] {}", a11y.role, a11y.label))
                .style(Style::default().fg(palette.muted));
            block = block.title_bottom(caption);
        }

        let axis_style = Style::default().fg(palette.axis);
        let chart = Chart::new(datasets)
            .style(theme.base())
            .block(block)
            .x_axis(
                Axis::default()
                    .title(options.bottom_axis.title)
                    .style(axis_style)
                    .bounds([xmin, xmax])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(options.left_axis.title)
                    .style(axis_style)
                    .bounds([ymin, ymax])
                    .labels(y_labels),
            );

        f.render_widget(chart, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::metrics::MetricsSample;
    use crate::metrics::sample::Reading;
    use chrono::TimeZone;
    use ratatui::{Terminal, backend::TestBackend};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn dash_with_sample() -> Dashboard {
        let mut dash = Dashboard::new(&Config::default());
        let r = |value| Reading { date: t0(), value };
        dash.ingest(
            &MetricsSample {
                load: r(10.0),
                errors: r(1.0),
                success: r(9.0),
            },
            t0(),
        );
        dash
    }

    #[test]
    fn bounds_are_padded() {
        let dash = dash_with_sample();
        let visible = dash.visible_points();
        let (lo, hi) = ChartPanel::compute_target_bounds(&visible);
        assert!((lo - 0.1).abs() < 1e-9);
        assert!((hi - 10.9).abs() < 1e-9);
        assert_eq!(ChartPanel::compute_target_bounds(&[]), EMPTY_Y);
    }

    #[test]
    fn x_bounds_follow_domain() {
        let dash = dash_with_sample();
        let panel = ChartPanel::new(&dash, t0());
        let (lo, hi) = panel.x_bounds();
        assert_eq!(hi, t0().timestamp_millis() as f64);
        assert_eq!(hi - lo, 25_000.0);
    }

    #[test]
    fn renders_title_and_legend() {
        let dash = dash_with_sample();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| ChartPanel::new(&dash, t0()).draw(f, f.area(), dash.theme()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Performance Testing Chart"));
        assert!(text.contains("Load"));
        assert!(text.contains("Points: 3"));
    }
}
