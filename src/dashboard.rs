//! src/dashboard.rs
//!
//! All state behind the screen, owned by the UI thread.
//!
//! Samples from the poller and keyboard commands both land here. After every
//! change the chart adapter is brought up to date: data on ingest, options on
//! anything that affects the `ChartConfig`.

use chrono::{DateTime, Duration, Utc};

use crate::chart::window::Pan;
use crate::chart::{ChartAdapter, ChartConfig, ZoomWindow};
use crate::config::Config;
use crate::interaction::{Interaction, InteractionEvent};
use crate::metrics::{MetricLog, MetricPoint, MetricsSample, PointId};
use crate::ui::ThemeContext;

/// User intents the dashboard understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleTheme,
    ToggleTable,
    ToggleAutoSlide,
    ZoomIn,
    ZoomOut,
    PanEarlier,
    PanLater,
    CursorPrev,
    CursorNext,
    Inspect,
    CycleFocus,
}

pub struct Dashboard {
    log: MetricLog,
    chart: ChartAdapter,
    window: ZoomWindow,
    theme: ThemeContext,
    show_table: bool,
    interaction: Interaction,
    last_update: Option<DateTime<Utc>>,
}

impl Dashboard {
    pub fn new(cfg: &Config) -> Self {
        let zoom = Duration::from_std(cfg.zoom_duration).unwrap_or_else(|_| Duration::seconds(25));
        let window = ZoomWindow::new(zoom);
        let theme = ThemeContext::new(cfg.dark);
        let chart = ChartAdapter::new(ChartConfig::new(theme.chart_theme(), &window));
        Self {
            log: MetricLog::new(cfg.max_points),
            chart,
            window,
            theme,
            show_table: false,
            interaction: Interaction::default(),
            last_update: None,
        }
    }

    /// Append a fetched sample and refresh chart data and window.
    pub fn ingest(&mut self, sample: &MetricsSample, now: DateTime<Utc>) -> [PointId; 3] {
        let ids = self.log.append_sample(sample);
        self.chart.set_data(self.log.points());
        if self.window.on_data_update(now) {
            self.refresh_options();
        }
        self.last_update = Some(now);
        let visible = visible_in(&self.log, &self.window);
        self.interaction.revalidate(&visible);
        tracing::debug!(
            "appended sample, {} points total, chart revision {}",
            self.log.len(),
            self.chart.revision()
        );
        ids
    }

    /// Apply one command; returns an interaction event when one occurred.
    pub fn apply(&mut self, cmd: Command, now: DateTime<Utc>) -> Option<InteractionEvent> {
        match cmd {
            Command::ToggleTheme => {
                self.theme.toggle();
                tracing::info!("theme -> {}", self.theme.chart_theme().name());
                self.refresh_options();
                None
            }
            Command::ToggleTable => {
                self.show_table = !self.show_table;
                tracing::info!("table shown={}", self.show_table);
                if self.show_table {
                    None
                } else {
                    self.interaction.table_hidden()
                }
            }
            Command::ToggleAutoSlide => {
                let on = self.window.toggle_auto_slide(now);
                tracing::info!("auto-slide={}", on);
                self.after_zoom();
                None
            }
            Command::ZoomIn => {
                self.window.zoom_in(now);
                self.after_zoom();
                None
            }
            Command::ZoomOut => {
                self.window.zoom_out(now);
                self.after_zoom();
                None
            }
            Command::PanEarlier => {
                self.window.pan(Pan::Earlier, now);
                self.after_zoom();
                None
            }
            Command::PanLater => {
                self.window.pan(Pan::Later, now);
                self.after_zoom();
                None
            }
            Command::CursorPrev => {
                let visible = visible_in(&self.log, &self.window);
                self.interaction.move_cursor(&visible, -1);
                None
            }
            Command::CursorNext => {
                let visible = visible_in(&self.log, &self.window);
                self.interaction.move_cursor(&visible, 1);
                None
            }
            Command::Inspect => {
                let visible = visible_in(&self.log, &self.window);
                let event = self.interaction.inspect(&visible);
                if let Some(InteractionEvent::PointClicked(p)) = &event {
                    tracing::info!("point clicked: {}", p.describe());
                }
                event
            }
            Command::CycleFocus => {
                let event = self.interaction.cycle_focus(self.show_table);
                if let Some(InteractionEvent::FocusChanged { from, to }) = &event {
                    tracing::debug!("focus {:?} -> {:?}", from, to);
                }
                event
            }
        }
    }

    /// Points inside the zoom domain (or all of them before the first
    /// anchor), ordered by date.
    pub fn visible_points(&self) -> Vec<&MetricPoint> {
        visible_in(&self.log, &self.window)
    }

    pub fn log(&self) -> &MetricLog {
        &self.log
    }

    pub fn chart(&self) -> &ChartAdapter {
        &self.chart
    }

    pub fn window(&self) -> &ZoomWindow {
        &self.window
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    pub fn show_table(&self) -> bool {
        self.show_table
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    fn after_zoom(&mut self) {
        self.refresh_options();
        let visible = visible_in(&self.log, &self.window);
        self.interaction.revalidate(&visible);
    }

    fn refresh_options(&mut self) {
        self.chart
            .set_options(ChartConfig::new(self.theme.chart_theme(), &self.window));
    }
}

fn visible_in<'a>(log: &'a MetricLog, window: &ZoomWindow) -> Vec<&'a MetricPoint> {
    match window.domain() {
        Some(d) => log.in_range(d.start, d.end),
        None => match log.extent() {
            Some((start, end)) => log.in_range(start, end),
            None => Vec::new(),
        },
    }
}
