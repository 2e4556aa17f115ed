//! src/app.rs
//!
//! Live metrics dashboard.
//! Polls a remote endpoint for load, success and error readings and renders
//! them as a live, zoomable line chart in the terminal.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Starts the poller thread, runs the UI main loop and tears both down on
//! exit.
//!
//! ## Overview
//! The application:
//! - Polls `GET <base_url>/data` every 5 seconds (configurable).
//! - Appends three points per response (Load, Error, Success) to an ever
//!   growing sequence.
//! - Keeps the visible time window anchored to "now" while auto-sliding.
//! - Lets the user zoom, pan, inspect points, switch theme and show a table.
//!
//! # Running
//!
//! ```text
//! cargo run --release
//! LIVECHART_BASE_URL=http://localhost:3000 cargo run
//! ```
//!
//! Logs are written to `livechart.log` (see `LIVECHART_LOG_FILE`); set
//! `DEBUG=1` for per-fetch logging.
//!
//! # Keyboard Controls
//!
//! - **Tab** — Cycle focus between the chart and the table (when shown).
//! - **←/→** — Move the point cursor through the visible points.
//! - **Enter** — Inspect the point under the cursor.
//! - **+/=** and **-** — Zoom in / out (halves / doubles the window).
//! - **[** and **]** — Pan earlier / later.
//! - **s** — Toggle auto-sliding. Off freezes the visible window.
//! - **t** — Toggle light/dark theme.
//! - **d** — Toggle the data table.
//! - **q** / **Esc** — Quit and restore terminal state.
//!
//! # Sliding Window
//!
//! After every data update, if auto-sliding is on, the window becomes
//! `[now - zoom, now]`. Zooming or panning redefines `zoom` from the new
//! window width; while auto-sliding the window then snaps back to now.
//!
//! # Polling
//!
//! A tick that fires while the previous fetch is still pending drops that
//! fetch; only the newest response is ever applied. Failed fetches are logged
//! and polling continues on the next tick.

use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Direction};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::dashboard::{Command, Dashboard};
use crate::metrics::MetricsSample;
use crate::net::{MetricsClient, Poller};
use crate::panels::{ChartPanel, DetailsPanel, ParagraphPanel, TablePanel, TitlePanel};
use crate::ui::{Node, group, leaf};

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Quit,
    Command(Command),
}

fn action_for(code: KeyCode) -> Option<Action> {
    let cmd = match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('t') => Command::ToggleTheme,
        KeyCode::Char('d') => Command::ToggleTable,
        KeyCode::Char('s') => Command::ToggleAutoSlide,
        KeyCode::Char('+') | KeyCode::Char('=') => Command::ZoomIn,
        KeyCode::Char('-') => Command::ZoomOut,
        KeyCode::Char('[') => Command::PanEarlier,
        KeyCode::Char(']') => Command::PanLater,
        KeyCode::Left => Command::CursorPrev,
        KeyCode::Right => Command::CursorNext,
        KeyCode::Enter => Command::Inspect,
        KeyCode::Tab => Command::CycleFocus,
        _ => return None,
    };
    Some(Action::Command(cmd))
}

/// Build the layout tree for one frame.
fn layout<'a>(dash: &'a Dashboard, now: DateTime<Utc>) -> Node<'a> {
    let options = dash.chart().options();

    let chart = leaf(ChartPanel::new(dash, now));
    let body = if dash.show_table() {
        group(
            Direction::Horizontal,
            vec![Constraint::Percentage(65), Constraint::Percentage(35)],
            vec![chart, leaf(TablePanel::new(dash))],
        )
    } else {
        chart
    };

    group(
        Direction::Vertical,
        vec![
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
            Constraint::Length(3),
        ],
        vec![
            leaf(TitlePanel::new(options.title)),
            body,
            leaf(DetailsPanel::new(dash)),
            leaf(ParagraphPanel::new(&options.toolbar_hints(), "Controls")),
        ],
    )
}

pub fn run(cfg: Config) -> color_eyre::Result<()> {
    let client = MetricsClient::new(&cfg.base_url, cfg.request_timeout)?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let poller = Poller::new(client, cfg.poll_interval).spawn(tx)?;

    let mut dash = Dashboard::new(&cfg);

    let mut terminal = ratatui::init();
    let result = ui_loop(&mut terminal, &mut dash, &mut rx, cfg.frame_time);
    ratatui::restore();

    // Nothing reaches the dashboard after this point.
    poller.stop();
    tracing::info!("shut down with {} points", dash.log().len());
    result
}

fn ui_loop(
    terminal: &mut DefaultTerminal,
    dash: &mut Dashboard,
    rx: &mut mpsc::UnboundedReceiver<MetricsSample>,
    frame_time: Duration,
) -> color_eyre::Result<()> {
    loop {
        let frame_start = Instant::now();

        while let Ok(sample) = rx.try_recv() {
            dash.ingest(&sample, Utc::now());
        }

        {
            let now = Utc::now();
            let root = layout(dash, now);
            terminal.draw(|f| root.draw_root(f, dash.theme()))?;
        }

        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match action_for(key.code) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Command(cmd)) => {
                    if let Some(event) = dash.apply(cmd, Utc::now()) {
                        tracing::debug!("interaction: {:?}", event);
                    }
                }
                None => {}
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::sample::Reading;
    use chrono::TimeZone;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(dash: &Dashboard, now: DateTime<Utc>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| layout(dash, now).draw_root(f, dash.theme()))
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
    fn keys_map_to_commands() {
        assert_eq!(action_for(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(
            action_for(KeyCode::Char('t')),
            Some(Action::Command(Command::ToggleTheme))
        );
        assert_eq!(
            action_for(KeyCode::Char('=')),
            Some(Action::Command(Command::ZoomIn))
        );
        assert_eq!(
            action_for(KeyCode::Enter),
            Some(Action::Command(Command::Inspect))
        );
        assert_eq!(action_for(KeyCode::Char('x')), None);
    }

    #[test]
    fn table_appears_only_when_toggled() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut dash = Dashboard::new(&Config::default());
        let r = |value| Reading { date: now, value };
        dash.ingest(
            &MetricsSample {
                load: r(10.0),
                errors: r(1.0),
                success: r(9.0),
            },
            now,
        );

        let before = screen(&dash, now);
        assert!(before.contains("Performance Testing Chart"));
        assert!(before.contains("Controls"));
        assert!(!before.contains("Data (3 points)"));

        dash.apply(Command::ToggleTable, now);
        let after = screen(&dash, now);
        assert!(after.contains("Data (3 points)"));
    }

    #[test]
    fn inspected_point_is_shown() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut dash = Dashboard::new(&Config::default());
        let r = |value| Reading { date: now, value };
        dash.ingest(
            &MetricsSample {
                load: r(10.0),
                errors: r(1.0),
                success: r(9.0),
            },
            now,
        );
        dash.apply(Command::CursorPrev, now);
        dash.apply(Command::Inspect, now);
        assert!(screen(&dash, now).contains("Group: Success"));
    }
}
