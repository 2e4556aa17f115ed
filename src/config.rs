//! src/config.rs
//!
//! Runtime settings read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://performance-chart-backend.adaptable.app";

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the metrics service; `/data` is appended.
    pub base_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    /// Initial width of the sliding zoom window.
    pub zoom_duration: Duration,
    /// Upper bound on retained points; `None` keeps everything.
    pub max_points: Option<usize>,
    pub dark: bool,
    pub log_file: PathBuf,
    pub debug: bool,
    /// Redraw period of the UI loop.
    pub frame_time: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_millis(5_000),
            request_timeout: Duration::from_millis(10_000),
            zoom_duration: Duration::from_millis(25_000),
            max_points: None,
            dark: false,
            log_file: PathBuf::from("livechart.log"),
            debug: false,
            frame_time: Duration::from_millis(100),
        }
    }
}

impl Config {
    /// Build a config from a key lookup; missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(url) = lookup("LIVECHART_BASE_URL") {
            let url = url.trim().to_string();
            if url.is_empty() {
                return Err(ConfigError::Empty {
                    key: "LIVECHART_BASE_URL",
                });
            }
            cfg.base_url = url;
        }
        if let Some(ms) = positive_ms(&lookup, "LIVECHART_POLL_INTERVAL_MS")? {
            cfg.poll_interval = ms;
        }
        if let Some(ms) = positive_ms(&lookup, "LIVECHART_REQUEST_TIMEOUT_MS")? {
            cfg.request_timeout = ms;
        }
        if let Some(ms) = positive_ms(&lookup, "LIVECHART_ZOOM_DURATION_MS")? {
            cfg.zoom_duration = ms;
        }
        if let Some(n) = positive(&lookup, "LIVECHART_MAX_POINTS")? {
            cfg.max_points = Some(n as usize);
        }
        if let Some(v) = lookup("LIVECHART_DARK") {
            cfg.dark = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Some(path) = lookup("LIVECHART_LOG_FILE") {
            cfg.log_file = PathBuf::from(path);
        }
        cfg.debug = lookup("DEBUG").is_some();

        Ok(cfg)
    }
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<Config, ConfigError> {
    Config::from_lookup(|key| std::env::var(key).ok())
}

fn positive<F>(lookup: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let n: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.clone(),
    })?;
    if n == 0 {
        return Err(ConfigError::Zero { key });
    }
    Ok(Some(n))
}

fn positive_ms<F>(lookup: &F, key: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(positive(lookup, key)?.map(Duration::from_millis))
}
