//! src/logging.rs
//!
//! Tracing setup. The terminal belongs to the UI, so logs go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::{WrapErr, eyre};

use crate::config::Config;

pub fn init(cfg: &Config) -> color_eyre::Result<()> {
    let level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cfg.log_file)
        .wrap_err_with(|| format!("opening log file {}", cfg.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("installing log subscriber: {e}"))?;

    Ok(())
}
