//! src/main.rs
//!
//! Entrypoint: load configuration, install error reporting and logging, then
//! delegate to `app::run()`.

mod app;
mod chart;
mod config;
mod dashboard;
mod error;
mod interaction;
mod logging;
mod metrics;
mod net;
mod panels;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cfg = config::load_config()?;
    logging::init(&cfg)?;
    tracing::info!("starting livechart base_url={}", cfg.base_url);
    app::run(cfg)
}
