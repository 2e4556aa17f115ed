//! src/net/poller.rs
//!
//! Fixed-period polling of the metrics endpoint with switch-to-latest
//! semantics.
//!
//! Every tick starts a fresh fetch. A fetch still pending when the next tick
//! fires is dropped, so only the newest generation can ever deliver. Failures
//! are logged and polling simply continues: no backoff, no retry budget.
//!
//! Samples go to the UI thread over an unbounded channel; the UI is the only
//! place the point sequence is mutated.

use std::future::Future;
use std::pin::Pin;
use std::thread;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};

use super::client::MetricsClient;
use crate::error::FetchError;
use crate::metrics::MetricsSample;

type InFlight = Pin<Box<dyn Future<Output = (u64, Result<MetricsSample, FetchError>)> + Send>>;

pub struct Poller {
    client: MetricsClient,
    period: Duration,
}

impl Poller {
    pub fn new(client: MetricsClient, period: Duration) -> Self {
        Self { client, period }
    }

    /// Run the poller on its own thread with a current-thread runtime.
    pub fn spawn(self, tx: mpsc::UnboundedSender<MetricsSample>) -> std::io::Result<PollerHandle> {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let thread = thread::Builder::new()
            .name("livechart-poller".into())
            .spawn(move || {
                let runtime = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        tracing::error!("poller: failed to build runtime: {}", e);
                        return;
                    }
                };
                runtime.block_on(self.run(tx, shutdown_rx));
            })?;

        Ok(PollerHandle {
            shutdown: shutdown_tx,
            thread: Some(thread),
        })
    }

    /// Poll until `shutdown` flips to true (or its sender is dropped), or
    /// until the receiving side of `tx` goes away.
    pub async fn run(
        self,
        tx: mpsc::UnboundedSender<MetricsSample>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        tracing::info!(
            "poller started url={} period={:?}",
            self.client.url(),
            self.period
        );

        // First tick one period after start, like a plain interval.
        let mut ticker = tokio::time::interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut generation: u64 = 0;
        let mut in_flight: Option<InFlight> = None;

        loop {
            let pending = async {
                match in_flight.as_mut() {
                    Some(fetch) => fetch.await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    generation += 1;
                    if in_flight.is_some() {
                        tracing::debug!("poller: tick {} supersedes pending fetch", generation);
                    }
                    tracing::debug!("poller: fetching tick={}", generation);
                    let client = self.client.clone();
                    let tick = generation;
                    in_flight = Some(Box::pin(async move { (tick, client.fetch().await) }));
                }
                (tick, result) = pending => {
                    in_flight = None;
                    if tick != generation {
                        continue;
                    }
                    match result {
                        Ok(sample) => {
                            if tx.send(sample).is_err() {
                                tracing::debug!("poller: receiver gone");
                                break;
                            }
                        }
                        Err(e) => {
                            tracing::warn!("poller: error fetching data: {}", e);
                        }
                    }
                }
            }
        }

        tracing::info!("poller stopped after {} ticks", generation);
    }
}

/// Owner-side handle; stopping it cancels the timer and any pending fetch.
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl PollerHandle {
    /// Signal shutdown and wait for the poller thread to exit.
    pub fn stop(mut self) {
        self.signal_and_join();
    }

    fn signal_and_join(&mut self) {
        let _ = self.shutdown.send(true);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("poller thread panicked");
            }
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.signal_and_join();
    }
}
