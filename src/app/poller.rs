//! Rate polling task.
//!
//! Periodically fetches the reference rate and hands it to the scanner
//! over the single-slot rate channel. The cadence is the larger of the
//! configured floor and the source's preferred interval; when paused the
//! tick is skipped silently.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::port::{ConfigStore, RateSource};

use super::state::AppState;

/// Base currency of every reference-rate query.
pub const BASE_CURRENCY: &str = "USD";

pub struct RatePoller {
    source: Arc<dyn RateSource>,
    store: Arc<dyn ConfigStore>,
    state: Arc<AppState>,
    rate_tx: mpsc::Sender<f64>,
    err_tx: mpsc::Sender<Error>,
    min_interval: Duration,
}

impl RatePoller {
    #[must_use]
    pub fn new(
        source: Arc<dyn RateSource>,
        store: Arc<dyn ConfigStore>,
        state: Arc<AppState>,
        rate_tx: mpsc::Sender<f64>,
        err_tx: mpsc::Sender<Error>,
        min_interval: Duration,
    ) -> Self {
        Self {
            source,
            store,
            state,
            rate_tx,
            err_tx,
            min_interval,
        }
    }

    /// Run until the shutdown signal fires.
    ///
    /// The first tick of the interval completes immediately, so the first
    /// fetch is not delayed by a full polling period.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let cadence = self.min_interval.max(self.source.preferred_poll_interval());
        info!(cadence_secs = cadence.as_secs(), "rate poller started");

        let mut ticker = tokio::time::interval(cadence);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => self.cycle().await,
            }
        }

        info!("rate poller stopped");
    }

    async fn cycle(&self) {
        if self.state.is_paused() {
            debug!("paused, skipping rate fetch");
            return;
        }

        let quote = self.store.load().target_currency;
        debug!(base = BASE_CURRENCY, %quote, "fetching new rate");

        match self.source.fetch_rate(BASE_CURRENCY, &quote).await {
            Ok(rate) => {
                info!(rate, %quote, "new rate fetched");
                // Blocks while the scanner is mid-cycle with the slot full;
                // that backpressure is what keeps scans from overlapping.
                if self.rate_tx.send(rate).await.is_err() {
                    warn!("rate channel closed");
                }
            }
            Err(error) => {
                let _ = self.err_tx.send(error).await;
            }
        }
    }
}
