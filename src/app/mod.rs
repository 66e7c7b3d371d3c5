//! Application orchestration.
//!
//! Wires the collaborators to the periodic tasks: rate poller, offer
//! scanner, spam-filter evictor, and the error sink. Rates travel over a
//! single-slot channel so one published rate triggers exactly one scan;
//! errors from either task converge on a second single-slot channel whose
//! sink only logs.

pub mod control;
pub mod poller;
pub mod scanner;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::adapter::binance::BinanceP2pClient;
use crate::adapter::fastforex::FastForexClient;
use crate::adapter::file_store::FileConfigStore;
use crate::domain::{spam, SpamFilter};
use crate::error::{Error, Result};
use crate::port::{ConfigStore, Notifier, OfferSource, RateSource};
use crate::settings::{require_env, Settings};

use control::ControlPlane;
use poller::RatePoller;
use scanner::OfferScanner;
use state::AppState;

pub use control::ControlError;

pub struct App;

impl App {
    /// Run the watcher until a shutdown signal arrives.
    ///
    /// Collaborator construction failures (unusable config path, missing
    /// credentials) surface here and abort startup.
    pub async fn run(settings: Settings) -> Result<()> {
        let config_path = require_env("RATEWATCH_CONFIG_PATH")?;
        let api_key = require_env("FASTFOREX_API_KEY")?;

        let store: Arc<dyn ConfigStore> = Arc::new(FileConfigStore::open(config_path)?);
        let state = Arc::new(AppState::new());
        let spam = Arc::new(SpamFilter::new());

        let rate_source: Arc<dyn RateSource> = Arc::new(FastForexClient::new(
            settings.network.rate_api_url.clone(),
            api_key,
        ));
        let offer_source: Arc<dyn OfferSource> =
            Arc::new(BinanceP2pClient::new(settings.network.offer_api_url.clone()));

        let control = ControlPlane::new(state.clone(), store.clone());
        let (notifier, command_listener) = build_transport(control)?;

        let (rate_tx, rate_rx) = mpsc::channel::<f64>(1);
        let (err_tx, err_rx) = mpsc::channel::<Error>(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut tasks: Vec<JoinHandle<()>> = Vec::new();

        tasks.push(tokio::spawn(error_sink(err_rx)));
        tasks.push(tokio::spawn(eviction_loop(spam.clone(), shutdown_rx.clone())));

        let poller = RatePoller::new(
            rate_source,
            store.clone(),
            state.clone(),
            rate_tx,
            err_tx.clone(),
            Duration::from_secs(settings.poller.min_interval_secs),
        );
        tasks.push(tokio::spawn(poller.run(shutdown_rx.clone())));

        let scanner = OfferScanner::new(offer_source, notifier, store, spam, err_tx);
        tasks.push(tokio::spawn(scanner.run(rate_rx, shutdown_rx)));

        tokio::signal::ctrl_c().await?;
        info!("shutdown signal received");

        // Producers observe the signal, drop their channel ends, and the
        // receivers drain out; nothing writes to a closed channel.
        let _ = shutdown_tx.send(true);

        if let Some(listener) = command_listener {
            listener.abort();
        }

        for task in tasks {
            let _ = task.await;
        }

        Ok(())
    }
}

#[cfg(feature = "telegram")]
fn build_transport(
    control: ControlPlane,
) -> Result<(Arc<dyn Notifier>, Option<JoinHandle<()>>)> {
    use crate::adapter::telegram::{spawn_command_listener, TelegramNotifier, TelegramSettings};

    let telegram = TelegramSettings::from_env()?;
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(&telegram));
    let listener = spawn_command_listener(telegram, control);
    Ok((notifier, Some(listener)))
}

#[cfg(not(feature = "telegram"))]
fn build_transport(
    _control: ControlPlane,
) -> Result<(Arc<dyn Notifier>, Option<JoinHandle<()>>)> {
    use crate::port::LogNotifier;

    info!("no notification transport configured, logging notifications");
    Ok((Arc::new(LogNotifier), None))
}

/// Drain task errors and log them. Purely passive: no retries, no backoff.
async fn error_sink(mut err_rx: mpsc::Receiver<Error>) {
    while let Some(err) = err_rx.recv().await {
        error!(error = %err, "task error");
    }
}

/// Periodically drop spam-filter entries older than the spam window.
async fn eviction_loop(spam: Arc<SpamFilter>, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(spam::EVICTION_INTERVAL);

    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {
                let evicted = spam.evict_expired(chrono::Utc::now().timestamp());
                if evicted > 0 {
                    info!(evicted, remaining = spam.len(), "spam filter evicted entries");
                }
            }
        }
    }
}
