#![allow(dead_code)]

//! Deterministic collaborator doubles for integration tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use ratewatch::config::Config;
use ratewatch::domain::{Offer, PaymentMethod};
use ratewatch::error::{Error, Result};
use ratewatch::port::{ConfigStore, Notifier, OfferSource, RateSource};

/// Rate source returning a fixed rate and counting fetches.
pub struct FixedRateSource {
    rate: f64,
    interval: Duration,
    pub calls: AtomicUsize,
}

impl FixedRateSource {
    pub fn new(rate: f64, interval: Duration) -> Self {
        Self {
            rate,
            interval,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch_rate(&self, _base: &str, _quote: &str) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rate)
    }

    fn preferred_poll_interval(&self) -> Duration {
        self.interval
    }
}

/// Offer source that replays scripted batches, one per scan cycle.
/// Once the script runs out it returns empty batches.
#[derive(Default)]
pub struct ScriptedOfferSource {
    batches: Mutex<VecDeque<Result<Vec<Offer>>>>,
}

impl ScriptedOfferSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_batch(&self, offers: Vec<Offer>) {
        self.batches
            .lock()
            .expect("lock batches")
            .push_back(Ok(offers));
    }

    pub fn push_error(&self, error: Error) {
        self.batches
            .lock()
            .expect("lock batches")
            .push_back(Err(error));
    }
}

#[async_trait]
impl OfferSource for ScriptedOfferSource {
    async fn list_offers(&self, _asset: &str, _fiat: &str) -> Result<Vec<Offer>> {
        self.batches
            .lock()
            .expect("lock batches")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Notifier collecting sent messages; can be flipped to fail dispatches.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_sends(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("lock sent messages").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Dispatch("scripted dispatch failure".into()));
        }
        self.sent
            .lock()
            .expect("lock sent messages")
            .push(message.to_string());
        Ok(())
    }
}

/// In-memory config store.
pub struct MemoryConfigStore {
    config: Mutex<Config>,
    pub saves: AtomicUsize,
}

impl MemoryConfigStore {
    pub fn new(config: Config) -> Self {
        Self {
            config: Mutex::new(config),
            saves: AtomicUsize::new(0),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Config {
        self.config.lock().expect("lock config").clone().normalized()
    }

    fn save(&self, config: &Config) {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.config.lock().expect("lock config") = config.clone();
    }
}

/// Offer paying via LINE Pay, usable at any wall-clock time.
pub fn line_pay_offer(advertiser: &str, price: &str) -> Offer {
    Offer {
        advertiser: advertiser.into(),
        price: price.into(),
        available_amount: "1000".into(),
        methods: vec![PaymentMethod {
            identifier: "LINEPay".into(),
            display_name: "LINE Pay".into(),
        }],
    }
}
