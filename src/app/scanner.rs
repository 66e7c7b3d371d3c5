//! Offer scanning task.
//!
//! Runs exactly one scan cycle per published rate. Offers are processed
//! sequentially: price parse, surplus check, eligibility pipeline, then
//! notification. The advertiser only enters the spam filter after a
//! successful dispatch, so a failed send leaves them a candidate for the
//! next cycle.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{self, Eligibility, Offer, SpamFilter};
use crate::error::Error;
use crate::port::{ConfigStore, Notifier, OfferSource};

/// Asset whose offers are scanned against the fiat reference rate.
pub const QUOTE_ASSET: &str = "USDT";

pub struct OfferScanner {
    source: Arc<dyn OfferSource>,
    notifier: Arc<dyn Notifier>,
    store: Arc<dyn ConfigStore>,
    spam: Arc<SpamFilter>,
    err_tx: mpsc::Sender<Error>,
}

impl OfferScanner {
    #[must_use]
    pub fn new(
        source: Arc<dyn OfferSource>,
        notifier: Arc<dyn Notifier>,
        store: Arc<dyn ConfigStore>,
        spam: Arc<SpamFilter>,
        err_tx: mpsc::Sender<Error>,
    ) -> Self {
        Self {
            source,
            notifier,
            store,
            spam,
            err_tx,
        }
    }

    /// Consume rates until the channel closes or the shutdown signal fires.
    ///
    /// The rate channel has a single slot and is only read between cycles,
    /// so two scans can never overlap.
    pub async fn run(self, mut rate_rx: mpsc::Receiver<f64>, mut shutdown: watch::Receiver<bool>) {
        info!("offer scanner started");

        loop {
            let rate = tokio::select! {
                _ = shutdown.changed() => break,
                rate = rate_rx.recv() => match rate {
                    Some(rate) => rate,
                    None => break,
                },
            };

            self.scan_cycle(rate).await;
        }

        info!("offer scanner stopped");
    }

    /// Run one full scan cycle against `rate`.
    ///
    /// The runtime config is loaded fresh here so control-plane edits take
    /// effect on the very next cycle.
    pub async fn scan_cycle(&self, rate: f64) {
        let config = self.store.load();

        info!("fetching offers");
        let offers = match self
            .source
            .list_offers(QUOTE_ASSET, &config.target_currency)
            .await
        {
            Ok(offers) => offers,
            Err(error) => {
                let _ = self.err_tx.send(error).await;
                return;
            }
        };
        info!(count = offers.len(), "offers fetched");

        for offer in &offers {
            self.process_offer(offer, rate, &config).await;
        }
    }

    async fn process_offer(&self, offer: &Offer, rate: f64, config: &Config) {
        let price = match offer.parse_price() {
            Ok(price) => price,
            Err(error) => {
                let _ = self.err_tx.send(error).await;
                return;
            }
        };

        let surplus = domain::surplus_percentage(price, rate);
        if surplus > config.max_surplus_percentage {
            return;
        }

        let now = domain::window::now_in_operating_tz();
        let methods = match domain::evaluate(
            &offer.advertiser,
            &offer.methods,
            now,
            &self.spam,
            &config.black_list,
        ) {
            Eligibility::Eligible { methods } => methods,
            verdict => {
                debug!(advertiser = %offer.advertiser, ?verdict, "offer filtered");
                return;
            }
        };

        let message = format_offer_message(offer, rate, price, surplus, &methods);

        match self.notifier.send(&message).await {
            Ok(()) => self.spam.record(&offer.advertiser),
            Err(error) => {
                let _ = self.err_tx.send(error).await;
            }
        }
    }
}

/// Build the human-readable notification for a matching offer.
fn format_offer_message(
    offer: &Offer,
    rate: f64,
    price: f64,
    surplus: f64,
    methods: &[String],
) -> String {
    format!(
        "advertiser '{}' has a good offer.\n\
         \tFX rate: {rate}\n\
         \tOffer rate: {price}\n\
         \tSurplus: {surplus}\n\
         \tAmount: {}\n\
         \tMethods: {}",
        offer.advertiser,
        offer.available_amount,
        methods.join(","),
    )
}
