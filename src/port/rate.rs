//! Reference-rate source port.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Source of the reference foreign-exchange rate.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the current rate for one unit of `base` in `quote`.
    async fn fetch_rate(&self, base: &str, quote: &str) -> Result<f64>;

    /// The shortest polling interval this source wants to be queried at.
    /// The poller never polls faster than this or its own floor.
    fn preferred_poll_interval(&self) -> Duration;
}
