//! Notification sink port.

use async_trait::async_trait;

use crate::error::Result;

/// Sink for operator notifications.
///
/// `send` reports delivery failures to the caller because the scanner only
/// records an advertiser in the spam filter after a successful dispatch.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &str) -> Result<()>;
}

/// Notifier that only logs via tracing. Used when no transport is
/// configured (e.g. running without the `telegram` feature).
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &str) -> Result<()> {
        tracing::info!(%message, "notification");
        Ok(())
    }
}
