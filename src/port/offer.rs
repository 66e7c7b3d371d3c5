//! Offer-listing source port.

use async_trait::async_trait;

use crate::domain::Offer;
use crate::error::Result;

/// Source of peer-to-peer trade offers.
#[async_trait]
pub trait OfferSource: Send + Sync {
    /// List current buy offers for `asset` priced in `fiat`.
    async fn list_offers(&self, asset: &str, fiat: &str) -> Result<Vec<Offer>>;
}
