//! P2P trade offers as consumed by the scanner.

use crate::error::{Error, Result};

/// A payment method attached to an offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    /// Stable identifier used by the time-window rule (e.g. `BANK`).
    pub identifier: String,
    /// Human-readable name used in notification messages.
    pub display_name: String,
}

/// A single peer-to-peer trade offer.
///
/// Offers are fetched fresh every scan cycle and never cached. Price and
/// amount arrive as strings from the listing service; the price is parsed
/// per offer so one malformed offer does not abort a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub advertiser: String,
    pub price: String,
    pub available_amount: String,
    pub methods: Vec<PaymentMethod>,
}

impl Offer {
    pub fn parse_price(&self) -> Result<f64> {
        self.price.parse().map_err(|source| Error::OfferPrice {
            advertiser: self.advertiser.clone(),
            price: self.price.clone(),
            source,
        })
    }
}

/// Percentage by which an offer price exceeds the reference rate.
///
/// An offer priced exactly at the reference rate has a surplus of zero;
/// cheaper offers are negative.
#[must_use]
pub fn surplus_percentage(offer_price: f64, reference_rate: f64) -> f64 {
    (offer_price / reference_rate) * 100.0 - 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(price: &str) -> Offer {
        Offer {
            advertiser: "alice".into(),
            price: price.into(),
            available_amount: "1000".into(),
            methods: vec![],
        }
    }

    #[test]
    fn parses_valid_price() {
        assert_eq!(offer("151.2").parse_price().expect("price"), 151.2);
    }

    #[test]
    fn rejects_malformed_price() {
        let err = offer("not-a-number").parse_price().expect_err("parse failure");
        assert!(matches!(err, Error::OfferPrice { .. }));
        assert!(err.to_string().contains("alice"));
    }

    #[test]
    fn surplus_at_reference_rate_is_zero() {
        assert_eq!(surplus_percentage(150.0, 150.0), 0.0);
    }

    #[test]
    fn surplus_examples() {
        let surplus = surplus_percentage(151.2, 150.0);
        assert!((surplus - 0.8).abs() < 1e-9);

        let surplus = surplus_percentage(153.5, 150.0);
        assert!((surplus - 2.3333333333).abs() < 1e-6);

        assert!(surplus_percentage(149.0, 150.0) < 0.0);
    }
}
