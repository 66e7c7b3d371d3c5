//! Advertiser eligibility pipeline.
//!
//! Three checks run in order, short-circuiting on the first failure: spam
//! suppression, blacklist exclusion, and the payment-method time window.
//! The order only matters for diagnostic clarity; the outcome is a pure
//! function of the inputs.

use chrono::{DateTime, FixedOffset};

use crate::config::Blacklist;
use crate::domain::offer::PaymentMethod;
use crate::domain::spam::SpamFilter;
use crate::domain::window;

/// Outcome of the eligibility pipeline for one offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// At least one payment method is usable right now; `methods` holds
    /// the usable display names for the notification message.
    Eligible { methods: Vec<String> },
    /// The advertiser was notified within the spam window.
    Suppressed,
    /// The advertiser is on a blacklist (either channel).
    Blacklisted,
    /// Economics match but no payment method is usable at this time.
    NoUsableMethod,
}

impl Eligibility {
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible { .. })
    }
}

/// Evaluate one advertiser's offer at `now` (operating timezone).
#[must_use]
pub fn evaluate(
    identity: &str,
    methods: &[PaymentMethod],
    now: DateTime<FixedOffset>,
    spam: &SpamFilter,
    blacklist: &Blacklist,
) -> Eligibility {
    if spam.is_suppressed(identity) {
        return Eligibility::Suppressed;
    }

    if blacklist.contains(identity) {
        return Eligibility::Blacklisted;
    }

    let usable: Vec<String> = methods
        .iter()
        .filter(|method| window::method_usable(&method.identifier, now))
        .map(|method| method.display_name.clone())
        .collect();

    if usable.is_empty() {
        Eligibility::NoUsableMethod
    } else {
        Eligibility::Eligible { methods: usable }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Channel;
    use chrono::TimeZone;

    fn tuesday_morning() -> DateTime<FixedOffset> {
        window::operating_timezone()
            .with_ymd_and_hms(2024, 6, 4, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn saturday_morning() -> DateTime<FixedOffset> {
        window::operating_timezone()
            .with_ymd_and_hms(2024, 6, 1, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn bank_method() -> PaymentMethod {
        PaymentMethod {
            identifier: window::BANK_METHOD.into(),
            display_name: "Bank Transfer".into(),
        }
    }

    fn line_method() -> PaymentMethod {
        PaymentMethod {
            identifier: window::ALWAYS_ALLOWED_METHOD.into(),
            display_name: "LINE Pay".into(),
        }
    }

    #[test]
    fn eligible_with_usable_methods() {
        let spam = SpamFilter::new();
        let blacklist = Blacklist::default();

        let verdict = evaluate(
            "alice",
            &[bank_method(), line_method()],
            tuesday_morning(),
            &spam,
            &blacklist,
        );

        assert_eq!(
            verdict,
            Eligibility::Eligible {
                methods: vec!["Bank Transfer".into(), "LINE Pay".into()],
            }
        );
    }

    #[test]
    fn spam_suppression_wins_over_everything() {
        let spam = SpamFilter::new();
        spam.record("alice");
        let blacklist = Blacklist::default();

        let verdict = evaluate("alice", &[line_method()], tuesday_morning(), &spam, &blacklist);
        assert_eq!(verdict, Eligibility::Suppressed);
    }

    #[test]
    fn bank_blacklist_excludes_for_all_methods() {
        let spam = SpamFilter::new();
        let mut blacklist = Blacklist::default();
        blacklist.add(Channel::Bank, "abc");

        // Only a LINE Pay method on the offer; the "bank" entry still excludes.
        let verdict = evaluate("abc", &[line_method()], tuesday_morning(), &spam, &blacklist);
        assert_eq!(verdict, Eligibility::Blacklisted);
    }

    #[test]
    fn bank_only_offer_outside_window_is_dropped() {
        let spam = SpamFilter::new();
        let blacklist = Blacklist::default();

        let verdict = evaluate("alice", &[bank_method()], saturday_morning(), &spam, &blacklist);
        assert_eq!(verdict, Eligibility::NoUsableMethod);

        // Same inputs on a weekday morning flip the verdict.
        let verdict = evaluate("alice", &[bank_method()], tuesday_morning(), &spam, &blacklist);
        assert!(verdict.is_eligible());
    }

    #[test]
    fn no_methods_means_no_usable_method() {
        let spam = SpamFilter::new();
        let blacklist = Blacklist::default();

        let verdict = evaluate("alice", &[], tuesday_morning(), &spam, &blacklist);
        assert_eq!(verdict, Eligibility::NoUsableMethod);
    }

    #[test]
    fn same_inputs_same_verdict() {
        let spam = SpamFilter::new();
        let blacklist = Blacklist::default();
        let methods = [bank_method()];

        let first = evaluate("alice", &methods, tuesday_morning(), &spam, &blacklist);
        let second = evaluate("alice", &methods, tuesday_morning(), &spam, &blacklist);
        assert_eq!(first, second);
    }
}
