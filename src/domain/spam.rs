//! Spam filter store.
//!
//! Tracks which advertisers were recently notified so the same offer does
//! not page the operator every cycle. Entries are evicted by a periodic
//! background pass rather than on lookup, which bounds memory to the
//! identities notified within the spam window (plus up to one eviction
//! interval) while keeping the record/lookup path cheap.

use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;

/// Minimum time between two notifications about the same advertiser.
pub const SPAM_WINDOW: Duration = Duration::from_secs(5 * 60 * 60);

/// Cadence of the background eviction pass.
pub const EVICTION_INTERVAL: Duration = Duration::from_secs(60);

/// Thread-safe set of recently-notified advertiser identities.
#[derive(Debug, Default)]
pub struct SpamFilter {
    /// Identity -> unix timestamp (seconds) of the last notification.
    entries: DashMap<String, i64>,
}

impl SpamFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an identity as notified now. Last write wins on concurrent
    /// records for the same identity.
    pub fn record(&self, identity: &str) {
        self.record_at(identity, Utc::now().timestamp());
    }

    /// Mark an identity as notified at an explicit timestamp.
    pub fn record_at(&self, identity: &str, notified_at: i64) {
        self.entries.insert(identity.to_string(), notified_at);
    }

    /// Whether an entry for this identity still exists. Entries between
    /// expiry and the next eviction pass still suppress.
    #[must_use]
    pub fn is_suppressed(&self, identity: &str) -> bool {
        self.entries.contains_key(identity)
    }

    /// Remove every entry older than the spam window relative to `now`
    /// (unix seconds). Removal is atomic per key; concurrent lookups never
    /// observe a partial entry. Returns the number of evicted entries.
    pub fn evict_expired(&self, now: i64) -> usize {
        let cutoff = now - SPAM_WINDOW.as_secs() as i64;
        let before = self.entries.len();
        self.entries.retain(|_, notified_at| *notified_at >= cutoff);
        before - self.entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
