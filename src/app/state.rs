//! Shared application state.

use std::sync::atomic::{AtomicBool, Ordering};

/// State shared between the periodic tasks and the control plane.
///
/// The pause flag is the only cross-task mutable state besides the spam
/// filter; both are internally synchronized so callers never lock.
#[derive(Debug, Default)]
pub struct AppState {
    /// When set, the rate poller skips its fetch (and therefore no scan
    /// is triggered). Not persisted; restarts come up unpaused.
    paused: AtomicBool,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unpaused() {
        assert!(!AppState::new().is_paused());
    }

    #[test]
    fn pause_resume_is_idempotent() {
        let state = AppState::new();

        state.pause();
        state.pause();
        assert!(state.is_paused());

        state.resume();
        state.resume();
        assert!(!state.is_paused());
    }
}
