//! Control plane: pause/resume and blacklist edits.
//!
//! Invoked synchronously by the command transport. Mutations go straight
//! to the shared state or the config store so the next tick or cycle
//! observes them; command errors are returned to the caller as text and
//! are never fatal.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::{Channel, UnknownChannel};
use crate::port::ConfigStore;

use super::state::AppState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("invalid arguments, expected '<identity> <line|bank>'")]
    InvalidArguments,

    #[error(transparent)]
    UnknownChannel(#[from] UnknownChannel),
}

#[derive(Clone)]
pub struct ControlPlane {
    state: Arc<AppState>,
    store: Arc<dyn ConfigStore>,
}

impl ControlPlane {
    #[must_use]
    pub fn new(state: Arc<AppState>, store: Arc<dyn ConfigStore>) -> Self {
        Self { state, store }
    }

    /// Pause rate polling. Idempotent.
    pub fn pause(&self) -> String {
        self.state.pause();
        info!("pause activated");
        "paused".to_string()
    }

    /// Resume rate polling. Idempotent.
    pub fn resume(&self) -> String {
        self.state.resume();
        info!("pause deactivated");
        "restarted".to_string()
    }

    /// Edit or list the blacklists.
    ///
    /// Empty `args` renders the current lists. Otherwise the first token is
    /// the identity and the second the enforcement channel; the updated
    /// config is persisted before replying.
    pub fn blacklist_edit(&self, args: &str) -> Result<String, ControlError> {
        let mut config = self.store.load();

        let tokens: Vec<&str> = args.split_whitespace().collect();
        if tokens.is_empty() {
            let reply = config.black_list.render();
            self.store.save(&config);
            return Ok(reply);
        }

        if tokens.len() < 2 {
            return Err(ControlError::InvalidArguments);
        }

        let channel: Channel = tokens[1].parse()?;
        config.black_list.add(channel, tokens[0]);
        info!(identity = tokens[0], channel = tokens[1], "blacklist entry added");

        let reply = config.black_list.render();
        self.store.save(&config);
        Ok(reply)
    }
}
