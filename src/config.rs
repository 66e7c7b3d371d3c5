//! Runtime-mutable configuration.
//!
//! Unlike [`crate::settings`], this configuration is edited while the
//! process runs (via the control plane) and persisted through a
//! [`crate::port::ConfigStore`]. It is always read fresh from the store so
//! edits take effect on the next poll or scan cycle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offers priced less than this percentage above the reference rate are
/// considered attractive when no threshold is configured.
pub const DEFAULT_MAX_SURPLUS_PERCENTAGE: f64 = 1.0;

pub const DEFAULT_TARGET_CURRENCY: &str = "JPY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub black_list: Blacklist,
    pub max_surplus_percentage: f64,
    pub target_currency: String,
}

impl Config {
    /// Substitute defaults for unset fields. Applied after every load so a
    /// hand-edited or partially written file never disables the threshold.
    pub fn normalize(&mut self) {
        if self.max_surplus_percentage <= 0.0 {
            self.max_surplus_percentage = DEFAULT_MAX_SURPLUS_PERCENTAGE;
        }
        if self.target_currency.is_empty() {
            self.target_currency = DEFAULT_TARGET_CURRENCY.into();
        }
    }

    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            black_list: Blacklist::default(),
            max_surplus_percentage: DEFAULT_MAX_SURPLUS_PERCENTAGE,
            target_currency: DEFAULT_TARGET_CURRENCY.into(),
        }
    }
}

/// Advertiser nicknames excluded from notifications, organized by the
/// enforcement channel they were filed under.
///
/// Exclusion treats the two lists as a plain union: a nickname on either
/// list is excluded for every payment method. The per-channel organization
/// is kept for the operator's bookkeeping only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blacklist {
    pub line: Vec<String>,
    pub bank: Vec<String>,
}

impl Blacklist {
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.line.iter().any(|name| name == identity)
            || self.bank.iter().any(|name| name == identity)
    }

    pub fn add(&mut self, channel: Channel, identity: impl Into<String>) {
        match channel {
            Channel::Line => self.line.push(identity.into()),
            Channel::Bank => self.bank.push(identity.into()),
        }
    }

    /// Render both lists for a command reply.
    #[must_use]
    pub fn render(&self) -> String {
        format!("Line: {}\nBank: {}", self.line.join(","), self.bank.join(","))
    }
}

/// Enforcement channel a blacklist entry is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Line,
    Bank,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("channel '{0}' not supported")]
pub struct UnknownChannel(pub String);

impl std::str::FromStr for Channel {
    type Err = UnknownChannel;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "line" => Ok(Channel::Line),
            "bank" => Ok(Channel::Bank),
            other => Err(UnknownChannel(other.to_string())),
        }
    }
}
