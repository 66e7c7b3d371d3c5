//! Static process settings.
//!
//! Settings are read once at startup from an optional `config.toml` and are
//! never mutated at runtime. Credentials and the runtime config path come
//! from the environment (see [`require_env`]); the operator-mutable parts of
//! the configuration live in [`crate::config`] instead.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Result, SettingsError};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub network: NetworkSettings,
    pub poller: PollerSettings,
    pub logging: LoggingSettings,
}

/// Base URLs for the external rate and offer services.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkSettings {
    pub rate_api_url: String,
    pub offer_api_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollerSettings {
    /// Floor for the rate poll cadence; the rate source may declare a longer
    /// preferred interval but never shortens this one.
    pub min_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Settings {
    /// Load settings from a TOML file, falling back to defaults when the
    /// file does not exist. A present-but-unreadable or malformed file is a
    /// startup error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(SettingsError::ReadFile)?;
        let settings: Settings = toml::from_str(&content).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.network.rate_api_url.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "network.rate_api_url",
                reason: "cannot be empty".into(),
            }
            .into());
        }
        if self.network.offer_api_url.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "network.offer_api_url",
                reason: "cannot be empty".into(),
            }
            .into());
        }
        if self.poller.min_interval_secs == 0 {
            return Err(SettingsError::InvalidValue {
                field: "poller.min_interval_secs",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber from the logging settings.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).init(),
            _ => fmt().with_env_filter(filter).init(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            rate_api_url: "https://api.fastforex.io".into(),
            offer_api_url: "https://p2p.binance.com".into(),
        }
    }
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            min_interval_secs: 60,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Read a required environment variable, failing with a precise name so the
/// operator knows what to set.
pub fn require_env(name: &'static str) -> std::result::Result<String, SettingsError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(SettingsError::MissingEnv { name }),
    }
}
