//! Ratewatch - P2P offer watcher against a reference FX rate.
//!
//! Continuously compares a reference foreign-exchange rate against a stream
//! of peer-to-peer trade offers and notifies an operator when an offer is
//! economically attractive and operationally eligible.
//!
//! # Architecture
//!
//! A small fixed set of concurrent tasks coordinated over channels:
//!
//! - **rate poller** fetches the reference rate on a ticker and publishes
//!   it on a single-slot channel
//! - **offer scanner** runs one scan cycle per published rate: surplus
//!   check, eligibility pipeline, notification
//! - **spam evictor** expires recently-notified advertisers after 5 hours
//! - **error sink** logs task errors; it never retries
//! - **command listener** (Telegram) drives the control plane: pause,
//!   resume, blacklist edits
//!
//! # Modules
//!
//! - [`settings`] - Static process settings (TOML file + environment)
//! - [`config`] - Runtime-mutable configuration (blacklists, threshold)
//! - [`domain`] - Pure decision logic: surplus, time window, eligibility,
//!   spam filter
//! - [`port`] - Capability traits for the external collaborators
//! - [`adapter`] - Production collaborators: fastFOREX, Binance P2P, the
//!   JSON config file, Telegram (requires the `telegram` feature)
//! - [`app`] - Task orchestration and the control plane
//! - [`error`] - Error types for the crate

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod settings;
