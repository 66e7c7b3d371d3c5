//! Capability traits for the external collaborators.
//!
//! Each collaborator is modeled as a narrow trait so production adapters
//! and deterministic test doubles are interchangeable.

pub mod notifier;
pub mod offer;
pub mod rate;
pub mod store;

pub use notifier::{LogNotifier, Notifier};
pub use offer::OfferSource;
pub use rate::RateSource;
pub use store::ConfigStore;
