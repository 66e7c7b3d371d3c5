//! Production implementations of the collaborator ports.

pub mod binance;
pub mod fastforex;
pub mod file_store;

#[cfg(feature = "telegram")]
pub mod telegram;
