//! Runtime configuration store port.

use crate::config::Config;

/// Persistence for the runtime-mutable [`Config`].
///
/// `load` is infallible: implementations substitute normalized defaults for
/// a missing or corrupt backing file. `save` is best effort and internally
/// serialized; callers never hold a lock around it.
pub trait ConfigStore: Send + Sync {
    fn load(&self) -> Config;
    fn save(&self, config: &Config);
}
