//! JSON file-backed configuration store.
//!
//! The runtime config lives in a single pretty-printed JSON file. Reads
//! tolerate a missing or corrupt file by substituting normalized defaults;
//! writes are serialized behind a lock so concurrent saves cannot interleave.

use std::fs;
use std::path::PathBuf;

use parking_lot::RwLock;
use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::port::ConfigStore;

pub struct FileConfigStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileConfigStore {
    /// Open a store at `path`, creating the file if absent.
    ///
    /// Fails when the file cannot be created or opened; an unusable config
    /// path is a fatal startup error. A present-but-invalid file is
    /// rewritten with normalized defaults.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let existing = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        drop(existing);

        let store = Self {
            path,
            lock: RwLock::new(()),
        };

        if store.try_read().is_none() {
            store.save(&Config::default());
        }

        Ok(store)
    }

    fn try_read(&self) -> Option<Config> {
        let _guard = self.lock.read();
        let bytes = fs::read(&self.path).ok()?;
        serde_json::from_slice::<Config>(&bytes).ok()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        self.try_read().unwrap_or_default().normalized()
    }

    fn save(&self, config: &Config) {
        let _guard = self.lock.write();

        match serde_json::to_vec_pretty(config) {
            Ok(bytes) => {
                if let Err(error) = fs::write(&self.path, bytes) {
                    warn!(%error, path = %self.path.display(), "failed to persist config");
                }
            }
            Err(error) => warn!(%error, "failed to serialize config"),
        }
    }
}
