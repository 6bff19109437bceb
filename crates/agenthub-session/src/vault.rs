//! Persisted key-value vault
//!
//! The abstract storage the session round-trips through. The contract
//! mirrors browser localStorage: string keys, string values, writes that
//! cannot meaningfully fail from the caller's point of view. A failed write
//! is logged and swallowed; a subsequent `get` simply misses.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;

/// Abstract persisted key-value store
pub trait SessionVault: Send + Sync {
    /// Read the value at `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` at `key`, replacing any previous value
    fn put(&self, key: &str, value: &str);

    /// Remove the value at `key`, if any
    fn remove(&self, key: &str);
}

/// In-memory vault. Does not survive a process restart; the default choice
/// for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionVault for MemoryVault {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}

/// File-backed vault: one file per key under a root directory. Survives a
/// full process restart.
#[derive(Debug, Clone)]
pub struct FileVault {
    root: PathBuf,
}

impl FileVault {
    /// Create a vault rooted at `root`. The directory is created on first
    /// write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SessionVault for FileVault {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn put(&self, key: &str, value: &str) {
        if let Err(err) = std::fs::create_dir_all(&self.root) {
            tracing::warn!(root = %self.root.display(), %err, "vault directory create failed");
            return;
        }
        if let Err(err) = std::fs::write(self.path_for(key), value) {
            tracing::warn!(key, %err, "vault write failed");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(key, %err, "vault remove failed"),
        }
    }
}
