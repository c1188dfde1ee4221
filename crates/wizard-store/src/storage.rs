//! Key-value persistence adapters.
//!
//! The store only ever reads and writes whole JSON strings under a fixed set
//! of keys, so any string map can back it: browser `localStorage`, a file, or
//! memory in tests.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::Result;

/// Keys written by the history store.
pub mod keys {
    pub const COMPONENT_STATES: &str = "componentStates";
    pub const CURRENT_INDICES: &str = "currentIndices";
    pub const LAST_COMPONENT_TYPE: &str = "lastComponentType";
    pub const RECENTLY_USED: &str = "recentlyUsedComponents";
    pub const CUSTOM_PRESETS: &str = "customPresets";
    pub const SELECTED_THEME: &str = "selectedTheme";
    pub const CUSTOM_ANIMATIONS: &str = "customAnimations";
}

/// Flat string key-value storage.
pub trait StateStorage {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: IndexMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.shift_remove(key);
        Ok(())
    }
}

/// Storage persisted as one JSON object in a file. Every write rewrites the
/// file.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    entries: IndexMap<String, String>,
}

impl JsonFileStorage {
    /// Open a storage file. A missing file starts empty; an unreadable one
    /// is reported.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                IndexMap::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            IndexMap::new()
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened storage file");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl StateStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.shift_remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
