//! Browser persistence.

use wasm_bindgen::JsValue;
use wizard_store::{MemoryStorage, Result, StateStorage, StoreError};

/// `window.localStorage` when the host has one, memory otherwise.
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn detect() -> Self {
        match web_sys::window().map(|window| window.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStorage::Local(storage),
            _ => {
                tracing::warn!("localStorage unavailable, wizard state will not persist");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStorage::Local(_))
    }
}

fn storage_error(e: JsValue) -> StoreError {
    StoreError::storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

impl StateStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(storage_error),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(storage_error),
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match self {
            BrowserStorage::Local(storage) => storage.remove_item(key).map_err(storage_error),
            BrowserStorage::Memory(memory) => memory.remove(key),
        }
    }
}
