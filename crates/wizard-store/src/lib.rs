//! History and persistence for the component wizard.
//!
//! [`HistoryStore`] keeps one [`HistoryTimeline`] per component kind, commits
//! every edit as a new snapshot, and mirrors its state into a
//! [`StateStorage`] backend. Settings move in and out as JSON documents or
//! share URLs.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wizard_store::{HistoryStore, MemoryStorage, StoreConfig};
//!
//! let mut store = HistoryStore::open(MemoryStorage::new(), StoreConfig::default());
//! store.update_state("text", json!("Save")).unwrap();
//! assert!(store.can_undo());
//! store.undo();
//! assert_eq!(store.current().as_button().unwrap().text, "Button");
//! ```

pub mod config;
pub mod error;
pub mod preview;
pub mod storage;
pub mod store;
pub mod timeline;
pub mod transfer;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use preview::{AnimationPreview, PreviewTicket};
pub use storage::{keys, JsonFileStorage, MemoryStorage, StateStorage};
pub use store::HistoryStore;
pub use timeline::HistoryTimeline;
