//! Store configuration.

use serde::{Deserialize, Serialize};

/// Tunables for [`HistoryStore`](crate::HistoryStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Capacity of the recently-used kinds list.
    pub max_recent: usize,
    /// Maximum entries per timeline. `None` keeps everything.
    pub history_limit: Option<usize>,
    /// Query parameter carrying shared settings.
    pub share_param: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_recent: 5,
            history_limit: None,
            share_param: "settings".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_recent(mut self, max_recent: usize) -> Self {
        self.max_recent = max_recent;
        self
    }

    /// Cap timeline length; values below 1 are treated as 1.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit.max(1));
        self
    }

    pub fn with_share_param(mut self, param: impl Into<String>) -> Self {
        self.share_param = param.into();
        self
    }
}
