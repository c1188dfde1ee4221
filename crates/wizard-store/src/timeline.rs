//! Linear undo history for one component kind.

use wizard_core::ComponentConfig;

/// Ordered snapshots with a cursor at the current one.
///
/// Never empty; `cursor < len()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryTimeline {
    entries: Vec<ComponentConfig>,
    cursor: usize,
}

impl HistoryTimeline {
    /// A timeline holding only `seed`.
    pub fn new(seed: ComponentConfig) -> Self {
        Self {
            entries: vec![seed],
            cursor: 0,
        }
    }

    /// Rebuild from persisted parts. `None` if there are no entries; an
    /// out-of-range cursor is clamped to the last entry.
    pub fn from_parts(entries: Vec<ComponentConfig>, cursor: usize) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let last = entries.len() - 1;
        if cursor > last {
            tracing::warn!(cursor, len = entries.len(), "clamping persisted history cursor");
        }
        Some(Self {
            cursor: cursor.min(last),
            entries,
        })
    }

    pub fn current(&self) -> &ComponentConfig {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ComponentConfig] {
        &self.entries
    }

    /// Drop entries after the cursor, append `snapshot` and move onto it.
    /// With a `limit`, the oldest entries are dropped to stay within it.
    pub fn commit(&mut self, snapshot: ComponentConfig, limit: Option<usize>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        if let Some(limit) = limit.map(|l| l.max(1)) {
            if self.entries.len() > limit {
                let excess = self.entries.len() - limit;
                self.entries.drain(..excess);
            }
        }
        self.cursor = self.entries.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step back. Returns false at the first entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward. Returns false at the last entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the cursor to `index`; out-of-range requests are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            tracing::debug!(index, len = self.entries.len(), "ignoring out-of-range history jump");
            return false;
        }
        self.cursor = index;
        true
    }

    /// Discard all history, keeping only `seed`.
    pub fn reset(&mut self, seed: ComponentConfig) {
        self.entries.clear();
        self.entries.push(seed);
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wizard_core::ComponentKind;

    fn seed() -> ComponentConfig {
        ComponentConfig::default_for(ComponentKind::Button)
    }

    fn with_text(text: &str) -> ComponentConfig {
        seed().with_field("text", json!(text)).unwrap()
    }

    #[test]
    fn test_commit_moves_cursor() {
        let mut timeline = HistoryTimeline::new(seed());
        timeline.commit(with_text("a"), None);
        timeline.commit(with_text("b"), None);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cursor(), 2);
        assert_eq!(timeline.current(), &with_text("b"));
    }

    #[test]
    fn test_commit_truncates_redo_branch() {
        let mut timeline = HistoryTimeline::new(seed());
        timeline.commit(with_text("b"), None);
        timeline.commit(with_text("c"), None);
        assert!(timeline.undo());
        assert!(timeline.undo());
        assert!(!timeline.undo());
        timeline.commit(with_text("d"), None);
        assert_eq!(timeline.entries(), &[seed(), with_text("d")]);
        assert_eq!(timeline.cursor(), 1);
        assert!(!timeline.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut timeline = HistoryTimeline::new(seed());
        for text in ["a", "b", "c"] {
            timeline.commit(with_text(text), Some(2));
        }
        assert_eq!(timeline.entries(), &[with_text("b"), with_text("c")]);
        assert_eq!(timeline.cursor(), 1);
    }

    #[test]
    fn test_from_parts_clamps() {
        assert!(HistoryTimeline::from_parts(Vec::new(), 0).is_none());
        let timeline = HistoryTimeline::from_parts(vec![seed(), with_text("a")], 9).unwrap();
        assert_eq!(timeline.cursor(), 1);
    }

    #[test]
    fn test_jump_and_reset() {
        let mut timeline = HistoryTimeline::new(seed());
        timeline.commit(with_text("a"), None);
        assert!(!timeline.jump_to(5));
        assert!(timeline.jump_to(0));
        assert!(timeline.can_redo());
        timeline.reset(seed());
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.cursor(), 0);
    }
}
