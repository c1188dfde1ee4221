//! Animation preview playback flag.
//!
//! The host schedules its own timer for each trigger and hands the ticket
//! back when it fires. Only the ticket of the latest trigger clears the
//! flag, so a timer left over from an earlier trigger cannot cut a newer
//! preview short.

use serde::{Deserialize, Serialize};

/// Returned by [`AnimationPreview::trigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTicket {
    generation: u64,
    /// Milliseconds after which the host should call [`AnimationPreview::expire`].
    pub expires_after_ms: u64,
}

/// Slack added after an animation's duration and delay before it is
/// considered finished.
pub const EXPIRY_SLACK_MS: u64 = 100;

#[derive(Debug, Clone, Default)]
pub struct AnimationPreview {
    generation: u64,
    playing: bool,
}

impl AnimationPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a preview.
    pub fn trigger(&mut self, duration_ms: f64, delay_ms: f64) -> PreviewTicket {
        self.generation = self.generation.wrapping_add(1);
        self.playing = true;
        let run = duration_ms.max(0.0) + delay_ms.max(0.0);
        PreviewTicket {
            generation: self.generation,
            expires_after_ms: run.ceil() as u64 + EXPIRY_SLACK_MS,
        }
    }

    /// Stop the preview if `ticket` belongs to the latest trigger.
    /// Returns whether the flag was cleared.
    pub fn expire(&mut self, ticket: PreviewTicket) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "ignoring stale preview timer"
            );
            return false;
        }
        let was_playing = self.playing;
        self.playing = false;
        was_playing
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
