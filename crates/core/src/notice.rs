//! Transient user-facing notices.
//!
//! Failures reaching the user (a rejected submission, an unreachable
//! service) surface as a notice that clears itself after a configured
//! time-to-live. A notice never persists indefinitely and never needs
//! explicit dismissal, so a stale error cannot get stuck on screen.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
struct Notice {
    message: String,
    expires_at: Instant,
}

/// Holds at most one active notice; a new post replaces the previous one.
#[derive(Debug)]
pub struct NoticeBoard {
    ttl: Duration,
    slot: Option<Notice>,
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// Posts a notice, replacing any current one and restarting the clock.
    pub fn post(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(notice = %message, "posting transient notice");
        self.slot = Some(Notice {
            message,
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Returns the active notice, or `None` once its time-to-live has
    /// passed.
    pub fn current(&self) -> Option<&str> {
        self.slot
            .as_ref()
            .filter(|notice| notice.expires_at > Instant::now())
            .map(|notice| notice.message.as_str())
    }
}
