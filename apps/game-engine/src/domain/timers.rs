//! Lazily evaluated round timers.
//!
//! Timers are plain data on the game. Nothing fires on its own: expiry is
//! only observed when a command evaluates `expired` with the caller's clock,
//! so an idle game needs status-check commands to surface a timeout.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub running: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
}

/// Which of the two round timers an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimerKind {
    Attack,
    Defend,
}

impl Timer {
    pub fn start(&mut self, now: OffsetDateTime) {
        self.running = true;
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.started_at = None;
    }

    /// Instant the running timer runs out.
    ///
    /// `None` when stopped, or when the deadline is not representable, in
    /// which case the timer never expires.
    pub fn ends_at(&self, timeout_seconds: f64) -> Option<OffsetDateTime> {
        match (self.running, self.started_at) {
            (true, Some(started)) => Duration::checked_seconds_f64(timeout_seconds)
                .and_then(|timeout| started.checked_add(timeout)),
            _ => None,
        }
    }

    /// True while running and at least `timeout_seconds` have passed.
    pub fn expired(&self, now: OffsetDateTime, timeout_seconds: f64) -> bool {
        self.ends_at(timeout_seconds)
            .is_some_and(|ends_at| now >= ends_at)
    }
}
