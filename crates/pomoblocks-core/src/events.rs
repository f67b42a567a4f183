use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::SessionMode;

/// Every state change in the system produces an Event.
/// The CLI prints them as JSON; the notifier reacts to completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        mode: SessionMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: SessionMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    ModeChanged {
        mode: SessionMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero. Emitted exactly once per run.
    SessionCompleted {
        mode: SessionMode,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    EntrySaved {
        timestamp: DateTime<Utc>,
        duration_secs: i64,
        title: String,
    },
    StateSnapshot {
        mode: SessionMode,
        running: bool,
        remaining_secs: u64,
        total_secs: u64,
        elapsed_secs: u64,
        /// `MM:SS` rendering of `remaining_secs`.
        clock: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn is_completion(&self) -> bool {
        matches!(self, Event::SessionCompleted { .. })
    }
}
