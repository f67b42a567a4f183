//! Countdown engine implementation.
//!
//! The engine is a plain state struct. It does not own a thread or a timer:
//! the caller drives it by calling `tick()` once per elapsed second (see
//! [`super::Ticker`]), or by calling `catch_up()` with the current wall-clock
//! time when the engine was restored from storage.
//!
//! ## State Transitions
//!
//! ```text
//! stopped --start--> running --tick*--> (remaining == 0) stopped
//!    ^                  |
//!    +------pause-------+
//! ```
//!
//! `reset()` and `set_mode()` always land in the stopped state with a full
//! countdown.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::clock::format_mm_ss;
use super::mode::SessionMode;
use crate::events::Event;

/// Core countdown engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: SessionMode,
    remaining_secs: u64,
    running: bool,
    /// Wall-clock instant that the last applied tick corresponds to.
    /// Only set while running.
    #[serde(default)]
    last_tick_at: Option<DateTime<Utc>>,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(SessionMode::default())
    }
}

impl TimerEngine {
    /// Create a stopped engine with a full countdown for `mode`.
    pub fn new(mode: SessionMode) -> Self {
        Self {
            mode,
            remaining_secs: mode.full_secs(),
            running: false,
            last_tick_at: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_secs(&self) -> u64 {
        self.mode.full_secs()
    }

    /// Seconds worked so far in this countdown.
    pub fn elapsed_secs(&self) -> u64 {
        self.total_secs().saturating_sub(self.remaining_secs)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            running: self.running,
            remaining_secs: self.remaining_secs,
            total_secs: self.total_secs(),
            elapsed_secs: self.elapsed_secs(),
            clock: format_mm_ss(self.remaining_secs as i64),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start (or continue) the countdown. A finished countdown is refilled
    /// first. Returns `None` if already running.
    pub fn start(&mut self) -> Option<Event> {
        self.start_at(Utc::now())
    }

    pub fn start_at(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.running {
            return None;
        }
        if self.remaining_secs == 0 {
            self.remaining_secs = self.total_secs();
        }
        self.running = true;
        self.last_tick_at = Some(now);
        tracing::debug!(mode = %self.mode, remaining = self.remaining_secs, "timer started");
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: now,
        })
    }

    /// Stop the countdown without touching the remaining time.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        self.last_tick_at = None;
        tracing::debug!(remaining = self.remaining_secs, "timer paused");
        Some(Event::TimerPaused {
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Apply one elapsed second. Returns `Some(Event::SessionCompleted)` on
    /// the tick that reaches zero; ticking a stopped engine does nothing.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if let Some(last) = self.last_tick_at.as_mut() {
            *last += Duration::seconds(1);
        }
        if self.remaining_secs > 0 {
            return None;
        }
        self.running = false;
        self.last_tick_at = None;
        tracing::debug!(mode = %self.mode, "session complete");
        Some(Event::SessionCompleted {
            mode: self.mode,
            duration_secs: self.total_secs(),
            at: Utc::now(),
        })
    }

    /// Apply one tick per whole second between the last applied tick and
    /// `now`. Stops early when the countdown completes.
    pub fn catch_up(&mut self, now: DateTime<Utc>) -> Option<Event> {
        let last = self.last_tick_at?;
        if !self.running {
            return None;
        }
        let behind = (now - last).num_seconds().max(0) as u64;
        for _ in 0..behind.min(self.remaining_secs) {
            if let Some(done) = self.tick() {
                return Some(done);
            }
        }
        None
    }

    /// Stop and refill the countdown for the current mode.
    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.last_tick_at = None;
        self.remaining_secs = self.total_secs();
        Some(Event::TimerReset {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Switch session length. Always stops and refills.
    pub fn set_mode(&mut self, mode: SessionMode) -> Option<Event> {
        self.mode = mode;
        self.reset();
        tracing::debug!(mode = %mode, "mode changed");
        Some(Event::ModeChanged {
            mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_start() {
        let mut engine = TimerEngine::default();
        assert!(!engine.is_running());

        assert!(engine.start().is_some());
        assert!(engine.is_running());
        assert!(engine.start().is_none());

        assert!(engine.pause().is_some());
        assert!(!engine.is_running());
        assert!(engine.pause().is_none());
    }

    #[test]
    fn pause_keeps_remaining() {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.tick();
        engine.tick();
        engine.pause();
        assert_eq!(engine.remaining_secs(), 1498);
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 1498);
    }

    #[test]
    fn completion_fires_once() {
        let mut engine = TimerEngine::default();
        engine.start();
        let mut completions = 0;
        for _ in 0..1600 {
            if let Some(event) = engine.tick() {
                assert!(event.is_completion());
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(engine.remaining_secs(), 0);
        assert!(!engine.is_running());
    }

    #[test]
    fn start_at_zero_refills() {
        let mut engine = TimerEngine::default();
        engine.start();
        for _ in 0..1500 {
            engine.tick();
        }
        assert_eq!(engine.remaining_secs(), 0);
        engine.start();
        assert_eq!(engine.remaining_secs(), 1500);
        assert!(engine.is_running());
    }

    #[test]
    fn set_mode_resets_and_stops() {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.tick();
        engine.set_mode(SessionMode::Long);
        assert_eq!(engine.remaining_secs(), 3000);
        assert!(!engine.is_running());
        assert_eq!(engine.mode(), SessionMode::Long);
    }

    #[test]
    fn reset_refills_current_mode() {
        let mut engine = TimerEngine::new(SessionMode::Long);
        engine.start();
        for _ in 0..10 {
            engine.tick();
        }
        engine.reset();
        assert_eq!(engine.remaining_secs(), 3000);
        assert!(!engine.is_running());
    }

    #[test]
    fn catch_up_applies_whole_seconds() {
        let mut engine = TimerEngine::default();
        let t0 = Utc::now();
        engine.start_at(t0);
        assert!(engine.catch_up(t0 + Duration::milliseconds(90_500)).is_none());
        assert_eq!(engine.remaining_secs(), 1410);
        // The half second carries over to the next catch-up.
        engine.catch_up(t0 + Duration::seconds(91));
        assert_eq!(engine.remaining_secs(), 1409);
    }

    #[test]
    fn catch_up_past_end_completes() {
        let mut engine = TimerEngine::default();
        let t0 = Utc::now();
        engine.start_at(t0);
        let event = engine.catch_up(t0 + Duration::hours(2));
        assert!(matches!(event, Some(Event::SessionCompleted { .. })));
        assert_eq!(engine.remaining_secs(), 0);
        assert!(!engine.is_running());
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = TimerEngine::default();
        match engine.snapshot() {
            Event::StateSnapshot {
                running,
                remaining_secs,
                clock,
                ..
            } => {
                assert!(!running);
                assert_eq!(remaining_secs, 1500);
                assert_eq!(clock, "25:00");
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }

    #[test]
    fn survives_json_roundtrip_mid_run() {
        let mut engine = TimerEngine::default();
        engine.start();
        engine.tick();
        let json = serde_json::to_string(&engine).unwrap();
        let restored: TimerEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, engine);
    }
}
