//! Countdown timer implementation.
//!
//! The timer is a wall-clock-based state machine. It does not use internal
//! threads -- the caller is responsible for calling `tick()` periodically,
//! and dropping or resetting the timer deterministically stops it.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running -> Completed -> Idle
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::presets;
use crate::error::ValidationError;
use crate::events::Event;
use crate::session::SessionType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Completed,
}

/// Core countdown timer.
///
/// Operates on wall-clock deltas between ticks; survives serialization so
/// the CLI can carry a running timer across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownTimer {
    session_type: SessionType,
    /// Duration in minutes of the configured interval.
    duration_min: u64,
    state: TimerState,
    /// Remaining time in milliseconds.
    remaining_ms: u64,
    /// Timestamp (ms since epoch) when the timer was last resumed/started.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    /// A fresh idle timer with the default focus preset.
    pub fn new() -> Self {
        let session_type = SessionType::Focus;
        let duration_min = presets::default_minutes(session_type);
        Self {
            session_type,
            duration_min,
            state: TimerState::Idle,
            remaining_ms: duration_min * 60 * 1000,
            last_tick_epoch_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn duration_min(&self) -> u64 {
        self.duration_min
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms / 1000
    }

    /// 0.0 .. 100.0 progress through the configured interval.
    pub fn progress_pct(&self) -> f64 {
        let total_ms = self.duration_min.saturating_mul(60_000);
        if total_ms == 0 {
            return 0.0;
        }
        (1.0 - self.remaining_ms as f64 / total_ms as f64) * 100.0
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            session_type: self.session_type,
            duration_min: self.duration_min,
            remaining_secs: self.remaining_secs(),
            progress_pct: self.progress_pct(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Reconfigure the timer for a session type and optional duration
    /// (minutes); omitted duration falls back to the type's default
    /// preset. Any run in progress is discarded.
    pub fn select(
        &mut self,
        session_type: SessionType,
        duration_min: Option<u64>,
    ) -> Result<(), ValidationError> {
        let minutes = duration_min.unwrap_or_else(|| presets::default_minutes(session_type));
        if minutes == 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_min".into(),
                message: "must be positive".into(),
            });
        }
        self.session_type = session_type;
        self.duration_min = minutes;
        self.state = TimerState::Idle;
        self.remaining_ms = minutes * 60 * 1000;
        self.last_tick_epoch_ms = None;
        Ok(())
    }

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle | TimerState::Completed => {
                if self.state == TimerState::Completed {
                    // Restart the same interval from the top.
                    self.remaining_ms = self.duration_min * 60 * 1000;
                }
                self.state = TimerState::Running;
                self.last_tick_epoch_ms = Some(now_ms());
                Some(Event::TimerStarted {
                    session_type: self.session_type,
                    duration_min: self.duration_min,
                    at: Utc::now(),
                })
            }
            TimerState::Paused => self.resume(),
            TimerState::Running => None, // Already running.
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.flush_elapsed();
                self.state = TimerState::Paused;
                self.last_tick_epoch_ms = None;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs(),
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    pub fn resume(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Paused => {
                self.state = TimerState::Running;
                self.last_tick_epoch_ms = Some(now_ms());
                Some(Event::TimerResumed {
                    remaining_secs: self.remaining_secs(),
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.remaining_ms = self.duration_min * 60 * 1000;
        self.last_tick_epoch_ms = None;
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Call periodically. Returns `Some(Event::TimerCompleted)` once when
    /// the interval finishes; recording the session is the caller's job.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed();
        if self.remaining_ms == 0 {
            self.state = TimerState::Completed;
            self.last_tick_epoch_ms = None;
            return Some(Event::TimerCompleted {
                session_type: self.session_type,
                duration_min: self.duration_min,
                at: Utc::now(),
            });
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self) {
        if let Some(last) = self.last_tick_epoch_ms {
            let now = now_ms();
            let elapsed = now.saturating_sub(last);
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            self.last_tick_epoch_ms = Some(now);
        }
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_pause_resume() {
        let mut timer = CountdownTimer::new();
        assert_eq!(timer.state(), TimerState::Idle);

        assert!(timer.start().is_some());
        assert_eq!(timer.state(), TimerState::Running);

        assert!(timer.pause().is_some());
        assert_eq!(timer.state(), TimerState::Paused);

        assert!(timer.resume().is_some());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn start_while_running_is_noop() {
        let mut timer = CountdownTimer::new();
        timer.start();
        assert!(timer.start().is_none());
    }

    #[test]
    fn select_configures_type_and_duration() {
        let mut timer = CountdownTimer::new();
        timer.select(SessionType::ShortBreak, None).unwrap();
        assert_eq!(timer.session_type(), SessionType::ShortBreak);
        assert_eq!(timer.duration_min(), 5);

        timer.select(SessionType::Focus, Some(45)).unwrap();
        assert_eq!(timer.duration_min(), 45);
        assert_eq!(timer.remaining_secs(), 45 * 60);
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn select_rejects_zero_duration() {
        let mut timer = CountdownTimer::new();
        assert!(timer.select(SessionType::Focus, Some(0)).is_err());
    }

    #[test]
    fn reset_restores_full_duration() {
        let mut timer = CountdownTimer::new();
        timer.start();
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 25 * 60);
    }

    #[test]
    fn elapsed_run_completes_on_tick() {
        let mut timer = CountdownTimer::new();
        timer.start();
        // Simulate the whole interval having elapsed on the wall clock.
        timer.last_tick_epoch_ms = Some(now_ms() - 26 * 60 * 1000);
        let event = timer.tick();
        assert_eq!(timer.state(), TimerState::Completed);
        match event {
            Some(Event::TimerCompleted {
                session_type,
                duration_min,
                ..
            }) => {
                assert_eq!(session_type, SessionType::Focus);
                assert_eq!(duration_min, 25);
            }
            other => panic!("expected TimerCompleted, got {other:?}"),
        }
        // Completion fires once.
        assert!(timer.tick().is_none());
    }

    #[test]
    fn start_after_completion_restarts_interval() {
        let mut timer = CountdownTimer::new();
        timer.start();
        timer.last_tick_epoch_ms = Some(now_ms() - 26 * 60 * 1000);
        timer.tick();
        assert_eq!(timer.state(), TimerState::Completed);

        timer.start();
        assert_eq!(timer.state(), TimerState::Running);
        assert!(timer.remaining_secs() > 0);
    }

    #[test]
    fn snapshot_reports_progress() {
        let timer = CountdownTimer::new();
        match timer.snapshot() {
            Event::StateSnapshot {
                state,
                remaining_secs,
                progress_pct,
                ..
            } => {
                assert_eq!(state, TimerState::Idle);
                assert_eq!(remaining_secs, 25 * 60);
                assert_eq!(progress_pct, 0.0);
            }
            _ => panic!("expected StateSnapshot"),
        }
    }
}
